//! End-to-end match scenarios against a scripted opponent.

use tictactoe_core::{
    Diagonal, Line, MatchController, MatchState, Mover, Position, RandomOpponent, RenderIntent,
    SequenceSource,
};

type Controller = MatchController<RandomOpponent<SequenceSource>>;

/// Builds a controller whose opponent draws row, column pairs from `script`.
fn scripted(script: &[usize]) -> Controller {
    MatchController::new(RandomOpponent::new(SequenceSource::new(
        script.iter().copied(),
    )))
}

fn placements(intents: &[RenderIntent]) -> Vec<(Position, Mover)> {
    intents
        .iter()
        .filter_map(|intent| match intent {
            RenderIntent::Cell { pos, marker: Some(mover) } => Some((*pos, *mover)),
            _ => None,
        })
        .collect()
}

/// Opponent answers 1, 5, 7 and the human completes the main diagonal.
fn play_player_diagonal_win(ctrl: &mut Controller, view: &mut Vec<RenderIntent>) {
    ctrl.on_cell_clicked(0, view);
    ctrl.on_cell_clicked(4, view);
    ctrl.on_cell_clicked(8, view);
}

const DIAGONAL_SCRIPT: [usize; 6] = [0, 1, 1, 2, 2, 1];

#[test]
fn test_player_diagonal_win_first_match() {
    let mut ctrl = scripted(&DIAGONAL_SCRIPT);
    let mut view = Vec::new();
    ctrl.on_open(&mut view);
    view.clear();

    play_player_diagonal_win(&mut ctrl, &mut view);

    assert_eq!(
        placements(&view),
        vec![
            (Position::TopLeft, Mover::Player),
            (Position::TopCenter, Mover::Opponent),
            (Position::Center, Mover::Player),
            (Position::MiddleRight, Mover::Opponent),
            (Position::BottomRight, Mover::Player),
        ]
    );
    assert_eq!(ctrl.state(), MatchState::Won(Mover::Player));
    assert_eq!(ctrl.scores().player(), 1);
    assert_eq!(ctrl.scores().opponent(), 0);

    let tail = &view[view.len() - 2..];
    assert_eq!(
        tail,
        &[
            RenderIntent::Scores { player: 1, opponent: 0 },
            RenderIntent::WinningLine {
                line: Line::Diagonal(Diagonal::Main),
                winner: Mover::Player,
            },
        ]
    );

    // Frozen until rematch.
    let board = ctrl.board().clone();
    view.clear();
    ctrl.on_cell_clicked(2, &mut view);
    assert!(view.is_empty());
    assert_eq!(ctrl.board(), &board);
}

#[test]
fn test_opponent_row_win() {
    let mut ctrl = scripted(&[0, 0, 0, 1, 0, 2]);
    let mut view = Vec::new();
    ctrl.on_open(&mut view);
    view.clear();

    ctrl.on_cell_clicked(3, &mut view);
    ctrl.on_cell_clicked(6, &mut view);
    assert_eq!(ctrl.state(), MatchState::InProgress);
    ctrl.on_cell_clicked(7, &mut view);

    assert_eq!(ctrl.state(), MatchState::Won(Mover::Opponent));
    assert_eq!(ctrl.scores().player(), 0);
    assert_eq!(ctrl.scores().opponent(), 1);
    assert_eq!(
        view.last(),
        Some(&RenderIntent::WinningLine {
            line: Line::Row(0),
            winner: Mover::Opponent,
        })
    );
    assert_eq!(ctrl.last_mover(), Mover::Opponent);
}

#[test]
fn test_draw_freezes_board_without_scoring() {
    // Opponent is forced onto 1, 4, 6, 8.
    let mut ctrl = scripted(&[0, 1, 1, 1, 2, 0, 2, 2]);
    let mut view = Vec::new();
    ctrl.on_open(&mut view);
    view.clear();

    for index in [0, 2, 3, 7, 5] {
        ctrl.on_cell_clicked(index, &mut view);
    }

    assert_eq!(ctrl.state(), MatchState::Drawn);
    assert_eq!(ctrl.scores().player(), 0);
    assert_eq!(ctrl.scores().opponent(), 0);
    assert!(!ctrl.board().has_free_cell());
    assert!(view.iter().all(|intent| {
        !matches!(intent, RenderIntent::WinningLine { .. } | RenderIntent::Scores { .. })
    }));
    assert_eq!(ctrl.board().to_string(), "X|O|X\n-+-+-\nX|O|X\n-+-+-\nO|X|O");

    view.clear();
    for index in 0..9 {
        ctrl.on_cell_clicked(index, &mut view);
    }
    assert!(view.is_empty());
    assert_eq!(ctrl.state(), MatchState::Drawn);
}

#[test]
fn test_click_on_occupied_cell_is_noop() {
    let mut ctrl = scripted(&[1, 1]);
    let mut view = Vec::new();
    ctrl.on_open(&mut view);
    ctrl.on_cell_clicked(0, &mut view);

    let session = ctrl.session().clone();
    view.clear();
    ctrl.on_cell_clicked(0, &mut view);
    ctrl.on_cell_clicked(4, &mut view);

    assert!(view.is_empty());
    assert_eq!(ctrl.session(), &session);
    assert_eq!(ctrl.last_mover(), Mover::Opponent);
}

#[test]
fn test_rematch_after_player_win_opens_with_opponent() {
    let mut script = DIAGONAL_SCRIPT.to_vec();
    script.extend([2, 2]);
    let mut ctrl = scripted(&script);
    let mut view = Vec::new();
    ctrl.on_open(&mut view);
    play_player_diagonal_win(&mut ctrl, &mut view);

    view.clear();
    ctrl.start_match(&mut view);

    assert_eq!(ctrl.board().count(Mover::Opponent), 1);
    assert_eq!(ctrl.board().count(Mover::Player), 0);
    assert_eq!(
        placements(&view),
        vec![(Position::BottomRight, Mover::Opponent)]
    );
    assert_eq!(ctrl.state(), MatchState::InProgress);
    assert_eq!(ctrl.scores().player(), 1);
}

#[test]
fn test_rematch_after_opponent_win_waits_for_click() {
    let mut ctrl = scripted(&[0, 0, 0, 1, 0, 2]);
    let mut view = Vec::new();
    ctrl.on_open(&mut view);
    for index in [3, 6, 7] {
        ctrl.on_cell_clicked(index, &mut view);
    }
    assert_eq!(ctrl.state(), MatchState::Won(Mover::Opponent));

    ctrl.start_match(&mut view);
    assert!(ctrl.board().free_positions().len() == 9);
    assert_eq!(ctrl.scores().opponent(), 1);
}

#[test]
fn test_rematch_after_draw_closed_by_player() {
    let mut ctrl = scripted(&[0, 1, 1, 1, 2, 0, 2, 2]);
    let mut view = Vec::new();
    ctrl.on_open(&mut view);
    for index in [0, 2, 3, 7, 5] {
        ctrl.on_cell_clicked(index, &mut view);
    }
    assert_eq!(ctrl.last_mover(), Mover::Player);

    ctrl.start_match(&mut view);
    assert_eq!(ctrl.board().count(Mover::Opponent), 1);
    assert_eq!(ctrl.board().count(Mover::Player), 0);
}

#[test]
fn test_scores_carry_over_across_rematches() {
    let mut script = DIAGONAL_SCRIPT.to_vec();
    script.extend([0, 0, 0, 1, 0, 2]);
    let mut ctrl = scripted(&script);
    let mut view = Vec::new();
    ctrl.on_open(&mut view);
    play_player_diagonal_win(&mut ctrl, &mut view);

    // Opponent opens on 0, then answers 1 and 2.
    ctrl.start_match(&mut view);
    ctrl.on_cell_clicked(3, &mut view);
    ctrl.on_cell_clicked(6, &mut view);

    assert_eq!(ctrl.state(), MatchState::Won(Mover::Opponent));
    assert_eq!(ctrl.scores().player(), 1);
    assert_eq!(ctrl.scores().opponent(), 1);
}

#[test]
fn test_reopen_zeroes_scores_but_keeps_last_mover() {
    let mut script = DIAGONAL_SCRIPT.to_vec();
    script.extend([1, 0]);
    let mut ctrl = scripted(&script);
    let mut view = Vec::new();
    ctrl.on_open(&mut view);
    play_player_diagonal_win(&mut ctrl, &mut view);
    assert_eq!(ctrl.scores().player(), 1);

    view.clear();
    ctrl.on_open(&mut view);

    assert_eq!(view[0], RenderIntent::Scores { player: 0, opponent: 0 });
    assert_eq!(ctrl.scores().player(), 0);
    assert_eq!(
        placements(&view),
        vec![(Position::MiddleLeft, Mover::Opponent)]
    );
}

#[test]
fn test_intent_stream_serialises() {
    let mut ctrl = scripted(&DIAGONAL_SCRIPT);
    let mut view = Vec::new();
    ctrl.on_open(&mut view);
    view.clear();
    play_player_diagonal_win(&mut ctrl, &mut view);

    let last = view.last().expect("win emits intents");
    assert_eq!(
        serde_json::to_string(last).unwrap(),
        r#"{"WinningLine":{"line":{"Diagonal":"Main"},"winner":"Player"}}"#
    );

    let json = serde_json::to_string(&view).unwrap();
    let replayed: Vec<RenderIntent> = serde_json::from_str(&json).unwrap();
    assert_eq!(replayed, view);
}
