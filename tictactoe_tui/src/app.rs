//! Application state: the headless host and the screen it carries.

use crossterm::event::KeyCode;
use tictactoe_core::{OpponentPolicy, Position, RandomOpponent, RngSource};
use tictactoe_screen::{
    HeadlessAssets, HeadlessHost, Marker, ScreenConfig, ScreenError, TicTacToeScreen,
};
use tracing::{debug, info, instrument};

/// Opponent chosen at startup: seeded or thread-random.
pub type Policy = Box<dyn OpponentPolicy>;

/// Terminal application state.
pub struct App {
    config: ScreenConfig,
    host: HeadlessHost,
    screen: TicTacToeScreen<HeadlessHost, Policy>,
}

impl App {
    /// Builds the widget tree, initialises the screen and opens it.
    #[instrument(skip(config))]
    pub fn new(config: ScreenConfig, seed: Option<u64>) -> Result<Self, ScreenError> {
        let mut host = HeadlessHost::with_layout(&config);
        let assets = HeadlessAssets::with_markers(&config);
        let policy: Policy = match seed {
            Some(seed) => Box::new(RandomOpponent::new(RngSource::seeded(seed))),
            None => Box::new(RandomOpponent::new(RngSource::thread())),
        };

        let mut screen = TicTacToeScreen::initialise(&mut host, &assets, &config, policy)?;
        screen.on_opened(&mut host);
        info!("Screen opened");

        Ok(Self {
            config,
            host,
            screen,
        })
    }

    /// Maps a key to a widget click: `1`-`9` for cells, `r` for rematch.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, code: KeyCode) {
        let widgets = self.config.widgets();
        let id = match code {
            KeyCode::Char(c @ '1'..='9') => {
                let Some(pos) = Position::from_index(c as usize - '1' as usize) else {
                    return;
                };
                widgets.cell_id(pos)
            }
            KeyCode::Char('r') => widgets.rematch().clone(),
            _ => return,
        };

        match self.host.click(&id) {
            Some(event) => self.screen.handle(&mut self.host, event),
            None => debug!(%id, "Key maps to no subscribed widget"),
        }
    }

    /// Marker shown on the cell at `pos`, if any.
    pub fn marker(&self, pos: Position) -> Option<Marker> {
        let texture = self.host.image(&self.config.widgets().cell_id(pos))?;
        <Marker as strum::IntoEnumIterator>::iter()
            .find(|marker| self.config.assets().uri(*marker) == texture.0)
    }

    /// Text of the human's score label.
    pub fn player_score(&self) -> &str {
        self.host
            .text(self.config.widgets().player_score())
            .unwrap_or_default()
    }

    /// Text of the opponent's score label.
    pub fn opponent_score(&self) -> &str {
        self.host
            .text(self.config.widgets().opponent_score())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_drive_the_board() {
        let mut app = App::new(ScreenConfig::default(), Some(11)).unwrap();
        assert_eq!(app.player_score(), "Your Score: 0");
        assert!(Position::ALL.iter().all(|pos| app.marker(*pos).is_none()));

        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.marker(Position::Center), Some(Marker::Cross));
        let circles = Position::ALL
            .iter()
            .filter(|pos| app.marker(**pos) == Some(Marker::Circle))
            .count();
        assert_eq!(circles, 1);
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        let mut app = App::new(ScreenConfig::default(), Some(1)).unwrap();
        app.handle_key(KeyCode::Char('0'));
        app.handle_key(KeyCode::Enter);
        assert!(Position::ALL.iter().all(|pos| app.marker(*pos).is_none()));
    }
}
