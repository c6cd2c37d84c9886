//! The tic-tac-toe screen: lifecycle hooks and the host-backed view.

use crate::config::{LabelFormats, ScreenConfig, WidgetIds};
use crate::error::ScreenError;
use crate::host::{AssetSource, ScreenEvent, WidgetHost};
use crate::textures::MarkerTextures;
use tictactoe_core::{Line, MatchController, Mover, OpponentPolicy, Position, Scoreboard, View};
use tracing::{debug, info, instrument};

/// Widgets the screen drives, looked up once at initialisation.
struct ScreenWidgets<H: WidgetHost> {
    /// Cell buttons in row-major order.
    cells: Vec<H::Button>,
    player_score: H::Label,
    opponent_score: H::Label,
}

impl<H: WidgetHost> ScreenWidgets<H> {
    #[instrument(skip_all)]
    fn find(host: &H, ids: &WidgetIds) -> Result<Self, ScreenError> {
        let cells = Position::ALL
            .into_iter()
            .map(|pos| find_button(host, &ids.cell_id(pos)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            cells,
            player_score: find_label(host, ids.player_score())?,
            opponent_score: find_label(host, ids.opponent_score())?,
        })
    }

    fn cell(&self, pos: Position) -> H::Button {
        self.cells[pos.index()]
    }

    /// Subscribes every cell button with the click event for its position.
    fn bind_clicks(&self, host: &mut H) {
        for pos in Position::ALL {
            host.subscribe(self.cell(pos), ScreenEvent::CellClicked(pos));
        }
        debug!("Cell clicks bound");
    }
}

fn find_button<H: WidgetHost>(host: &H, id: &str) -> Result<H::Button, ScreenError> {
    host.find_button(id)
        .ok_or_else(|| ScreenError::WidgetMissing(id.to_string()))
}

fn find_label<H: WidgetHost>(host: &H, id: &str) -> Result<H::Label, ScreenError> {
    host.find_label(id)
        .ok_or_else(|| ScreenError::WidgetMissing(id.to_string()))
}

/// Translates controller intents into widget updates.
struct HostView<'a, H: WidgetHost> {
    host: &'a mut H,
    widgets: &'a ScreenWidgets<H>,
    textures: &'a MarkerTextures<H::Texture>,
    labels: &'a LabelFormats,
}

impl<H: WidgetHost> View for HostView<'_, H> {
    fn render_cell(&mut self, pos: Position, marker: Option<Mover>) {
        let image = marker.map(|mover| self.textures.mark(mover));
        self.host.set_image(self.widgets.cell(pos), image);
    }

    fn render_winning_line(&mut self, line: Line, winner: Mover) {
        let image = self.textures.crossed(winner);
        for pos in line.positions() {
            self.host.set_image(self.widgets.cell(pos), Some(image));
        }
    }

    fn render_scores(&mut self, scores: &Scoreboard) {
        self.host.set_text(
            self.widgets.player_score,
            &self.labels.player_text(scores.player()),
        );
        self.host.set_text(
            self.widgets.opponent_score,
            &self.labels.opponent_text(scores.opponent()),
        );
    }
}

/// In-world tic-tac-toe screen.
///
/// Built by [`initialise`](Self::initialise) once the widget tree exists.
/// The host then calls [`on_opened`](Self::on_opened) whenever the screen
/// becomes visible and forwards subscribed events to [`handle`](Self::handle).
pub struct TicTacToeScreen<H: WidgetHost, P> {
    controller: MatchController<P>,
    widgets: ScreenWidgets<H>,
    textures: MarkerTextures<H::Texture>,
    labels: LabelFormats,
}

impl<H: WidgetHost, P: OpponentPolicy> TicTacToeScreen<H, P> {
    /// Resolves textures and widgets and wires the click subscriptions.
    ///
    /// Fails if any texture or widget is missing.
    #[instrument(skip_all)]
    pub fn initialise<A>(
        host: &mut H,
        assets: &A,
        config: &ScreenConfig,
        policy: P,
    ) -> Result<Self, ScreenError>
    where
        A: AssetSource<Texture = H::Texture> + ?Sized,
    {
        let textures = MarkerTextures::resolve(assets, config.assets())?;
        let widgets = ScreenWidgets::find(host, config.widgets())?;
        let rematch = find_button(host, config.widgets().rematch())?;

        widgets.bind_clicks(host);
        host.subscribe(rematch, ScreenEvent::Rematch);
        info!("Tic-tac-toe screen initialised");

        Ok(Self {
            controller: MatchController::new(policy),
            widgets,
            textures,
            labels: config.labels().clone(),
        })
    }

    /// The screen became visible: zero the scores and start a match.
    #[instrument(skip_all)]
    pub fn on_opened(&mut self, host: &mut H) {
        let mut view = HostView {
            host,
            widgets: &self.widgets,
            textures: &self.textures,
            labels: &self.labels,
        };
        self.controller.on_open(&mut view);
    }

    /// Dispatches an event raised by a subscribed widget.
    #[instrument(skip(self, host))]
    pub fn handle(&mut self, host: &mut H, event: ScreenEvent) {
        let mut view = HostView {
            host,
            widgets: &self.widgets,
            textures: &self.textures,
            labels: &self.labels,
        };
        match event {
            ScreenEvent::CellClicked(pos) => self.controller.on_cell_clicked(pos.index(), &mut view),
            ScreenEvent::Rematch => self.controller.start_match(&mut view),
        }
    }

    /// Returns the match controller.
    pub fn controller(&self) -> &MatchController<P> {
        &self.controller
    }
}
