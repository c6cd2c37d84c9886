//! Host glue for the in-world tic-tac-toe screen.
//!
//! The screen looks up its widgets and textures once, subscribes the nine
//! cell buttons and the rematch button, and forwards events to a
//! [`MatchController`](tictactoe_core::MatchController). Rendering intents
//! come back as image and label updates on the host.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{RandomOpponent, SequenceSource};
//! use tictactoe_screen::{HeadlessAssets, HeadlessHost, ScreenConfig, TicTacToeScreen};
//!
//! # fn main() -> Result<(), tictactoe_screen::ScreenError> {
//! let config = ScreenConfig::default();
//! let mut host = HeadlessHost::with_layout(&config);
//! let assets = HeadlessAssets::with_markers(&config);
//! let policy = RandomOpponent::new(SequenceSource::new([0, 0]));
//!
//! let mut screen = TicTacToeScreen::initialise(&mut host, &assets, &config, policy)?;
//! screen.on_opened(&mut host);
//! assert_eq!(host.text("yourScore"), Some("Your Score: 0"));
//!
//! if let Some(event) = host.click("button5") {
//!     screen.handle(&mut host, event);
//! }
//! assert_eq!(host.image("button5").map(|t| t.0.as_str()), Some("TicTacToe:cross"));
//! assert_eq!(host.image("button1").map(|t| t.0.as_str()), Some("TicTacToe:circle"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod headless;
mod host;
mod screen;
mod textures;

pub use config::{AssetNames, ConfigError, LabelFormats, ScreenConfig, WidgetIds};
pub use error::ScreenError;
pub use headless::{ButtonId, HeadlessAssets, HeadlessHost, HeadlessTexture, LabelId};
pub use host::{AssetSource, ScreenEvent, WidgetHost};
pub use screen::TicTacToeScreen;
pub use textures::{Marker, MarkerTextures};
