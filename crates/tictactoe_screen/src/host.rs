//! Interface to the host engine's UI toolkit and asset system.

use serde::{Deserialize, Serialize};
use tictactoe_core::Position;

/// Input the host delivers back to the screen.
///
/// Widgets are subscribed with the event they should raise, so a click
/// arrives already resolved to its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenEvent {
    /// A cell button was clicked.
    CellClicked(Position),
    /// The rematch button was clicked.
    Rematch,
}

/// Texture lookup by logical name.
pub trait AssetSource {
    /// Opaque texture handle.
    type Texture;

    /// Returns the texture registered under `uri`, if any.
    fn texture(&self, uri: &str) -> Option<Self::Texture>;
}

/// Widget tree of the screen's layout.
pub trait WidgetHost {
    /// Image type buttons display.
    type Texture;
    /// Handle to a button widget.
    type Button: Copy + std::fmt::Debug;
    /// Handle to a label widget.
    type Label: Copy + std::fmt::Debug;

    /// Finds a button by identifier.
    fn find_button(&self, id: &str) -> Option<Self::Button>;

    /// Finds a label by identifier.
    fn find_label(&self, id: &str) -> Option<Self::Label>;

    /// Sets or clears a button's image.
    fn set_image(&mut self, button: Self::Button, image: Option<&Self::Texture>);

    /// Sets a label's text.
    fn set_text(&mut self, label: Self::Label, text: &str);

    /// Raises `event` whenever `button` is clicked.
    fn subscribe(&mut self, button: Self::Button, event: ScreenEvent);
}
