//! In-memory host: a flat widget tree and a texture registry.
//!
//! Stands in for the engine UI in tests and in the terminal front-end.

use crate::config::ScreenConfig;
use crate::host::{AssetSource, ScreenEvent, WidgetHost};
use crate::textures::Marker;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use strum::IntoEnumIterator;
use tictactoe_core::Position;
use tracing::{debug, instrument, trace};

/// Texture handle of the headless host: the URI it was registered under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeadlessTexture(pub String);

/// Handle to a headless button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ButtonId(usize);

/// Handle to a headless label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LabelId(usize);

#[derive(Debug, Clone)]
struct Button {
    id: String,
    image: Option<HeadlessTexture>,
    event: Option<ScreenEvent>,
}

#[derive(Debug, Clone)]
struct Label {
    id: String,
    text: String,
}

/// Widget tree held in memory.
#[derive(Debug, Clone, Default)]
pub struct HeadlessHost {
    buttons: Vec<Button>,
    labels: Vec<Label>,
}

/// Texture registry held in memory.
#[derive(Debug, Clone, Default)]
pub struct HeadlessAssets {
    textures: BTreeSet<String>,
}

impl HeadlessAssets {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the four marker textures `config` names.
    pub fn with_markers(config: &ScreenConfig) -> Self {
        let mut assets = Self::new();
        for marker in Marker::iter() {
            assets.add(config.assets().uri(marker));
        }
        assets
    }

    /// Registers a texture URI.
    pub fn add(&mut self, uri: impl Into<String>) {
        self.textures.insert(uri.into());
    }

    /// Unregisters a texture URI.
    pub fn remove(&mut self, uri: &str) -> bool {
        self.textures.remove(uri)
    }
}

impl HeadlessHost {
    /// Creates an empty host.
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with every widget `config` refers to.
    #[instrument(skip(config))]
    pub fn with_layout(config: &ScreenConfig) -> Self {
        let mut host = Self::new();
        let widgets = config.widgets();
        for pos in Position::ALL {
            host.add_button(widgets.cell_id(pos));
        }
        host.add_button(widgets.rematch().clone());
        host.add_label(widgets.player_score().clone());
        host.add_label(widgets.opponent_score().clone());
        debug!(buttons = host.buttons.len(), labels = host.labels.len(), "Headless layout built");
        host
    }

    /// Adds a button, returning its handle.
    pub fn add_button(&mut self, id: impl Into<String>) -> ButtonId {
        self.buttons.push(Button {
            id: id.into(),
            image: None,
            event: None,
        });
        ButtonId(self.buttons.len() - 1)
    }

    /// Adds an empty label, returning its handle.
    pub fn add_label(&mut self, id: impl Into<String>) -> LabelId {
        self.labels.push(Label {
            id: id.into(),
            text: String::new(),
        });
        LabelId(self.labels.len() - 1)
    }

    /// Event raised by clicking the button `id`, if it is subscribed.
    #[instrument(skip(self))]
    pub fn click(&self, id: &str) -> Option<ScreenEvent> {
        let event = self.button(id).and_then(|button| button.event);
        trace!(?event, "Click resolved");
        event
    }

    /// Image currently shown by button `id`.
    pub fn image(&self, id: &str) -> Option<&HeadlessTexture> {
        self.button(id).and_then(|button| button.image.as_ref())
    }

    /// Text currently shown by label `id`.
    pub fn text(&self, id: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|label| label.id == id)
            .map(|label| label.text.as_str())
    }

    /// Subscriptions by button identifier.
    pub fn subscriptions(&self) -> HashMap<&str, ScreenEvent> {
        self.buttons
            .iter()
            .filter_map(|button| button.event.map(|event| (button.id.as_str(), event)))
            .collect()
    }

    fn button(&self, id: &str) -> Option<&Button> {
        self.buttons.iter().find(|button| button.id == id)
    }
}

impl AssetSource for HeadlessAssets {
    type Texture = HeadlessTexture;

    fn texture(&self, uri: &str) -> Option<HeadlessTexture> {
        self.textures
            .contains(uri)
            .then(|| HeadlessTexture(uri.to_string()))
    }
}

impl WidgetHost for HeadlessHost {
    type Texture = HeadlessTexture;
    type Button = ButtonId;
    type Label = LabelId;

    fn find_button(&self, id: &str) -> Option<ButtonId> {
        self.buttons
            .iter()
            .position(|button| button.id == id)
            .map(ButtonId)
    }

    fn find_label(&self, id: &str) -> Option<LabelId> {
        self.labels
            .iter()
            .position(|label| label.id == id)
            .map(LabelId)
    }

    fn set_image(&mut self, button: ButtonId, image: Option<&HeadlessTexture>) {
        if let Some(target) = self.buttons.get_mut(button.0) {
            target.image = image.cloned();
        }
    }

    fn set_text(&mut self, label: LabelId, text: &str) {
        if let Some(target) = self.labels.get_mut(label.0) {
            target.text = text.to_string();
        }
    }

    fn subscribe(&mut self, button: ButtonId, event: ScreenEvent) {
        if let Some(target) = self.buttons.get_mut(button.0) {
            target.event = Some(event);
        }
    }
}
