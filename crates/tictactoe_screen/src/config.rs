//! Screen configuration: asset names, widget identifiers and label formats.
//!
//! Every field has a default matching the stock `TicTacToe` UI layout, so an
//! empty TOML file is a valid configuration.

use crate::textures::Marker;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::Position;
use tracing::{debug, info, instrument};

/// Texture URIs for the four markers.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetNames {
    /// Player mark.
    cross: String,
    /// Player mark on a winning line.
    crossed_cross: String,
    /// Opponent mark.
    circle: String,
    /// Opponent mark on a winning line.
    crossed_circle: String,
}

impl AssetNames {
    /// URI of `marker`.
    pub fn uri(&self, marker: Marker) -> &str {
        match marker {
            Marker::Cross => &self.cross,
            Marker::CrossedCross => &self.crossed_cross,
            Marker::Circle => &self.circle,
            Marker::CrossedCircle => &self.crossed_circle,
        }
    }
}

impl Default for AssetNames {
    fn default() -> Self {
        Self {
            cross: "TicTacToe:cross".to_string(),
            crossed_cross: "TicTacToe:crossedCross".to_string(),
            circle: "TicTacToe:circle".to_string(),
            crossed_circle: "TicTacToe:crossedCircle".to_string(),
        }
    }
}

/// Identifiers of the widgets the screen binds to.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetIds {
    /// Label showing the human's score.
    player_score: String,
    /// Label showing the opponent's score.
    opponent_score: String,
    /// Button starting a new match.
    rematch: String,
    /// Prefix of the nine cell buttons, numbered 1-9 in row-major order.
    cell_prefix: String,
}

impl WidgetIds {
    /// Identifier of the button for `pos`.
    pub fn cell_id(&self, pos: Position) -> String {
        format!("{}{}", self.cell_prefix, pos.index() + 1)
    }
}

impl Default for WidgetIds {
    fn default() -> Self {
        Self {
            player_score: "yourScore".to_string(),
            opponent_score: "cpuScore".to_string(),
            rematch: "rematchButton".to_string(),
            cell_prefix: "button".to_string(),
        }
    }
}

/// Score label templates; `{}` is replaced by the score.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFormats {
    /// Human score template.
    player_score: String,
    /// Opponent score template.
    opponent_score: String,
}

impl LabelFormats {
    /// Text for the human's score label.
    pub fn player_text(&self, score: u32) -> String {
        fill(&self.player_score, score)
    }

    /// Text for the opponent's score label.
    pub fn opponent_text(&self, score: u32) -> String {
        fill(&self.opponent_score, score)
    }
}

fn fill(template: &str, score: u32) -> String {
    template.replace("{}", &score.to_string())
}

impl Default for LabelFormats {
    fn default() -> Self {
        Self {
            player_score: "Your Score: {}".to_string(),
            opponent_score: "CPU Score:   {}".to_string(),
        }
    }
}

/// Configuration of one tic-tac-toe screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Texture URIs.
    assets: AssetNames,
    /// Widget identifiers.
    widgets: WidgetIds,
    /// Score label templates.
    labels: LabelFormats,
}

impl ScreenConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(cell_prefix = %config.widgets.cell_prefix, "Config loaded successfully");
        Ok(config)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = ScreenConfig::from_toml("").unwrap();
        assert_eq!(config, ScreenConfig::default());
        assert_eq!(config.assets().uri(Marker::CrossedCircle), "TicTacToe:crossedCircle");
    }

    #[test]
    fn test_partial_override() {
        let config = ScreenConfig::from_toml(
            r#"
            [widgets]
            cell_prefix = "cell"

            [labels]
            player_score = "You: {}"
            "#,
        )
        .unwrap();
        assert_eq!(config.widgets().cell_id(Position::BottomRight), "cell9");
        assert_eq!(config.widgets().rematch(), "rematchButton");
        assert_eq!(config.labels().player_text(3), "You: 3");
        assert_eq!(config.labels().opponent_text(2), "CPU Score:   2");
    }

    #[test]
    fn test_cell_ids_are_one_based() {
        let widgets = WidgetIds::default();
        assert_eq!(widgets.cell_id(Position::TopLeft), "button1");
        assert_eq!(widgets.cell_id(Position::Center), "button5");
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = ScreenConfig::from_toml("[assets\ncross = 1").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
