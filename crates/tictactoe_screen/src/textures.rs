//! The four marker textures, resolved once at initialisation.

use crate::config::AssetNames;
use crate::error::ScreenError;
use crate::host::AssetSource;
use tictactoe_core::Mover;
use tracing::{debug, error, instrument};

/// Logical marker images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Marker {
    /// Player mark.
    Cross,
    /// Player mark on a winning line.
    CrossedCross,
    /// Opponent mark.
    Circle,
    /// Opponent mark on a winning line.
    CrossedCircle,
}

impl Marker {
    /// Marker for `mover`, crossed out when on a winning line.
    pub fn for_mover(mover: Mover, crossed: bool) -> Self {
        match (mover, crossed) {
            (Mover::Player, false) => Marker::Cross,
            (Mover::Player, true) => Marker::CrossedCross,
            (Mover::Opponent, false) => Marker::Circle,
            (Mover::Opponent, true) => Marker::CrossedCircle,
        }
    }
}

/// Host texture handles for every [`Marker`].
#[derive(Debug, Clone)]
pub struct MarkerTextures<T> {
    cross: T,
    crossed_cross: T,
    circle: T,
    crossed_circle: T,
}

impl<T> MarkerTextures<T> {
    /// Looks up all four textures; any missing one fails the whole lookup.
    #[instrument(skip_all)]
    pub fn resolve<A>(assets: &A, names: &AssetNames) -> Result<Self, ScreenError>
    where
        A: AssetSource<Texture = T> + ?Sized,
    {
        let load = |marker: Marker| {
            let uri = names.uri(marker);
            match assets.texture(uri) {
                Some(texture) => {
                    debug!(%marker, uri, "Texture resolved");
                    Ok(texture)
                }
                None => {
                    error!(%marker, uri, "Texture missing");
                    Err(ScreenError::AssetMissing(uri.to_string()))
                }
            }
        };

        Ok(Self {
            cross: load(Marker::Cross)?,
            crossed_cross: load(Marker::CrossedCross)?,
            circle: load(Marker::Circle)?,
            crossed_circle: load(Marker::CrossedCircle)?,
        })
    }

    /// Texture for `marker`.
    pub fn get(&self, marker: Marker) -> &T {
        match marker {
            Marker::Cross => &self.cross,
            Marker::CrossedCross => &self.crossed_cross,
            Marker::Circle => &self.circle,
            Marker::CrossedCircle => &self.crossed_circle,
        }
    }

    /// Plain mark of `mover`.
    pub fn mark(&self, mover: Mover) -> &T {
        self.get(Marker::for_mover(mover, false))
    }

    /// Crossed-out mark of `mover`.
    pub fn crossed(&self, mover: Mover) -> &T {
        self.get(Marker::for_mover(mover, true))
    }
}
