//! Move representation.
//!
//! A move drafts every tile of one color from one source and sends them to
//! one destination:
//! - source: a factory display or the shared center
//! - destination: one of the five pattern lines, or straight to the floor
//!
//! [`MovePayload`] is the loosely-typed document shape submitted by callers
//! (`patternLineIndex = -1` means floor). It converts into the typed [`Move`]
//! with `TryFrom`, rejecting indices that cannot name anything.

use serde::{Deserialize, Serialize};

use super::tile::{TileColor, BOARD_SIZE};
use crate::rules::MoveError;

/// Where drafted tiles come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DraftSource {
    /// A factory display, by index.
    Factory(usize),
    /// The shared center pool.
    Center,
}

/// Where drafted tiles go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    /// Pattern line by row index (0..=4). Row `r` holds `r + 1` tiles.
    PatternLine(usize),
    /// Straight to the penalty floor.
    Floor,
}

/// A complete tile-selection move.
///
/// ## Example
///
/// ```
/// use mosaic_engine::core::{Destination, DraftSource, Move, TileColor};
///
/// let mv = Move::from_factory(2, TileColor::Red, Destination::PatternLine(3));
/// assert_eq!(mv.source, DraftSource::Factory(2));
///
/// let dump = Move::from_center(TileColor::Blue, Destination::Floor);
/// assert_eq!(dump.source, DraftSource::Center);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub source: DraftSource,
    pub color: TileColor,
    pub destination: Destination,
}

impl Move {
    /// Create a move drafting from a factory display.
    #[must_use]
    pub fn from_factory(factory: usize, color: TileColor, destination: Destination) -> Self {
        Self {
            source: DraftSource::Factory(factory),
            color,
            destination,
        }
    }

    /// Create a move drafting from the center.
    #[must_use]
    pub fn from_center(color: TileColor, destination: Destination) -> Self {
        Self {
            source: DraftSource::Center,
            color,
            destination,
        }
    }
}

/// Source kind as it appears in a submitted document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Factory,
    Center,
}

/// A move as submitted by the service layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovePayload {
    pub source: SourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factory_index: Option<i64>,
    pub color: TileColor,
    /// Pattern line row, or `-1` for the floor.
    pub pattern_line_index: i64,
}

impl TryFrom<MovePayload> for Move {
    type Error = MoveError;

    fn try_from(payload: MovePayload) -> Result<Self, Self::Error> {
        let source = match payload.source {
            SourceKind::Center => DraftSource::Center,
            SourceKind::Factory => {
                let index = payload.factory_index.ok_or(MoveError::MissingFactoryIndex)?;
                let index =
                    usize::try_from(index).map_err(|_| MoveError::FactoryOutOfRange(index))?;
                DraftSource::Factory(index)
            }
        };

        let destination = match payload.pattern_line_index {
            -1 => Destination::Floor,
            row if (0..BOARD_SIZE as i64).contains(&row) => Destination::PatternLine(row as usize),
            row => return Err(MoveError::PatternLineOutOfRange(row)),
        };

        Ok(Move {
            source,
            color: payload.color,
            destination,
        })
    }
}

impl From<Move> for MovePayload {
    fn from(mv: Move) -> Self {
        let (source, factory_index) = match mv.source {
            DraftSource::Factory(index) => (SourceKind::Factory, Some(index as i64)),
            DraftSource::Center => (SourceKind::Center, None),
        };
        let pattern_line_index = match mv.destination {
            Destination::PatternLine(row) => row as i64,
            Destination::Floor => -1,
        };

        Self {
            source,
            factory_index,
            color: mv.color,
            pattern_line_index,
        }
    }
}
