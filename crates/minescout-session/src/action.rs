//! Input requests addressed to the external actuator.

use minescout_core::Position;

/// An input request identified by the cell it targets.
///
/// The engine's obligation ends at producing these values; translating a
/// cell address into device events is entirely the actuator's concern.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant,
)]
pub enum Action {
    /// Reveal the cell at the position.
    #[display("reveal {_0}")]
    Reveal(Position),
    /// Mark the cell at the position as a mine.
    #[display("flag {_0}")]
    Flag(Position),
}

impl Action {
    /// Returns the targeted cell.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Reveal(pos) | Self::Flag(pos) => *pos,
        }
    }
}
