//! Tetris Stack - piece-supply simulator
//!
//! Models the upcoming-pieces queue (bounded circular, capacity 5) and
//! the reserve stack (bounded linear, capacity 3) of a falling-block
//! game, plus the exchange operations that couple them. The interactive
//! menu lives in the binary; this library is pure logic and formatting.

pub mod core;
pub mod term;
pub mod types;

pub use crate::core::{Outcome, Reject, Session};
pub use crate::types::{Command, OpError, Piece, PieceKind};
