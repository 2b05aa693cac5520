//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use std::fmt;

/// Upcoming-pieces queue capacity
pub const QUEUE_CAPACITY: usize = 5;

/// Reserve stack capacity
pub const STACK_CAPACITY: usize = 3;

/// Number of pieces exchanged by the bulk swap
pub const SWAP_COUNT: usize = 3;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// The full piece alphabet, in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Display letter for this kind
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// A single supply piece: a kind plus a sequential id
///
/// Pieces are created only by [`crate::core::PieceFactory`] and never
/// mutated afterwards. Ids start at 1 and strictly increase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID:{}({})", self.id, self.kind.as_char())
    }
}

/// Commands accepted by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Remove the front piece from the queue, refill with a fresh one
    Play,
    /// Move the front piece from the queue onto the reserve stack
    Stash,
    /// Pop the top piece from the reserve stack
    Retrieve,
    /// Swap the queue front with the stack top, in place
    SwapFrontTop,
    /// Swap the first three queue pieces with the full stack, in place
    SwapThree,
    /// End the session
    Quit,
    /// Anything that did not parse as a menu choice
    Invalid,
}

impl Command {
    /// Parse a menu choice as entered by the user
    ///
    /// Accepts the digits `0`-`5`; any other input (including empty lines
    /// and non-numeric text) maps to [`Command::Invalid`].
    pub fn from_menu_choice(input: &str) -> Self {
        match input.trim() {
            "0" => Command::Quit,
            "1" => Command::Play,
            "2" => Command::Stash,
            "3" => Command::Retrieve,
            "4" => Command::SwapFrontTop,
            "5" => Command::SwapThree,
            _ => Command::Invalid,
        }
    }
}

/// Recoverable container/exchange failures
///
/// None of these end the session; every operation either completes or
/// leaves both containers untouched and reports one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpError {
    /// Insert attempted on a full container; the piece was not stored
    CapacityExceeded,
    /// Removal attempted on an empty container
    Underflow,
    /// Exchange invoked without enough pieces on both sides
    Precondition,
}

impl OpError {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpError::CapacityExceeded => "capacity exceeded",
            OpError::Underflow => "underflow",
            OpError::Precondition => "precondition not met",
        }
    }
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
