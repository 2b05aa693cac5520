//! Stack module - bounded linear LIFO of reserved pieces
//!
//! Fixed-capacity storage backed by `ArrayVec`; the top of the stack is
//! the last element, so an empty vector is the classic `top == -1` state.

use arrayvec::ArrayVec;

use crate::types::{OpError, Piece, STACK_CAPACITY};

/// Bounded LIFO stack of reserved pieces
#[derive(Debug, Clone)]
pub struct ReserveStack {
    items: ArrayVec<Piece, STACK_CAPACITY>,
}

impl ReserveStack {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        STACK_CAPACITY
    }

    /// Place a piece on top
    ///
    /// Fails with [`OpError::CapacityExceeded`] when full; the stack is
    /// left untouched and the caller still holds the piece by value.
    pub fn push(&mut self, piece: Piece) -> Result<(), OpError> {
        self.items
            .try_push(piece)
            .map_err(|_| OpError::CapacityExceeded)
    }

    /// Remove and return the top piece
    ///
    /// Fails with [`OpError::Underflow`] when empty.
    pub fn pop(&mut self) -> Result<Piece, OpError> {
        self.items.pop().ok_or(OpError::Underflow)
    }

    /// Borrow the top piece without removing it
    pub fn peek_top(&self) -> Option<&Piece> {
        self.items.last()
    }

    /// Mutable slot access counted from the base, for in-place swaps
    pub(crate) fn slot_from_base_mut(&mut self, i: usize) -> Option<&mut Piece> {
        self.items.get_mut(i)
    }

    /// Iterate the live pieces in top-to-base order without mutating
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Piece> {
        self.items.iter().rev()
    }
}

impl Default for ReserveStack {
    fn default() -> Self {
        Self::new()
    }
}
