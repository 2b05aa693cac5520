//! Queue module - bounded circular FIFO of upcoming pieces
//!
//! Fixed backing array with explicit head/len ring arithmetic; no
//! dynamic resizing. The front (logical index 0) is the next piece to
//! leave. The physical tail slot is `(head + len) % capacity`.

use crate::types::{OpError, Piece, QUEUE_CAPACITY};

/// Bounded circular queue of upcoming pieces
#[derive(Debug, Clone)]
pub struct NextQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    /// Physical index of the front element (meaningless while empty)
    head: usize,
    /// Number of live elements, 0..=QUEUE_CAPACITY
    len: usize,
}

impl NextQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAPACITY
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        QUEUE_CAPACITY
    }

    /// Physical slot index for logical position `i` (0 = front)
    #[inline(always)]
    fn physical(&self, i: usize) -> usize {
        (self.head + i) % QUEUE_CAPACITY
    }

    /// Append a piece at the tail
    ///
    /// Fails with [`OpError::CapacityExceeded`] when full; the queue is
    /// left untouched and the caller still holds the piece by value.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), OpError> {
        if self.is_full() {
            return Err(OpError::CapacityExceeded);
        }
        let tail = self.physical(self.len);
        self.slots[tail] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the front piece
    ///
    /// Fails with [`OpError::Underflow`] when empty.
    pub fn dequeue(&mut self) -> Result<Piece, OpError> {
        if self.is_empty() {
            return Err(OpError::Underflow);
        }
        let piece = self.slots[self.head].take().ok_or(OpError::Underflow)?;
        self.head = (self.head + 1) % QUEUE_CAPACITY;
        self.len -= 1;
        Ok(piece)
    }

    /// Borrow the front piece without removing it
    pub fn peek_front(&self) -> Option<&Piece> {
        self.peek_at(0)
    }

    /// Borrow the piece at logical position `i` (0 = front)
    ///
    /// Returns `None` for `i >= len`.
    pub fn peek_at(&self, i: usize) -> Option<&Piece> {
        if i >= self.len {
            return None;
        }
        self.slots[self.physical(i)].as_ref()
    }

    /// Mutable slot access at logical position `i`, for in-place swaps
    pub(crate) fn slot_mut(&mut self, i: usize) -> Option<&mut Piece> {
        if i >= self.len {
            return None;
        }
        let idx = self.physical(i);
        self.slots[idx].as_mut()
    }

    /// Iterate the live pieces in front-to-back order without mutating
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        (0..self.len).filter_map(move |i| self.slots[self.physical(i)].as_ref())
    }
}

impl Default for NextQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(id: u32) -> Piece {
        Piece {
            kind: PieceKind::T,
            id,
        }
    }

    #[test]
    fn test_wraparound_preserves_fifo_order() {
        let mut queue = NextQueue::new();

        // Fill, drain two, refill two: head is now in the middle of the
        // backing array and the tail has wrapped.
        for id in 1..=5 {
            queue.enqueue(piece(id)).unwrap();
        }
        assert_eq!(queue.dequeue().unwrap().id, 1);
        assert_eq!(queue.dequeue().unwrap().id, 2);
        queue.enqueue(piece(6)).unwrap();
        queue.enqueue(piece(7)).unwrap();

        let ids: Vec<u32> = queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6, 7]);

        for expected in [3, 4, 5, 6, 7] {
            assert_eq!(queue.dequeue().unwrap().id, expected);
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_peek_at_logical_positions() {
        let mut queue = NextQueue::new();
        for id in 1..=3 {
            queue.enqueue(piece(id)).unwrap();
        }
        assert_eq!(queue.peek_front().unwrap().id, 1);
        assert_eq!(queue.peek_at(2).unwrap().id, 3);
        assert!(queue.peek_at(3).is_none());
    }

    #[test]
    fn test_enqueue_full_is_rejected_without_change() {
        let mut queue = NextQueue::new();
        for id in 1..=5 {
            queue.enqueue(piece(id)).unwrap();
        }
        assert_eq!(queue.enqueue(piece(6)), Err(OpError::CapacityExceeded));
        assert_eq!(queue.len(), 5);
        let ids: Vec<u32> = queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_dequeue_empty_is_underflow() {
        let mut queue = NextQueue::new();
        assert_eq!(queue.dequeue(), Err(OpError::Underflow));
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
    }
}
