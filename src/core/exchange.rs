//! Exchange module - in-place swaps between the queue and the stack
//!
//! Both operations check their preconditions before touching either
//! container, so a rejected call leaves everything exactly as it was.
//! Only stored values move; heads, tops and counts never change.

use std::mem;

use crate::core::{NextQueue, ReserveStack};
use crate::types::{OpError, SWAP_COUNT};

/// Swap the queue's front piece with the stack's top piece
///
/// Requires both containers non-empty, else [`OpError::Precondition`].
pub fn swap_front_with_top(
    queue: &mut NextQueue,
    stack: &mut ReserveStack,
) -> Result<(), OpError> {
    if queue.is_empty() || stack.is_empty() {
        return Err(OpError::Precondition);
    }

    let top = stack.len() - 1;
    match (queue.slot_mut(0), stack.slot_from_base_mut(top)) {
        (Some(front), Some(top)) => {
            mem::swap(front, top);
            Ok(())
        }
        // Unreachable after the emptiness checks above
        _ => Err(OpError::Precondition),
    }
}

/// Swap the first three queue pieces with the three stack pieces
///
/// Requires the queue to hold at least three pieces and the stack to be
/// exactly full, else [`OpError::Precondition`]. Queue logical position
/// `i` is exchanged with stack position `i` counted from the base, so
/// the stack ends up holding the old queue front-three bottom-to-top.
pub fn swap_three(queue: &mut NextQueue, stack: &mut ReserveStack) -> Result<(), OpError> {
    if queue.len() < SWAP_COUNT || !stack.is_full() {
        return Err(OpError::Precondition);
    }

    for i in 0..SWAP_COUNT {
        if let (Some(q), Some(s)) = (queue.slot_mut(i), stack.slot_from_base_mut(i)) {
            mem::swap(q, s);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceKind};

    fn piece(id: u32) -> Piece {
        Piece {
            kind: PieceKind::S,
            id,
        }
    }

    fn queue_with(ids: &[u32]) -> NextQueue {
        let mut queue = NextQueue::new();
        for &id in ids {
            queue.enqueue(piece(id)).unwrap();
        }
        queue
    }

    fn stack_with(ids: &[u32]) -> ReserveStack {
        let mut stack = ReserveStack::new();
        for &id in ids {
            stack.push(piece(id)).unwrap();
        }
        stack
    }

    #[test]
    fn test_swap_front_with_top() {
        let mut queue = queue_with(&[1, 2, 3]);
        let mut stack = stack_with(&[4, 5]);

        swap_front_with_top(&mut queue, &mut stack).unwrap();

        let ids: Vec<u32> = queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![5, 2, 3]);
        let ids: Vec<u32> = stack.iter_top_down().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(queue.len(), 3);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_swap_front_rejected_when_either_empty() {
        let mut queue = queue_with(&[1]);
        let mut stack = ReserveStack::new();
        assert_eq!(
            swap_front_with_top(&mut queue, &mut stack),
            Err(OpError::Precondition)
        );
        assert_eq!(queue.peek_front().unwrap().id, 1);

        let mut queue = NextQueue::new();
        let mut stack = stack_with(&[1]);
        assert_eq!(
            swap_front_with_top(&mut queue, &mut stack),
            Err(OpError::Precondition)
        );
        assert_eq!(stack.peek_top().unwrap().id, 1);
    }

    #[test]
    fn test_swap_three_exchanges_base_up() {
        let mut queue = queue_with(&[1, 2, 3, 7]);
        let mut stack = stack_with(&[4, 5, 6]); // bottom-to-top: 4,5,6

        swap_three(&mut queue, &mut stack).unwrap();

        let ids: Vec<u32> = queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 5, 6, 7]);
        // Bottom-to-top 1,2,3 means top-down 3,2,1
        let ids: Vec<u32> = stack.iter_top_down().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(queue.len(), 4);
        assert_eq!(stack.len(), 3);
    }

    #[test]
    fn test_swap_three_across_wraparound() {
        // Push the head into the middle of the backing array first.
        let mut queue = queue_with(&[90, 91, 92, 1, 2]);
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(piece(3)).unwrap(); // physically wraps
        let mut stack = stack_with(&[4, 5, 6]);

        swap_three(&mut queue, &mut stack).unwrap();

        let ids: Vec<u32> = queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![4, 5, 6]);
        let ids: Vec<u32> = stack.iter_top_down().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_swap_three_requires_full_stack_and_three_in_queue() {
        // Stack not full: rejected even though the queue qualifies.
        let mut queue = queue_with(&[1, 2, 3]);
        let mut stack = stack_with(&[4, 5]);
        assert_eq!(swap_three(&mut queue, &mut stack), Err(OpError::Precondition));
        let ids: Vec<u32> = queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        // Queue too short: rejected even though the stack is full.
        let mut queue = queue_with(&[1, 2]);
        let mut stack = stack_with(&[4, 5, 6]);
        assert_eq!(swap_three(&mut queue, &mut stack), Err(OpError::Precondition));
        let ids: Vec<u32> = stack.iter_top_down().map(|p| p.id).collect();
        assert_eq!(ids, vec![6, 5, 4]);
    }
}
