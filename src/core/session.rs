//! Session module - command orchestration over the queue and stack
//!
//! Pure command-response: the session applies one [`Command`] at a time
//! and returns a structured [`Outcome`] for the UI to render. It never
//! prints. The one standing policy is that the queue is refilled to
//! capacity whenever a piece leaves it through Play or Stash.

use crate::core::{exchange, NextQueue, PieceFactory, ReserveStack};
use crate::types::{Command, Piece, QUEUE_CAPACITY};

/// Why a command was turned down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reject {
    /// Play or Stash with nothing in the queue
    QueueEmpty,
    /// Retrieve with nothing in the stack
    StackEmpty,
    /// Stash with no room in the reserve
    StackFull,
    /// Front/top swap needs at least one piece on each side
    SwapNeedsBoth,
    /// Bulk swap needs three queue pieces and a full stack
    SwapNeedsThreeAndFullStack,
    /// Input that did not map to a menu command
    InvalidSelection,
}

/// Result of applying one command
///
/// Success variants carry the affected pieces by value so the UI can
/// name them without re-querying the containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The front piece left the queue; a fresh one took the tail slot
    Played { played: Piece, refill: Piece },
    /// The front piece moved to the reserve; a fresh one took the tail slot
    Stashed { stashed: Piece, refill: Piece },
    /// The top reserve piece was used; the queue is deliberately not refilled
    Retrieved { piece: Piece },
    /// Front and top were exchanged; fields are the pieces now in place
    SwappedFrontTop { queue_front: Piece, stack_top: Piece },
    /// The first three queue pieces and the full stack were exchanged
    SwappedThree,
    /// The command was turned down; no state changed
    Rejected(Reject),
    /// The session is over
    Quit,
}

/// Owns the containers and the factory; applies commands
#[derive(Debug, Clone)]
pub struct Session {
    queue: NextQueue,
    stack: ReserveStack,
    factory: PieceFactory,
}

impl Session {
    /// Create a session with a full queue and an empty stack
    pub fn new(seed: u32) -> Self {
        let mut factory = PieceFactory::new(seed);
        let mut queue = NextQueue::new();
        for _ in 0..QUEUE_CAPACITY {
            // The queue starts empty, so the initial fill cannot be rejected.
            let _ = queue.enqueue(factory.generate());
        }
        Self {
            queue,
            stack: ReserveStack::new(),
            factory,
        }
    }

    pub fn queue(&self) -> &NextQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    /// Apply one command and report what happened
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Play => self.play(),
            Command::Stash => self.stash(),
            Command::Retrieve => self.retrieve(),
            Command::SwapFrontTop => self.swap_front_top(),
            Command::SwapThree => self.swap_three(),
            Command::Quit => Outcome::Quit,
            Command::Invalid => Outcome::Rejected(Reject::InvalidSelection),
        }
    }

    fn play(&mut self) -> Outcome {
        let played = match self.queue.dequeue() {
            Ok(piece) => piece,
            Err(_) => return Outcome::Rejected(Reject::QueueEmpty),
        };
        let refill = self.refill_queue();
        Outcome::Played { played, refill }
    }

    fn stash(&mut self) -> Outcome {
        if self.stack.is_full() {
            return Outcome::Rejected(Reject::StackFull);
        }
        let stashed = match self.queue.dequeue() {
            Ok(piece) => piece,
            Err(_) => return Outcome::Rejected(Reject::QueueEmpty),
        };
        // Room was checked above, so the push cannot be rejected.
        let _ = self.stack.push(stashed);
        let refill = self.refill_queue();
        Outcome::Stashed { stashed, refill }
    }

    fn retrieve(&mut self) -> Outcome {
        // The piece never sat in the queue, so no refill happens here.
        match self.stack.pop() {
            Ok(piece) => Outcome::Retrieved { piece },
            Err(_) => Outcome::Rejected(Reject::StackEmpty),
        }
    }

    fn swap_front_top(&mut self) -> Outcome {
        if exchange::swap_front_with_top(&mut self.queue, &mut self.stack).is_err() {
            return Outcome::Rejected(Reject::SwapNeedsBoth);
        }
        match (self.queue.peek_front(), self.stack.peek_top()) {
            (Some(&queue_front), Some(&stack_top)) => Outcome::SwappedFrontTop {
                queue_front,
                stack_top,
            },
            // Unreachable: the swap succeeded, so both sides are populated
            _ => Outcome::Rejected(Reject::SwapNeedsBoth),
        }
    }

    fn swap_three(&mut self) -> Outcome {
        match exchange::swap_three(&mut self.queue, &mut self.stack) {
            Ok(()) => Outcome::SwappedThree,
            Err(_) => Outcome::Rejected(Reject::SwapNeedsThreeAndFullStack),
        }
    }

    /// Generate a fresh piece and append it; a slot was just freed, so
    /// the enqueue cannot be rejected
    fn refill_queue(&mut self) -> Piece {
        let refill = self.factory.generate();
        let _ = self.queue.enqueue(refill);
        refill
    }
}
