//! Core module - pure simulator logic with no I/O
//!
//! Everything here is deterministic given a seed and fully testable
//! without a terminal: the piece factory, the two bounded containers,
//! the exchange operations, and the command-driven session.

pub mod exchange;
pub mod factory;
pub mod queue;
pub mod rng;
pub mod session;
pub mod stack;

// Re-export commonly used types
pub use factory::PieceFactory;
pub use queue::NextQueue;
pub use rng::SimpleRng;
pub use session::{Outcome, Reject, Session};
pub use stack::ReserveStack;
