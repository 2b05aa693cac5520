//! View module - pure string formatting for the menu loop
//!
//! Pieces render as `ID:n(K)` cells, queue front-to-back and stack
//! top-to-base, matching the layout players see between commands.

use std::fmt::Write;

use crate::core::{NextQueue, Outcome, Reject, ReserveStack};
use crate::types::Piece;

/// The fixed menu shown every round
pub const MENU: &str = "\
----------------------------
Menu:
1 - Play piece (remove from front, generate a new one at the back)
2 - Stash piece (queue -> reserve)
3 - Retrieve piece (reserve -> play)
4 - Swap queue FRONT with stack TOP
5 - Swap first 3 of queue with the 3 reserved
0 - Quit
Your move: ";

fn format_pieces<'a>(label: &str, pieces: impl Iterator<Item = &'a Piece>) -> String {
    let mut out = String::new();
    out.push_str(label);
    out.push('\n');

    let mut any = false;
    let mut row = String::from("[ ");
    for piece in pieces {
        let _ = write!(row, "{} ", piece);
        any = true;
    }
    row.push(']');

    if any {
        out.push_str(&row);
    } else {
        out.push_str("[ empty ]");
    }
    out.push('\n');
    out
}

/// Render the queue front-to-back
pub fn format_queue(queue: &NextQueue) -> String {
    format_pieces("Next pieces (front -> back):", queue.iter())
}

/// Render the stack top-to-base
pub fn format_stack(stack: &ReserveStack) -> String {
    format_pieces("Reserve (top -> base):", stack.iter_top_down())
}

/// One message line per outcome
pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Played { played, refill } => {
            format!("Piece {} was played. New piece {} entered the queue.", played, refill)
        }
        Outcome::Stashed { stashed, refill } => {
            format!(
                "Piece {} moved to the reserve. New piece {} entered the queue.",
                stashed, refill
            )
        }
        Outcome::Retrieved { piece } => {
            format!("Reserved piece {} was used.", piece)
        }
        Outcome::SwappedFrontTop {
            queue_front,
            stack_top,
        } => {
            format!(
                "Swapped: queue front is now {}, stack top is now {}.",
                queue_front, stack_top
            )
        }
        Outcome::SwappedThree => {
            "Swapped the first 3 queue pieces with the 3 reserved pieces.".to_string()
        }
        Outcome::Rejected(reject) => format_reject(reject),
        Outcome::Quit => "Ending the session...".to_string(),
    }
}

fn format_reject(reject: &Reject) -> String {
    let msg = match reject {
        Reject::QueueEmpty => "The queue is empty.",
        Reject::StackEmpty => "The reserve stack is empty.",
        Reject::StackFull => "The reserve stack is full!",
        Reject::SwapNeedsBoth => "Both queue and stack need at least 1 piece for this swap.",
        Reject::SwapNeedsThreeAndFullStack => {
            "The queue needs >= 3 pieces and the stack must be FULL (3) for this swap."
        }
        Reject::InvalidSelection => "Invalid option. Try again.",
    };
    msg.to_string()
}
