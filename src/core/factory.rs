//! Factory module - produces sequentially-identified random pieces
//!
//! The factory owns the id counter instead of leaning on process-global
//! state: build it once per session and thread it through.

use crate::core::SimpleRng;
use crate::types::{Piece, PieceKind};

/// Produces pieces with a uniformly random kind and a monotone id
#[derive(Debug, Clone)]
pub struct PieceFactory {
    rng: SimpleRng,
    /// Id handed out by the next `generate` call. Starts at 1, never resets.
    next_id: u32,
}

impl PieceFactory {
    /// Create a factory with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 1,
        }
    }

    /// Generate a fresh piece
    ///
    /// The kind is drawn uniformly from [`PieceKind::ALL`]; the id is the
    /// next value of the counter.
    pub fn generate(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let id = self.next_id;
        self.next_id += 1;
        Piece { kind, id }
    }

    /// Id the next generated piece will receive
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}
