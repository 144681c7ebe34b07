//! Promoter candidate detection from -35 (`TTGACA`) and -10 (`TATAAT`)
//! consensus elements.

pub mod candidate;
pub mod locate;
pub mod score;

pub use candidate::{
    candidate_pairs, generate_candidates, generate_candidates_par, generate_candidates_sharded,
    rank_candidates, top_candidates, Candidate,
};
pub use locate::{find_motif_occurrences, MotifOccurrences};
pub use score::{gap_score, ALL_SCORES, SCORE_BASELINE, SCORE_FAR, SCORE_NEAR, SCORE_OPTIMAL};

use crate::utils::DnaSequence;
use std::fmt;

pub const MOTIF_LEN: usize = 6;
pub const MINUS35_MOTIF: &[u8; MOTIF_LEN] = b"TTGACA";
pub const MINUS10_MOTIF: &[u8; MOTIF_LEN] = b"TATAAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Minus35,
    Minus10,
}

impl Element {
    pub fn motif(&self) -> &'static [u8] {
        match self {
            Element::Minus35 => MINUS35_MOTIF,
            Element::Minus10 => MINUS10_MOTIF,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Element::Minus35 => write!(formatter, "-35"),
            Element::Minus10 => write!(formatter, "-10"),
        }
    }
}

/// How the ranked candidate list is produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Materialize and stably sort every pair.
    Eager,
    /// Shard the -35 occurrences over the current rayon pool.
    Parallel,
    /// Stream the pairs and keep only the best `limit`.
    Streaming { limit: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PromoterScan {
    pub minus35: Vec<usize>,
    pub minus10: Vec<usize>,
    /// Ranked candidates; a prefix of the full ranking for `Strategy::Streaming`.
    pub candidates: Vec<Candidate>,
    /// Number of ordered pairs before any truncation or filtering.
    pub total_candidates: usize,
}

impl PromoterScan {
    pub fn run(seq: &DnaSequence, strategy: Strategy) -> PromoterScan {
        let bases = seq.as_bytes();
        let minus35 = find_motif_occurrences(bases, Element::Minus35.motif());
        let minus10 = find_motif_occurrences(bases, Element::Minus10.motif());
        log::debug!(
            "Found {} {} and {} {} occurrences",
            minus35.len(),
            Element::Minus35,
            minus10.len(),
            Element::Minus10
        );

        let (candidates, total_candidates) = match strategy {
            Strategy::Eager => {
                let candidates = generate_candidates(&minus35, &minus10);
                let total = candidates.len();
                (candidates, total)
            }
            Strategy::Parallel => {
                let candidates = generate_candidates_par(&minus35, &minus10);
                let total = candidates.len();
                (candidates, total)
            }
            Strategy::Streaming { limit } => (
                top_candidates(candidate_pairs(&minus35, &minus10), limit),
                candidate_pairs(&minus35, &minus10).count(),
            ),
        };

        PromoterScan {
            minus35,
            minus10,
            candidates,
            total_candidates,
        }
    }

    /// Drops candidates scoring below `min_score`. The list is ranked, so the
    /// kept candidates are a prefix and their order is unchanged.
    pub fn retain_min_score(&mut self, min_score: u32) {
        self.candidates.retain(|c| c.score >= min_score);
    }

    pub fn truncate(&mut self, limit: usize) {
        self.candidates.truncate(limit);
    }
}

/// Ranked promoter candidates for `seq`, best first; equal scores keep their
/// generation order.
pub fn find_promoter_candidates(seq: &DnaSequence) -> Vec<Candidate> {
    PromoterScan::run(seq, Strategy::Eager).candidates
}
