use super::{score::gap_score, Element, MOTIF_LEN};
use itertools::{iproduct, Itertools};
use rayon::prelude::*;
use std::{
    cmp::{Ordering, Reverse},
    collections::BinaryHeap,
};

/// A -35/-10 pairing. `minus35 < minus10` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub minus35: usize,
    pub minus10: usize,
    /// Bases between the end of the -35 element and the start of the -10
    /// element; negative when the two motifs overlap.
    pub gap: isize,
    pub score: u32,
}

impl Candidate {
    pub fn new(minus35: usize, minus10: usize) -> Self {
        let gap = minus10 as isize - minus35 as isize - MOTIF_LEN as isize;
        Candidate {
            minus35,
            minus10,
            gap,
            score: gap_score(gap),
        }
    }

    /// Per-position mask of the bases covered by this candidate's motifs.
    /// Where the two elements overlap the -10 element is reported.
    pub fn coverage(&self, seq_len: usize) -> Vec<Option<Element>> {
        let mut mask = vec![None; seq_len];
        for (start, element) in [
            (self.minus35, Element::Minus35),
            (self.minus10, Element::Minus10),
        ] {
            let end = (start + MOTIF_LEN).min(seq_len);
            for slot in mask.iter_mut().take(end).skip(start) {
                *slot = Some(element);
            }
        }
        mask
    }
}

/// Position of a pair in the nested -35 x -10 iteration.
type GenerationKey = (usize, usize);
type KeyedCandidate = (GenerationKey, Candidate);

fn keyed_pairs<'a>(
    minus35: &'a [usize],
    minus10: &'a [usize],
) -> impl Iterator<Item = KeyedCandidate> + 'a {
    iproduct!(minus35.iter().enumerate(), minus10.iter().enumerate())
        .filter(|((_, pos35), (_, pos10))| pos35 < pos10)
        .map(|((i35, &pos35), (i10, &pos10))| ((i35, i10), Candidate::new(pos35, pos10)))
}

/// Best score first, then earliest generated.
fn by_rank(a: &KeyedCandidate, b: &KeyedCandidate) -> Ordering {
    b.1.score.cmp(&a.1.score).then(a.0.cmp(&b.0))
}

/// Ordered -35/-10 pairs in generation order, unranked. All pairs for the
/// first -35 occurrence come before those of the next.
pub fn candidate_pairs<'a>(
    minus35: &'a [usize],
    minus10: &'a [usize],
) -> impl Iterator<Item = Candidate> + 'a {
    keyed_pairs(minus35, minus10).map(|(_, candidate)| candidate)
}

/// Sorts by score, best first. The sort is stable so equal scores keep their
/// generation order.
pub fn rank_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
}

pub fn generate_candidates(minus35: &[usize], minus10: &[usize]) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = candidate_pairs(minus35, minus10).collect();
    rank_candidates(&mut candidates);
    candidates
}

#[derive(Debug)]
struct HeapEntry {
    rank: (u32, Reverse<usize>),
    candidate: Candidate,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

/// Keeps the `limit` best candidates of a stream, in ranked order, without
/// materializing the stream. Equals the first `limit` entries of the fully
/// ranked list.
pub fn top_candidates<I>(candidates: I, limit: usize) -> Vec<Candidate>
where
    I: IntoIterator<Item = Candidate>,
{
    if limit == 0 {
        return Vec::new();
    }

    // Min-heap on (score, earliest first): the root is the weakest kept entry.
    // Sized by the stream, not by `limit`.
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    for (index, candidate) in candidates.into_iter().enumerate() {
        let entry = HeapEntry {
            rank: (candidate.score, Reverse(index)),
            candidate,
        };
        if heap.len() < limit {
            heap.push(Reverse(entry));
        } else if heap
            .peek()
            .is_some_and(|Reverse(weakest)| entry > *weakest)
        {
            heap.pop();
            heap.push(Reverse(entry));
        }
    }

    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(entry)| entry.candidate)
        .collect()
}

/// Ranks candidates by splitting the -35 occurrences into shards of
/// `shard_len`, ranking every shard independently and merging the shards on
/// (score, generation key). The result equals `generate_candidates`.
pub fn generate_candidates_sharded(
    minus35: &[usize],
    minus10: &[usize],
    shard_len: usize,
) -> Vec<Candidate> {
    let shard_len = shard_len.max(1);
    let shards: Vec<Vec<KeyedCandidate>> = minus35
        .par_chunks(shard_len)
        .enumerate()
        .map(|(shard_index, shard)| {
            let offset = shard_index * shard_len;
            let mut keyed: Vec<KeyedCandidate> = keyed_pairs(shard, minus10)
                .map(|((i35, i10), candidate)| ((i35 + offset, i10), candidate))
                .collect();
            keyed.sort_by(by_rank);
            keyed
        })
        .collect();

    log::debug!("Merging {} ranked shard(s)", shards.len());
    shards
        .into_iter()
        .kmerge_by(|a, b| by_rank(a, b) == Ordering::Less)
        .map(|(_, candidate)| candidate)
        .collect()
}

/// Parallel `generate_candidates`, sharded over the current rayon pool.
pub fn generate_candidates_par(minus35: &[usize], minus10: &[usize]) -> Vec<Candidate> {
    let shard_len = minus35.len().div_ceil(rayon::current_num_threads());
    generate_candidates_sharded(minus35, minus10, shard_len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rng, Rng};

    fn random_positions(rng: &mut impl Rng, max: usize) -> Vec<usize> {
        let mut positions: Vec<usize> = (0..rng.random_range(0..30usize))
            .map(|_| rng.random_range(0..max))
            .collect();
        positions.sort_unstable();
        positions.dedup();
        positions
    }

    #[test]
    fn candidate_gap_and_score() {
        assert_eq!(
            Candidate::new(0, 29),
            Candidate {
                minus35: 0,
                minus10: 29,
                gap: 23,
                score: 60
            }
        );
        assert_eq!(Candidate::new(10, 33).score, 100);
        assert_eq!(Candidate::new(10, 33).gap, 17);
    }

    #[test]
    fn overlapping_motifs_have_negative_gap() {
        let candidate = Candidate::new(4, 7);
        assert_eq!(candidate.gap, -3);
        assert_eq!(candidate.score, 40);
    }

    #[test]
    fn ordering_filter_is_strict() {
        assert!(generate_candidates(&[5], &[5]).is_empty());
        assert!(generate_candidates(&[9], &[2]).is_empty());
        assert_eq!(generate_candidates(&[5], &[6]).len(), 1);
    }

    #[test]
    fn empty_inputs_yield_no_candidates() {
        assert!(generate_candidates(&[], &[10]).is_empty());
        assert!(generate_candidates(&[10], &[]).is_empty());
        assert!(generate_candidates(&[], &[]).is_empty());
    }

    #[test]
    fn generation_order_is_nested() {
        let pairs: Vec<(usize, usize)> = candidate_pairs(&[0, 2], &[1, 30, 40])
            .map(|c| (c.minus35, c.minus10))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 30), (0, 40), (2, 30), (2, 40)]);
    }

    #[test]
    fn ties_keep_generation_order() {
        // Gaps: (0,26)=20, (0,30)=24, (0,100)=94, (3,26)=17, (3,30)=21, (3,100)=91
        let ranked = generate_candidates(&[0, 3], &[26, 30, 100]);
        let pairs: Vec<(usize, usize, u32)> = ranked
            .iter()
            .map(|c| (c.minus35, c.minus10, c.score))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (3, 26, 100),
                (0, 26, 80),
                (3, 30, 80),
                (0, 30, 40),
                (0, 100, 40),
                (3, 100, 40),
            ]
        );
    }

    #[test]
    fn two_minus35_sites_one_minus10() {
        let ranked = generate_candidates(&[0, 10], &[33]);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|c| c.minus10 == 33));
        assert_eq!(ranked[0], Candidate::new(10, 33));
        assert_eq!(ranked[1], Candidate::new(0, 33));
    }

    #[test]
    fn coverage_marks_both_elements() {
        let mask = Candidate::new(2, 20).coverage(30);
        assert_eq!(mask.len(), 30);
        for (pos, slot) in mask.iter().enumerate() {
            let expected = match pos {
                2..=7 => Some(Element::Minus35),
                20..=25 => Some(Element::Minus10),
                _ => None,
            };
            assert_eq!(*slot, expected, "position {}", pos);
        }
    }

    #[test]
    fn coverage_overlap_prefers_minus10() {
        let mask = Candidate::new(0, 3).coverage(9);
        assert_eq!(
            mask,
            vec![
                Some(Element::Minus35),
                Some(Element::Minus35),
                Some(Element::Minus35),
                Some(Element::Minus10),
                Some(Element::Minus10),
                Some(Element::Minus10),
                Some(Element::Minus10),
                Some(Element::Minus10),
                Some(Element::Minus10),
            ]
        );
    }

    #[test]
    fn coverage_is_clipped_to_sequence() {
        let mask = Candidate::new(0, 8).coverage(10);
        assert_eq!(mask.len(), 10);
        assert_eq!(mask.iter().filter(|slot| slot.is_some()).count(), 8);
    }

    #[test]
    fn top_candidates_zero_limit() {
        assert!(top_candidates(candidate_pairs(&[0], &[23]), 0).is_empty());
    }

    #[test]
    fn top_candidates_huge_limit() {
        let expected = vec![Candidate::new(0, 23)];
        assert_eq!(
            top_candidates(candidate_pairs(&[0], &[23]), 1usize << 40),
            expected
        );
        assert_eq!(
            top_candidates(candidate_pairs(&[0], &[23]), usize::MAX),
            expected
        );
    }

    #[test]
    fn top_candidates_larger_than_stream() {
        let all = generate_candidates(&[0, 3], &[26, 30, 100]);
        assert_eq!(top_candidates(candidate_pairs(&[0, 3], &[26, 30, 100]), 50), all);
    }

    #[test]
    fn alternative_strategies_agree_with_eager_ranking() {
        let mut rng = rng();
        for _ in 0..200 {
            let minus35 = random_positions(&mut rng, 120);
            let minus10 = random_positions(&mut rng, 120);
            let eager = generate_candidates(&minus35, &minus10);

            for ranked in &eager {
                assert!(ranked.minus35 < ranked.minus10);
            }
            for window in eager.windows(2) {
                assert!(window[0].score >= window[1].score);
            }

            let limit = rng.random_range(0..eager.len() + 3);
            let expected_top: Vec<Candidate> = eager.iter().take(limit).copied().collect();
            assert_eq!(
                top_candidates(candidate_pairs(&minus35, &minus10), limit),
                expected_top
            );

            let shard_len = rng.random_range(1..8usize);
            assert_eq!(
                generate_candidates_sharded(&minus35, &minus10, shard_len),
                eager
            );
            assert_eq!(generate_candidates_par(&minus35, &minus10), eager);
        }
    }
}
