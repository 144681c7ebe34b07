/// Lazily yields every offset at which `motif` occurs in `seq`.
///
/// Matches may overlap: after a hit at `pos` the scan resumes at `pos + 1`.
#[derive(Debug, Clone)]
pub struct MotifOccurrences<'a> {
    seq: &'a [u8],
    motif: &'a [u8],
    next: usize,
}

impl<'a> MotifOccurrences<'a> {
    pub fn new(seq: &'a [u8], motif: &'a [u8]) -> Self {
        Self {
            seq,
            motif,
            next: 0,
        }
    }
}

impl Iterator for MotifOccurrences<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let motif_len = self.motif.len();
        if motif_len == 0 {
            return None;
        }
        while self.next + motif_len <= self.seq.len() {
            let pos = self.next;
            self.next += 1;
            if &self.seq[pos..pos + motif_len] == self.motif {
                return Some(pos);
            }
        }
        None
    }
}

pub fn find_motif_occurrences(seq: &[u8], motif: &[u8]) -> Vec<usize> {
    MotifOccurrences::new(seq, motif).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rng, Rng};

    #[test]
    fn overlapping_matches_are_reported() {
        assert_eq!(find_motif_occurrences(b"AAAA", b"AA"), vec![0, 1, 2]);
        assert_eq!(find_motif_occurrences(b"AAA", b"AA"), vec![0, 1]);
        assert_eq!(find_motif_occurrences(b"TATATAT", b"TATAT"), vec![0, 2]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(find_motif_occurrences(b"CCCCCC", b"TTGACA").is_empty());
    }

    #[test]
    fn empty_inputs_are_empty() {
        assert!(find_motif_occurrences(b"", b"TTGACA").is_empty());
        assert!(find_motif_occurrences(b"TTGACA", b"").is_empty());
        assert!(find_motif_occurrences(b"", b"").is_empty());
    }

    #[test]
    fn sequence_shorter_than_motif() {
        assert!(find_motif_occurrences(b"TTGAC", b"TTGACA").is_empty());
    }

    #[test]
    fn match_at_both_ends() {
        assert_eq!(
            find_motif_occurrences(b"TTGACACCTTGACA", b"TTGACA"),
            vec![0, 8]
        );
        assert_eq!(find_motif_occurrences(b"TATAAT", b"TATAAT"), vec![0]);
    }

    #[test]
    fn iterator_is_lazy_and_resumable() {
        let mut occurrences = MotifOccurrences::new(b"ACACAC", b"AC");
        assert_eq!(occurrences.next(), Some(0));
        assert_eq!(occurrences.next(), Some(2));
        assert_eq!(occurrences.next(), Some(4));
        assert_eq!(occurrences.next(), None);
        assert_eq!(occurrences.next(), None);
    }

    #[test]
    fn every_offset_matches_motif_random() {
        let mut rng = rng();
        for _ in 0..50 {
            let len = rng.random_range(0..400);
            let seq: Vec<u8> = (0..len).map(|_| b"ACGT"[rng.random_range(0..4usize)]).collect();
            for motif in [&b"TA"[..], b"TTGACA", b"TATAAT", b"A"] {
                let hits = find_motif_occurrences(&seq, motif);
                for &pos in &hits {
                    assert_eq!(&seq[pos..pos + motif.len()], motif);
                }
                let expected: Vec<usize> = seq
                    .windows(motif.len())
                    .enumerate()
                    .filter(|(_, window)| *window == motif)
                    .map(|(pos, _)| pos)
                    .collect();
                assert_eq!(hits, expected);
            }
        }
    }
}
