use super::Result;
use std::fmt;

pub const DNA_BASES: [u8; 4] = *b"ATCG";

#[inline]
fn is_dna_base(base: u8) -> bool {
    DNA_BASES.contains(&base)
}

/// Uppercase nucleotide sequence restricted to `A`, `T`, `C` and `G`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DnaSequence(Vec<u8>);

impl DnaSequence {
    /// Wraps `bases`, rejecting anything outside the DNA alphabet.
    pub fn new(bases: impl Into<Vec<u8>>) -> Result<Self> {
        let bases = bases.into();
        if let Some((pos, base)) = bases
            .iter()
            .enumerate()
            .find(|&(_, &base)| !is_dna_base(base))
        {
            return Err(format!(
                "Invalid base '{}' at position {}",
                base.escape_ascii(),
                pos
            ));
        }
        Ok(Self(bases))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Counts of each base, in `DNA_BASES` order.
    pub fn base_counts(&self) -> [usize; 4] {
        let mut counts = [0; 4];
        for base in &self.0 {
            if let Some(index) = DNA_BASES.iter().position(|b| b == base) {
                counts[index] += 1;
            }
        }
        counts
    }

    pub fn gc_count(&self) -> usize {
        self.0.iter().filter(|&&b| b == b'G' || b == b'C').count()
    }
}

impl AsRef<[u8]> for DnaSequence {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for DnaSequence {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // Only ASCII bases are ever stored
        write!(formatter, "{}", String::from_utf8_lossy(&self.0))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanedSequence {
    pub sequence: DnaSequence,
    /// Non-whitespace characters dropped because they are not A, T, C or G.
    pub discarded: usize,
}

/// Strips whitespace and skips FASTA header lines.
pub fn sanitize(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.trim_start().starts_with('>'))
        .flat_map(str::chars)
        .filter(|c| !c.is_whitespace())
        .collect()
}

pub fn clean_dna(raw: &str) -> CleanedSequence {
    let sanitized = sanitize(raw);
    let mut bases = Vec::with_capacity(sanitized.len());
    let mut discarded = 0;
    for c in sanitized.chars() {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii() && is_dna_base(upper as u8) {
            bases.push(upper as u8);
        } else {
            discarded += 1;
        }
    }
    CleanedSequence {
        sequence: DnaSequence(bases),
        discarded,
    }
}
