mod io_utils;
mod readers;
mod sequence;
mod util;

pub use io_utils::open_report_writer;
pub use readers::{open_sequence_reader, read_sequence_text};
pub use sequence::{clean_dna, sanitize, CleanedSequence, DnaSequence, DNA_BASES};
pub use util::{fraction, handle_error_and_exit, Result};

use std::path::Path;

/// Reads, sanitizes and validates the sequence stored at `path`.
pub fn load_sequence(path: &Path) -> Result<DnaSequence> {
    let text = read_sequence_text(path)?;
    let CleanedSequence {
        sequence,
        discarded,
    } = clean_dna(&text);
    if discarded > 0 {
        log::warn!(
            "Discarded {} character(s) outside the A/T/C/G alphabet from {}",
            discarded,
            path.display()
        );
    }
    if sequence.is_empty() {
        log::warn!("No valid bases found in {}", path.display());
    }
    log::debug!("Loaded sequence of {} bases: {}", sequence.len(), sequence);
    Ok(sequence)
}
