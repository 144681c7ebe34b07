use crate::cli::ValidateArgs;
use crate::promoter::{find_motif_occurrences, Element};
use crate::utils::{clean_dna, fraction, read_sequence_text, CleanedSequence, Result, DNA_BASES};
use itertools::Itertools;

pub fn validate(args: ValidateArgs) -> Result<()> {
    let text = read_sequence_text(&args.sequence_path)?;
    let CleanedSequence {
        sequence,
        discarded,
    } = clean_dna(&text);

    let counts = sequence.base_counts();
    let composition = DNA_BASES
        .iter()
        .zip(counts.iter())
        .map(|(&base, count)| format!("{}={}", base as char, count))
        .join(", ");

    log::info!("Sequence length: {} bp", sequence.len());
    log::info!("Base composition: {}", composition);
    match fraction(sequence.gc_count(), sequence.len()) {
        Some(gc) => log::info!("GC content: {:.2}%", gc * 100.0),
        None => log::info!("GC content: n/a"),
    }
    for element in [Element::Minus35, Element::Minus10] {
        let hits = find_motif_occurrences(sequence.as_bytes(), element.motif());
        log::info!(
            "{} element ({}) occurrences: {}",
            element,
            String::from_utf8_lossy(element.motif()),
            hits.len()
        );
    }

    if sequence.is_empty() {
        return Err(format!(
            "No valid bases found in {}",
            args.sequence_path.display()
        ));
    }

    let total = sequence.len() + discarded;
    match discarded {
        0 => log::info!("Validation successful. Bases pass={}", sequence.len()),
        _ => log::warn!(
            "Validation found invalid characters. Bases pass={} ({:.2}%), discarded={} ({:.2}%)",
            sequence.len(),
            fraction(sequence.len(), total).unwrap_or(0.0) * 100.0,
            discarded,
            fraction(discarded, total).unwrap_or(0.0) * 100.0
        ),
    }
    Ok(())
}
