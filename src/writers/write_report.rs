//! Plain-text rendering of ranked promoter candidates.
//!

use super::color::{pick_color, Color};
use crate::promoter::{Candidate, Element, PromoterScan, MOTIF_LEN};
use crate::utils::{DnaSequence, Result};
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Bases per visualization line.
    pub width: usize,
    /// Bases shown on each side of a candidate.
    pub flank_len: usize,
    /// Highlight motif bases with ANSI escapes.
    pub color: bool,
    /// Print the cleaned input sequence before the candidates.
    pub show_sequence: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            width: 60,
            flank_len: 10,
            color: false,
            show_sequence: false,
        }
    }
}

/// Writes a ranked candidate list followed by a position-marked view of each
/// candidate region.
pub struct ReportWriter<W: Write> {
    writer: W,
    options: ReportOptions,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W, options: ReportOptions) -> ReportWriter<W> {
        ReportWriter { writer, options }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    pub fn write(&mut self, seq: &DnaSequence, scan: &PromoterScan) -> Result<()> {
        self.write_report(seq, scan)
            .and_then(|_| self.writer.flush())
            .map_err(|e| format!("Failed to write report: {}", e))
    }

    fn write_report(&mut self, seq: &DnaSequence, scan: &PromoterScan) -> io::Result<()> {
        writeln!(self.writer, "Sequence length: {} bp", seq.len())?;
        if self.options.show_sequence {
            writeln!(self.writer, "Cleaned sequence: {}", seq)?;
        }
        for (element, hits) in [
            (Element::Minus35, &scan.minus35),
            (Element::Minus10, &scan.minus10),
        ] {
            writeln!(
                self.writer,
                "{} element ({}) occurrences: {}",
                element,
                String::from_utf8_lossy(element.motif()),
                hits.len()
            )?;
        }

        if scan.total_candidates == 0 {
            writeln!(self.writer, "No promoter candidates found")?;
            return Ok(());
        }
        writeln!(
            self.writer,
            "Promoter candidates: {} (reporting {})",
            scan.total_candidates,
            scan.candidates.len()
        )?;

        for (rank, candidate) in scan.candidates.iter().enumerate() {
            writeln!(self.writer)?;
            self.write_candidate(rank + 1, seq, candidate)?;
        }
        Ok(())
    }

    fn write_candidate(
        &mut self,
        rank: usize,
        seq: &DnaSequence,
        candidate: &Candidate,
    ) -> io::Result<()> {
        let header = format!(
            "#{}\t-35 at {}\t-10 at {}\tgap {}\tscore {}",
            rank, candidate.minus35, candidate.minus10, candidate.gap, candidate.score
        );
        if self.options.color {
            writeln!(self.writer, "{}{}{}", Color::Bold, header, Color::Reset)?;
        } else {
            writeln!(self.writer, "{}", header)?;
        }

        let bases = seq.as_bytes();
        let coverage = candidate.coverage(bases.len());
        let start = candidate.minus35.saturating_sub(self.options.flank_len);
        let end = (candidate.minus10 + MOTIF_LEN)
            .saturating_add(self.options.flank_len)
            .min(bases.len());
        let pos_width = bases.len().to_string().len();
        let width = self.options.width.max(1);

        for line_start in (start..end).step_by(width) {
            let line_end = (line_start + width).min(end);
            let line_bases = &bases[line_start..line_end];
            let line_coverage = &coverage[line_start..line_end];

            let rendered = self.render_bases(line_bases, line_coverage);
            writeln!(self.writer, "{:>pos_width$}  {}", line_start, rendered)?;
            let markers = format!("{:>pos_width$}  {}", "", render_markers(line_coverage));
            writeln!(self.writer, "{}", markers.trim_end())?;
        }
        Ok(())
    }

    fn render_bases(&self, bases: &[u8], coverage: &[Option<Element>]) -> String {
        if !self.options.color {
            return String::from_utf8_lossy(bases).into_owned();
        }

        let mut line = String::with_capacity(bases.len() + 16);
        let mut current: Option<Element> = None;
        for (&base, &element) in bases.iter().zip(coverage) {
            if element != current {
                if current.is_some() {
                    line.push_str(&Color::Reset.to_string());
                }
                if let Some(element) = element {
                    line.push_str(&pick_color(element).to_string());
                }
                current = element;
            }
            line.push(base as char);
        }
        if current.is_some() {
            line.push_str(&Color::Reset.to_string());
        }
        line
    }
}

fn marker(element: Option<Element>) -> char {
    match element {
        Some(Element::Minus35) => '>',
        Some(Element::Minus10) => '<',
        None => ' ',
    }
}

fn render_markers(coverage: &[Option<Element>]) -> String {
    coverage.iter().map(|&element| marker(element)).collect()
}
