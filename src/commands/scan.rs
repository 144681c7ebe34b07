use crate::cli::ScanArgs;
use crate::promoter::{PromoterScan, Strategy};
use crate::utils::{load_sequence, open_report_writer, Result};
use crate::writers::{ReportOptions, ReportWriter};
use rayon::ThreadPoolBuilder;
use std::io::{self, IsTerminal};
use std::time;

pub fn scan(args: ScanArgs) -> Result<()> {
    let start_timer = time::Instant::now();

    let sequence = load_sequence(&args.sequence_path)?;
    log::info!(
        "Scanning {} bases from {}",
        sequence.len(),
        args.sequence_path.display()
    );

    let mut scan = if args.num_threads > 1 {
        let pool = ThreadPoolBuilder::new()
            .num_threads(args.num_threads)
            .build()
            .map_err(|e| format!("Failed to create thread pool: {}", e))?;
        let mut scan = pool.install(|| PromoterScan::run(&sequence, Strategy::Parallel));
        scan.truncate(args.top);
        scan
    } else {
        PromoterScan::run(&sequence, Strategy::Streaming { limit: args.top })
    };
    scan.retain_min_score(args.min_score);

    log::info!(
        "Found {} promoter candidate(s), reporting {}",
        scan.total_candidates,
        scan.candidates.len()
    );

    let options = ReportOptions {
        width: args.width,
        flank_len: args.flank_len,
        color: !args.no_color && args.output_path.is_none() && io::stdout().is_terminal(),
        show_sequence: args.show_sequence,
    };
    let writer = open_report_writer(args.output_path.as_deref())?;
    ReportWriter::new(writer, options).write(&sequence, &scan)?;

    log::info!("Total execution time: {:.2?}", start_timer.elapsed());
    Ok(())
}
