use std::sync::LazyLock;
use std::time::Instant;

use anyhow::Result;
use crate::config::BSSFConfig;
use crate::io::output::{BSSFOutput, KerfComparison};
use itertools::Itertools;
use log::{info, warn};
use panelcut::io::ext_repr::ExtJob;
use panelcut::io::{Importer, export};
use panelcut::packing::pack_kerf_variants;
use thousands::Separable;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Imports the job, packs it and bundles everything that goes into the solution file.
pub fn solve(ext_job: ExtJob, config: &BSSFConfig) -> Result<BSSFOutput> {
    let importer = Importer::new(config.default_kerf);
    let job = importer.import_job(&ext_job)?;

    info!(
        "[BSSF] packing {} pieces ({} mm²) of {} part types on {}x{} sheets with {} mm kerf",
        job.total_part_qty(),
        job.total_part_area().separate_with_commas(),
        job.parts.len(),
        job.sheet_width,
        job.sheet_height,
        job.kerf
    );

    let start = Instant::now();
    let result = job.pack();
    let solution = export(&result, start);

    info!(
        "[BSSF] packing finished in {:.3}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );
    info!(
        "[BSSF] {} sheet(s) used with an efficiency of {:.2}%, {} cut(s) along {} distinct line(s)",
        result.n_sheets(),
        result.total_efficiency(),
        result.total_cuts(),
        result.total_distinct_cut_lines()
    );
    for (i, sheet) in result.sheets.iter().enumerate() {
        info!(
            "[BSSF] sheet {}: {} piece(s), {:.1}%, {} cut(s), {} distinct cut line(s)",
            i + 1,
            sheet.placed_pieces().len(),
            sheet.efficiency(),
            sheet.cutting_count(),
            sheet.distinct_cut_lines()
        );
    }
    if !result.is_complete() {
        let unplaced = result
            .unplaced
            .iter()
            .counts_by(|p| p.part_id)
            .into_iter()
            .sorted()
            .map(|(id, qty)| format!("{qty}x part {id}"))
            .join(", ");
        warn!("[BSSF] could not place: {unplaced}");
    }

    let kerf_comparison = match config.kerf_variants.is_empty() {
        true => vec![],
        false => {
            let variants = pack_kerf_variants(
                job.sheet_width,
                job.sheet_height,
                &config.kerf_variants,
                &job.parts,
            );
            variants
                .iter()
                .map(|(kerf, r)| {
                    let comparison = KerfComparison::new(*kerf, r);
                    info!(
                        "[BSSF] kerf {} mm: {} sheet(s), {:.2}%, {} cut(s), {} unplaced",
                        comparison.kerf,
                        comparison.n_sheets,
                        comparison.total_efficiency,
                        comparison.total_cuts,
                        comparison.n_unplaced
                    );
                    comparison
                })
                .collect()
        }
    };

    Ok(BSSFOutput {
        job: ext_job,
        solution,
        config: config.clone(),
        kerf_comparison,
    })
}
