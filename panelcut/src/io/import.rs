use crate::entities::{Job, Part};
use crate::geometry::Rect;
use crate::io::ext_repr::{ExtJob, ExtPart};
use anyhow::{Context, Result, bail, ensure};
use itertools::Itertools;
use log::{debug, warn};

/// Converts external representations of jobs and parts into validated internal ones.
#[derive(Clone, Debug, Copy)]
pub struct Importer {
    /// Kerf used for jobs which do not specify one
    pub default_kerf: u32,
}

impl Importer {
    pub fn new(default_kerf: u32) -> Importer {
        Importer { default_kerf }
    }

    pub fn import_job(&self, ext_job: &ExtJob) -> Result<Job> {
        let board = Rect::try_new(0, 0, ext_job.sheet.width, ext_job.sheet.height)
            .context("invalid board dimensions")?;

        let trim = ext_job.edge_trim as u64 * 2;
        ensure!(
            (board.width as u64) > trim && (board.height as u64) > trim,
            "edge trim of {} mm leaves no usable area on a {}x{} board",
            ext_job.edge_trim,
            board.width,
            board.height
        );
        let sheet_width = board.width - 2 * ext_job.edge_trim;
        let sheet_height = board.height - 2 * ext_job.edge_trim;

        let kerf = match ext_job.kerf {
            Some(kerf) => kerf,
            None => {
                debug!(
                    "[IMPORT] no kerf specified for job {:?}, using default of {} mm",
                    ext_job.name, self.default_kerf
                );
                self.default_kerf
            }
        };

        if let Some(dup) = ext_job.parts.iter().map(|p| p.id).duplicates().next() {
            bail!("part id {dup} is used more than once");
        }

        let parts = ext_job
            .parts
            .iter()
            .map(|ext_part| self.import_part(ext_part))
            .collect::<Result<Vec<_>>>()?;

        for part in &parts {
            let (w, h) = (part.width.saturating_add(kerf), part.height.saturating_add(kerf));
            let fits_fixed = w <= sheet_width && h <= sheet_height;
            let fits_rotated = h <= sheet_width && w <= sheet_height;
            if !fits_fixed && !(part.rotatable && fits_rotated) {
                warn!(
                    "[IMPORT] part {} ({}x{}) does not fit on a {sheet_width}x{sheet_height} sheet with {kerf} mm kerf",
                    part.id, part.width, part.height
                );
            }
        }

        Ok(Job {
            name: ext_job.name.clone(),
            sheet_width,
            sheet_height,
            kerf,
            parts,
        })
    }

    pub fn import_part(&self, ext_part: &ExtPart) -> Result<Part> {
        ensure!(
            ext_part.width > 0 && ext_part.height > 0,
            "part {} has invalid dimensions {}x{}",
            ext_part.id,
            ext_part.width,
            ext_part.height
        );
        ensure!(
            ext_part.quantity > 0,
            "part {} has a quantity of zero",
            ext_part.id
        );
        let id = usize::try_from(ext_part.id)
            .with_context(|| format!("part id {} is out of range", ext_part.id))?;
        Ok(Part::new(
            id,
            ext_part.width,
            ext_part.height,
            ext_part.quantity as usize,
            ext_part.rotatable,
        ))
    }
}
