use crate::config::BSSFConfig;
use panelcut::entities::PackResult;
use panelcut::io::ext_repr::{ExtJob, ExtPackSolution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct BSSFOutput {
    #[serde(flatten)]
    pub job: ExtJob,
    pub solution: ExtPackSolution,
    pub config: BSSFConfig,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub kerf_comparison: Vec<KerfComparison>,
}

/// Summary of packing the same job with a different kerf
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KerfComparison {
    pub kerf: u32,
    pub n_sheets: usize,
    pub total_efficiency: f64,
    pub total_cuts: usize,
    pub n_unplaced: usize,
}

impl KerfComparison {
    pub fn new(kerf: u32, result: &PackResult) -> Self {
        KerfComparison {
            kerf,
            n_sheets: result.n_sheets(),
            total_efficiency: result.total_efficiency(),
            total_cuts: result.total_cuts(),
            n_unplaced: result.unplaced.len(),
        }
    }
}
