use serde::{Deserialize, Serialize};

/// Configuration for the BSSF executable
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BSSFConfig {
    /// Blade width in mm, used for jobs that do not specify a kerf
    pub default_kerf: u32,
    /// Additional kerf values to pack the job with, for comparison. Empty to disable
    #[serde(default)]
    pub kerf_variants: Vec<u32>,
}

impl Default for BSSFConfig {
    fn default() -> Self {
        Self {
            default_kerf: 3,
            kerf_variants: vec![],
        }
    }
}
