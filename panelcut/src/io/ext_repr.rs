use serde::{Deserialize, Serialize};

/// External representation of a [`Job`](crate::entities::Job).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtJob {
    /// The name of the job
    pub name: String,
    /// Dimensions of the board, before edge trimming
    pub sheet: ExtSheetSpec,
    /// Blade width in mm. Falls back to the importer's default if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub kerf: Option<u32>,
    /// Margin in mm trimmed off every side of the board before packing
    #[serde(default)]
    pub edge_trim: u32,
    /// Parts to be cut, in order of submission
    pub parts: Vec<ExtPart>,
}

/// Dimensions of a board
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct ExtSheetSpec {
    pub width: u32,
    pub height: u32,
}

/// External representation of a [`Part`](crate::entities::Part).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPart {
    /// Unique identifier of the part
    pub id: u64,
    pub width: u32,
    pub height: u32,
    /// Amount of pieces to cut
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Whether the part may be turned 90°, set to false for parts with a grain direction
    #[serde(default = "default_rotatable")]
    pub rotatable: bool,
}

fn default_quantity() -> u32 {
    1
}

fn default_rotatable() -> bool {
    true
}

/// External representation of a [`PackResult`](crate::entities::PackResult).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPackSolution {
    /// Sheets used, in the order they were opened
    pub sheets: Vec<ExtSheet>,
    /// Pieces that could not be placed on any sheet
    pub unplaced: Vec<ExtUnplacedPiece>,
    /// Number of sheets used
    pub n_sheets: usize,
    /// Sum of the area of the placed pieces divided by the sum of the area of the sheets used, in percent
    pub total_efficiency: f64,
    /// Sum of the cutting counts of all sheets
    pub total_cuts: usize,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}

/// External representation of a [`Sheet`](crate::entities::Sheet).
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSheet {
    /// Usable width of the sheet
    pub width: u32,
    /// Usable height of the sheet
    pub height: u32,
    pub kerf: u32,
    /// The pieces placed on the sheet and where they were placed
    pub placed_pieces: Vec<ExtPlacedPiece>,
    /// Number of free-region fragments emitted while packing this sheet
    pub cutting_count: usize,
    /// Number of distinct lines along which free regions were split
    pub distinct_cut_lines: usize,
    /// Area covered by pieces as a percentage of the sheet area
    pub efficiency: f64,
}

/// External representation of a [`PlacedPiece`](crate::entities::PlacedPiece).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtPlacedPiece {
    /// The id of the part in the job
    pub part_id: u64,
    pub x: u32,
    pub y: u32,
    /// Width on the sheet, after rotation
    pub width: u32,
    /// Height on the sheet, after rotation
    pub height: u32,
    pub rotated: bool,
}

/// A piece which could not be placed
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtUnplacedPiece {
    /// The id of the part in the job
    pub part_id: u64,
    pub width: u32,
    pub height: u32,
}
