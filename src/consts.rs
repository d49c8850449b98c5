/// Number of slots in one DMX512 universe (start code excluded).
pub const DMX_UNIVERSE_SIZE: usize = 512;
/// Same as [DMX_UNIVERSE_SIZE] but in the unit used for addresses and footprints.
pub const DMX_MAX_ADDRESS: u16 = 512;

pub const DMX_DEFAULT_START_ADDRESS: u16 = 1;
pub const DMX_DEFAULT_FOOTPRINT: u16 = 32;

pub const GRID_ROWS: usize = 16;
pub const GRID_COLUMNS: usize = 32;
/// Console row the grid header is printed on. The data rows follow directly below.
pub const GRID_DEFAULT_TOP_ROW: u8 = 3;
/// Highest header row that still leaves room for all data rows below it.
pub const GRID_MAX_TOP_ROW: u8 = u8::MAX - GRID_ROWS as u8;
/// Width of the left-edge slot index gutter, including the separating space.
pub const GRID_GUTTER_WIDTH: u8 = 4;
/// Cells brighter than this get a black foreground to stay readable.
pub const GRID_BRIGHTNESS_THRESHOLD: u8 = 92;

pub const PLACEHOLDER: &str = "--";
