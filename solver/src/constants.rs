/// Body length of the snake drawn over a contribution calendar
pub const DEFAULT_BODY_LENGTH: usize = 4;

/// Highest contribution level produced by the upstream calendar quantizer
pub const MAX_LEVEL: u8 = 4;

/// Columns in one year of contribution data
pub const CALENDAR_WEEKS: u16 = 53;

/// Rows in one year of contribution data
pub const CALENDAR_DAYS: u16 = 7;

/// Default cap on the poses a single path search may create
pub const DEFAULT_MAX_SEARCH_STATES: usize = 250_000;

/// Default cap on the length of an assembled chain
pub const DEFAULT_MAX_CHAIN_LEN: usize = 20_000;
