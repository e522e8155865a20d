pub mod builtin;
pub mod table;

pub use builtin::{CURRENT_YEAR, NEXT_YEAR};
pub use table::{RateTable, RateTableError, UnsupportedYearError};
