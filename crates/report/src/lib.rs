mod format;
mod rank;

pub use format::{human_size, simple_date};
pub use rank::{SIZE_DECIMALS, SortMode, by_atime, by_size, write_report};
