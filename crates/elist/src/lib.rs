mod list;

pub use list::{DEFAULT_INIT_SZ, EList, ElistError, RESIZE_MULTIPLIER};
