pub const PROGRAM_NAME: &str = "dutop";

/// Environment variable controlling the stderr log level (default: warn).
pub const PROGRAM_LOG_LEVEL: &str = "DUTOP_LOG_LEVEL";
