// src/config/consts.rs

// Where the bundled/generated fight CSVs live
pub const DATA_DIR: &str = "data";

// Local scratch (debug log)
pub const STORE_DIR: &str = ".store";

// Export defaults
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_EXPORT_STEM: &str = "aggregates";

// Synthetic generator defaults
pub const DEFAULT_GEN_FILE: &str = "boxing_match_data.csv";
pub const DEFAULT_GEN_ROUNDS: u32 = 12;
pub const DEFAULT_GEN_BOXER_A: &str = "Lightning Lewis";
pub const DEFAULT_GEN_BOXER_B: &str = "Thunder Thompson";
