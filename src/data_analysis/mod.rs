// src/data_analysis/mod.rs

pub mod histogram;

// src/data_analysis/mod.rs
