// src/data_input/mod.rs

pub mod series_parser;

// src/data_input/mod.rs
