// src/plot_functions/mod.rs

pub mod plot_histogram;

// src/plot_functions/mod.rs
