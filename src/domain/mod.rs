pub mod benchmark;
pub mod chart;
pub mod errors;
pub mod logging;
