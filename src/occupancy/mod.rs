mod analyzer;

pub use analyzer::{OccupancyReport, analyze, count_cavities, fullness};
