#![forbid(unsafe_code)]

mod stats;
mod tracing_setup;

pub use stats::{DegreeHistogram, NetworkStats};
pub use tracing_setup::init_tracing;
