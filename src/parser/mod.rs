pub mod header;
pub mod helpers;
pub mod igc;

pub use header::*;
pub use igc::*;
