pub mod fix;
pub mod flight;
pub mod pilot;
pub mod report;

pub use fix::*;
pub use flight::*;
pub use pilot::*;
pub use report::*;
