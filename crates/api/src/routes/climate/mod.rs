pub mod precipitation;
pub mod range_stats;
pub mod stations;
pub mod tobs;

pub use precipitation::*;
pub use range_stats::*;
pub use stations::*;
pub use tobs::*;
