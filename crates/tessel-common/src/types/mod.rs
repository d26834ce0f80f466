mod apps;
mod geometry;

pub use apps::*;
pub use geometry::*;
