mod calculation;
pub mod reserved;
mod types;

pub use types::*;
