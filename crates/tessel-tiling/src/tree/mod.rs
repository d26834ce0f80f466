mod queries;
mod types;

pub use types::*;
