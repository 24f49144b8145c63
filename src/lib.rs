mod cache;
mod errors;
mod memo;
mod sum_calculator;
mod tree;
mod types;
mod workload;

pub use cache::*;
pub use errors::*;
pub use memo::*;
pub use sum_calculator::*;
pub use tree::*;
pub use types::*;
pub use workload::*;
