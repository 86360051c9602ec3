pub mod initialize;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;
