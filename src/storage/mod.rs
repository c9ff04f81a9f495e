//! Storage layer: the stat-row provider behind the engine
//!
//! - `feed`: decoding of JSON feeds into typed rows
//! - `schema`: database connection and schema management
//! - `queries`: insert and load operations

pub mod feed;
pub mod queries;
pub mod schema;


pub use feed::{decode_rows, read_feed};
pub use queries::WriteSummary;
pub use schema::StatsDatabase;
