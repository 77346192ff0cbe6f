pub mod client;
pub mod error;

pub use client::{HttpTaskSync, TaskSync};
pub use error::SyncError;
