pub mod filter;
pub mod store;
pub mod structs;

pub use filter::FilterEngine;
pub use store::SnapshotStore;
pub use structs::NewsItem;
