pub mod directory;
pub mod memory_store;
pub mod merge;
pub mod store;

pub use memory_store::MemoryStore;
pub use merge::{merge_employees, MergeReport};
pub use store::{table_counts, RecordStore, TableCounts};
