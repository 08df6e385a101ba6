// crates/shared-kernel/src/value_objects/mod.rs
pub mod counters;
pub mod counts;
pub mod records;

pub use counters::ProcessingCounters;
pub use counts::{ByteSize, LineCount};
pub use records::{IncludeWarning, IncludedFileRecord, InvalidVariableRecord};
