pub mod entry;
pub mod priority;
pub mod tables;

pub use entry::*;
pub use priority::*;
pub use tables::*;
