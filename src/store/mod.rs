pub mod inventory;
pub mod relic;

pub use inventory::*;
pub use relic::*;
