pub mod aggregate;
pub mod candidates;
pub mod pairing;
pub mod runner;
pub mod triples;

pub use aggregate::*;
pub use candidates::*;
pub use pairing::*;
pub use runner::*;
pub use triples::*;
