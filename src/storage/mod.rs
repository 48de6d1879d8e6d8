pub mod engine;
pub mod memory;

pub use engine::{DocumentStore, fetch_snapshot};
pub use memory::InMemoryStore;
