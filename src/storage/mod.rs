//! Catalog snapshot storage

pub mod catalog;
pub mod snapshot;

pub use catalog::{Catalog, CatalogStats};
pub use snapshot::{Embeddings, Snapshot};
