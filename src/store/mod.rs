// Record stores the resolver reads individuals from

mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::{RestStore, RestStoreConfig};

use crate::error::Result;
use crate::model::Individual;
use std::sync::Arc;

/// Keyed point lookups over stored individuals.
///
/// Implementations must be safe to share across threads: the resolver may
/// fetch the sire and dam branches concurrently. A missing record is
/// reported as [`Error::NotFound`](crate::Error::NotFound); anything else the
/// backend fails with is a store error.
pub trait EntityStore: Send + Sync {
    fn fetch_by_id(&self, id: &str) -> Result<Individual>;
}

impl<S: EntityStore + ?Sized> EntityStore for &S {
    fn fetch_by_id(&self, id: &str) -> Result<Individual> {
        (**self).fetch_by_id(id)
    }
}

impl<S: EntityStore + ?Sized> EntityStore for Box<S> {
    fn fetch_by_id(&self, id: &str) -> Result<Individual> {
        (**self).fetch_by_id(id)
    }
}

impl<S: EntityStore + ?Sized> EntityStore for Arc<S> {
    fn fetch_by_id(&self, id: &str) -> Result<Individual> {
        (**self).fetch_by_id(id)
    }
}
