//! Lineage - Resolve pedigree trees from breeder records
//!
//! Reconstructs a bounded-depth ancestry tree for one individual from a
//! self-referential record store. Each ancestor is a verified linked record,
//! a declared free-text name, or unknown; revisited records end their branch
//! instead of looping.

pub mod cli;
pub mod config;
pub mod error;
pub mod lineage;
pub mod model;
pub mod output;
pub mod store;

// Re-export main types
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use lineage::{
    classify, should_continue, LineageResolver, NodeKind, NodeState, PedigreeNode,
};
pub use model::{Gender, Individual, Side};
pub use output::{BracketChart, CompactChart, DiagramGenerator};
pub use store::{EntityStore, MemoryStore, RestStore, RestStoreConfig};
