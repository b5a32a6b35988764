// Pedigree resolution: tree nodes, slot classification, recursion guard and
// the resolver tying them to a store

pub mod classify;
pub mod guard;
pub mod integrity;
pub mod node;
pub mod resolver;

pub use classify::{classify, NodeKind};
pub use guard::{should_continue, Verdict};
pub use integrity::{audit, IntegrityReport};
pub use node::{NodeState, PedigreeNode, DECLARED_MORPH, UNKNOWN_NAME};
pub use resolver::{LineageResolver, DEFAULT_MAX_DEPTH};
