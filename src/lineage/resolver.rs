// Recursive pedigree resolution
//
// Depth counts edges from the root: the root sits at depth 0 and nodes at
// `max_depth` are returned without ancestors.

use super::classify::{classify, unlinked_leaf, NodeKind};
use super::guard::{self, Verdict};
use super::node::PedigreeNode;
use crate::error::{Error, Result};
use crate::model::{Individual, Side};
use crate::store::EntityStore;
use log::{debug, warn};

/// Default number of ancestor generations resolved: parents and grandparents
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// The chain of records from the root down to the node being expanded
struct Trail<'a> {
    individual: &'a Individual,
    child: Option<&'a Trail<'a>>,
}

impl<'a> Trail<'a> {
    fn iter(&'a self) -> impl Iterator<Item = &'a Individual> + 'a {
        std::iter::successors(Some(self), |t| t.child).map(|t| t.individual)
    }

    fn ids(&'a self) -> impl Iterator<Item = &'a str> + 'a {
        self.iter().map(|ind| ind.id.as_str())
    }

    fn find(&'a self, id: &str) -> Option<&'a Individual> {
        self.iter().find(|ind| ind.id == id)
    }
}

/// Builds pedigree trees from an injected [`EntityStore`]
pub struct LineageResolver<S> {
    store: S,
    parallel: bool,
}

impl<S: EntityStore> LineageResolver<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            parallel: true,
        }
    }

    /// Resolve sire and dam branches on the rayon pool (default) or in turn
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve the pedigree of `root_id` up to `max_depth` ancestor
    /// generations.
    ///
    /// Only the root is mandatory: if it cannot be fetched the call fails and
    /// no ancestor is looked up. Ancestors that cannot be fetched become
    /// `Unknown` nodes.
    pub fn resolve(&self, root_id: &str, max_depth: usize) -> Result<PedigreeNode> {
        if max_depth == 0 {
            return Err(Error::InvalidDepth(max_depth));
        }

        let root = self.store.fetch_by_id(root_id)?;
        debug!("Resolving pedigree of '{}' to depth {}", root.id, max_depth);

        Ok(self.expand(&root, 0, max_depth, None))
    }

    fn expand(
        &self,
        individual: &Individual,
        depth: usize,
        max_depth: usize,
        below: Option<&Trail<'_>>,
    ) -> PedigreeNode {
        let node = PedigreeNode::from_individual(individual);
        if depth >= max_depth {
            return node;
        }

        if individual.has_shared_parent_link() {
            warn!(
                "'{}' lists the same record as sire and dam; resolving both as stored",
                individual.id
            );
        }

        let trail = Trail {
            individual,
            child: below,
        };

        let (sire, dam) = if self.parallel {
            rayon::join(
                || self.parent(Side::Sire, &trail, depth, max_depth),
                || self.parent(Side::Dam, &trail, depth, max_depth),
            )
        } else {
            (
                self.parent(Side::Sire, &trail, depth, max_depth),
                self.parent(Side::Dam, &trail, depth, max_depth),
            )
        };

        node.with_parents(sire, dam)
    }

    /// Resolve one parental slot of the record at the head of `trail`
    fn parent(&self, side: Side, trail: &Trail<'_>, depth: usize, max_depth: usize) -> PedigreeNode {
        let child = trail.individual;
        let link = child.parent_link(side);
        let declared = child.declared_parent(side);

        match (classify(link.is_some(), declared), link) {
            (NodeKind::Verified, Some(id)) => self.linked(id, side, trail, depth, max_depth),
            (kind, _) => unlinked_leaf(kind, declared).unwrap_or_else(PedigreeNode::unknown),
        }
    }

    fn linked(
        &self,
        id: &str,
        side: Side,
        trail: &Trail<'_>,
        depth: usize,
        max_depth: usize,
    ) -> PedigreeNode {
        match guard::inspect(trail.ids(), id, depth, max_depth) {
            Verdict::Continue => {}
            Verdict::Cycle => {
                warn!(
                    "Ancestry cycle: {} of '{}' is '{}', which already appears in its own lineage",
                    side, trail.individual.id, id
                );
                return match trail.find(id) {
                    Some(ancestor) => PedigreeNode::cycle(ancestor),
                    None => PedigreeNode::unknown(),
                };
            }
            Verdict::DepthExhausted => return PedigreeNode::unknown(),
        }

        match self.store.fetch_by_id(id) {
            Ok(parent) => self.expand(&parent, depth + 1, max_depth, Some(trail)),
            Err(e) => {
                warn!(
                    "Cannot read {} '{}' of '{}', recording it as unknown: {}",
                    side, id, trail.individual.id, e
                );
                PedigreeNode::unknown()
            }
        }
    }
}
