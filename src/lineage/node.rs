// Resolved pedigree tree nodes

use crate::model::{Gender, Individual, Side};
use serde::{Deserialize, Serialize};

/// Morph label shown for a parent known only by a declared name
pub const DECLARED_MORPH: &str = "User Declared";
/// Display name for a parent with neither link nor declared name
pub const UNKNOWN_NAME: &str = "Unknown";

/// Terminal state a node was resolved into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeState {
    /// Built from a linked, stored record
    Verified,
    /// Free-text parent name with no backing record
    Declared,
    /// Nothing recorded, or the linked record could not be read
    Unknown,
    /// Linked record that already appears further down its own lineage
    CycleTerminated,
}

/// One node of a resolved pedigree.
///
/// Trees are built fresh per resolution and never mutated afterwards.
/// `sire` and `dam` are always either absent or fully built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedigreeNode {
    /// Empty when no stored record backs the node
    pub id: String,
    pub name: String,
    pub morph: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    pub verified: bool,
    pub state: NodeState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manual_name: Option<String>,
    #[serde(default)]
    pub sire: Option<Box<PedigreeNode>>,
    #[serde(default)]
    pub dam: Option<Box<PedigreeNode>>,
}

impl PedigreeNode {
    /// Verified node from a stored record, without ancestors
    pub fn from_individual(individual: &Individual) -> Self {
        Self {
            id: individual.id.clone(),
            name: individual.name.clone(),
            morph: individual.morph.clone(),
            gender: individual.gender,
            image_ref: individual.image_ref.clone(),
            verified: true,
            state: NodeState::Verified,
            manual_name: None,
            sire: None,
            dam: None,
        }
    }

    /// Leaf for a parent known only by name
    pub fn declared(name: &str) -> Self {
        Self {
            id: String::new(),
            name: name.to_string(),
            morph: DECLARED_MORPH.to_string(),
            gender: Gender::Unknown,
            image_ref: None,
            verified: false,
            state: NodeState::Declared,
            manual_name: Some(name.to_string()),
            sire: None,
            dam: None,
        }
    }

    /// Leaf for a parent nothing is known about
    pub fn unknown() -> Self {
        Self {
            id: String::new(),
            name: UNKNOWN_NAME.to_string(),
            morph: String::new(),
            gender: Gender::Unknown,
            image_ref: None,
            verified: false,
            state: NodeState::Unknown,
            manual_name: None,
            sire: None,
            dam: None,
        }
    }

    /// Terminal stand-in for a record revisited along its own lineage
    pub fn cycle(individual: &Individual) -> Self {
        Self {
            state: NodeState::CycleTerminated,
            ..Self::from_individual(individual)
        }
    }

    pub fn with_parents(mut self, sire: PedigreeNode, dam: PedigreeNode) -> Self {
        self.sire = Some(Box::new(sire));
        self.dam = Some(Box::new(dam));
        self
    }

    pub fn parent(&self, side: Side) -> Option<&PedigreeNode> {
        match side {
            Side::Sire => self.sire.as_deref(),
            Side::Dam => self.dam.as_deref(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.sire.is_none() && self.dam.is_none()
    }

    /// True when the node names a stored record that can be navigated to
    pub fn is_linked(&self) -> bool {
        !self.id.is_empty()
    }

    /// Edges on the longest path from this node to a leaf
    pub fn generations(&self) -> usize {
        Side::BOTH
            .iter()
            .filter_map(|&side| self.parent(side))
            .map(|p| p.generations() + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        1 + Side::BOTH
            .iter()
            .filter_map(|&side| self.parent(side))
            .map(PedigreeNode::node_count)
            .sum::<usize>()
    }

    /// Number of nodes in the tree with the given state
    pub fn count_state(&self, state: NodeState) -> usize {
        let mut count = 0;
        self.walk(&mut |node, _| {
            if node.state == state {
                count += 1;
            }
        });
        count
    }

    /// Pre-order traversal, sire branch first. The callback receives each
    /// node with the sides taken from the root to reach it.
    pub fn walk<F>(&self, f: &mut F)
    where
        F: FnMut(&PedigreeNode, &[Side]),
    {
        let mut path = Vec::new();
        self.walk_inner(&mut path, f);
    }

    fn walk_inner<F>(&self, path: &mut Vec<Side>, f: &mut F)
    where
        F: FnMut(&PedigreeNode, &[Side]),
    {
        f(self, path);
        for side in Side::BOTH {
            if let Some(parent) = self.parent(side) {
                path.push(side);
                parent.walk_inner(path, f);
                path.pop();
            }
        }
    }
}
