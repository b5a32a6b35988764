// Three-way classification of a parental slot

use super::node::PedigreeNode;
use serde::{Deserialize, Serialize};

/// What a parental slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Verified,
    Declared,
    Unknown,
}

/// Classify a slot from whether it carries a link and what name it declares.
///
/// A link always wins. Without one, a non-blank declared name makes the slot
/// `Declared`; an absent, empty or whitespace name makes it `Unknown`.
pub fn classify(has_link: bool, declared_name: Option<&str>) -> NodeKind {
    if has_link {
        return NodeKind::Verified;
    }
    match declared_name.map(str::trim) {
        Some(name) if !name.is_empty() => NodeKind::Declared,
        _ => NodeKind::Unknown,
    }
}

/// Leaf node for an unlinked slot. Returns `None` for `Verified`, which needs
/// a stored record to build.
pub fn unlinked_leaf(kind: NodeKind, declared_name: Option<&str>) -> Option<PedigreeNode> {
    match kind {
        NodeKind::Verified => None,
        NodeKind::Declared => declared_name
            .map(str::trim)
            .map(PedigreeNode::declared),
        NodeKind::Unknown => Some(PedigreeNode::unknown()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lineage::node::NodeState;

    #[test]
    fn test_truth_table() {
        assert_eq!(classify(true, Some("Apollo")), NodeKind::Verified);
        assert_eq!(classify(true, None), NodeKind::Verified);
        assert_eq!(classify(false, Some("Apollo")), NodeKind::Declared);
        assert_eq!(classify(false, None), NodeKind::Unknown);
    }

    #[test]
    fn test_blank_names_are_unknown() {
        assert_eq!(classify(false, Some("")), NodeKind::Unknown);
        assert_eq!(classify(false, Some("   ")), NodeKind::Unknown);
    }

    #[test]
    fn test_unlinked_leaf_declared() {
        let leaf = unlinked_leaf(NodeKind::Declared, Some(" Pearl ")).unwrap();
        assert_eq!(leaf.name, "Pearl");
        assert_eq!(leaf.state, NodeState::Declared);
    }

    #[test]
    fn test_unlinked_leaf_unknown() {
        let leaf = unlinked_leaf(NodeKind::Unknown, None).unwrap();
        assert_eq!(leaf.state, NodeState::Unknown);
        assert_eq!(leaf.name, "Unknown");
    }

    #[test]
    fn test_unlinked_leaf_verified_needs_record() {
        assert!(unlinked_leaf(NodeKind::Verified, Some("x")).is_none());
    }
}
