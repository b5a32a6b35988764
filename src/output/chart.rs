// Vertical bracket chart
//
// Lists the tree top-down with box-drawing branches, one line per node:
//
//   Self: ✓ Luna (F) · Lilly White
//   ├── Sire: ✓ Sol (M)
//   │   ├── Paternal Grandsire: ~ Apollo · User Declared
//   │   └── Paternal Granddam: ? Unknown
//   └── Dam: ~ Pearl · User Declared

use super::{position_label, state_marker};
use crate::lineage::{NodeState, PedigreeNode};
use crate::model::Side;

/// Bracket-style text chart
pub struct BracketChart {
    /// Append the record id to linked nodes
    show_ids: bool,
}

impl BracketChart {
    pub fn new() -> Self {
        Self { show_ids: false }
    }

    pub fn with_ids(mut self, show: bool) -> Self {
        self.show_ids = show;
        self
    }

    pub fn render(&self, tree: &PedigreeNode) -> String {
        let mut lines = vec![format!("{}: {}", position_label(&[]), self.describe(tree))];
        let mut path = Vec::new();
        self.children(tree, "", &mut path, &mut lines);
        lines.join("\n")
    }

    fn children(&self, node: &PedigreeNode, prefix: &str, path: &mut Vec<Side>, lines: &mut Vec<String>) {
        let parents: Vec<(Side, &PedigreeNode)> = Side::BOTH
            .iter()
            .filter_map(|&side| node.parent(side).map(|p| (side, p)))
            .collect();

        for (i, (side, parent)) in parents.iter().enumerate() {
            let last = i + 1 == parents.len();
            let (branch, extension) = if last { ("└── ", "    ") } else { ("├── ", "│   ") };

            path.push(*side);
            lines.push(format!(
                "{}{}{}: {}",
                prefix,
                branch,
                position_label(path),
                self.describe(parent)
            ));
            self.children(parent, &format!("{}{}", prefix, extension), path, lines);
            path.pop();
        }
    }

    /// One-line description of a node
    fn describe(&self, node: &PedigreeNode) -> String {
        let marker = state_marker(node.state);
        if node.state == NodeState::Unknown {
            return format!("{} {}", marker, node.name);
        }

        let mut text = format!("{} {}", marker, node.name);
        if node.state != NodeState::Declared {
            text.push_str(&format!(" ({})", node.gender.badge()));
        }
        if !node.morph.is_empty() {
            text.push_str(&format!(" · {}", node.morph));
        }
        if self.show_ids && node.is_linked() {
            text.push_str(&format!(" [{}]", node.id));
        }
        if node.state == NodeState::CycleTerminated {
            text.push_str(" (repeats in its own lineage)");
        }
        text
    }
}

impl Default for BracketChart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Gender, Individual};

    fn sample() -> PedigreeNode {
        let root = Individual::new("l1", "Luna")
            .with_gender(Gender::Female)
            .with_morph("Lilly White");
        let sire = Individual::new("s1", "Sol").with_gender(Gender::Male);
        PedigreeNode::from_individual(&root).with_parents(
            PedigreeNode::from_individual(&sire)
                .with_parents(PedigreeNode::declared("Apollo"), PedigreeNode::unknown()),
            PedigreeNode::declared("Pearl"),
        )
    }

    #[test]
    fn test_render_sample() {
        let chart = BracketChart::new().render(&sample());
        let expected = [
            "Self: ✓ Luna (F) · Lilly White",
            "├── Sire: ✓ Sol (M)",
            "│   ├── Paternal Grandsire: ~ Apollo · User Declared",
            "│   └── Paternal Granddam: ? Unknown",
            "└── Dam: ~ Pearl · User Declared",
        ]
        .join("\n");
        assert_eq!(chart, expected);
    }

    #[test]
    fn test_render_single_node() {
        let node = PedigreeNode::from_individual(&Individual::new("a", "Ares"));
        assert_eq!(BracketChart::new().render(&node), "Self: ✓ Ares (U)");
    }

    #[test]
    fn test_ids_only_for_linked_nodes() {
        let chart = BracketChart::new().with_ids(true).render(&sample());
        assert!(chart.contains("Sol (M) [s1]"));
        assert!(!chart.contains("Pearl · User Declared ["));
    }

    #[test]
    fn test_cycle_node_is_flagged() {
        let ind = Individual::new("a", "Ares");
        let tree = PedigreeNode::from_individual(&ind)
            .with_parents(PedigreeNode::cycle(&ind), PedigreeNode::unknown());
        let chart = BracketChart::new().render(&tree);
        assert!(chart.contains("├── Sire: ↺ Ares (U) (repeats in its own lineage)"));
    }
}
