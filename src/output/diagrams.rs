// Diagram generation for pedigree trees
//
// Generates Mermaid flowcharts with one node per pedigree entry and an edge
// from each child to its sire and dam.

use crate::lineage::{NodeState, PedigreeNode};
use crate::model::Side;

/// Diagram generator for creating Mermaid diagrams
pub struct DiagramGenerator {
    /// Layout direction (TB, LR, BT, RL)
    direction: String,
}

impl DiagramGenerator {
    /// Create a new diagram generator
    pub fn new() -> Self {
        Self {
            direction: "LR".to_string(),
        }
    }

    /// Set layout direction
    pub fn with_direction(mut self, dir: &str) -> Self {
        self.direction = dir.to_string();
        self
    }

    /// Generate a pedigree flowchart
    pub fn generate_pedigree(&self, tree: &PedigreeNode) -> String {
        let mut lines = Vec::new();
        lines.push(format!("graph {}", self.direction));

        let mut edges = Vec::new();
        let mut next_id = 0;
        self.add_node(tree, &mut next_id, &mut lines, &mut edges);

        lines.extend(edges);
        lines.push("    classDef verified stroke:#D4AF37,stroke-width:2px".to_string());
        lines.push("    classDef declared stroke:#71717a,stroke-dasharray:5 5".to_string());
        lines.push("    classDef unknown stroke:#3f3f46,stroke-dasharray:5 5,color:#71717a".to_string());
        lines.push("    classDef cycle stroke:#b91c1c,stroke-dasharray:2 2".to_string());

        lines.join("\n")
    }

    /// Emit a node and its ancestors; returns the Mermaid id used
    fn add_node(
        &self,
        node: &PedigreeNode,
        next_id: &mut usize,
        lines: &mut Vec<String>,
        edges: &mut Vec<String>,
    ) -> String {
        let id = format!("n{}", next_id);
        *next_id += 1;

        lines.push(format!(
            "    {}[\"{}\"]:::{}",
            id,
            node_label(node),
            state_class(node.state)
        ));

        for side in Side::BOTH {
            if let Some(parent) = node.parent(side) {
                let parent_id = self.add_node(parent, next_id, lines, edges);
                edges.push(format!("    {} -->|{}| {}", id, side, parent_id));
            }
        }

        id
    }
}

impl Default for DiagramGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn node_label(node: &PedigreeNode) -> String {
    let name = escape_label(&node.name);
    if node.morph.is_empty() {
        name
    } else {
        format!("{}<br/>{}", name, escape_label(&node.morph))
    }
}

fn state_class(state: NodeState) -> &'static str {
    match state {
        NodeState::Verified => "verified",
        NodeState::Declared => "declared",
        NodeState::Unknown => "unknown",
        NodeState::CycleTerminated => "cycle",
    }
}

/// Escape characters Mermaid treats specially inside quoted labels
fn escape_label(s: &str) -> String {
    s.replace('"', "#quot;")
        .replace('<', "#lt;")
        .replace('>', "#gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Individual;

    #[test]
    fn test_escape_label() {
        assert_eq!(escape_label("Mango"), "Mango");
        assert_eq!(escape_label("\"Big\" <Red>"), "#quot;Big#quot; #lt;Red#gt;");
    }

    #[test]
    fn test_diagram_generator_new() {
        let gen = DiagramGenerator::new();
        assert_eq!(gen.direction, "LR");
    }

    #[test]
    fn test_with_direction() {
        let gen = DiagramGenerator::new().with_direction("TB");
        assert_eq!(gen.direction, "TB");
    }

    #[test]
    fn test_generate_pedigree() {
        let root = Individual::new("l1", "Luna").with_morph("Lilly White");
        let tree = PedigreeNode::from_individual(&root)
            .with_parents(PedigreeNode::declared("Apollo"), PedigreeNode::unknown());

        let diagram = DiagramGenerator::new().generate_pedigree(&tree);
        let lines: Vec<&str> = diagram.lines().collect();

        assert_eq!(lines[0], "graph LR");
        assert_eq!(lines[1], "    n0[\"Luna<br/>Lilly White\"]:::verified");
        assert_eq!(lines[2], "    n1[\"Apollo<br/>User Declared\"]:::declared");
        assert_eq!(lines[3], "    n2[\"Unknown\"]:::unknown");
        assert!(diagram.contains("    n0 -->|sire| n1"));
        assert!(diagram.contains("    n0 -->|dam| n2"));
        assert!(diagram.contains("classDef cycle"));
    }
}
