// Horizontal compact chart
//
// Root on the left, ancestors to the right; each sire branch is drawn above
// its child and each dam branch below:
//
//                              ┌─ ~ Apollo
//               ┌─ ✓ Sol ──────┤
//               │              └─ ? Unknown
//   ✓ Luna ─────┤
//               └─ ~ Pearl

use super::{state_marker, truncate};
use crate::lineage::PedigreeNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Root,
    Upper,
    Lower,
}

/// Sideways chart with fixed-width name columns
pub struct CompactChart {
    /// Maximum label width per generation column
    width: usize,
}

impl CompactChart {
    pub fn new() -> Self {
        Self { width: 14 }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(4);
        self
    }

    pub fn render(&self, tree: &PedigreeNode) -> String {
        let mut lines = Vec::new();
        self.branch(tree, String::new(), Branch::Root, &mut lines);
        lines.join("\n")
    }

    fn branch(&self, node: &PedigreeNode, indent: String, branch: Branch, lines: &mut Vec<String>) {
        if let Some(sire) = node.sire.as_deref() {
            let child_indent = self.child_indent(&indent, branch, Branch::Upper);
            self.branch(sire, child_indent, Branch::Upper, lines);
        }

        lines.push(self.line(node, &indent, branch));

        if let Some(dam) = node.dam.as_deref() {
            let child_indent = self.child_indent(&indent, branch, Branch::Lower);
            self.branch(dam, child_indent, Branch::Lower, lines);
        }
    }

    /// Indent for a parent's rows. The column under this node's own glyph
    /// carries a bar wherever the parent sits between this node and its child.
    fn child_indent(&self, indent: &str, branch: Branch, child: Branch) -> String {
        let bar = match (branch, child) {
            (Branch::Root, _) => return " ".repeat(self.width + 2),
            (Branch::Upper, Branch::Lower) | (Branch::Lower, Branch::Upper) => '│',
            _ => ' ',
        };
        format!("{}{}{}", indent, bar, " ".repeat(self.width + 4))
    }

    fn line(&self, node: &PedigreeNode, indent: &str, branch: Branch) -> String {
        let glyph = match branch {
            Branch::Root => "",
            Branch::Upper => "┌─ ",
            Branch::Lower => "└─ ",
        };

        let label = truncate(
            &format!("{} {}", state_marker(node.state), node.name),
            self.width,
        );

        let corner = match (node.sire.is_some(), node.dam.is_some()) {
            (true, true) => Some('┤'),
            (true, false) => Some('┘'),
            (false, true) => Some('┐'),
            (false, false) => None,
        };

        match corner {
            Some(corner) => {
                let fill = self.width - label.chars().count() + 1;
                format!("{}{}{} {}{}", indent, glyph, label, "─".repeat(fill), corner)
            }
            None => format!("{}{}{}", indent, glyph, label),
        }
    }
}

impl Default for CompactChart {
    fn default() -> Self {
        Self::new()
    }
}
