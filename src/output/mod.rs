// Output generation module
//
// Renderers only read the resolved tree. Nodes with an empty id are never
// looked up again; `verified` and the node state only change how a node is
// drawn.

pub mod chart;
pub mod compact;
pub mod diagrams;

pub use chart::*;
pub use compact::*;
pub use diagrams::*;

use crate::config::OutputFormat;
use crate::error::Result;
use crate::lineage::{NodeState, PedigreeNode};
use crate::model::Side;

/// Render a tree in the requested format
pub fn render(tree: &PedigreeNode, format: OutputFormat) -> Result<String> {
    let out = match format {
        OutputFormat::Tree => BracketChart::new().render(tree),
        OutputFormat::Compact => CompactChart::new().render(tree),
        OutputFormat::Mermaid => DiagramGenerator::new().generate_pedigree(tree),
        OutputFormat::Json => serde_json::to_string_pretty(tree)?,
    };
    Ok(out)
}

/// Marker drawn next to a node for its state
pub fn state_marker(state: NodeState) -> char {
    match state {
        NodeState::Verified => '✓',
        NodeState::Declared => '~',
        NodeState::Unknown => '?',
        NodeState::CycleTerminated => '↺',
    }
}

/// Human label for a position, given the sides taken from the root
pub fn position_label(path: &[Side]) -> String {
    let (first, last) = match (path.first(), path.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return "Self".to_string(),
    };

    let parent = match last {
        Side::Sire => "sire",
        Side::Dam => "dam",
    };

    if path.len() == 1 {
        return match last {
            Side::Sire => "Sire".to_string(),
            Side::Dam => "Dam".to_string(),
        };
    }

    let line = match first {
        Side::Sire => "Paternal",
        Side::Dam => "Maternal",
    };

    match path.len() - 2 {
        0 => format!("{} Grand{}", line, parent),
        1 => format!("{} Great-Grand{}", line, parent),
        greats => format!("{} {}x Great-Grand{}", line, greats, parent),
    }
}

/// Cut `s` to at most `max` characters, marking the cut with an ellipsis
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}
