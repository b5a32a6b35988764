//! Whole-store ancestry audit.
//!
//! The resolver tolerates malformed ancestry; this module finds it. Records
//! are loaded into a directed graph (child -> parent) and checked for
//! cycles, shared sire/dam links, dangling links and gender mismatches.

use crate::model::{Gender, Individual, Side};
use log::warn;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use std::collections::HashMap;

/// A link from a record to a parent id that is not stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingLink {
    pub child: String,
    pub side: Side,
    pub parent: String,
}

/// A parent link whose target has the opposite recorded gender
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderMismatch {
    pub child: String,
    pub side: Side,
    pub parent: String,
}

/// Findings of an ancestry audit
#[derive(Debug, Clone, Default, Serialize)]
pub struct IntegrityReport {
    pub records: usize,
    /// Groups of ids that are ancestors of themselves, each sorted
    pub cycles: Vec<Vec<String>>,
    /// Records linking the same id as sire and dam
    pub shared_parents: Vec<String>,
    pub dangling: Vec<DanglingLink>,
    pub gender_mismatches: Vec<GenderMismatch>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.cycles.is_empty()
            && self.shared_parents.is_empty()
            && self.dangling.is_empty()
            && self.gender_mismatches.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} records: {} cycles, {} shared sire/dam links, {} dangling links, {} gender mismatches",
            self.records,
            self.cycles.len(),
            self.shared_parents.len(),
            self.dangling.len(),
            self.gender_mismatches.len()
        )
    }
}

/// Audit a set of records
pub fn audit<'a>(records: impl IntoIterator<Item = &'a Individual>) -> IntegrityReport {
    let records: Vec<&Individual> = records.into_iter().collect();
    let mut report = IntegrityReport {
        records: records.len(),
        ..Default::default()
    };

    let mut graph: DiGraph<&str, Side> = DiGraph::new();
    let mut index: HashMap<&str, NodeIndex> = HashMap::new();
    let mut by_id: HashMap<&str, &Individual> = HashMap::new();

    for record in &records {
        index.insert(record.id.as_str(), graph.add_node(record.id.as_str()));
        by_id.insert(record.id.as_str(), *record);
    }

    for record in &records {
        if record.has_shared_parent_link() {
            report.shared_parents.push(record.id.clone());
        }

        for side in Side::BOTH {
            let Some(parent_id) = record.parent_link(side) else {
                continue;
            };

            let Some(&parent_idx) = index.get(parent_id) else {
                report.dangling.push(DanglingLink {
                    child: record.id.clone(),
                    side,
                    parent: parent_id.to_string(),
                });
                continue;
            };

            graph.add_edge(index[record.id.as_str()], parent_idx, side);

            let parent = by_id[parent_id];
            if parent.gender != side.expected_gender() && parent.gender != Gender::Unknown {
                report.gender_mismatches.push(GenderMismatch {
                    child: record.id.clone(),
                    side,
                    parent: parent_id.to_string(),
                });
            }
        }
    }

    for component in tarjan_scc(&graph) {
        let is_cycle = component.len() > 1
            || graph.contains_edge(component[0], component[0]);
        if is_cycle {
            let mut ids: Vec<String> = component.iter().map(|&n| graph[n].to_string()).collect();
            ids.sort();
            warn!("Ancestry cycle between {}", ids.join(", "));
            report.cycles.push(ids);
        }
    }

    report.cycles.sort();
    report.shared_parents.sort();
    report
}
