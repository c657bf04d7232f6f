//! Graph validation logic.

use std::collections::HashSet;

use crate::error::GraphError;
use crate::graph::{Graph, InstanceId, ModuleInstance, SystemTag};
use crate::path::joins_several;

/// Validate the module set: non-empty, unique instance ids.
pub(crate) fn validate_structure(modules: &[ModuleInstance]) -> Result<(), GraphError> {
    if modules.is_empty() {
        return Err(GraphError::Empty);
    }

    let mut seen = HashSet::with_capacity(modules.len());
    for m in modules {
        if !seen.insert(m.instance_id) {
            return Err(GraphError::DuplicateInstance { id: m.instance_id });
        }
    }

    Ok(())
}

/// Port-level findings that the authoring surface is expected to prevent.
///
/// None of these stop a solve; they explain degraded path extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortReport {
    /// Modules with more than one outgoing connection.
    pub fan_out: Vec<InstanceId>,
    /// Modules other than tanks and tees with more than one incoming connection.
    pub fan_in: Vec<InstanceId>,
    /// Connection ids with a missing endpoint.
    pub dangling: Vec<String>,
    /// Modules whose `system` value is not a known system tag.
    pub unknown_systems: Vec<InstanceId>,
}

impl PortReport {
    pub fn is_clean(&self) -> bool {
        self.fan_out.is_empty()
            && self.fan_in.is_empty()
            && self.dangling.is_empty()
            && self.unknown_systems.is_empty()
    }
}

/// Inspect a built graph for single-connection port violations.
///
/// Tanks are allowed several outgoing connections (one suction port per pump)
/// and tanks and tees several incoming ones (merging returns).
pub fn port_report(graph: &Graph) -> PortReport {
    let mut incoming = vec![0usize; graph.modules.len()];
    for &t in &graph.out_targets {
        incoming[t] += 1;
    }

    let mut report = PortReport::default();
    for (i, m) in graph.modules.iter().enumerate() {
        let outgoing = graph.out_offsets[i + 1] - graph.out_offsets[i];
        if outgoing > 1 && !joins_several(m) {
            report.fan_out.push(m.instance_id);
        }
        if incoming[i] > 1 && !joins_several(m) {
            report.fan_in.push(m.instance_id);
        }
        if let Some(name) = &m.system_name {
            if SystemTag::parse(name).is_none() {
                report.unknown_systems.push(m.instance_id);
            }
        }
    }
    report.dangling = graph
        .dangling_connections()
        .map(|c| c.id.clone())
        .collect();
    report
}
