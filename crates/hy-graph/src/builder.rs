//! Incremental graph builder.

use std::collections::HashMap;

use tracing::warn;

use crate::error::GraphError;
use crate::graph::{Connection, Graph, GraphDef, InstanceId, ModuleInstance};
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Use `add_module` and `connect` to build up the graph,
/// then call `build()` to validate and freeze it into an immutable `Graph`.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    modules: Vec<ModuleInstance>,
    connections: Vec<Connection>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the wire form received from the authoring surface.
    pub fn from_def(def: GraphDef) -> Self {
        Self {
            modules: def.modules,
            connections: def.connections,
        }
    }

    /// Add a module and return its instance id.
    pub fn add_module(&mut self, module: ModuleInstance) -> InstanceId {
        let id = module.instance_id;
        self.modules.push(module);
        id
    }

    /// Connect the output of `source` to the input of `target`.
    ///
    /// Connection ids follow the authoring surface convention `c<source>-<target>`.
    pub fn connect(&mut self, source: InstanceId, target: InstanceId) {
        self.connections.push(Connection {
            id: format!("c{}-{}", source, target),
            source_id: source,
            target_id: target,
        });
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    pub fn build(self) -> Result<Graph, GraphError> {
        validate::validate_structure(&self.modules)?;

        let index: HashMap<InstanceId, usize> = self
            .modules
            .iter()
            .enumerate()
            .map(|(i, m)| (m.instance_id, i))
            .collect();

        let (out_offsets, out_targets, dangling) =
            Self::build_adjacency(&self.modules, &self.connections, &index);

        for &ci in &dangling {
            let c = &self.connections[ci];
            warn!(
                connection = %c.id,
                source = %c.source_id,
                target = %c.target_id,
                "connection refers to a missing module; ignored"
            );
        }

        Ok(Graph {
            modules: self.modules,
            connections: self.connections,
            index,
            out_offsets,
            out_targets,
            dangling,
        })
    }

    /// Build compact adjacency lists: for each module, collect its successors.
    fn build_adjacency(
        modules: &[ModuleInstance],
        connections: &[Connection],
        index: &HashMap<InstanceId, usize>,
    ) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
        // Group targets by source, keeping connection order
        let mut per_source: Vec<Vec<usize>> = vec![Vec::new(); modules.len()];
        let mut dangling = Vec::new();
        for (ci, conn) in connections.iter().enumerate() {
            match (index.get(&conn.source_id), index.get(&conn.target_id)) {
                (Some(&s), Some(&t)) => per_source[s].push(t),
                _ => dangling.push(ci),
            }
        }

        // Build offsets and flat list
        let mut offsets = Vec::with_capacity(modules.len() + 1);
        let mut flat = Vec::with_capacity(connections.len());
        offsets.push(0);
        for targets in &per_source {
            flat.extend_from_slice(targets);
            offsets.push(flat.len());
        }

        (offsets, flat, dangling)
    }
}
