//! hy-graph: scheme graph layer for the hydraulic solver.
//!
//! Provides:
//! - Wire data structures (ModuleInstance, Connection, GraphDef) as produced by
//!   the diagram authoring surface
//! - The module catalog (kinds and default systems)
//! - Incremental graph builder producing a validated, immutable `Graph`
//! - Path extraction between two module instances
//!
//! # Example
//!
//! ```
//! use hy_graph::{GraphBuilder, ModuleInstance, find_path};
//!
//! let mut builder = GraphBuilder::new();
//! let tank = builder.add_module(ModuleInstance::new(1, "tank", "tank_output"));
//! let pipe = builder.add_module(ModuleInstance::new(2, "pipe", "pipe"));
//! let pump = builder.add_module(ModuleInstance::new(3, "pump_gns_ap30", "pump"));
//! builder.connect(tank, pipe);
//! builder.connect(pipe, pump);
//! let graph = builder.build().unwrap();
//!
//! let path = find_path(&graph, tank, pump).unwrap();
//! assert_eq!(path.len(), 1);
//! assert_eq!(path[0].instance_id, pipe);
//! ```

pub mod builder;
pub mod catalog;
pub mod error;
pub mod graph;
pub mod path;
pub mod validate;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use catalog::{CatalogEntry, lookup};
pub use error::GraphError;
pub use graph::{
    Connection, Graph, GraphDef, InstanceId, ModuleInstance, ModuleKind, Position,
    Properties, PropertyValue, SystemTag,
};
pub use path::find_path;
pub use validate::{PortReport, port_report};
