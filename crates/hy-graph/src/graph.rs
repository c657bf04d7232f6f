//! Core scheme data structures.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog;

/// Identifier the authoring surface assigns to a dropped module (a timestamp in practice).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub u64);

impl fmt::Debug for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InstanceId({})", self.0)
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for InstanceId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Module category as declared by the catalog `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleKind {
    EngineInput,
    TankOutput,
    Pump,
    Cylinder,
    Distributor,
    Block,
    Filter,
    Pipe,
    Splitter,
    /// Chain-evaluator start node; ignored by the hydraulic solver.
    Start,
    /// Chain-evaluator end node; ignored by the hydraulic solver.
    End,
    Other,
}

impl ModuleKind {
    pub fn parse(s: &str) -> Self {
        match s {
            "engine_input" => Self::EngineInput,
            "tank_output" => Self::TankOutput,
            "pump" => Self::Pump,
            "cylinder" => Self::Cylinder,
            "distributor" => Self::Distributor,
            "block" => Self::Block,
            "filter" => Self::Filter,
            "pipe" => Self::Pipe,
            "splitter" => Self::Splitter,
            "start" => Self::Start,
            "end" => Self::End,
            _ => Self::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EngineInput => "engine_input",
            Self::TankOutput => "tank_output",
            Self::Pump => "pump",
            Self::Cylinder => "cylinder",
            Self::Distributor => "distributor",
            Self::Block => "block",
            Self::Filter => "filter",
            Self::Pipe => "pipe",
            Self::Splitter => "splitter",
            Self::Start => "start",
            Self::End => "end",
            Self::Other => "other",
        }
    }

    /// Kinds that carry no loss model of their own (handled by dedicated models).
    pub fn is_primary(self) -> bool {
        matches!(
            self,
            Self::EngineInput | Self::TankOutput | Self::Pump | Self::Cylinder | Self::Pipe
        )
    }

    /// Chain-evaluator kinds the hydraulic solver skips entirely.
    pub fn is_chain_only(self) -> bool {
        matches!(self, Self::Start | Self::End)
    }
}

impl fmt::Display for ModuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hydraulic sub-system a module belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SystemTag {
    /// Main (attachment) pump circuit.
    Gns,
    /// Steering / control circuit.
    Gru,
    /// Shared by every branch.
    Common,
}

impl SystemTag {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gns" => Some(Self::Gns),
            "gru" => Some(Self::Gru),
            "common" => Some(Self::Common),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gns => "gns",
            Self::Gru => "gru",
            Self::Common => "common",
        }
    }
}

impl fmt::Display for SystemTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A property value as edited in the property form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Null,
}

impl PropertyValue {
    /// Numeric view; numeric strings count, everything else is absent.
    pub fn as_f64(&self) -> Option<f64> {
        let v = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Bool(_) | Self::Null => return None,
        };
        v.is_finite().then_some(v)
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for PropertyValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Named property map of one module instance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(pub BTreeMap<String, PropertyValue>);

impl Properties {
    pub fn number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(PropertyValue::as_f64)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.0.insert(key.into(), value.into());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// One module dropped on the canvas.
///
/// `type` and `system` are kept verbatim so a scheme survives a load/save
/// round trip; typed views are available through [`ModuleInstance::kind`] and
/// [`ModuleInstance::system`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInstance {
    pub instance_id: InstanceId,
    /// Catalog identifier (e.g. `pump_gns_ap30`).
    #[serde(rename = "id", alias = "catalogId")]
    pub catalog_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_name: String,
    #[serde(rename = "system", default, skip_serializing_if = "Option::is_none")]
    pub system_name: Option<String>,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub position: Position,
}

impl ModuleInstance {
    pub fn new(
        instance_id: u64,
        catalog_id: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        let catalog_id = catalog_id.into();
        let name = catalog::lookup(&catalog_id)
            .map(|e| e.name.to_string())
            .unwrap_or_else(|| catalog_id.clone());
        Self {
            instance_id: InstanceId(instance_id),
            catalog_id,
            name,
            type_name: type_name.into(),
            system_name: None,
            properties: Properties::default(),
            position: Position::default(),
        }
    }

    pub fn with_system(mut self, system: SystemTag) -> Self {
        self.system_name = Some(system.as_str().to_string());
        self
    }

    pub fn with_property(mut self, key: &str, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Module kind from the `type` field, falling back to the catalog entry.
    pub fn kind(&self) -> ModuleKind {
        match ModuleKind::parse(&self.type_name) {
            ModuleKind::Other => catalog::lookup(&self.catalog_id)
                .map(|e| e.kind)
                .unwrap_or(ModuleKind::Other),
            kind => kind,
        }
    }

    /// Effective system: declared tag, else the catalog default.
    pub fn system(&self) -> Option<SystemTag> {
        self.system_name
            .as_deref()
            .and_then(SystemTag::parse)
            .or_else(|| catalog::lookup(&self.catalog_id).and_then(|e| e.system))
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.properties.number(key)
    }

    /// Human label for logs and messages.
    pub fn label(&self) -> String {
        if self.name.is_empty() {
            format!("{}#{}", self.catalog_id, self.instance_id)
        } else {
            format!("{} ({}#{})", self.name, self.catalog_id, self.instance_id)
        }
    }
}

/// Directed connection: source output port → target input port.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    #[serde(default)]
    pub id: String,
    pub source_id: InstanceId,
    pub target_id: InstanceId,
}

/// Wire form of a scheme graph: `{ modules, connections }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDef {
    pub modules: Vec<ModuleInstance>,
    pub connections: Vec<Connection>,
}

/// The graph: a validated, immutable collection of modules and connections.
///
/// The graph stores:
/// - All modules and connections in vectors (input order preserved).
/// - An instance-id index.
/// - Compact adjacency: for each module, the indices of its successors.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) modules: Vec<ModuleInstance>,
    pub(crate) connections: Vec<Connection>,
    pub(crate) index: HashMap<InstanceId, usize>,

    /// Module i's successors are in out_targets[out_offsets[i]..out_offsets[i+1]].
    pub(crate) out_offsets: Vec<usize>,

    /// Flat successor list, in connection order per module.
    pub(crate) out_targets: Vec<usize>,

    /// Connections whose endpoints are not both present (skipped in adjacency).
    pub(crate) dangling: Vec<usize>,
}

impl Graph {
    /// Return all modules.
    pub fn modules(&self) -> &[ModuleInstance] {
        &self.modules
    }

    /// Return all connections.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    /// Connections dropped from adjacency because an endpoint is missing.
    pub fn dangling_connections(&self) -> impl Iterator<Item = &Connection> {
        self.dangling.iter().map(|&i| &self.connections[i])
    }

    /// Get a module by instance id.
    pub fn module(&self, id: InstanceId) -> Option<&ModuleInstance> {
        self.index.get(&id).map(|&i| &self.modules[i])
    }

    pub(crate) fn index_of(&self, id: InstanceId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub(crate) fn successor_indices(&self, idx: usize) -> &[usize] {
        if idx >= self.modules.len() {
            return &[];
        }
        &self.out_targets[self.out_offsets[idx]..self.out_offsets[idx + 1]]
    }

    /// Modules reached by the outgoing connections of `id`.
    pub fn successors(&self, id: InstanceId) -> impl Iterator<Item = &ModuleInstance> {
        let slice = self.index_of(id).map_or(&[][..], |i| self.successor_indices(i));
        slice.iter().map(|&j| &self.modules[j])
    }

    /// All modules of the given kind, in input order.
    pub fn modules_of_kind(&self, kind: ModuleKind) -> impl Iterator<Item = &ModuleInstance> {
        self.modules.iter().filter(move |m| m.kind() == kind)
    }

    /// Back to the wire form.
    pub fn to_def(&self) -> GraphDef {
        GraphDef {
            modules: self.modules.clone(),
            connections: self.connections.clone(),
        }
    }
}
