//! Module catalog offered by the authoring surface.

use crate::graph::{ModuleKind, SystemTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ModuleKind,
    pub system: Option<SystemTag>,
}

const fn entry(
    id: &'static str,
    name: &'static str,
    kind: ModuleKind,
    system: Option<SystemTag>,
) -> CatalogEntry {
    CatalogEntry {
        id,
        name,
        kind,
        system,
    }
}

pub const ENGINE_D245: &str = "engine_d245";
pub const TANK: &str = "tank";

pub static CATALOG: &[CatalogEntry] = &[
    entry(ENGINE_D245, "Engine (D245)", ModuleKind::EngineInput, None),
    entry(TANK, "Hydraulic tank", ModuleKind::TankOutput, None),
    entry(
        "pump_gns_ap30",
        "Pump (AP30)",
        ModuleKind::Pump,
        Some(SystemTag::Gns),
    ),
    entry(
        "pump_gru_nsh10",
        "Pump (NSh10)",
        ModuleKind::Pump,
        Some(SystemTag::Gru),
    ),
    entry(
        "cylinder_znu_c63",
        "Hitch cylinder (C63)",
        ModuleKind::Cylinder,
        Some(SystemTag::Gns),
    ),
    entry(
        "cylinder_gru_c70",
        "Steering cylinder (C70)",
        ModuleKind::Cylinder,
        Some(SystemTag::Gru),
    ),
    entry(
        "distributor_rge100",
        "Distributor (RGE100)",
        ModuleKind::Distributor,
        Some(SystemTag::Gns),
    ),
    entry(
        "power_block_bpg",
        "Power block (BPG)",
        ModuleKind::Block,
        Some(SystemTag::Gns),
    ),
    entry(
        "hydro_block_gbf",
        "Hydraulic block (GBF)",
        ModuleKind::Block,
        Some(SystemTag::Gru),
    ),
    entry(
        "filter_frc12",
        "Return filter (FRC12)",
        ModuleKind::Filter,
        Some(SystemTag::Common),
    ),
    entry("pipe", "Pipe", ModuleKind::Pipe, Some(SystemTag::Common)),
    entry(
        "tee_splitter",
        "Tee",
        ModuleKind::Splitter,
        Some(SystemTag::Common),
    ),
];

pub fn lookup(id: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|e| e.id == id)
}
