//! Scheme loading, saving, validation, and introspection.

use std::path::Path;

use hy_graph::{Graph, GraphBuilder, ModuleInstance, ModuleKind, PortReport, port_report};
use hy_project::{ProjectError, Scheme};
use hy_solver::{BranchTopology, HydraulicProblem};
use serde::Serialize;

use crate::config::Settings;
use crate::error::{AppError, AppResult};

/// Summary of a scheme for listing.
#[derive(Debug, Clone)]
pub struct SchemeSummary {
    pub name: String,
    pub module_count: usize,
    pub connection_count: usize,
    pub pump_count: usize,
    pub ports: PortReport,
}

/// Where one branch runs on the scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchSummary {
    pub pump: String,
    pub system: Option<&'static str>,
    pub cylinder: Option<String>,
    pub suction: Option<Vec<String>>,
    pub pressure: Option<Vec<String>>,
    pub drain: Option<Vec<String>>,
}

/// Load a scheme document (or a bare graph) from JSON or YAML.
pub fn load_scheme(path: &Path) -> AppResult<Scheme> {
    hy_project::load_request(path).map_err(|e| match e {
        ProjectError::Io(source) => AppError::SchemeFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}

/// Save a scheme document; the extension picks the encoding.
pub fn save_scheme(path: &Path, scheme: &Scheme) -> AppResult<()> {
    Ok(hy_project::save(path, scheme)?)
}

/// Check that the scheme is solvable: document rules, graph structure and
/// the mandatory engine, tank and pump.
pub fn validate_scheme(scheme: &Scheme, settings: &Settings) -> AppResult<Graph> {
    hy_project::validate_scheme(scheme).map_err(ProjectError::Validation)?;
    let graph = GraphBuilder::from_def(scheme.data.clone()).build()?;
    HydraulicProblem::new(&graph, &settings.constants)?;
    Ok(graph)
}

pub fn summarize(scheme: &Scheme, graph: &Graph) -> SchemeSummary {
    SchemeSummary {
        name: scheme.name.clone(),
        module_count: graph.modules().len(),
        connection_count: graph.connections().len(),
        pump_count: graph.modules_of_kind(ModuleKind::Pump).count(),
        ports: port_report(graph),
    }
}

/// Lines of every branch, as module labels.
pub fn describe_branches(graph: &Graph, settings: &Settings) -> AppResult<Vec<BranchSummary>> {
    let problem = HydraulicProblem::new(graph, &settings.constants)?;
    let labels = |path: &Option<Vec<&ModuleInstance>>| -> Option<Vec<String>> {
        path.as_ref()
            .map(|p| p.iter().map(|m| m.label()).collect())
    };
    Ok(problem
        .pumps
        .iter()
        .map(|&pump| {
            let t = BranchTopology::locate(&problem, pump);
            BranchSummary {
                pump: pump.label(),
                system: t.system.map(|s| s.as_str()),
                cylinder: t.cylinder.map(ModuleInstance::label),
                suction: labels(&t.suction),
                pressure: labels(&t.pressure),
                drain: labels(&t.drain),
            }
        })
        .collect())
}
