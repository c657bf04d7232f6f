//! Request handling: body in, report or classified error out.

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use hy_graph::GraphDef;
use hy_project::RequestBody;
use hy_solver::{HydraulicsReport, solve_def};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::Settings;
use crate::error::{AppError, AppResult};

/// Failure body: a message only, never a partial report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// What a front end sends back: a status and a JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub body: serde_json::Value,
}

/// Solve one scheme.
///
/// A panic inside the solver is contained and reported as an internal error;
/// a report with any non-finite number is refused.
pub fn calculate(def: GraphDef, settings: &Settings) -> AppResult<HydraulicsReport> {
    let started = Instant::now();
    let modules = def.modules.len();
    let connections = def.connections.len();
    info!(modules, connections, "calculate-hydraulics request");

    let result = contain(|| {
        let report = solve_def(def, &settings.constants)?;
        ensure_finite_report(&report)?;
        Ok(report)
    });

    match &result {
        Ok(report) => info!(
            branches = report.details.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "calculate-hydraulics finished"
        ),
        Err(e) => warn!(status = e.status(), error = %e, "calculate-hydraulics failed"),
    }
    result
}

/// Parse a JSON request body (`Scheme` or bare graph) and solve it.
pub fn calculate_body(body: &str, settings: &Settings) -> AppResult<HydraulicsReport> {
    let request: RequestBody = serde_json::from_str(body).map_err(|e| {
        AppError::InvalidInput(format!(
            "expected {{ modules: [], connections: [] }} or a stored scheme: {e}"
        ))
    })?;
    let def = match request {
        RequestBody::Scheme(s) => s.data,
        RequestBody::Graph(g) => g,
    };
    calculate(def, settings)
}

/// Full request/response cycle for a JSON body.
pub fn respond(body: &str, settings: &Settings) -> Response {
    let result = calculate_body(body, settings).and_then(|report| {
        serde_json::to_value(&report)
            .map_err(|e| AppError::Internal(format!("Failed to encode report: {e}")))
    });
    match result {
        Ok(body) => Response { status: 200, body },
        Err(e) => Response {
            status: e.status(),
            body: serde_json::to_value(ErrorBody {
                error: e.to_string(),
            })
            .unwrap_or(serde_json::Value::Null),
        },
    }
}

/// Solve independent schemes in parallel; results keep input order.
pub fn solve_batch(defs: Vec<GraphDef>, settings: &Settings) -> Vec<AppResult<HydraulicsReport>> {
    defs.into_par_iter()
        .map(|def| calculate(def, settings))
        .collect()
}

fn ensure_finite_report(report: &HydraulicsReport) -> AppResult<()> {
    match report.numbers().into_iter().find(|(_, v)| !v.is_finite()) {
        Some((field, value)) => {
            error!(%field, value, "non-finite value in report");
            Err(AppError::NonFinite { field })
        }
        None => Ok(()),
    }
}

/// Run `f`, turning a panic into [`AppError::Internal`].
pub(crate) fn contain<T>(f: impl FnOnce() -> AppResult<T>) -> AppResult<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        error!(%message, "solver panicked");
        Err(AppError::Internal(message))
    })
}
