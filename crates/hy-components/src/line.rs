//! Loss aggregation over one flow line of a branch.

use hy_core::PhysicalConstants;
use hy_graph::{ModuleInstance, ModuleKind};
use tracing::{debug, warn};

use crate::flow::{self, FlowRegime};
use crate::pipe::Pipe;

/// The three flow segments of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Tank to pump.
    Suction,
    /// Pump to cylinder (or back to the tank when there is no cylinder).
    Pressure,
    /// Cylinder to tank.
    Drain,
}

impl LineKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Suction => "suction",
            Self::Pressure => "pressure",
            Self::Drain => "drain",
        }
    }

    /// Fixed fitting allowance Σζ added once per line.
    pub fn allowance(self, constants: &PhysicalConstants) -> f64 {
        let a = &constants.line_allowances;
        match self {
            Self::Suction => a.suction,
            Self::Pressure => a.pressure,
            Self::Drain => a.drain,
        }
    }
}

/// Accumulated losses of one line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLoss {
    pub line: LineKind,
    /// Σ friction loss over all pipes [Pa]
    pub friction_pa: f64,
    /// Σ local loss over all pipes plus the line allowance [Pa]
    pub local_pa: f64,
    /// Velocity in the first pipe, used for the regime and the allowance [m/s]
    pub velocity: f64,
    pub reynolds: f64,
    pub friction_factor: f64,
    pub regime: FlowRegime,
    /// Pipe modules found on the path (0 when the synthetic pipe was used)
    pub pipe_count: usize,
}

impl LineLoss {
    /// A line the branch does not have: no losses, no allowance.
    pub fn absent(line: LineKind) -> Self {
        Self {
            line,
            friction_pa: 0.0,
            local_pa: 0.0,
            velocity: 0.0,
            reynolds: 0.0,
            friction_factor: 0.0,
            regime: FlowRegime::Stagnant,
            pipe_count: 0,
        }
    }

    pub fn total_pa(&self) -> f64 {
        self.friction_pa + self.local_pa
    }
}

/// Aggregate friction and local losses along a line carrying `flow` [m³/s].
///
/// `path` is the sequence of modules between the line's endpoints, or `None`
/// when no path was found. The first pipe fixes the regime for the whole line;
/// each pipe then contributes with its own bore. Without any pipe a synthetic
/// segment sized from the pipe defaults stands in.
pub fn aggregate(
    line: LineKind,
    path: Option<&[&ModuleInstance]>,
    flow: f64,
    constants: &PhysicalConstants,
) -> LineLoss {
    let defaults = &constants.pipe_defaults;
    let mut pipes: Vec<Pipe> = path
        .unwrap_or_default()
        .iter()
        .filter(|m| m.kind() == ModuleKind::Pipe)
        .map(|m| Pipe::with_defaults(m, defaults))
        .collect();
    let pipe_count = pipes.len();
    if pipes.is_empty() {
        warn!(
            line = line.as_str(),
            path_found = path.is_some(),
            "no pipe on line; using default pipe sizing"
        );
        pipes.push(Pipe::synthetic(defaults));
    }

    let rho = constants.fluid.density;
    let nu = constants.fluid.kinematic_viscosity;

    let lead = pipes[0];
    let lead_d = lead.diameter.value;
    let velocity = flow::velocity(flow, lead_d);
    let reynolds = flow::reynolds(velocity, lead_d, nu);
    let lambda = flow::friction_factor(reynolds, lead_d, lead.roughness.value);

    let mut friction_pa = 0.0;
    let mut local_pa = 0.0;
    for pipe in &pipes {
        let d = pipe.diameter.value;
        let v = flow::velocity(flow, d);
        friction_pa += flow::friction_loss(lambda, pipe.length.value, d, rho, v);
        local_pa += flow::local_loss(pipe.local_resistance, rho, v);
    }
    local_pa += flow::local_loss(line.allowance(constants), rho, velocity);

    let result = LineLoss {
        line,
        friction_pa,
        local_pa,
        velocity,
        reynolds,
        friction_factor: lambda,
        regime: FlowRegime::of(reynolds),
        pipe_count,
    };
    debug!(
        line = line.as_str(),
        pipes = pipe_count,
        velocity,
        reynolds,
        regime = result.regime.as_str(),
        friction_pa,
        local_pa,
        "line losses"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::keys;

    fn pipe(id: u64, d: f64, l: f64) -> ModuleInstance {
        ModuleInstance::new(id, "pipe", "pipe")
            .with_property(keys::DIAMETER, d)
            .with_property(keys::LENGTH, l)
    }

    #[test]
    fn missing_path_uses_synthetic_pipe_and_allowance() {
        let c = PhysicalConstants::default();
        let q = 5e-4;
        let loss = aggregate(LineKind::Suction, None, q, &c);

        let v = flow::velocity(q, 0.01);
        let re = flow::reynolds(v, 0.01, 32e-6);
        let lambda = flow::friction_factor(re, 0.01, 0.00005);
        assert_eq!(loss.pipe_count, 0);
        assert_eq!(loss.velocity, v);
        assert_eq!(loss.friction_pa, flow::friction_loss(lambda, 1.0, 0.01, 868.0, v));
        assert_eq!(loss.local_pa, flow::local_loss(0.5, 868.0, v));
    }

    #[test]
    fn path_without_pipes_behaves_like_no_path() {
        let c = PhysicalConstants::default();
        let filter = ModuleInstance::new(3, "filter_frc12", "filter");
        let path = [&filter];
        let with = aggregate(LineKind::Drain, Some(&path[..]), 2e-4, &c);
        let without = aggregate(LineKind::Drain, None, 2e-4, &c);
        assert_eq!(with, without);
    }

    #[test]
    fn first_pipe_fixes_regime_each_pipe_uses_own_bore() {
        let c = PhysicalConstants::default();
        let q = 3e-4;
        let a = pipe(1, 0.02, 2.0);
        let b = pipe(2, 0.01, 0.5).with_property(keys::LOCAL_RESISTANCE, 2.0);
        let path = [&a, &b];
        let loss = aggregate(LineKind::Pressure, Some(&path[..]), q, &c);

        let va = flow::velocity(q, 0.02);
        let vb = flow::velocity(q, 0.01);
        let lambda = flow::friction_factor(flow::reynolds(va, 0.02, 32e-6), 0.02, 0.00005);
        let friction =
            flow::friction_loss(lambda, 2.0, 0.02, 868.0, va) + flow::friction_loss(lambda, 0.5, 0.01, 868.0, vb);
        let local = flow::local_loss(2.0, 868.0, vb) + flow::local_loss(1.5, 868.0, va);

        assert_eq!(loss.pipe_count, 2);
        assert_eq!(loss.velocity, va);
        assert_eq!(loss.friction_factor, lambda);
        assert!((loss.friction_pa - friction).abs() < 1e-9);
        assert!((loss.local_pa - local).abs() < 1e-9);
        assert!((loss.total_pa() - friction - local).abs() < 1e-9);
    }

    #[test]
    fn allowance_added_once_regardless_of_pipe_count() {
        let c = PhysicalConstants::default();
        let pipes: Vec<ModuleInstance> = (1..=4).map(|i| pipe(i, 0.01, 0.0)).collect();
        let path: Vec<&ModuleInstance> = pipes.iter().collect();
        let loss = aggregate(LineKind::Pressure, Some(&path[..]), 4e-4, &c);
        let v = flow::velocity(4e-4, 0.01);
        assert_eq!(loss.friction_pa, 0.0);
        assert!((loss.local_pa - flow::local_loss(1.5, 868.0, v)).abs() < 1e-12);
    }

    #[test]
    fn absent_line_is_zero() {
        let loss = LineLoss::absent(LineKind::Drain);
        assert_eq!(loss.total_pa(), 0.0);
        assert_eq!(loss.regime, FlowRegime::Stagnant);
    }
}
