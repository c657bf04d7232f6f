//! Placement of a branch on the scheme: its cylinder, its three lines and the
//! line each component sits on.

use hy_graph::{InstanceId, ModuleInstance, ModuleKind, SystemTag, find_path};
use tracing::debug;

use crate::problem::HydraulicProblem;

/// Line a component was found on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Suction,
    Pressure,
    Drain,
    /// On none of the branch's extracted paths.
    Unplaced,
}

/// The modules that make up one pump-rooted branch.
#[derive(Debug, Clone)]
pub struct BranchTopology<'a> {
    pub pump: &'a ModuleInstance,
    /// Effective system of the pump.
    pub system: Option<SystemTag>,
    pub cylinder: Option<&'a ModuleInstance>,
    /// Tank → pump intermediates (`None` when no path exists)
    pub suction: Option<Vec<&'a ModuleInstance>>,
    /// Pump → cylinder, or pump → tank without a cylinder
    pub pressure: Option<Vec<&'a ModuleInstance>>,
    /// Cylinder → tank; always `None` without a cylinder
    pub drain: Option<Vec<&'a ModuleInstance>>,
}

impl<'a> BranchTopology<'a> {
    /// Locate the branch rooted at `pump`.
    ///
    /// The branch cylinder is the first cylinder met on the way from the pump
    /// back to the tank; failing that, the first cylinder of the pump's system.
    pub fn locate(problem: &HydraulicProblem<'a>, pump: &'a ModuleInstance) -> Self {
        let graph = problem.graph;
        let tank = problem.tank.instance_id;
        let system = pump.system();

        let cylinder = find_path(graph, pump.instance_id, tank)
            .and_then(|path| path.into_iter().find(|m| m.kind() == ModuleKind::Cylinder))
            .or_else(|| {
                let system = system?;
                graph
                    .modules_of_kind(ModuleKind::Cylinder)
                    .find(|c| c.system() == Some(system))
            });

        let suction = find_path(graph, tank, pump.instance_id);
        let (pressure, drain) = match cylinder {
            Some(cyl) => (
                find_path(graph, pump.instance_id, cyl.instance_id),
                find_path(graph, cyl.instance_id, tank),
            ),
            None => (find_path(graph, pump.instance_id, tank), None),
        };

        debug!(
            pump = %pump.label(),
            system = system.map(SystemTag::as_str),
            cylinder = cylinder.map(|c| c.instance_id.0),
            suction = suction.is_some(),
            pressure = pressure.is_some(),
            drain = drain.is_some(),
            "branch located"
        );

        Self {
            pump,
            system,
            cylinder,
            suction,
            pressure,
            drain,
        }
    }

    /// Which extracted path holds `id`. The drain side is checked first.
    pub fn place(&self, id: InstanceId) -> Placement {
        if contains(&self.drain, id) {
            Placement::Drain
        } else if contains(&self.pressure, id) {
            Placement::Pressure
        } else if contains(&self.suction, id) {
            Placement::Suction
        } else {
            Placement::Unplaced
        }
    }

    /// Loss-producing components of this branch, in input order.
    ///
    /// A component belongs to the branch when its effective system is the
    /// branch's or `common`. A pump without a system claims only what lies on
    /// its own paths.
    pub fn members(&self, modules: &'a [ModuleInstance]) -> Vec<&'a ModuleInstance> {
        modules
            .iter()
            .filter(|m| carries_component_loss(m.kind()))
            .filter(|m| match (self.system, m.system()) {
                (_, Some(SystemTag::Common)) => true,
                (Some(branch), Some(own)) => branch == own,
                (None, _) => self.place(m.instance_id) != Placement::Unplaced,
                (Some(_), None) => false,
            })
            .collect()
    }
}

fn contains(path: &Option<Vec<&ModuleInstance>>, id: InstanceId) -> bool {
    path.as_ref()
        .is_some_and(|p| p.iter().any(|m| m.instance_id == id))
}

/// Kinds modelled by the rated-component loss model.
fn carries_component_loss(kind: ModuleKind) -> bool {
    !kind.is_primary() && !kind.is_chain_only()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hy_core::PhysicalConstants;
    use hy_graph::{Graph, GraphBuilder};

    /// engine(1); tank(2) → pipe(3) → pump(4) → dist(5) → cyl(6) → filter(7) → tank(2)
    fn gns_circuit() -> Graph {
        let mut b = GraphBuilder::new();
        b.add_module(ModuleInstance::new(1, "engine_d245", "engine_input").with_property("nominalRpm", 1800.0));
        let tank = b.add_module(ModuleInstance::new(2, "tank", "tank_output"));
        let pipe = b.add_module(ModuleInstance::new(3, "pipe", "pipe"));
        let pump = b.add_module(ModuleInstance::new(4, "pump_gns_ap30", "pump"));
        let dist = b.add_module(ModuleInstance::new(5, "distributor_rge100", "distributor"));
        let cyl = b.add_module(ModuleInstance::new(6, "cylinder_znu_c63", "cylinder"));
        let filter = b.add_module(ModuleInstance::new(7, "filter_frc12", "filter"));
        b.add_module(ModuleInstance::new(8, "hydro_block_gbf", "block"));
        b.connect(tank, pipe);
        b.connect(pipe, pump);
        b.connect(pump, dist);
        b.connect(dist, cyl);
        b.connect(cyl, filter);
        b.connect(filter, tank);
        b.build().unwrap()
    }

    fn ids(path: &Option<Vec<&ModuleInstance>>) -> Vec<u64> {
        path.as_ref().unwrap().iter().map(|m| m.instance_id.0).collect()
    }

    #[test]
    fn locates_lines_and_cylinder() {
        let g = gns_circuit();
        let c = PhysicalConstants::default();
        let problem = HydraulicProblem::new(&g, &c).unwrap();
        let t = BranchTopology::locate(&problem, problem.pumps[0]);

        assert_eq!(t.system, Some(SystemTag::Gns));
        assert_eq!(t.cylinder.map(|m| m.instance_id.0), Some(6));
        assert_eq!(ids(&t.suction), vec![3]);
        assert_eq!(ids(&t.pressure), vec![5]);
        assert_eq!(ids(&t.drain), vec![7]);

        assert_eq!(t.place(InstanceId(5)), Placement::Pressure);
        assert_eq!(t.place(InstanceId(7)), Placement::Drain);
        assert_eq!(t.place(InstanceId(3)), Placement::Suction);
        assert_eq!(t.place(InstanceId(8)), Placement::Unplaced);
    }

    #[test]
    fn members_follow_system_tags() {
        let g = gns_circuit();
        let c = PhysicalConstants::default();
        let problem = HydraulicProblem::new(&g, &c).unwrap();
        let t = BranchTopology::locate(&problem, problem.pumps[0]);

        // distributor (gns) and filter (common); the gru block belongs elsewhere
        let members: Vec<u64> = t.members(g.modules()).iter().map(|m| m.instance_id.0).collect();
        assert_eq!(members, vec![5, 7]);
    }

    #[test]
    fn cylinder_found_by_system_when_disconnected() {
        let mut b = GraphBuilder::new();
        b.add_module(ModuleInstance::new(1, "engine_d245", "engine_input").with_property("nominalRpm", 1800.0));
        let tank = b.add_module(ModuleInstance::new(2, "tank", "tank_output"));
        let pump = b.add_module(ModuleInstance::new(3, "pump_gru_nsh10", "pump"));
        b.add_module(ModuleInstance::new(4, "cylinder_znu_c63", "cylinder"));
        b.add_module(ModuleInstance::new(5, "cylinder_gru_c70", "cylinder"));
        b.connect(tank, pump);
        let g = b.build().unwrap();
        let c = PhysicalConstants::default();
        let problem = HydraulicProblem::new(&g, &c).unwrap();
        let t = BranchTopology::locate(&problem, problem.pumps[0]);

        assert_eq!(t.cylinder.map(|m| m.instance_id.0), Some(5));
        assert!(t.pressure.is_none());
        assert!(t.drain.is_none());
        assert_eq!(ids(&t.suction), Vec::<u64>::new());
    }

    #[test]
    fn no_cylinder_pressure_line_returns_to_tank() {
        let mut b = GraphBuilder::new();
        b.add_module(ModuleInstance::new(1, "engine_d245", "engine_input").with_property("nominalRpm", 1800.0));
        let tank = b.add_module(ModuleInstance::new(2, "tank", "tank_output"));
        let pump = b.add_module(ModuleInstance::new(3, "pump_gns_ap30", "pump"));
        let pipe = b.add_module(ModuleInstance::new(4, "pipe", "pipe"));
        b.connect(tank, pump);
        b.connect(pump, pipe);
        b.connect(pipe, tank);
        let g = b.build().unwrap();
        let c = PhysicalConstants::default();
        let problem = HydraulicProblem::new(&g, &c).unwrap();
        let t = BranchTopology::locate(&problem, problem.pumps[0]);

        assert!(t.cylinder.is_none());
        assert_eq!(ids(&t.pressure), vec![4]);
        assert!(t.drain.is_none());
    }
}
