//! End-to-end solves of small schemes.

use hy_components::common::keys;
use hy_core::PhysicalConstants;
use hy_graph::{GraphBuilder, InstanceId, ModuleInstance, SystemTag};
use hy_solver::{SolverError, calculate_hydraulics};

fn engine(rpm: f64) -> ModuleInstance {
    ModuleInstance::new(1, "engine_d245", "engine_input").with_property(keys::NOMINAL_RPM, rpm)
}

fn tank(l: f64, w: f64, h: f64) -> ModuleInstance {
    ModuleInstance::new(2, "tank", "tank_output")
        .with_property(keys::LENGTH, l)
        .with_property(keys::WIDTH, w)
        .with_property(keys::HEIGHT, h)
}

fn pump(id: u64, catalog: &str, vol: f64, mech: f64) -> ModuleInstance {
    ModuleInstance::new(id, catalog, "pump")
        .with_property(keys::WORKING_VOLUME, 32.0)
        .with_property(keys::VOLUMETRIC_EFF, vol)
        .with_property(keys::MECH_EFF, mech)
        .with_property(keys::DRIVE_RATIO, 1.0)
}

fn pipe(id: u64, d: f64, l: f64) -> ModuleInstance {
    ModuleInstance::new(id, "pipe", "pipe")
        .with_property(keys::DIAMETER, d)
        .with_property(keys::LENGTH, l)
}

/// engine, tank → pump → pipe → tank; nothing else.
fn pump_only(vol: f64, mech: f64) -> hy_graph::Graph {
    let mut b = GraphBuilder::new();
    b.add_module(engine(2000.0));
    let t = b.add_module(tank(0.8, 0.5, 0.6));
    let p = b.add_module(pump(3, "pump_gns_ap30", vol, mech));
    let hose = b.add_module(pipe(4, 0.016, 2.0));
    b.connect(t, p);
    b.connect(p, hose);
    b.connect(hose, t);
    b.build().unwrap()
}

#[test]
fn pump_without_cylinder_heats_from_line_losses() {
    let g = pump_only(0.95, 0.92);
    let report = calculate_hydraulics(&g, &PhysicalConstants::default()).unwrap();
    assert_eq!(report.details.len(), 1);
    let r = &report.details["gns"];

    assert!((r.flow_lpm - 32.0 * 2000.0 * 0.95 / 1000.0).abs() < 1e-9);
    assert!(r.cylinder_instance_id.is_none());
    assert!(r.components.is_empty());
    assert_eq!(r.losses.drain_friction, 0.0);
    assert_eq!(r.losses.drain_local, 0.0);
    assert_eq!(r.velocities.drain, 0.0);

    // the pump only overcomes line losses
    let l = &r.losses;
    let lines = l.suction_friction + l.suction_local + l.pressure_friction + l.pressure_local;
    assert!((r.required_pump_pressure_mpa - lines).abs() < 1e-12);
    assert!((l.total - lines).abs() < 1e-12);

    let e = r.efficiencies;
    assert!((e.mechanical - 0.92).abs() < 1e-12);
    assert!((e.volumetric - 0.95).abs() < 1e-12);
    assert!((r.system_efficiency - e.volumetric * e.mechanical * e.hydraulic).abs() < 1e-12);

    let power_kw = r.required_pump_pressure_mpa * 1e6 * r.flow_m3s / (0.95 * 0.92) / 1000.0;
    assert!((r.pump_power_kw - power_kw).abs() < 1e-9);
    assert!((r.heat_generated_kw - r.pump_power_kw * (1.0 - r.system_efficiency)).abs() < 1e-12);

    let outer = 2.0 * (0.8 * 0.5 + 0.8 * 0.6 + 0.5 * 0.6);
    assert!((report.current_tank_area - 0.9 * outer).abs() < 1e-12);
    assert!(report.calculated_steady_state_temp_c.unwrap() > 30.0);
}

#[test]
fn missing_tank_fails_before_any_branch() {
    let mut b = GraphBuilder::new();
    b.add_module(engine(1800.0));
    b.add_module(pump(3, "pump_gns_ap30", 0.95, 0.92));
    let g = b.build().unwrap();

    let err = calculate_hydraulics(&g, &PhysicalConstants::default()).unwrap_err();
    assert!(matches!(err, SolverError::Structural { .. }));
    assert!(err.to_string().contains("tank"));
}

#[test]
fn zero_pump_efficiencies_give_zero_power() {
    let g = pump_only(0.0, 0.0);
    let report = calculate_hydraulics(&g, &PhysicalConstants::default()).unwrap();
    let r = &report.details["gns"];
    assert_eq!(r.pump_power_kw, 0.0);
    assert_eq!(r.heat_generated_kw, 0.0);
    assert_eq!(r.efficiencies.mechanical, 0.1);
    assert_eq!(r.efficiencies.volumetric, 0.1);
    assert_eq!(report.calculated_steady_state_temp_c, Some(30.0));
}

/// Two branches sharing the tank and a common return filter through a tee.
fn two_branch() -> hy_graph::Graph {
    let mut b = GraphBuilder::new();
    b.add_module(engine(1800.0));
    let t = b.add_module(tank(1.0, 0.6, 0.6));

    let p1 = b.add_module(pump(10, "pump_gns_ap30", 0.94, 0.9));
    let d1 = b.add_module(
        ModuleInstance::new(11, "distributor_rge100", "distributor")
            .with_property(keys::NOMINAL_PRESSURE_DROP, 0.2)
            .with_property(keys::NOMINAL_FLOW, 100.0)
            .with_property(keys::LEAKAGE, 0.5),
    );
    let c1 = b.add_module(
        ModuleInstance::new(12, "cylinder_znu_c63", "cylinder")
            .with_property(keys::PISTON_DIAMETER, 0.063)
            .with_property(keys::ROD_DIAMETER, 0.032)
            .with_property(keys::FORCE, 15_000.0)
            .with_property(keys::MECH_EFF, 0.95)
            .with_property(keys::VOLUMETRIC_EFF, 0.99),
    );

    let p2 = b.add_module(
        ModuleInstance::new(20, "pump_gru_nsh10", "pump")
            .with_property(keys::WORKING_VOLUME, 10.0)
            .with_property(keys::VOLUMETRIC_EFF, 0.92)
            .with_property(keys::MECH_EFF, 0.88),
    );
    let h2 = b.add_module(
        ModuleInstance::new(21, "hydro_block_gbf", "block")
            .with_property(keys::NOMINAL_PRESSURE_DROP, 0.3)
            .with_property(keys::NOMINAL_FLOW, 20.0),
    );
    let c2 = b.add_module(
        ModuleInstance::new(22, "cylinder_gru_c70", "cylinder")
            .with_property(keys::PISTON_DIAMETER, 0.07)
            .with_property(keys::ROD_DIAMETER, 0.04)
            .with_property(keys::FORCE, 8_000.0)
            .with_property(keys::MECH_EFF, 0.93),
    );

    let tee = b.add_module(ModuleInstance::new(30, "tee_splitter", "splitter"));
    let filter = b.add_module(
        ModuleInstance::new(31, "filter_frc12", "filter")
            .with_property(keys::NOMINAL_PRESSURE_DROP, 0.05)
            .with_property(keys::NOMINAL_FLOW, 60.0)
            .with_property(keys::SIDE_AREA, 0.15),
    );
    let s1 = b.add_module(pipe(40, 0.025, 1.0));
    let s2 = b.add_module(pipe(41, 0.02, 1.0));

    b.connect(t, s1);
    b.connect(s1, p1);
    b.connect(p1, d1);
    b.connect(d1, c1);
    b.connect(c1, tee);
    b.connect(t, s2);
    b.connect(s2, p2);
    b.connect(p2, h2);
    b.connect(h2, c2);
    b.connect(c2, tee);
    b.connect(tee, filter);
    b.connect(filter, t);
    b.build().unwrap()
}

#[test]
fn two_branches_are_keyed_by_system() {
    let g = two_branch();
    let report = calculate_hydraulics(&g, &PhysicalConstants::default()).unwrap();
    let keys: Vec<&str> = report.details.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["gns", "gru"]);

    let gns = &report.details["gns"];
    assert_eq!(gns.cylinder_instance_id, Some(InstanceId(12)));
    let gns_lines: Vec<(u64, &str)> = gns
        .components
        .iter()
        .map(|c| (c.instance_id.0, c.line))
        .collect();
    // gns distributor, then the common tee (no rating) and filter on the drain
    assert_eq!(gns_lines, vec![(11, "pressure"), (31, "drain")]);

    let gru = &report.details["gru"];
    assert_eq!(gru.cylinder_instance_id, Some(InstanceId(22)));
    assert!(gru.components.iter().any(|c| c.instance_id.0 == 21 && c.line == "pressure"));

    let total: f64 = report.details.values().map(|b| b.heat_generated_kw).sum();
    assert!(total > 0.0);
    for b in report.details.values() {
        assert!((0.0..=1.0).contains(&b.system_efficiency));
        assert!(b.efficiencies.mechanical >= 0.1);
        assert!(b.efficiencies.volumetric >= 0.1);
    }
}

#[test]
fn solving_is_deterministic() {
    let g = two_branch();
    let c = PhysicalConstants::default();
    let a = calculate_hydraulics(&g, &c).unwrap();
    let b = calculate_hydraulics(&g, &c).unwrap();
    assert_eq!(a, b);
}

#[test]
fn duplicate_system_keys_are_disambiguated() {
    let mut b = GraphBuilder::new();
    b.add_module(engine(1800.0));
    let t = b.add_module(tank(0.8, 0.5, 0.6));
    let p1 = b.add_module(pump(3, "pump_gns_ap30", 0.95, 0.92));
    let p2 = b.add_module(pump(4, "pump_gns_ap30", 0.95, 0.92));
    b.connect(t, p1);
    b.connect(t, p2);
    let g = b.build().unwrap();

    let report = calculate_hydraulics(&g, &PhysicalConstants::default()).unwrap();
    let keys: Vec<&str> = report.details.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["gns", "gns#4"]);
}

#[test]
fn nothing_dissipates_heat_reports_null_temperature() {
    let mut b = GraphBuilder::new();
    b.add_module(engine(1800.0));
    let t = b.add_module(ModuleInstance::new(2, "tank", "tank_output"));
    let p = b.add_module(pump(3, "pump_gns_ap30", 0.95, 0.92).with_system(SystemTag::Gns));
    b.connect(t, p);
    b.connect(p, t);
    let g = b.build().unwrap();

    let report = calculate_hydraulics(&g, &PhysicalConstants::default()).unwrap();
    assert_eq!(report.calculated_steady_state_temp_c, None);
    assert!(report.conclusion.contains("unbounded"));
    assert_eq!(report.current_tank_area, 0.0);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json["calculatedSteadyStateTempC"].is_null());
    assert!(json["details"]["gns"]["heatGeneratedKw"].as_f64().unwrap() > 0.0);
}
