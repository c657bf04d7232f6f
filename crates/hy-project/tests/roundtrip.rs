use hy_graph::{Connection, GraphDef, InstanceId, ModuleInstance, SystemTag};
use hy_project::{Scheme, load, load_json, load_yaml, save, save_json, save_yaml, validate_scheme};

fn sample() -> Scheme {
    let mut data = GraphDef::default();
    data.modules.push(ModuleInstance::new(1, "tank", "tank_output").with_property("length", 0.8));
    data.modules.push(
        ModuleInstance::new(2, "pump_gns_ap30", "pump")
            .with_system(SystemTag::Gns)
            .with_property("workingVolume", 32.0)
            .with_property("label", "front"),
    );
    data.connections.push(Connection {
        id: "c1-2".into(),
        source_id: InstanceId(1),
        target_id: InstanceId(2),
    });
    Scheme::new("Round trip", data)
}

#[test]
fn roundtrip_yaml() {
    let scheme = sample();
    validate_scheme(&scheme).unwrap();

    let path = std::env::temp_dir().join("hy_project_roundtrip.yaml");
    save_yaml(&path, &scheme).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(scheme, loaded);
}

#[test]
fn roundtrip_json() {
    let scheme = sample();
    let path = std::env::temp_dir().join("hy_project_roundtrip.json");
    save_json(&path, &scheme).unwrap();
    let loaded = load_json(&path).unwrap();
    assert_eq!(scheme, loaded);
}

#[test]
fn roundtrip_by_extension() {
    let scheme = sample();
    let path = std::env::temp_dir().join("hy_project_roundtrip_ext.yml");
    save(&path, &scheme).unwrap();
    assert_eq!(load(&path).unwrap(), scheme);
}

#[test]
fn save_refuses_invalid_scheme() {
    let mut scheme = sample();
    scheme.name.clear();
    let path = std::env::temp_dir().join("hy_project_invalid.json");
    assert!(save_json(&path, &scheme).is_err());
}
