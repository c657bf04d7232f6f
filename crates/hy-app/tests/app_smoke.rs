use std::path::{Path, PathBuf};

use hy_app::{AppError, ErrorClass, Settings};
use hy_graph::ModuleKind;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../hy-project/tests/fixtures")
        .join(name)
}

fn body_of(name: &str) -> String {
    let scheme = hy_app::load_scheme(&fixture(name)).unwrap();
    serde_json::to_string(&scheme).unwrap()
}

#[test]
fn stored_scheme_solves_with_two_branches() {
    let settings = Settings::default();
    let r = hy_app::respond(&body_of("two_branch.json"), &settings);
    assert_eq!(r.status, 200, "{}", r.body);

    let details = r.body["details"].as_object().unwrap();
    let keys: Vec<&str> = details.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["gns", "gru"]);
    assert!(r.body["currentTankArea"].as_f64().unwrap() > 0.0);
    assert!(r.body["conclusion"].is_string());
}

#[test]
fn bare_graph_without_tank_is_a_client_error() {
    let settings = Settings::default();
    let r = hy_app::respond(&body_of("bare_graph.json"), &settings);
    assert_eq!(r.status, 400);
    assert!(r.body["error"].as_str().unwrap().contains("tank"));
}

#[test]
fn invalid_json_is_a_client_error() {
    let r = hy_app::respond("{ not json", &Settings::default());
    assert_eq!(r.status, 400);
}

#[test]
fn overflowing_result_is_a_server_error() {
    let mut scheme = hy_app::load_scheme(&fixture("pump_only.yaml")).unwrap();
    let pump = scheme
        .data
        .modules
        .iter_mut()
        .find(|m| m.kind() == ModuleKind::Pump)
        .unwrap();
    pump.properties.insert("workingVolume", 1e300);

    let err = hy_app::calculate(scheme.data, &Settings::default()).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Server, "{err}");
}

#[test]
fn missing_file_is_reported_with_its_path() {
    let err = hy_app::load_scheme(&fixture("does_not_exist.json")).unwrap_err();
    assert!(matches!(err, AppError::SchemeFileRead { .. }));
    assert!(err.to_string().contains("does_not_exist.json"));
}

#[test]
fn batch_keeps_input_order() {
    let settings = Settings::default();
    let ok = hy_app::load_scheme(&fixture("pump_only.yaml")).unwrap().data;
    let bad = hy_app::load_scheme(&fixture("bare_graph.json")).unwrap().data;
    let two = hy_app::load_scheme(&fixture("two_branch.json")).unwrap().data;

    let results = hy_app::solve_batch(vec![ok, bad, two], &settings);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().details.len(), 1);
    assert_eq!(results[1].as_ref().unwrap_err().status(), 400);
    assert_eq!(results[2].as_ref().unwrap().details.len(), 2);
}

#[test]
fn branches_are_described_by_label() {
    let settings = Settings::default();
    let scheme = hy_app::load_scheme(&fixture("two_branch.json")).unwrap();
    let graph = hy_app::validate_scheme(&scheme, &settings).unwrap();

    let summary = hy_app::summarize(&scheme, &graph);
    assert_eq!(summary.module_count, 13);
    assert_eq!(summary.pump_count, 2);

    let branches = hy_app::describe_branches(&graph, &settings).unwrap();
    assert_eq!(branches.len(), 2);
    assert_eq!(branches[0].system, Some("gns"));
    assert!(branches.iter().all(|b| b.cylinder.is_some()));
    assert!(branches.iter().all(|b| b.suction.is_some()));
}

#[test]
fn scheme_saves_and_reloads() {
    let dir = std::env::temp_dir().join(format!("hy-app-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("copy.yaml");

    let scheme = hy_app::load_scheme(&fixture("two_branch.json")).unwrap();
    hy_app::save_scheme(&path, &scheme).unwrap();
    let reloaded = hy_app::load_scheme(&path).unwrap();
    assert_eq!(reloaded.data.modules.len(), scheme.data.modules.len());
    assert_eq!(reloaded.name, scheme.name);

    std::fs::remove_dir_all(&dir).ok();
}
