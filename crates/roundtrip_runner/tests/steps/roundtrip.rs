use crate::bdd_world::World;
use cucumber::{given, then, when};
use roundtrip_runner::{netjson_families, Runner, RunnerConfig, SetupError};
use std::fs;
use std::path::PathBuf;

const WG_KEY: &str = "yAnz5TF+lXXJte14tji3zlMNq+hd2rYUIgJBgB3fBmk=";

fn write(world: &mut World, family: &str, name: &str, body: &str) {
    let dir = world.fixture_root().join(family);
    fs::create_dir_all(&dir).expect("create family dir");
    fs::write(dir.join(name), body).expect("write fixture");
}

/// First checked-in sample of `family`.
fn sample(family: &str) -> serde_json::Value {
    let pattern = World::repo_root().join("fixtures").join(family).join("*.json");
    let path: PathBuf = glob::glob(&pattern.to_string_lossy())
        .expect("valid pattern")
        .flatten()
        .next()
        .unwrap_or_else(|| panic!("no {} sample", family));
    let txt = fs::read_to_string(&path).expect("read sample");
    serde_json::from_str(&txt).expect("parse sample")
}

fn violating(family: &str) -> serde_json::Value {
    match family {
        "openwrt" => serde_json::json!({ "interfaces": [{ "name": "eth0", "type": "ethernet", "mtu": 42 }] }),
        "openvpn" => serde_json::json!({ "openvpn": [{
            "name": "c1", "mode": "p2p", "proto": "udp", "dev": "tun0", "dev_type": "tun", "tls_client": true
        }] }),
        "wireguard" => serde_json::json!({ "wireguard": [{ "name": "wg0", "port": 51820, "private_key": "short" }] }),
        other => panic!("unknown family {}", other),
    }
}

#[given(regex = r#"^a valid "(\w+)" fixture named "([^"]+)"$"#)]
pub async fn given_valid_fixture(world: &mut World, family: String, name: String) {
    let body = serde_json::to_string_pretty(&sample(&family)).unwrap();
    write(world, &family, &name, &body);
}

#[given(regex = r#"^a malformed "(\w+)" fixture named "([^"]+)"$"#)]
pub async fn given_malformed_fixture(world: &mut World, family: String, name: String) {
    write(world, &family, &name, "{\"truncated\": [");
}

#[given(regex = r#"^a "(\w+)" fixture named "([^"]+)" with the extra top-level field "([^"]+)"$"#)]
pub async fn given_fixture_with_extra_field(world: &mut World, family: String, name: String, field: String) {
    let mut doc = sample(&family);
    doc.as_object_mut().expect("object sample").insert(field, serde_json::json!("from the future"));
    write(world, &family, &name, &doc.to_string());
}

#[given(regex = r#"^a "(\w+)" fixture named "([^"]+)" that violates a constraint$"#)]
pub async fn given_violating_fixture(world: &mut World, family: String, name: String) {
    write(world, &family, &name, &violating(&family).to_string());
}

#[given(regex = r#"^a "wireguard" fixture named "([^"]+)" with keys in reverse order and empty lists$"#)]
pub async fn given_reordered_fixture(world: &mut World, name: String) {
    let body = format!(
        r#"{{"files":[],"wireguard":[{{"peers":[],"private_key":"{}","name":"wg0","address":[]}}]}}"#,
        WG_KEY
    );
    write(world, "wireguard", &name, &body);
}

#[when(regex = r#"^I run the round-trip for "([^"]+)"$"#)]
pub async fn when_run_round_trip(world: &mut World, names: String) {
    let wanted: Vec<&str> = names.split(',').map(str::trim).collect();
    let families = netjson_families().into_iter().filter(|f| wanted.contains(&f.name.as_str()));
    let root = world.fixture_root();
    world.report = Some(Runner::new(RunnerConfig::new(root)).with_families(families).run());
}

#[then(regex = r#"^fixture "([^"]+)" passes$"#)]
pub async fn then_fixture_passes(world: &mut World, name: String) {
    let outcome = world.report().outcome(&name).unwrap_or_else(|| panic!("{} not run", name));
    assert!(outcome.passed(), "{}: {:?}", name, outcome.result);
}

#[then(regex = r#"^fixture "([^"]+)" fails at the "(\w+)" stage$"#)]
pub async fn then_fixture_fails_at(world: &mut World, name: String, stage: String) {
    let outcome = world.report().outcome(&name).unwrap_or_else(|| panic!("{} not run", name));
    match &outcome.result {
        Err(e) => assert_eq!(e.stage().to_string(), stage, "{}", e),
        Ok(()) => panic!("{} passed, expected failure at {}", name, stage),
    }
}

#[then(regex = r#"^family "(\w+)" fails setup because no files matched$"#)]
pub async fn then_family_setup_fails(world: &mut World, family: String) {
    let report = world.report().family(&family).unwrap_or_else(|| panic!("{} not run", family));
    assert!(matches!(report.setup_error(), Some(SetupError::NoMatches { .. })), "{:?}", report.outcome);
}

#[then(regex = r#"^the failure for "([^"]+)" shows the expected and actual canonical JSON$"#)]
pub async fn then_failure_shows_both_sides(world: &mut World, name: String) {
    let text = world
        .report()
        .failures()
        .iter()
        .map(|f| f.to_string())
        .find(|f| f.starts_with(&name))
        .unwrap_or_else(|| panic!("no failure for {}", name));
    assert!(text.contains("\nexpected: {"), "{}", text);
    assert!(text.contains("\nactual:   {"), "{}", text);
}

#[then(regex = r#"^the run (succeeds|fails)$"#)]
pub async fn then_run_result(world: &mut World, expect: String) {
    let ok = world.report().is_success();
    match expect.as_str() {
        "succeeds" => assert!(ok, "{}", world.report()),
        _ => assert!(!ok, "expected failures"),
    }
}

#[given(regex = r#"^the JSON document '(.*)'$"#)]
pub async fn given_document(world: &mut World, text: String) {
    world.document = Some(serde_json::from_str(&text).expect("valid JSON"));
}

#[when(regex = r#"^I canonicalize it$"#)]
pub async fn when_canonicalize(world: &mut World) {
    let doc = world.document.as_ref().expect("document set");
    let bytes = netjson_contract::canonicalize(doc).expect("canonicalize");
    world.canonical = Some(String::from_utf8(bytes).expect("utf-8"));
}

#[then(regex = r#"^the canonical form is '(.*)'$"#)]
pub async fn then_canonical_form(world: &mut World, expected: String) {
    assert_eq!(world.canonical.as_deref(), Some(expected.as_str()));
}
