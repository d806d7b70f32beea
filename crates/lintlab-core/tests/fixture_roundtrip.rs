//! End-to-end fixture mutation tests against a temporary sample repo:
//! create idempotence, cleanup round trips, and changeset contents.

use lintlab_core::scenario::Payload;
use lintlab_core::{fixture, LabConfig, Scenario};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MANIFEST: &str = "{\n  \"name\": \"sample\",\n  \"version\": \"1.0.0\",\n  \"devDependencies\": {\n    \"other-pkg\": \"^2.0.0\"\n  },\n  \"scripts\": {\n    \"build\": \"node build.js\"\n  }\n}\n";
const BOOTSTRAP: &str = "// sample app bootstrap\nconsole.log('app');\n";

/// Build a minimal sample repository and a config pointing at it. The
/// package manager is a binary that never exists, so lock resync takes
/// its tolerated-failure path deterministically.
fn sample_repo() -> (LabConfig, TempDir) {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("src")).unwrap();
    std::fs::write(root.join("package.json"), MANIFEST).unwrap();
    std::fs::write(root.join("src/index.js"), BOOTSTRAP).unwrap();

    let mut config = LabConfig::for_repo(root);
    config.package_manager_bin = "lintlab-test-no-pm".to_string();
    (config, dir)
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

fn target_root(config: &LabConfig, scenario: &Scenario) -> PathBuf {
    scenario.target_root(config)
}

#[test]
fn create_writes_fixtures_and_wires_bootstrap() {
    let (config, _dir) = sample_repo();
    let scenario = Scenario::lookup("unused-exports").unwrap();
    let target = target_root(&config, scenario);

    let changes = fixture::create(scenario, &config, &target).unwrap();

    assert!(target.join("helpers.js").is_file());
    assert!(target.join("entry.js").is_file());
    assert!(changes.contains(target.join("helpers.js")));
    assert!(changes.contains(target.join("entry.js")));
    assert!(changes.contains(&config.bootstrap_path));

    let bootstrap = read(&config.bootstrap_path);
    assert_eq!(
        bootstrap.lines().next().unwrap(),
        "import '../lab/unused-exports/entry.js'; // lintlab:unused-exports"
    );
}

#[test]
fn create_twice_is_idempotent() {
    let (config, _dir) = sample_repo();
    let scenario = Scenario::lookup("duplicate-exports").unwrap();
    let target = target_root(&config, scenario);

    let first = fixture::create(scenario, &config, &target).unwrap();
    assert!(!first.is_empty());

    let second = fixture::create(scenario, &config, &target).unwrap();
    assert!(second.is_empty(), "second create touched {:?}", second.paths());
}

#[test]
fn file_scenario_roundtrip_restores_shared_files() {
    let (config, _dir) = sample_repo();
    let scenario = Scenario::lookup("unresolved-import").unwrap();
    let target = target_root(&config, scenario);

    fixture::create(scenario, &config, &target).unwrap();
    let changes = fixture::cleanup(scenario, &config, &target).unwrap();

    assert!(!target.exists());
    assert!(changes.contains(&config.bootstrap_path));
    assert!(changes.contains(&target));
    assert_eq!(read(&config.bootstrap_path), BOOTSTRAP);
    assert_eq!(read(&config.manifest_path), MANIFEST);

    // Second cleanup has nothing left to do.
    let again = fixture::cleanup(scenario, &config, &target).unwrap();
    assert!(again.is_empty());
}

#[test]
fn orphan_scenario_leaves_bootstrap_alone() {
    let (config, _dir) = sample_repo();
    let scenario = Scenario::lookup("unused-files").unwrap();
    assert!(scenario.entry_file.is_none());
    let target = target_root(&config, scenario);

    let changes = fixture::create(scenario, &config, &target).unwrap();
    assert!(changes.contains(target.join("orphan.js")));
    assert!(!changes.contains(&config.bootstrap_path));
    assert_eq!(read(&config.bootstrap_path), BOOTSTRAP);
}

#[test]
fn exported_type_fixture_is_wired_and_removed() {
    let (config, _dir) = sample_repo();
    let scenario = Scenario::lookup("unused-exported-types").unwrap();
    let target = target_root(&config, scenario);

    let changes = fixture::create(scenario, &config, &target).unwrap();
    assert!(changes.contains(target.join("types.ts")));
    assert!(changes.contains(&config.bootstrap_path));
    assert!(read(&target.join("types.ts")).contains("export type UnusedShape"));
    assert_eq!(
        read(&config.bootstrap_path).lines().next().unwrap(),
        "import '../lab/unused-exported-types/types.ts'; // lintlab:unused-exported-types"
    );

    fixture::cleanup(scenario, &config, &target).unwrap();
    assert!(!target.exists());
    assert_eq!(read(&config.bootstrap_path), BOOTSTRAP);
}

#[test]
fn dev_dependency_roundtrip_preserves_unrelated_entries() {
    let (config, _dir) = sample_repo();
    let scenario = Scenario::lookup("unused-dev-dependency").unwrap();
    let target = target_root(&config, scenario);

    let changes = fixture::create(scenario, &config, &target).unwrap();
    assert_eq!(changes.paths(), [config.manifest_path.clone()]);
    let mutated = read(&config.manifest_path);
    assert!(mutated.contains("\"left-pad\""));
    assert!(mutated.contains("\"other-pkg\": \"^2.0.0\""));

    // Re-create: marker already present, no manifest rewrite.
    let second = fixture::create(scenario, &config, &target).unwrap();
    assert!(second.is_empty());

    let changes = fixture::cleanup(scenario, &config, &target).unwrap();
    assert_eq!(changes.paths(), [config.manifest_path.clone()]);
    assert_eq!(read(&config.manifest_path), MANIFEST);

    let again = fixture::cleanup(scenario, &config, &target).unwrap();
    assert!(again.is_empty());
}

#[test]
fn script_roundtrip_restores_manifest() {
    let (config, _dir) = sample_repo();
    let scenario = Scenario::lookup("unlisted-binary").unwrap();
    let target = target_root(&config, scenario);

    fixture::create(scenario, &config, &target).unwrap();
    let mutated = read(&config.manifest_path);
    assert!(mutated.contains("\"lab:exercise\": \"not-a-real-tool --check\""));
    assert!(mutated.contains("\"build\": \"node build.js\""));

    fixture::cleanup(scenario, &config, &target).unwrap();
    assert_eq!(read(&config.manifest_path), MANIFEST);
}

#[test]
fn fixture_payloads_are_planted_verbatim() {
    let (config, _dir) = sample_repo();
    for scenario in Scenario::all() {
        let Payload::Files(files) = scenario.payload else {
            continue;
        };
        let target = target_root(&config, scenario);
        fixture::create(scenario, &config, &target).unwrap();
        for file in files {
            assert_eq!(read(&target.join(file.name)), file.contents, "{}", scenario.key);
        }
        fixture::cleanup(scenario, &config, &target).unwrap();
    }
    // After every scenario cleaned up, shared files are pristine.
    assert_eq!(read(&config.bootstrap_path), BOOTSTRAP);
    assert_eq!(read(&config.manifest_path), MANIFEST);
}
