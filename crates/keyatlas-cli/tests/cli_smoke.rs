use serde_json::Value;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "keyatlas-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_keyatlas<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_keyatlas");
    Command::new(bin)
        .args(args)
        .output()
        .expect("keyatlas command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_failure(output: &Output) {
    if output.status.success() {
        panic!(
            "command unexpectedly succeeded\nstdout:\n{}\nstderr:\n{}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "expected valid JSON stdout, got error: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn write_definition_fixtures(dir: &Path) {
    fs::create_dir_all(dir).expect("keycodes dir should be created");
    fs::write(
        dir.join("keycodes_0.1.0.json"),
        r#"{
  "ranges": {"0x0100/0x1F00": {"define": "QK_MODS"}},
  "keycodes": {
    "0x01": {"key": "KC_TRANSPARENT", "aliases": ["KC_TRNS"]},
    "0x04": {"key": "KC_A"}
  }
}"#,
    )
    .expect("base layer should be written");
    fs::write(
        dir.join("keycodes_0.2.0.json"),
        r#"{
  "keycodes": {
    "!reset!": {},
    "0x04": {"key": "KC_A"},
    "0x05": {"key": "KC_ZZZ"},
    "0x06": {"key": "KC_NEW"}
  }
}"#,
    )
    .expect("reset layer should be written");
    fs::write(
        dir.join("keycodes_0.1.0_midi.json"),
        r#"{"keycodes": {"0x20": {"key": "QK_MIDI_ON"}}}"#,
    )
    .expect("midi layer should be written");
}

fn write_override_fixture(path: &Path) {
    fs::write(path, "KC_A\tThe letter A\n").expect("override table should be written");
}

fn write_registry_fixture(path: &Path) {
    let payload = serde_json::json!([
        {
            "description": "Letter A",
            "code": 4,
            "label": "A",
            "name": {"long": "KC_A", "short": "KC_A"},
            "keywords": ["a"],
            "ascii": "a"
        },
        {
            "code": 6,
            "name": {"long": "KC_OLD", "short": "KC_OLD"},
            "keywords": ["old"]
        }
    ]);
    fs::write(
        path,
        serde_json::to_vec_pretty(&payload).expect("registry fixture should serialize"),
    )
    .expect("registry fixture should be written");
}

fn build_args(tmp: &TempDirGuard, json: bool) -> Vec<OsString> {
    let mut args = vec![
        OsString::from("--keycodes"),
        tmp.path().join("keycodes").into_os_string(),
        OsString::from("--overrides"),
        tmp.path().join("descriptions.tsv").into_os_string(),
        OsString::from("--registry"),
        tmp.path().join("registry.json").into_os_string(),
        OsString::from("--out"),
        tmp.path().join("dist").join("keycodes.json").into_os_string(),
    ];
    if json {
        args.push(OsString::from("--json"));
    }
    args
}

fn read_artifact(tmp: &TempDirGuard) -> (String, Value) {
    let text = fs::read_to_string(tmp.path().join("dist").join("keycodes.json"))
        .expect("artifact should exist");
    let value = serde_json::from_str::<Value>(&text).expect("artifact should be valid JSON");
    (text, value)
}

#[test]
fn build_json_smoke() {
    let tmp = TempDirGuard::new("build-json");
    write_definition_fixtures(&tmp.path().join("keycodes"));
    write_override_fixture(&tmp.path().join("descriptions.tsv"));
    write_registry_fixture(&tmp.path().join("registry.json"));

    let output = run_keyatlas(build_args(&tmp, true));
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["categoryCount"], 2);
    assert_eq!(payload["mergedCodeCount"], 4);
    assert_eq!(payload["descriptorCount"], 4);
    assert_eq!(payload["curatedCount"], 2);
    assert_eq!(payload["overrideCount"], 1);
    assert_eq!(payload["diagnostics"][0]["code"], 6);
    assert_eq!(payload["diagnostics"][0]["curated"], "KC_OLD");
    assert_eq!(payload["diagnostics"][0]["incoming"], "KC_NEW");

    let (text, artifact) = read_artifact(&tmp);
    assert!(text.ends_with("]\n"));

    let records = artifact.as_array().expect("artifact should be an array");
    let codes: Vec<u64> = records
        .iter()
        .map(|r| r["code"].as_u64().expect("code should be numeric"))
        .collect();
    assert_eq!(codes, vec![4, 5, 6, 32]);

    // The reset in 0.2.0 dropped the 0.1.0-only code.
    assert!(!text.contains("KC_TRANSPARENT"));

    // Override beats curated description; curated label and ascii survive.
    assert_eq!(records[0]["description"], "The letter A");
    assert_eq!(records[0]["label"], "A");
    assert_eq!(records[0]["keywords"], serde_json::json!(["a"]));
    assert_eq!(records[0]["ascii"], "a");

    // Novel code synthesizes everything and carries no ascii field.
    assert_eq!(records[1]["description"], "Zzz");
    assert_eq!(records[1]["name"]["long"], "KC_ZZZ");
    assert_eq!(records[1]["name"]["short"], "KC_ZZZ");
    assert_eq!(records[1]["keywords"], serde_json::json!(["Zzz"]));
    assert!(records[1].get("ascii").is_none());

    // Name mismatch: source name wins, curated keywords survive.
    assert_eq!(records[2]["name"]["long"], "KC_NEW");
    assert_eq!(records[2]["label"], "New");
    assert_eq!(records[2]["keywords"], serde_json::json!(["old"]));

    assert_eq!(records[3]["label"], "Midi On");
}

#[test]
fn build_human_report_smoke() {
    let tmp = TempDirGuard::new("build-human");
    write_definition_fixtures(&tmp.path().join("keycodes"));
    write_override_fixture(&tmp.path().join("descriptions.tsv"));
    write_registry_fixture(&tmp.path().join("registry.json"));

    let output = run_keyatlas(build_args(&tmp, false));
    assert_success(&output);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("keyatlas registry build"));
    assert!(stdout.contains("Merged codes: 4"));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("warning: name mismatch"));
    assert!(stderr.contains("KC_OLD"));
}

#[test]
fn bootstrap_run_without_prior_registry() {
    let tmp = TempDirGuard::new("bootstrap");
    write_definition_fixtures(&tmp.path().join("keycodes"));
    write_override_fixture(&tmp.path().join("descriptions.tsv"));

    let output = run_keyatlas(build_args(&tmp, true));
    assert_success(&output);

    let payload = parse_json_stdout(&output);
    assert_eq!(payload["curatedCount"], 0);
    assert_eq!(payload["descriptorCount"], 4);
    assert_eq!(
        payload["diagnostics"],
        serde_json::json!([])
    );

    let (_, artifact) = read_artifact(&tmp);
    // Without curated data, the description falls back through the override.
    assert_eq!(artifact[0]["description"], "The letter A");
    assert_eq!(artifact[0]["label"], "A");
}

#[test]
fn malformed_filename_aborts_without_artifact() {
    let tmp = TempDirGuard::new("bad-filename");
    let keycodes = tmp.path().join("keycodes");
    write_definition_fixtures(&keycodes);
    fs::write(
        keycodes.join("keycodes_1.2_midi.json"),
        r#"{"keycodes": {}}"#,
    )
    .expect("bad fixture should be written");
    write_override_fixture(&tmp.path().join("descriptions.tsv"));

    let output = run_keyatlas(build_args(&tmp, true));
    assert_failure(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("keycodes_1.2_midi.json"));
    assert!(!tmp.path().join("dist").join("keycodes.json").exists());
}

#[test]
fn missing_override_table_is_fatal() {
    let tmp = TempDirGuard::new("missing-overrides");
    write_definition_fixtures(&tmp.path().join("keycodes"));

    let output = run_keyatlas(build_args(&tmp, true));
    assert_failure(&output);

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));
    assert!(stderr.contains("descriptions.tsv"));
}
