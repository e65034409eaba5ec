//! End-to-end resolution: source → selection → derived specs.

use fwt_common::{CONFIG_BUCKET, CONFIG_NAME, CONFIG_TYPE};
use fwt_config::{
    select_exact, DirObjectStore, Error, ErrorKind, FileSpecs, MapEnv, PositionRange, RawConfig,
    Resolver, DEFAULT_FAMILY,
};
use serde_yaml::Value;
use std::io::Write;
use std::sync::Arc;
use std::thread;

const INVOICE_DOC: &str = r#"
files:
  invoice:
    pattern: "^INV_"
    source:
      body:
        mapper: fixed
        format:
          - { name: id, spec: "0,5" }
          - { name: amt, spec: "5, 12" }
    output:
      result:
        name: csvWriter
        arguments:
          delimiter: ","
  payment:
    pattern: "^PAY_"
    source:
      header:
        mapper: fixed
        format:
          - { name: kind, spec: "0,1" }
      body:
        mapper: fixed
        format:
          - name: ref
            spec: "1,9"
            validators:
              - { name: not_blank, arguments: [] }
      footer:
        mapper: totals
        format:
          - { name: count, spec: "0,6" }
    output:
      format:
        body:
          mapper: csv
      result:
        name: jsonWriter
"#;

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn invoice_scenario_end_to_end() {
    let raw = Resolver::new()
        .with_env(MapEnv::new())
        .resolve(None, Some(INVOICE_DOC))
        .unwrap();
    let specs = FileSpecs::resolve(&raw, "INV_2024.txt", DEFAULT_FAMILY).unwrap();

    assert_eq!(specs.exact().file_type(), "invoice");
    assert_eq!(specs.segments().len(), 1);

    let body = &specs.segments()[0];
    assert_eq!(body.segment(), "body");
    assert_eq!(body.mapper(), "fixed");
    assert_eq!(body.names(), ["id", "amt"]);
    assert_eq!(
        body.specs(),
        [PositionRange::new(0, 5), PositionRange::new(5, 12)]
    );
    assert!(body.validators().is_empty());
    assert!(!body.skip_header());
    assert!(!body.skip_footer());

    assert!(specs.output_format().is_empty());
    assert_eq!(specs.result().name(), "csvWriter");
    assert_eq!(
        specs.result().argument("delimiter").and_then(Value::as_str),
        Some(",")
    );
}

#[test]
fn payment_scenario_flags_and_format() {
    let raw = RawConfig::parse(INVOICE_DOC).unwrap();
    let specs = FileSpecs::resolve(&raw, "PAY_0001.dat", DEFAULT_FAMILY).unwrap();

    assert_eq!(specs.segments().len(), 3);
    for seg in specs.segments() {
        assert!(seg.skip_header());
        assert!(seg.skip_footer());
    }
    assert_eq!(specs.segments()[1].validators()[0].field(), "ref");
    assert!(!specs.output_format().is_empty());
    assert_eq!(specs.result().name(), "jsonWriter");
    assert!(specs.result().arguments().is_empty());
}

#[test]
fn shared_segment_settings_through_merge_keys() {
    let doc = r#"
defaults: &fixed_body
  mapper: fixed
files:
  invoice:
    pattern: "^INV_"
    source:
      body:
        <<: *fixed_body
        format:
          - { name: id, spec: "0,5" }
    output:
      result: { name: csvWriter }
"#;
    let raw = RawConfig::parse(doc).unwrap();
    let specs = FileSpecs::resolve(&raw, "INV_1", DEFAULT_FAMILY).unwrap();

    assert_eq!(specs.segments().len(), 1);
    let body = &specs.segments()[0];
    assert_eq!(body.segment(), "body");
    assert_eq!(body.mapper(), "fixed");
    assert_eq!(body.names(), ["id"]);
}

#[test]
fn no_partial_specs_on_failure() {
    let doc = "files:\n  inv:\n    pattern: INV\n    source:\n      body:\n        mapper: m\n        format: []\n";
    let raw = RawConfig::parse(doc).unwrap();
    let err = FileSpecs::resolve(&raw, "INV_1", DEFAULT_FAMILY).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfig);
    assert!(err.to_string().contains("result segment is missing"));
}

#[test]
fn explicit_local_path() {
    let file = write_config(INVOICE_DOC);
    let raw = Resolver::new()
        .with_env(MapEnv::new())
        .resolve(Some(file.path()), None)
        .unwrap();
    assert!(select_exact(&raw, "INV_1").is_ok());
}

#[test]
fn explicit_local_path_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");
    let err = Resolver::new()
        .with_env(MapEnv::new())
        .resolve(Some(&path), None)
        .unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound { .. }));
    assert_eq!(err.kind(), ErrorKind::MissingConfig);
}

#[test]
fn explicit_local_path_non_mapping() {
    let file = write_config("- one\n- two\n");
    let err = Resolver::new()
        .with_env(MapEnv::new())
        .resolve(Some(file.path()), None)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
}

#[test]
fn env_selected_local_file() {
    let file = write_config(INVOICE_DOC);
    let env = MapEnv::new()
        .with(CONFIG_TYPE, "local")
        .with(CONFIG_NAME, file.path().to_string_lossy());
    let raw = Resolver::new().with_env(env).resolve(None, None).unwrap();
    assert_eq!(select_exact(&raw, "PAY_7").unwrap().file_type(), "payment");
}

#[test]
fn env_selected_local_file_missing_is_distinct() {
    let dir = tempfile::tempdir().unwrap();
    let env = MapEnv::new()
        .with(CONFIG_TYPE, "local")
        .with(CONFIG_NAME, dir.path().join("gone.yaml").to_string_lossy());
    let err = Resolver::new().with_env(env).resolve(None, None).unwrap_err();
    assert!(matches!(err, Error::ConfigNotFound { .. }));
}

#[test]
fn env_selected_remote_object() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(root.path().join("cfg-bucket/team")).unwrap();
    std::fs::write(root.path().join("cfg-bucket/team/fwt.yaml"), INVOICE_DOC).unwrap();

    let env = MapEnv::new()
        .with(CONFIG_BUCKET, "cfg-bucket")
        .with(CONFIG_NAME, "team/fwt.yaml");
    let raw = Resolver::new()
        .with_env(env)
        .with_store(DirObjectStore::new(root.path()))
        .resolve(None, None)
        .unwrap();
    assert!(raw.get("files").is_some());
}

#[test]
fn specs_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RawConfig>();
    assert_send_sync::<FileSpecs>();
    assert_send_sync::<Resolver>();
}

#[test]
fn concurrent_selection_over_shared_document() {
    let raw = Arc::new(RawConfig::parse(INVOICE_DOC).unwrap());
    let identifiers = ["INV_1", "PAY_2", "INV_3", "PAY_4", "NOPE_5"];

    let handles: Vec<_> = identifiers
        .iter()
        .map(|id| {
            let raw = Arc::clone(&raw);
            let id = id.to_string();
            thread::spawn(move || {
                FileSpecs::resolve(&raw, &id, DEFAULT_FAMILY)
                    .map(|s| s.exact().file_type().to_string())
                    .map_err(|e| e.kind())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results[0].as_deref(), Ok("invoice"));
    assert_eq!(results[1].as_deref(), Ok("payment"));
    assert_eq!(results[2].as_deref(), Ok("invoice"));
    assert_eq!(results[3].as_deref(), Ok("payment"));
    assert_eq!(results[4], Err(ErrorKind::MissingConfig));
}
