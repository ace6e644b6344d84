use std::fs;

use cmdpat::adapter;
use cmdpat::config::{ConfigError, ConfigLoader, DefaultConfigLoader, load_file};
use indoc::indoc;
use rstest::{fixture, rstest};
use tempfile::TempDir;

const CATALOG: &str = indoc! {r#"
    commands:
      - usage: ping
        description: Health check
        example: ping
      - usage: "remind <who> at <time:integer>"
        description: Schedule a reminder
        example: remind alice at 1730
      - usage: "volume (1|2|3)"
      - usage: "say <msg:remaining_string>"
"#};

#[fixture]
fn catalog_dir() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("cmdpat.yml"), CATALOG).unwrap();
    tmp
}

#[rstest]
#[case("ping", Some("ping"))]
#[case("remind   bob at 9", Some("remind <who> at <time:integer>"))]
#[case("volume 2", Some("volume (1|2|3)"))]
#[case("volume 4", None)]
#[case("say anything at all", Some("say <msg:remaining_string>"))]
#[case("dance", None)]
fn catalog_routes_lines(catalog_dir: TempDir, #[case] line: &str, #[case] expected: Option<&str>) {
    let config = load_file(&catalog_dir.path().join("cmdpat.yml")).unwrap();
    let commands = config.command_set().unwrap();
    let usage = commands
        .dispatch(line)
        .map(|d| d.definition().usage.clone());
    assert_eq!(usage.as_deref(), expected);
}

#[rstest]
fn dispatched_values_are_typed(catalog_dir: TempDir) {
    let loader = DefaultConfigLoader::with_user_catalog(catalog_dir.path().join("absent.yml"));
    let config = loader.load(catalog_dir.path()).unwrap();
    let commands = config.command_set().unwrap();

    let dispatch = commands.dispatch("remind bob at 0900").unwrap();
    assert_eq!(
        dispatch.definition().description.as_deref(),
        Some("Schedule a reminder")
    );
    assert_eq!(dispatch.matched().string("who").unwrap(), "bob");
    assert_eq!(dispatch.matched().integer("time").unwrap(), 900);

    let dispatch = commands.dispatch("volume 3").unwrap();
    assert_eq!(dispatch.matched().integer("option0").unwrap(), 3);
}

#[test]
fn catalog_with_mismatched_example_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("cmdpat.yml");
    fs::write(
        &path,
        indoc! {r#"
            commands:
              - usage: "greet <name>"
                example: greet
        "#},
    )
    .unwrap();

    let err = load_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
}

#[rstest]
fn dispatch_output_end_to_end(catalog_dir: TempDir) {
    let config = load_file(&catalog_dir.path().join("cmdpat.yml")).unwrap();
    let commands = config.command_set().unwrap();
    let lines = vec!["remind alice at 1730".to_string(), "dance".to_string()];

    let mut buf = Vec::new();
    let code = adapter::run_dispatch(&commands, &lines, &mut buf).unwrap();
    assert_eq!(code, 1);

    let output = String::from_utf8(buf).unwrap();
    let values: Vec<serde_json::Value> = output
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(
        values[0],
        serde_json::json!({
            "line": "remind alice at 1730",
            "usage": "remind <who> at <time:integer>",
            "description": "Schedule a reminder",
            "parameters": [
                {"name": "who", "value": "alice"},
                {"name": "time", "value": "1730"}
            ]
        })
    );
    assert_eq!(values[1], serde_json::json!({"line": "dance", "usage": null}));
}
