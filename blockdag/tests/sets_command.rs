use std::fs;

use blockdag::commands::run_sets;
use blockdag::config::{Config, OutputFormat};
use tempfile::TempDir;

const DIAMOND: &str = "4\nGenesis A B C\n4\nA : Genesis\nB : Genesis\nC : A B\n";

// Genesis <- A <- C <- E, Genesis <- B <- D, E also references D, F references A.
const WIDE: &str = "7\nGenesis A B C D E F\n7\nA : Genesis\nB : Genesis\nC : A\nD : B\nE : C D\nF : A\n";

fn config_for(dir: &TempDir, input: &str) -> Config {
    let input_path = dir.path().join("blockdag.in");
    fs::write(&input_path, input).unwrap();

    let mut config = Config::default();
    config.io.input = input_path;
    config.io.output = dir.path().join("blockdag.out");
    config
}

#[test]
fn test_sets_of_tip() {
    let tmp = TempDir::new().unwrap();
    let config = config_for(&tmp, DIAMOND);

    run_sets(&config, "C").unwrap().unwrap();

    assert_eq!(
        fs::read_to_string(&config.io.output).unwrap(),
        "past(C) : Genesis A B \nfuture(C) : \nanticone(C) : \ntips(G) : C \n"
    );
}

#[test]
fn test_sets_of_genesis() {
    let tmp = TempDir::new().unwrap();
    let config = config_for(&tmp, DIAMOND);

    run_sets(&config, "Genesis").unwrap().unwrap();

    assert_eq!(
        fs::read_to_string(&config.io.output).unwrap(),
        "past(Genesis) : \nfuture(Genesis) : A B C \nanticone(Genesis) : \ntips(G) : C \n"
    );
}

#[test]
fn test_sets_with_anticone() {
    let tmp = TempDir::new().unwrap();
    let config = config_for(&tmp, WIDE);

    let sets = run_sets(&config, "D").unwrap().unwrap();

    assert_eq!(sets.anticone.len(), 3);
    assert_eq!(
        fs::read_to_string(&config.io.output).unwrap(),
        "past(D) : Genesis B \nfuture(D) : E \nanticone(D) : A C F \ntips(G) : E F \n"
    );
}

#[test]
fn test_unknown_vertex_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let config = config_for(&tmp, DIAMOND);

    assert!(run_sets(&config, "Z").unwrap().is_none());
    assert!(!config.io.output.exists());
}

#[test]
fn test_sets_json() {
    let tmp = TempDir::new().unwrap();
    let mut config = config_for(&tmp, DIAMOND);
    config.output.format = OutputFormat::Json;

    run_sets(&config, "A").unwrap().unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&config.io.output).unwrap()).unwrap();
    assert_eq!(value["vertex"], "A");
    assert_eq!(value["past"], serde_json::json!(["Genesis"]));
    assert_eq!(value["future"], serde_json::json!(["C"]));
    assert_eq!(value["anticone"], serde_json::json!(["B"]));
    assert_eq!(value["tips"], serde_json::json!(["C"]));
}

#[test]
fn test_overlong_query_does_not_match_stored_prefix() {
    let tmp = TempDir::new().unwrap();
    let config = config_for(&tmp, "2\nGenesis LongBlock\n1\nLongBlock : Genesis\n");

    assert!(run_sets(&config, "LongBlockNOTHERE").unwrap().is_none());
    assert!(!config.io.output.exists());

    let sets = run_sets(&config, "LongBlock").unwrap().unwrap();
    assert_eq!(sets.vertex.as_str(), "LongBlock");
    assert_eq!(
        fs::read_to_string(&config.io.output).unwrap(),
        "past(LongBlock) : Genesis \nfuture(LongBlock) : \nanticone(LongBlock) : \ntips(G) : LongBlock \n"
    );
}
