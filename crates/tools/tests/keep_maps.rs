//! End-to-end tests: documents on disk, driven through the library runner and
//! through the `blockmap` binary itself.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use blockmap_engine::transform::{MirrorCutoff, SplitShift, Translate};
use blockmap_tools::cli::{Invocation, Operation};
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fresh scratch directory under the system temp dir.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("blockmap_test_{}", name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_json(path: &Path, value: &Value) {
    fs::write(path, serde_json::to_string_pretty(value).unwrap()).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

fn keep_document() -> Value {
    json!({
        "blockTypes": [
            { "id": 1, "name": "stone", "textureUri": "blocks/stone.png" },
            { "id": 7, "name": "bricks", "textureUri": "blocks/bricks.png" }
        ],
        "blocks": {
            "0,0,0": 1,
            "0,0,20": 7,
            "-4,1,-20": 1,
            "3,4,12": 7,
            "2,2,-9": 1
        },
        "spawn": [0, 5, 0]
    })
}

fn blockmap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_blockmap"))
}

// ---------------------------------------------------------------------------
// Library runner
// ---------------------------------------------------------------------------

#[test]
fn translate_keeps_other_fields() {
    let dir = scratch("translate");
    let input = dir.join("keep.json");
    let output = dir.join("out/keep_modified.json");
    write_json(&input, &keep_document());

    let report = blockmap_tools::run(&Invocation {
        operation: Operation::Translate(Translate::new(-17, 0, 0)),
        input: input.clone(),
        output: output.clone(),
    })
    .unwrap();
    assert_eq!(report.input_len, 5);
    assert_eq!(report.output_len, 5);

    let out = read_json(&output);
    assert_eq!(out["blockTypes"], keep_document()["blockTypes"]);
    assert_eq!(out["spawn"], json!([0, 5, 0]));
    assert_eq!(
        out["blocks"],
        json!({
            "-17,0,0": 1,
            "-17,0,20": 7,
            "-21,1,-20": 1,
            "-14,4,12": 7,
            "-15,2,-9": 1
        })
    );
    let fields: Vec<&String> = out.as_object().unwrap().keys().collect();
    assert_eq!(fields, ["blockTypes", "blocks", "spawn"]);

    // Source untouched.
    assert_eq!(read_json(&input), keep_document());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn extend_and_mirror_outputs() {
    let dir = scratch("extend_mirror");
    let input = dir.join("keep.json");
    write_json(&input, &keep_document());

    let extended = dir.join("extended.json");
    blockmap_tools::run(&Invocation {
        operation: Operation::Extend(SplitShift::default()),
        input: input.clone(),
        output: extended.clone(),
    })
    .unwrap();
    assert_eq!(
        read_json(&extended)["blocks"],
        json!({
            "0,0,15": 1,
            "0,0,35": 7,
            "-4,1,-35": 1,
            "3,4,27": 7,
            "2,2,-24": 1
        })
    );

    let mirrored = dir.join("mirrored.json");
    let report = blockmap_tools::run(&Invocation {
        operation: Operation::Mirror(MirrorCutoff::default()),
        input: input.clone(),
        output: mirrored.clone(),
    })
    .unwrap();
    assert_eq!(report.dropped, 1);
    let blocks = read_json(&mirrored)["blocks"].clone();
    assert_eq!(
        blocks,
        json!({
            "0,0,0": 1,
            "0,0,20": 7,
            "0,0,-20": 7,
            "3,4,12": 7,
            "-3,4,-12": 7,
            "2,2,-9": 1
        })
    );
    let order: Vec<&String> = blocks.as_object().unwrap().keys().collect();
    assert_eq!(
        order,
        ["0,0,0", "0,0,20", "0,0,-20", "3,4,12", "-3,4,-12", "2,2,-9"]
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn malformed_key_writes_nothing() {
    let dir = scratch("malformed");
    let input = dir.join("keep.json");
    let output = dir.join("never.json");
    write_json(&input, &json!({ "blocks": { "0,0,0": 1, "1,2": 2 } }));

    let err = blockmap_tools::run(&Invocation {
        operation: Operation::Translate(Translate::default()),
        input,
        output: output.clone(),
    })
    .unwrap_err();
    assert!(format!("{err:#}").contains("\"1,2\""), "{err:#}");
    assert!(!output.exists());
    let _ = fs::remove_dir_all(&dir);
}

// ---------------------------------------------------------------------------
// Binary
// ---------------------------------------------------------------------------

#[test]
fn binary_default_paths_relative_to_cwd() {
    let dir = scratch("binary_defaults");
    fs::create_dir_all(dir.join("assets")).unwrap();
    write_json(&dir.join("assets/keep.json"), &keep_document());

    let out = blockmap().arg("mirror").current_dir(&dir).output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("keep-mirrored.json"), "{stdout}");

    let mirrored = read_json(&dir.join("assets/keep-mirrored.json"));
    assert_eq!(mirrored["blocks"]["-3,4,-12"], json!(7));
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn binary_reports_missing_field() {
    let dir = scratch("binary_missing_field");
    let input = dir.join("keep.json");
    write_json(&input, &json!({ "blockTypes": [] }));

    let out = blockmap()
        .args(["translate", "--input"])
        .arg(&input)
        .args(["--output"])
        .arg(dir.join("out.json"))
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("\"blocks\""), "{stderr}");
    assert!(!dir.join("out.json").exists());
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn binary_usage_errors_exit_2() {
    let out = blockmap().arg("rotate").output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage:"));

    let out = blockmap().args(["translate", "--dx", "x"]).output().unwrap();
    assert_eq!(out.status.code(), Some(2));

    let out = blockmap().arg("--help").output().unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("Usage:"));
}
