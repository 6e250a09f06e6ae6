//! End-to-end runs of the `imgff` binary.

#![cfg(feature = "cli")]

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn imgff(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_imgff"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout_lines(out: &Output) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.gif"), b"GIF89a").unwrap();
    fs::write(dir.path().join("noext"), [0xFF, 0xD8, 0xFF, 0xE0]).unwrap();
    fs::write(dir.path().join("notes.txt"), b"hello").unwrap();
    fs::write(dir.path().join(".hidden.gif"), b"GI").unwrap();
    dir
}

#[test]
fn missing_path_exits_1() {
    let dir = TempDir::new().unwrap();
    let out = imgff(&[dir.path().join("nope.png").to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn directory_scan_filters_and_skips_hidden() {
    let dir = fixture();
    let out = imgff(&["-d", dir.path().to_str().unwrap(), "--json"]);
    assert_eq!(out.status.code(), Some(0), "{:?}", out);
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 2, "{:?}", lines);
    assert!(lines.iter().any(|l| l.contains("a.gif") && l.contains(r#""format":"gif""#)));
    assert!(lines.iter().any(|l| l.contains("noext") && l.contains(r#""extension_check":"missing""#)));
    assert!(!lines.iter().any(|l| l.contains(".hidden.gif") || l.contains("notes.txt")));
}

#[test]
fn all_flag_bypasses_extension_filter() {
    let dir = fixture();
    let out = imgff(&["-d", dir.path().to_str().unwrap(), "--json", "--all"]);
    assert_eq!(out.status.code(), Some(0), "{:?}", out);
    let lines = stdout_lines(&out);
    assert_eq!(lines.len(), 3, "{:?}", lines);
    assert!(lines
        .iter()
        .any(|l| l.contains("notes.txt") && l.contains(r#""outcome":"unknown""#)));
}

#[test]
fn unreadable_file_exits_2() {
    let dir = fixture();
    fs::write(dir.path().join("short.png"), b"\x89P").unwrap();
    let out = imgff(&["-d", dir.path().to_str().unwrap(), "-q"]);
    assert_eq!(out.status.code(), Some(2), "{:?}", out);
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("UNREADABLE"), "{}", text);
    assert!(text.contains("short.png"), "{}", text);
    assert!(!text.contains("a.gif"), "{}", text);
}

#[test]
fn json_keys_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photo.png");
    fs::write(&path, [0xFF, 0xD8, 0x00, 0x00]).unwrap();
    let out = imgff(&[path.to_str().unwrap(), "--json", "--sha256"]);
    assert_eq!(out.status.code(), Some(0), "{:?}", out);
    let line = String::from_utf8_lossy(&out.stdout).trim().to_string();

    let keys = [
        "\"path\"",
        "\"format\"",
        "\"outcome\"",
        "\"extension\"",
        "\"extension_check\"",
        "\"error\"",
        "\"sha256\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|k| line.find(k).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", line);

    let v: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(v.as_object().unwrap().len(), keys.len());
    assert_eq!(v["format"], "jpg");
    assert_eq!(v["extension_check"], "mismatch");
    assert_eq!(v["sha256"].as_str().unwrap().len(), 64);
}
