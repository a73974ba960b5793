#![allow(missing_docs)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;

const SAMPLE: &str = "[b]\n  (n)0x2A\n[/b]\n(word)\"hello\"\n";

fn temp_file(name: &str, content: &str) -> PathBuf {
	let dir = std::env::temp_dir().join(format!("boxdoc-cli-test-{}", std::process::id()));
	fs::create_dir_all(&dir).expect("temp dir creates");
	let path = dir.join(name);
	fs::write(&path, content).expect("fixture writes");
	path
}

fn run_boxdoc(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_boxdoc")).args(args).output().expect("boxdoc command executes")
}

fn run_ok(args: &[&str]) -> String {
	let output = run_boxdoc(args);
	assert!(
		output.status.success(),
		"boxdoc command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

#[test]
fn show_json_reports_structure() {
	let path = temp_file("show.txt", SAMPLE);
	let stdout = run_ok(&["show", path.to_str().expect("path"), "--json"]);
	let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid json");

	assert_eq!(json["compression"], "none");
	assert_eq!(json["boxes"], 1);
	assert_eq!(json["items"], 2);
	assert_eq!(json["depth"], 1);
	assert_eq!(json["top_boxes"][0], "b");
	assert_eq!(json["top_items"][0]["name"], "word");
	assert_eq!(json["top_items"][0]["literal"], "\"hello\"");
}

#[test]
fn get_prints_the_literal() {
	let path = temp_file("get.txt", SAMPLE);
	let stdout = run_ok(&["get", path.to_str().expect("path"), "--at", "b.n"]);
	assert_eq!(stdout.trim_end(), "0x2A");
}

#[test]
fn set_rewrites_the_file() {
	let path = temp_file("set.txt", SAMPLE);
	run_ok(&["set", path.to_str().expect("path"), "--at", "b.n", "--value", "0xFF"]);

	let stdout = run_ok(&["get", path.to_str().expect("path"), "--at", "b.n"]);
	assert_eq!(stdout.trim_end(), "0xFF");

	// untouched items survive the rewrite
	let stdout = run_ok(&["get", path.to_str().expect("path"), "--at", "word"]);
	assert_eq!(stdout.trim_end(), "\"hello\"");
}

#[test]
fn fmt_canonicalizes_to_stdout() {
	let messy = "[b]\n(n)0x2A\n[/b]\n(word)\"hello\"\n";
	let path = temp_file("fmt.txt", messy);
	let stdout = run_ok(&["fmt", path.to_str().expect("path")]);
	assert_eq!(stdout, "(word)\"hello\"\n[b]\n  (n)0x2A\n[/b]\n");
}

#[test]
fn fmt_writes_zstd_output_that_loads_back() {
	let path = temp_file("pack-in.txt", SAMPLE);
	let out = temp_file("pack-out.zst", "");
	run_ok(&["fmt", path.to_str().expect("path"), "--out", out.to_str().expect("path"), "--zstd"]);

	let stdout = run_ok(&["show", out.to_str().expect("path"), "--json"]);
	let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid json");
	assert_eq!(json["compression"], "zstd");
	assert_eq!(json["items"], 2);
}

#[test]
fn missing_path_fails_with_error() {
	let path = temp_file("miss.txt", SAMPLE);
	let output = run_boxdoc(&["get", path.to_str().expect("path"), "--at", "b.missing"]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("item not found"), "stderr was: {stderr}");
}

#[test]
fn malformed_literal_fails_set() {
	let path = temp_file("bad-set.txt", SAMPLE);
	let output = run_boxdoc(&["set", path.to_str().expect("path"), "--at", "b.n", "--value", "nonsense"]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("malformed literal"), "stderr was: {stderr}");
}
