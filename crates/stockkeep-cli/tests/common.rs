//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".stockkeep");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// `stockkeep --data-dir <fixture>` with logging kept quiet.
    #[allow(deprecated)]
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("stockkeep").expect("Failed to find stockkeep binary");
        cmd.arg("--data-dir")
            .arg(&self.data_dir)
            .arg("--log-level")
            .arg("warn")
            .env_remove("STOCKKEEP_PATH");
        cmd
    }

    /// Run with `--format json` and parse stdout; panics on a non-zero exit.
    pub fn json(&self, args: &[&str]) -> Value {
        let output = self
            .command()
            .args(args)
            .arg("--format")
            .arg("json")
            .output()
            .expect("Failed to run stockkeep");

        assert!(
            output.status.success(),
            "stockkeep {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );

        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }

    /// `item add` and return the new id.
    pub fn add(&self, name: &str, category: &str, quantity: &str, min_stock: &str) -> i64 {
        let result = self.json(&[
            "item",
            "add",
            "--name",
            name,
            "--category",
            category,
            "--quantity",
            quantity,
            "--min-stock",
            min_stock,
        ]);
        result["content"]["item"]["id"]
            .as_i64()
            .expect("add should report the new id")
    }

    pub fn list(&self, search: Option<&str>) -> Vec<Value> {
        let result = match search {
            Some(term) => self.json(&["item", "list", "--search", term]),
            None => self.json(&["item", "list"]),
        };
        result["content"]["items"]
            .as_array()
            .cloned()
            .unwrap_or_default()
    }

    pub fn names(&self, search: Option<&str>) -> Vec<String> {
        self.list(search)
            .iter()
            .map(|item| item["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}
