#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let work = make_fixture_units(tmp.path());

        Self {
            _tmp: tmp,
            home,
            work,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("sdconf");
        cmd.env("HOME", &self.home)
            .env_remove("SDCONF_LOG")
            .current_dir(&self.work);
        cmd
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.work.join(name)
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("read unit file")
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn audit_lines(&self) -> Vec<Value> {
        let p = self.home.join(".config/sdconf/audit.jsonl");
        let Ok(raw) = fs::read_to_string(p) else {
            return Vec::new();
        };
        raw.lines()
            .map(|l| serde_json::from_str(l).expect("audit line is json"))
            .collect()
    }
}

fn make_fixture_units(base: &Path) -> PathBuf {
    let work = base.join("work");
    fs::create_dir_all(&work).expect("create work dir");

    fs::write(
        work.join("web.service"),
        "[Unit]\nDescription=Web app\n\n[Service]\nExecStart=/usr/bin/web\n",
    )
    .expect("write service fixture");
    fs::write(work.join("backup.timer"), "arbitrary text, not a unit\n")
        .expect("write timer fixture");
    fs::write(work.join("notes.txt"), "just notes\n").expect("write non-unit fixture");

    work
}
