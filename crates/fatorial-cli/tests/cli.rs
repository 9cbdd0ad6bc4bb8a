use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

fn fatorial(args: &[&str], home: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fatorial"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

/// A user config dir holding a broken `fatorial/config.json`.
fn home_with_broken_config() -> tempfile::TempDir {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".config").join("fatorial");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.json"), "{ value: ").unwrap();
    home
}

#[test]
fn default_run_prints_two_lines() {
    let home = tempfile::tempdir().unwrap();
    let out = fatorial(&[], home.path());
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "CALCULA O FATORIAL RECURSIVO\nFatorial:  3628800\n"
    );
}

#[test]
fn default_run_ignores_user_config_dir() {
    let home = home_with_broken_config();
    let out = fatorial(&[], home.path());
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "CALCULA O FATORIAL RECURSIVO\nFatorial:  3628800\n"
    );
}

#[test]
fn run_overflow_fails_with_diagnostic() {
    let home = tempfile::tempdir().unwrap();
    let out = fatorial(&["run", "--value", "13"], home.path());
    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "CALCULA O FATORIAL RECURSIVO\n"
    );
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("fat_eval_E0102"), "{}", stderr);
    assert!(stderr.contains("factorial of 13 overflows"), "{}", stderr);
}

#[test]
fn explicit_config_is_applied() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("five.json");
    fs::write(&path, r#"{ "value": 5 }"#).unwrap();
    let out = fatorial(&["--config", path.to_str().unwrap()], home.path());
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "CALCULA O FATORIAL RECURSIVO\nFatorial:  120\n"
    );
}
