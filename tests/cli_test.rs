//! Integration tests for the tcprobe binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn tcprobe(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("tcprobe"));
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

fn legacy_install(root: &Path) {
    fs::create_dir_all(root.join("lib")).unwrap();
    fs::create_dir_all(root.join("templates")).unwrap();
    fs::write(root.join("tcruntime-ctl.sh"), "").unwrap();
}

#[test]
fn cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tcprobe(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classify"))
        .stdout(predicate::str::contains("loader"));
    Ok(())
}

#[test]
fn cli_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    tcprobe(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_requires_subcommand() {
    let temp = TempDir::new().unwrap();
    tcprobe(temp.path()).assert().failure();
}

#[test]
fn classify_prints_ids() {
    let temp = TempDir::new().unwrap();
    tcprobe(temp.path())
        .args(["classify", "/opt/tomcat-7.0.42"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "org.eclipse.jst.server.tomcat.runtime.70",
        ))
        .stdout(predicate::str::contains("tc Server 3.0"));
}

#[test]
fn classify_json() {
    let temp = TempDir::new().unwrap();
    let output = tcprobe(temp.path())
        .args(["classify", "/opt/tomcat-9", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["path_axis"]["tag"], "V5_0");
    assert_eq!(
        value["path_axis"]["server_id"],
        "org.eclipse.jst.server.tomcat.90"
    );
}

#[test]
fn json_is_printed_in_silent_mode() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".tcprobe.yml"),
        "settings:\n  default_output: silent\n",
    )
    .unwrap();

    let output = tcprobe(temp.path())
        .args(["classify", "/opt/tomcat-6", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["path_axis"]["tag"], "V2_5");
}

#[test]
fn validate_valid_install() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("tomcat-7.0.42");
    legacy_install(&root);

    tcprobe(temp.path())
        .arg("validate")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid tc Server 3.0 installation"));
}

#[test]
fn validate_tomcat_8_runtime_uses_modern_layout() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("tomcat-8-runtime");
    let runtime = root.join("developer-4.0.2.RELEASE");
    fs::create_dir_all(runtime.join("lib")).unwrap();
    fs::create_dir_all(runtime.join("templates")).unwrap();
    fs::write(runtime.join("tcserver"), "").unwrap();
    fs::write(runtime.join("tcserver.bat"), "").unwrap();

    tcprobe(temp.path())
        .arg("validate")
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid tc Server 4.0 installation"));
}

#[test]
fn validate_invalid_install_exits_1() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("tomcat-7.0.42");
    legacy_install(&root);
    fs::remove_file(root.join("tcruntime-ctl.sh")).unwrap();

    tcprobe(temp.path())
        .arg("validate")
        .arg(&root)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("tcruntime-ctl.sh"));
}

#[test]
fn validate_quiet_hides_header() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("tomcat-7");
    legacy_install(&root);

    tcprobe(temp.path())
        .arg("validate")
        .arg(&root)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Validating").not());
}

#[test]
fn project_config_is_picked_up() {
    let temp = TempDir::new().unwrap();
    let install = temp.path().join("install");
    fs::create_dir_all(install.join("bin")).unwrap();
    fs::write(install.join("bin/boot.jar"), "").unwrap();
    fs::write(
        temp.path().join(".tcprobe.yml"),
        "classpath:\n  bootstrap_jar: boot.jar\n",
    )
    .unwrap();

    tcprobe(temp.path())
        .arg("classpath")
        .arg(&install)
        .assert()
        .success()
        .stdout(predicate::str::contains("boot.jar"));
}

#[test]
fn invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".tcprobe.yml"), "runtime_dirs: []\n").unwrap();

    tcprobe(temp.path())
        .args(["classify", "/opt/tomcat-6"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("runtime_dirs"));
}

#[test]
fn missing_explicit_config_fails() {
    let temp = TempDir::new().unwrap();
    tcprobe(temp.path())
        .args(["classify", "/opt/tomcat-6", "--config", "absent.yml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
}

#[test]
fn classpath_without_bin_fails() {
    let temp = TempDir::new().unwrap();
    tcprobe(temp.path())
        .arg("classpath")
        .arg(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No bin directory"));
}

#[test]
fn modules_check() {
    let temp = TempDir::new().unwrap();
    tcprobe(temp.path())
        .args([
            "modules",
            "--runtime-id",
            "com.springsource.tcserver.runtime.101",
            "--check",
            "6.0",
        ])
        .assert()
        .success();

    tcprobe(temp.path())
        .args([
            "modules",
            "--runtime-id",
            "com.springsource.tcserver.runtime.80",
            "--check",
            "4.0",
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("tc Server 3.0"));
}

#[test]
fn loader_enable_and_disable() {
    let temp = TempDir::new().unwrap();
    let loaders = temp.path().join("loaders");
    let base = temp.path().join("instance");
    fs::create_dir_all(&loaders).unwrap();
    fs::create_dir_all(&base).unwrap();
    let runtime_id = "org.eclipse.jst.server.tomcat.runtime.60";
    let jar = format!("{}.loader.jar", runtime_id);
    fs::write(loaders.join(&jar), b"jar").unwrap();

    tcprobe(temp.path())
        .arg("loader")
        .arg(&base)
        .args(["--runtime-id", runtime_id, "--enable", "--loader-dir"])
        .arg(&loaders)
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed"));
    assert!(base.join("lib").join(&jar).exists());

    tcprobe(temp.path())
        .arg("loader")
        .arg(&base)
        .args(["--runtime-id", runtime_id, "--disable"])
        .assert()
        .success();
    assert!(!base.join("lib").join(&jar).exists());
}

#[test]
fn loader_follows_tomcat_location() {
    let temp = TempDir::new().unwrap();
    let loaders = temp.path().join("loaders");
    let base = temp.path().join("instance");
    fs::create_dir_all(&loaders).unwrap();
    fs::create_dir_all(&base).unwrap();
    let jar = "org.eclipse.jst.server.tomcat.runtime.70.loader.jar";
    fs::write(loaders.join(jar), b"jar").unwrap();

    tcprobe(temp.path())
        .arg("loader")
        .arg(&base)
        .args(["--tomcat-location", "/opt/tc/tomcat-7.0.42.A.RELEASE"])
        .args(["--enable", "--loader-dir"])
        .arg(&loaders)
        .assert()
        .success();
    assert!(base.join("lib").join(jar).exists());
}

#[test]
fn modules_loader_answer_uses_tomcat_location() {
    let temp = TempDir::new().unwrap();
    tcprobe(temp.path())
        .args([
            "modules",
            "--runtime-id",
            "com.springsource.tcserver.runtime.80",
            "--tomcat-location",
            "/opt/tc/tomcat-7.0.42.A.RELEASE",
            "--json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"legacy_class_loader\": true"));
}
