use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// 测试帮助信息中的参数
#[test]
fn test_help_lists_options() {
    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    let result = cmd.arg("--help").assert();

    result
        .success()
        .stdout(predicate::str::contains("-i, --input"))
        .stdout(predicate::str::contains("--editor-line"))
        .stdout(predicate::str::contains("-p, --parse-only"))
        .stdout(predicate::str::contains("INPUT FORMATS:"));
}

// 测试无效的输入格式
#[test]
fn test_invalid_format_is_rejected() {
    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    cmd.arg("--format").arg("pdf").assert().failure();
}

// 测试输入文件不存在
#[test]
fn test_missing_input_file() {
    let temp_dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--input")
        .arg("missing.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("无法读取输入文件"));
}

// 测试无效的配置文件
#[test]
fn test_invalid_config_file() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("bad.toml");

    for name in ["", "my solve", "1abc"] {
        fs::write(&config_path, format!("fallback_function_name = \"{name}\"\n")).unwrap();

        let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
        cmd.current_dir(temp_dir.path())
            .arg("-c")
            .arg(config_path.to_str().unwrap())
            .write_stdin("示例 1：\n输入：x = 1\n输出：1\n")
            .assert()
            .failure()
            .stderr(predicate::str::contains("fallback_function_name"));
    }
}

// 测试安静模式不输出信息日志
#[test]
fn test_quiet_mode() {
    let temp_dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("-q")
        .env_remove("RUST_LOG")
        .write_stdin("示例 1：\n输入：x = 1\n输出：1\n")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
