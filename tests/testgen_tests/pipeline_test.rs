use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const ROMAN: &str = r#"给你一个罗马数字，将其转换成整数。

示例 1：

输入：s = "III"
输出：3

示例 2：

输入：s = "LVIII"
输出：58
解释：L = 50, V= 5, III = 3.

示例 3：

输入：s = "MCMXCIV"
输出：
"#;

// 测试从标准输入生成测试脚本
#[test]
fn test_generate_from_stdin() {
    let temp_dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    let result = cmd
        .current_dir(temp_dir.path())
        .write_stdin(ROMAN)
        .env("RUST_LOG", "debug")
        .assert();

    result
        .success()
        .stdout(predicate::str::contains("const CASE_SLOW_MS = 20;"))
        .stdout(predicate::str::contains("{ args: [\"III\"], expected: 3,"))
        .stdout(predicate::str::contains("{ args: [\"LVIII\"], expected: 58,"))
        .stdout(predicate::str::contains("MCMXCIV").not())
        .stdout(predicate::str::contains("__lcRunExamples(solve, __lcExamples);"));
}

// 测试仅解析模式输出 JSON
#[test]
fn test_parse_only_outputs_json() {
    let temp_dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    let output = cmd
        .current_dir(temp_dir.path())
        .arg("--parse-only")
        .write_stdin(ROMAN)
        .output()
        .unwrap();

    assert!(output.status.success());
    let cases: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cases = cases.as_array().unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0]["args"][0], "\"III\"");
    assert_eq!(cases[1]["expected"], "58");
    assert_eq!(cases[1]["comment"], "// 输入：s = \"LVIII\"  输出：58");
}

// 测试输出到文件，以及两次运行结果一致
#[test]
fn test_output_file_is_deterministic() {
    let temp_dir = tempdir().unwrap();
    let input_path = temp_dir.path().join("roman.txt");
    fs::write(&input_path, ROMAN).unwrap();

    let mut outputs = Vec::new();
    for name in ["first.test.js", "second.test.js"] {
        let output_path = temp_dir.path().join("out").join(name);
        let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
        cmd.current_dir(temp_dir.path())
            .arg("-i")
            .arg(input_path.to_str().unwrap())
            .arg("-o")
            .arg(output_path.to_str().unwrap())
            .arg("--editor-line")
            .arg("var romanToInt = function(s) {")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
        outputs.push(fs::read_to_string(&output_path).unwrap());
    }

    assert_eq!(outputs[0], outputs[1]);
    assert!(outputs[0].ends_with("__lcRunExamples(romanToInt, __lcExamples);\n"));
}

// 测试输出文件无法写入时退回标准输出
#[test]
fn test_unwritable_output_falls_back_to_stdout() {
    let temp_dir = tempdir().unwrap();
    let blocker = temp_dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("-o")
        .arg(blocker.join("out.js").to_str().unwrap())
        .write_stdin(ROMAN)
        .assert()
        .success()
        .stdout(predicate::str::contains("__lcRunExamples(solve, __lcExamples);"))
        .stderr(predicate::str::contains("标准输出"));
}

// 测试配置文件和前置数据
#[test]
fn test_config_and_front_matter() {
    let temp_dir = tempdir().unwrap();
    fs::write(
        temp_dir.path().join("lc-testgen.toml"),
        r#"
fallback_function_name = "main"
case_slow = "50ms"
total_slow = "1s"
"#,
    )
    .unwrap();

    let input = r#"---
code_samples: ["isValid(s)"]
---
Example 1:
Input: s = "()"
Output: true
"#;

    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("const CASE_SLOW_MS = 50;"))
        .stdout(predicate::str::contains("const TOTAL_SLOW_MS = 1000;"))
        .stdout(predicate::str::contains("{ args: [\"()\"], expected: true,"))
        .stdout(predicate::str::contains("__lcRunExamples(isValid, __lcExamples);"));

    // 没有任何名字来源时使用配置中的兜底名字
    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .write_stdin("Example 1:\nInput: n = 2\nOutput: 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("__lcRunExamples(main, __lcExamples);"));
}

// 测试输入、输出、解释之间隔着空行的示例
#[test]
fn test_blank_separated_example_lines() {
    let input = "Example 1:\n\nInput: s = \"abc\"\n\nOutput: \"cba\"\n\nExplanation: reversed.\n\n\
                 Example 2:\n\nInput: s = \"a\"\n\nOutput: \"a\"\n\n\
                 Constraints:\n1 <= s.length <= 10\n";

    let temp_dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    let output = cmd
        .current_dir(temp_dir.path())
        .arg("--parse-only")
        .write_stdin(input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let cases: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cases = cases.as_array().unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0]["args"][0], "\"abc\"");
    assert_eq!(cases[0]["expected"], "\"cba\"");
    assert_eq!(cases[1]["expected"], "\"a\"");
}
