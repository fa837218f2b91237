use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const TWO_SUM_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>1. 两数之和</title><style>p { margin: 0; }</style></head>
<body>
<div data-track-load="description_content">
<p>给定一个整数数组 <code>nums</code> 和一个整数目标值 <code>target</code>。</p>
<p>&nbsp;</p>
<p><strong class="example">示例 1：</strong></p>
<pre><strong>输入：</strong>nums = [2,7,11,15], target = 9
<strong>输出：</strong>[0,1]
<strong>解释：</strong>因为 nums[0] + nums[1] == 9 ，返回 [0, 1] 。
</pre>
<p><strong class="example">示例 2：</strong></p>
<pre><strong>输入 ：</strong>nums = [3,2,4], target = 6
<strong>输出 ：</strong>[1,2]
</pre>
</div>
<div class="view-lines"><div class="monaco-mouse-cursor-text">var twoSum = function(nums, target) {</div></div>
</body>
</html>"#;

// 测试从 HTML 页面生成测试脚本
#[test]
fn test_generate_from_html_page() {
    let temp_dir = tempdir().unwrap();
    let page_path = temp_dir.path().join("two-sum.html");
    fs::write(&page_path, TWO_SUM_PAGE).unwrap();

    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--input")
        .arg(page_path.to_str().unwrap())
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "{ args: [[2,7,11,15], 9], expected: [0,1], comment: \"// 输入：nums = [2,7,11,15], target = 9  输出：[0,1]\" },",
        ))
        .stdout(predicate::str::contains("{ args: [[3,2,4], 6], expected: [1,2],"))
        .stdout(predicate::str::contains("__lcRunExamples(twoSum, __lcExamples);"));
}

// 测试编辑器文件覆盖页面中的编辑器内容
#[test]
fn test_editor_file_override() {
    let temp_dir = tempdir().unwrap();
    let editor_path = temp_dir.path().join("Solution.java");
    fs::write(
        &editor_path,
        "class Solution {\n    public int[] findIndices(int[] nums, int target) {\n    }\n}\n",
    )
    .unwrap();

    // 页面没有编辑器可见行，只有描述中的代码片段
    let page = TWO_SUM_PAGE.replace("var twoSum = function(nums, target) {", "");

    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("--format")
        .arg("html")
        .arg("--editor-file")
        .arg(editor_path.to_str().unwrap())
        .write_stdin(page)
        .assert()
        .success()
        .stdout(predicate::str::contains("__lcRunExamples(findIndices, __lcExamples);"));
}

// 测试页面中只有代码片段时的函数名推断
#[test]
fn test_html_code_sample_name() {
    let page = r#"<div data-track-load="description_content">
<p>实现 <code>romanToInt(s)</code>。</p>
<p><strong>示例 1：</strong></p>
<pre><strong>输入：</strong>s = "IV"
<strong>输出：</strong>4</pre>
</div>"#;

    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    cmd.arg("--parse-only")
        .write_stdin(page)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"expected\": \"4\""));

    let mut cmd = Command::cargo_bin("lc-testgen").unwrap();
    cmd.write_stdin(page)
        .assert()
        .success()
        .stdout(predicate::str::contains("__lcRunExamples(romanToInt, __lcExamples);"));
}
