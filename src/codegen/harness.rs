//! 测试脚本生成
//!
//! 生成一段可以独立运行的 JavaScript：用例以字面量数据内嵌，逐个调用目标函数，
//! 比较结果、记录耗时，并对慢用例和慢总耗时高亮。

use serde::{Deserialize, Serialize};

use crate::utils;

const RUNNER: &str = "__lcRunExamples";
const CASES: &str = "__lcExamples";

const OK_STYLE: &str = "color: #16a34a; font-weight: 700;";
const FAIL_STYLE: &str = "color: #dc2626; font-weight: 700;";
const SLOW_CASE_STYLE: &str =
    "color:#d97706;font-weight:700;background:#fff7ed;padding:2px 4px;border-radius:4px;";
const SLOW_TOTAL_STYLE: &str =
    "color:#dc2626;font-weight:800;background:#fee2e2;padding:2px 4px;border-radius:4px;border:1px solid #dc2626;";
const MUTED_STYLE: &str = "color:#64748b;";

/// 一个测试用例，所有字段都是可以直接嵌入脚本的表达式或注释文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    pub args: Vec<String>,
    pub expected: String,
    pub comment: String,
}

impl TestCase {
    /// 用示例的原始输入、输出子句生成用例注释
    pub fn comment_for(input: &str, output: &str) -> String {
        format!("// 输入：{input}  输出：{output}")
    }
}

/// 测试脚本生成器
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessGenerator {
    case_slow_ms: u128,
    total_slow_ms: u128,
}

impl Default for HarnessGenerator {
    fn default() -> Self {
        Self::new(20, 100)
    }
}

impl HarnessGenerator {
    pub fn new(case_slow_ms: u128, total_slow_ms: u128) -> Self {
        Self {
            case_slow_ms,
            total_slow_ms,
        }
    }

    fn push_timing_line(lines: &mut Vec<String>) {
        lines.push("      const slow = ms > CASE_SLOW_MS;".to_string());
        lines.push(format!(
            "      const timeStyle = slow ? '{SLOW_CASE_STYLE}' : '{MUTED_STYLE}';"
        ));
        lines.push(
            "      console.log(`%c${i + 1} ⏱: ${ms.toFixed(3)}ms`, timeStyle, `\\n`);".to_string(),
        );
    }

    fn push_runner(&self, lines: &mut Vec<String>) {
        lines.push(format!("const CASE_SLOW_MS = {};", self.case_slow_ms));
        lines.push(format!("const TOTAL_SLOW_MS = {};", self.total_slow_ms));
        lines.push(String::new());
        lines.push(format!("function {RUNNER}(fn, cases) {{"));
        lines.push("  let totalMs = 0;".to_string());
        lines.push("  for (let i = 0; i < cases.length; i++) {".to_string());
        lines.push("    const { args, expected, comment } = cases[i];".to_string());
        lines.push("    if (comment) console.log(`${i + 1}`, comment);".to_string());
        lines.push("    const t0 = performance.now();".to_string());
        lines.push("    try {".to_string());
        lines.push("      const got = fn(...args);".to_string());
        lines.push("      const ms = performance.now() - t0;".to_string());
        lines.push("      totalMs += ms;".to_string());
        lines.push("      const gotOut = Array.isArray(got) ? got.join() : got;".to_string());
        lines.push(
            "      const expectedOut = Array.isArray(expected) ? expected.join() : expected;"
                .to_string(),
        );
        lines.push("      const ok = gotOut === expectedOut;".to_string());
        lines.push(format!("      const color = ok ? '{OK_STYLE}' : '{FAIL_STYLE}';"));
        lines.push(
            "      console.log(`%c${i + 1} ${ok ? 'OK' : 'FAIL'}`, color, { got: gotOut, expected: expectedOut });"
                .to_string(),
        );
        Self::push_timing_line(lines);
        lines.push("    } catch (e) {".to_string());
        lines.push("      const ms = performance.now() - t0;".to_string());
        lines.push("      totalMs += ms;".to_string());
        Self::push_timing_line(lines);
        lines.push(format!(
            "      console.log(`%c${{i + 1}} ERROR`, '{FAIL_STYLE}', {{ error: String(e) }});"
        ));
        lines.push("      throw e;".to_string());
        lines.push("    }".to_string());
        lines.push("  }".to_string());
        lines.push("  const totalSlow = totalMs > TOTAL_SLOW_MS;".to_string());
        lines.push(format!(
            "  const totalStyle = totalSlow ? '{SLOW_TOTAL_STYLE}' : '{MUTED_STYLE}';"
        ));
        lines.push("  console.log(`%c⏱ total: ${totalMs.toFixed(3)}ms`, totalStyle);".to_string());
        lines.push("}".to_string());
        lines.push(String::new());
    }

    /// 生成完整的测试脚本
    ///
    /// 相同的输入总是生成逐字节相同的文本。
    pub fn generate(&self, cases: &[TestCase], function_name: &str) -> String {
        let mut lines = Vec::new();
        self.push_runner(&mut lines);

        lines.push(format!("const {CASES} = ["));
        for case in cases {
            lines.push(format!(
                "  {{ args: [{}], expected: {}, comment: {} }},",
                case.args.join(", "),
                case.expected,
                utils::quote_literal(&case.comment)
            ));
        }
        lines.push("];".to_string());
        lines.push(String::new());
        lines.push(format!("{RUNNER}({function_name}, {CASES});"));

        let mut script = lines.join("\n");
        script.push('\n');
        script
    }
}
