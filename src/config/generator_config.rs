use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::utils;

/// Represents the configuration of the test generator.
///
/// This struct is used to deserialize the configuration from a file using the `utils::read_toml_from_file` method.
/// Every field is optional in the file; missing fields fall back to `Default`.
///
/// # Fields
///
/// - `fallback_function_name`: identifier used when no source yields a function name.
/// - `case_slow`: per-case duration above which the harness highlights a case as slow.
/// - `total_slow`: total duration above which the harness highlights the whole run.
/// - `labels`: the label words recognized in problem descriptions.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub fallback_function_name: String,
    #[serde(with = "humantime_serde")]
    pub case_slow: Duration,
    #[serde(with = "humantime_serde")]
    pub total_slow: Duration,
    pub labels: LabelWords,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            fallback_function_name: "solve".to_string(),
            case_slow: Duration::from_millis(20),
            total_slow: Duration::from_millis(100),
            labels: LabelWords::default(),
        }
    }
}

/// 描述中可识别的标签词
///
/// ASCII 标签词按大小写不敏感匹配，中文标签词按原样匹配。
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LabelWords {
    /// 示例标题词，例如 "示例 1："
    pub example: Vec<String>,
    /// 输入标签词
    pub input: Vec<String>,
    /// 输出标签词
    pub output: Vec<String>,
    /// 解释标签词
    pub explanation: Vec<String>,
}

impl Default for LabelWords {
    fn default() -> Self {
        Self {
            example: vec!["示例".to_string(), "Example".to_string()],
            input: vec!["输入".to_string(), "Input".to_string()],
            output: vec!["输出".to_string(), "Output".to_string()],
            explanation: vec!["解释".to_string(), "Explanation".to_string()],
        }
    }
}

impl GeneratorConfig {
    /// 从文件中读取
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let config: Self = utils::read_toml_from_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// 检查配置中不能为空的字段
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.fallback_function_name.trim().is_empty() {
            anyhow::bail!("fallback_function_name 不能为空");
        }
        let identifier = Regex::new(r"^[A-Za-z_$][\w$]*$")?;
        if !identifier.is_match(&self.fallback_function_name) {
            anyhow::bail!(
                "fallback_function_name 不是合法的标识符: {:?}",
                self.fallback_function_name
            );
        }
        let groups = [
            ("example", &self.labels.example),
            ("input", &self.labels.input),
            ("output", &self.labels.output),
            ("explanation", &self.labels.explanation),
        ];
        for (name, words) in groups {
            if words.iter().all(|w| w.trim().is_empty()) {
                anyhow::bail!("labels.{name} 至少需要一个非空标签词");
            }
        }
        Ok(())
    }

    /// 每个用例的慢阈值（毫秒）
    pub fn case_slow_ms(&self) -> u128 {
        self.case_slow.as_millis()
    }

    /// 总耗时的慢阈值（毫秒）
    pub fn total_slow_ms(&self) -> u128 {
        self.total_slow.as_millis()
    }
}
