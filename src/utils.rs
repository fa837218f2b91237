//! Utility functions shared across the lc-testgen project.
//!
//! Text normalization used by every stage of the pipeline, plus the TOML loader used by
//! the configuration layer.

use anyhow::{Context, Result};
use log::error;
use serde::de::DeserializeOwned;
use std::{fs, path::Path};

/// 规范化单行文本
///
/// 把不间断空格替换为普通空格，并去掉首尾空白。
pub fn normalize_line(text: &str) -> String {
    text.replace('\u{a0}', " ").trim().to_string()
}

/// 折叠多行文本
///
/// 每行先做 [`normalize_line`]，丢弃空行，再用单个空格连接。
/// 行内的空白保持原样，避免改变字符串字面量的内容。
pub fn collapse_lines(text: &str) -> String {
    text.replace('\u{a0}', " ")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 把文本编码为带转义的双引号字符串字面量
pub fn quote_literal(text: &str) -> String {
    // 字符串序列化不会失败，失败时退回手工转义
    serde_json::to_string(text).unwrap_or_else(|_| {
        format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\""))
    })
}

/// Reads a TOML file into an arbitrary struct.
///
/// # Parameters
///
/// - `path`: The path of the TOML file.
///
/// # Returns
///
/// Returns a struct of the specified type containing deserialized data.
///
/// # Errors
///
/// Returns an error if the file cannot be read or data parsing fails.
pub fn read_toml_from_file<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let content = fs::read_to_string(path)
        .with_context(|| format!("无法读取配置文件: {}", path.display()))?;
    let config: T = match toml::de::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to parse TOML file: {e}");
            return Err(e).with_context(|| format!("解析配置文件失败: {}", path.display()));
        }
    };
    Ok(config)
}
