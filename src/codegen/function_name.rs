//! 函数名推断
//!
//! 按来源优先级依次尝试：编辑器可见行、编辑器完整内容、描述中的行内代码。
//! 每个来源带一组按顺序尝试的正则，第一个命中的名字生效，后面的来源不再查看。
//! 全部落空时使用配置的兜底名字。

use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use std::fmt;

use crate::snapshot::PageSnapshot;
use crate::utils;

const JS_VAR: &str = r"\b(?:var|let|const)\s+([A-Za-z_$][\w$]*)\s*=\s*function\s*\(";
const JS_FUNCTION: &str = r"\bfunction\s+([A-Za-z_$][\w$]*)\s*\(";
const METHOD: &str = r"\b([A-Za-z_$][\w$]*)\s*\([^)]*\)\s*\{";
const TYPED: &str = concat!(
    r"\b(?:int|long|double|float|string|String|boolean|bool|void|char|List|vector)",
    r"\s+([A-Za-z_$][\w$]*)\s*\(",
);
const PYTHON_DEF: &str = r"\bdef\s+([A-Za-z_]\w*)\s*\(";
const RUST_GO_FN: &str = r"\b(?:fn|func)\s+([A-Za-z_]\w*)\s*\(";
const CALL: &str = r"\b([A-Za-z_$][\w$]*)\s*\(";

/// 这些关键字后面也常跟括号，但不可能是函数名
const KEYWORDS: [&str; 7] = ["if", "for", "while", "switch", "catch", "function", "return"];

/// 编辑器模板里的注释行前缀，例如链表节点定义
const COMMENT_PREFIXES: [&str; 4] = ["#", "//", "/*", "*"];

fn is_candidate(name: &str) -> bool {
    let dunder = name.len() > 4 && name.starts_with("__") && name.ends_with("__");
    !dunder && !KEYWORDS.contains(&name)
}

/// 去掉注释行，只保留代码
fn strip_comment_lines(code: &str) -> String {
    code.lines()
        .filter(|line| {
            let line = line.trim_start();
            !COMMENT_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 函数名的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    EditorLine,
    EditorBuffer,
    CodeSamples,
    Fallback,
}

impl fmt::Display for NameSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NameSource::EditorLine => "编辑器可见行",
            NameSource::EditorBuffer => "编辑器内容",
            NameSource::CodeSamples => "描述中的代码片段",
            NameSource::Fallback => "兜底名字",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone)]
struct NameRule {
    source: NameSource,
    patterns: Vec<Regex>,
}

/// 推断结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: String,
    pub source: NameSource,
}

/// 函数名推断器
#[derive(Debug, Clone)]
pub struct FunctionNameResolver {
    rules: Vec<NameRule>,
    fallback: String,
}

fn compile(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("无效的函数名正则: {p}")))
        .collect()
}

impl FunctionNameResolver {
    pub fn new(fallback: impl Into<String>) -> Result<Self> {
        let rules = vec![
            NameRule {
                source: NameSource::EditorLine,
                patterns: compile(&[JS_VAR, JS_FUNCTION])?,
            },
            NameRule {
                source: NameSource::EditorBuffer,
                patterns: compile(&[JS_VAR, JS_FUNCTION, METHOD, TYPED, PYTHON_DEF, RUST_GO_FN])?,
            },
            NameRule {
                source: NameSource::CodeSamples,
                patterns: compile(&[CALL])?,
            },
        ];
        Ok(Self {
            rules,
            fallback: fallback.into(),
        })
    }

    /// 某个来源对应的待搜索文本，按顺序排列
    fn texts_for(source: NameSource, snapshot: &PageSnapshot) -> Vec<String> {
        let texts: Vec<String> = match source {
            NameSource::EditorLine => {
                snapshot.editor.line.iter().map(|t| strip_comment_lines(t)).collect()
            }
            NameSource::EditorBuffer => {
                snapshot.editor.buffer.iter().map(|t| strip_comment_lines(t)).collect()
            }
            NameSource::CodeSamples => snapshot.description.code_samples.clone(),
            NameSource::Fallback => Vec::new(),
        };
        texts
            .iter()
            .map(|t| utils::normalize_line(t))
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// 在一段文本中按正则顺序查找第一个可用的名字，跳过关键字和 `__init__` 这类特殊方法
    fn first_name(patterns: &[Regex], text: &str) -> Option<String> {
        patterns.iter().find_map(|re| {
            re.captures_iter(text)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str())
                .find(|name| is_candidate(name))
                .map(str::to_string)
        })
    }

    /// 推断函数名，同时返回名字的来源
    pub fn resolve_with_source(&self, snapshot: &PageSnapshot) -> ResolvedName {
        for rule in &self.rules {
            let texts = Self::texts_for(rule.source, snapshot);
            if let Some(name) = texts.iter().find_map(|t| Self::first_name(&rule.patterns, t)) {
                debug!("从{}推断出函数名: {name}", rule.source);
                return ResolvedName {
                    name,
                    source: rule.source,
                };
            }
        }
        debug!("未能推断函数名，使用兜底名字: {}", self.fallback);
        ResolvedName {
            name: self.fallback.clone(),
            source: NameSource::Fallback,
        }
    }

    pub fn resolve(&self, snapshot: &PageSnapshot) -> String {
        self.resolve_with_source(snapshot).name
    }
}
