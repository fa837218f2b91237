//! 标签识别
//!
//! 识别 "输入："、"Output:"、"解释：" 这类标签词，以及 "示例 1：" 这类示例标题。
//! 只有整段文本（去掉首尾空白后）恰好是一个标签时才算匹配，句子中间出现的标签词不算。

use anyhow::{Context, Result};
use log::debug;
use regex::Regex;

use crate::config::LabelWords;
use crate::utils;

/// 标签类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Input,
    Output,
    Explanation,
    None,
}

/// 标签识别器
///
/// 所有正则在构造时根据配置的标签词编译一次。
#[derive(Debug, Clone)]
pub struct LabelTokenizer {
    input_re: Regex,
    output_re: Regex,
    explanation_re: Regex,
    header_re: Regex,
    leading_label_re: Regex,
    line_label_re: Regex,
    inline_example_re: Regex,
}

/// 把一组标签词拼成正则分支，ASCII 部分大小写不敏感
fn alternation(words: &[String]) -> String {
    let escaped: Vec<String> = words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .map(regex::escape)
        .collect();
    format!("(?i:{})", escaped.join("|"))
}

/// 独立标签：可选引号、标签词、可选空白、半角或全角冒号、可选引号
fn standalone_label(words: &[String]) -> Result<Regex> {
    let pattern = format!(r#"^\s*"?\s*{}\s*[:：]\s*"?\s*$"#, alternation(words));
    Regex::new(&pattern).with_context(|| format!("无效的标签正则: {pattern}"))
}

impl LabelTokenizer {
    /// 根据标签词配置创建识别器
    pub fn new(words: &LabelWords) -> Result<Self> {
        let input = alternation(&words.input);
        let output = alternation(&words.output);
        let explanation = alternation(&words.explanation);
        let example = alternation(&words.example);

        let header = format!(r#"^\s*"?\s*{example}\s*\d+\s*[:：]\s*"?\s*$"#);
        let leading = format!(r#"^\s*(?:"(?:{input}|{output})\s*[:：]"|(?:{input}|{output})\s*[:：])\s*"#);
        let line_label = format!(
            r#"^\s*(?:"(?:{input}|{output}|{explanation})\s*[:：]"|(?:{input}|{output}|{explanation})\s*[:：])"#
        );
        // 输入标签、最短输入文本、输出标签、最短输出文本、可选的解释及其后的全部内容
        let inline = format!(
            r"(?s){input}[:：]\s*(.*?)\s*{output}[:：]\s*(.*?)(?:\s*{explanation}[:：].*)?$"
        );
        debug!("示例标题正则: {header}");
        debug!("单次匹配正则: {inline}");

        Ok(Self {
            input_re: standalone_label(&words.input)?,
            output_re: standalone_label(&words.output)?,
            explanation_re: standalone_label(&words.explanation)?,
            header_re: Regex::new(&header)
                .with_context(|| format!("无效的示例标题正则: {header}"))?,
            leading_label_re: Regex::new(&leading)
                .with_context(|| format!("无效的标签正则: {leading}"))?,
            line_label_re: Regex::new(&line_label)
                .with_context(|| format!("无效的标签正则: {line_label}"))?,
            inline_example_re: Regex::new(&inline)
                .with_context(|| format!("无效的示例正则: {inline}"))?,
        })
    }

    /// 判断一段文本是哪种标签
    pub fn classify(&self, span: &str) -> LabelKind {
        let span = span.replace('\u{a0}', " ");
        if self.input_re.is_match(&span) {
            LabelKind::Input
        } else if self.output_re.is_match(&span) {
            LabelKind::Output
        } else if self.explanation_re.is_match(&span) {
            LabelKind::Explanation
        } else {
            LabelKind::None
        }
    }

    /// 判断一段文本是否为示例标题，例如 "示例 1：" 或 "Example 2:"
    pub fn is_example_header(&self, span: &str) -> bool {
        self.header_re.is_match(&span.replace('\u{a0}', " "))
    }

    /// 去掉开头的输入/输出标签并折叠空白
    pub fn strip_leading_label(&self, text: &str) -> String {
        let collapsed = utils::collapse_lines(text);
        self.leading_label_re.replace(&collapsed, "").trim().to_string()
    }

    /// 拆出行首的输入/输出/解释标签，返回 (标签, 其余文本)
    pub fn split_line_label<'t>(&self, line: &'t str) -> Option<(&'t str, &'t str)> {
        let m = self.line_label_re.find(line)?;
        Some((&line[..m.end()], &line[m.end()..]))
    }

    /// 单次匹配整块文本，返回原始的输入、输出子句
    pub fn match_inline<'t>(&self, text: &'t str) -> Option<(&'t str, &'t str)> {
        let caps = self.inline_example_re.captures(text)?;
        let input = caps.get(1)?.as_str();
        let output = caps.get(2)?.as_str();
        Some((input, output))
    }
}
