//! 期望输出转换
//!
//! 把输出子句转换成可以直接嵌入生成代码的字面量。按以下顺序判断，先匹配者生效：
//! 数字、`true`/`false`/`null`、方括号或花括号包裹的结构，其余一律当作字符串。

use anyhow::Result;
use regex::Regex;

use crate::description::LabelTokenizer;
use crate::utils;

/// 字面量类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Number,
    Keyword,
    Structure,
    Text,
}

/// 期望输出转换器
#[derive(Debug, Clone)]
pub struct LiteralCoercer {
    tokenizer: LabelTokenizer,
    number_re: Regex,
}

impl LiteralCoercer {
    pub fn new(tokenizer: LabelTokenizer) -> Result<Self> {
        Ok(Self {
            tokenizer,
            number_re: Regex::new(r"^-?\d+(\.\d+)?$")?,
        })
    }

    /// 判断去掉标签后的文本属于哪种字面量
    pub fn classify(&self, text: &str) -> LiteralKind {
        if self.number_re.is_match(text) {
            LiteralKind::Number
        } else if matches!(text, "true" | "false" | "null") {
            LiteralKind::Keyword
        } else if (text.starts_with('[') && text.ends_with(']'))
            || (text.starts_with('{') && text.ends_with('}'))
        {
            LiteralKind::Structure
        } else {
            LiteralKind::Text
        }
    }

    /// 把输出子句转换成字面量表达式
    pub fn coerce(&self, raw: &str) -> String {
        let text = self.tokenizer.strip_leading_label(raw);
        match self.classify(&text) {
            LiteralKind::Number | LiteralKind::Keyword | LiteralKind::Structure => text,
            LiteralKind::Text => {
                let mut inner = text.as_str();
                if let Some(rest) = inner.strip_prefix('"') {
                    inner = rest;
                }
                if let Some(rest) = inner.strip_suffix('"') {
                    inner = rest;
                }
                utils::quote_literal(inner)
            }
        }
    }
}
