//! 纯文本快照
//!
//! 纯文本题目描述，可以带 YAML 前置数据提供编辑器上下文：
//!
//! ```text
//! ---
//! editor_line: "var romanToInt = function(s) {"
//! code_samples: ["romanToInt(s)"]
//! ---
//! 示例 1：
//!
//! 输入：s = "III"
//! 输出：3
//! ```
//!
//! 示例标题单独成块；连续的非空行组成一个块，空行结束当前块。

use anyhow::{Context, Result};
use log::debug;
use regex::Regex;
use serde::Deserialize;

use super::{EditorContext, PageSnapshot};
use crate::description::{Block, Description, LabelTokenizer, Node};

/// 纯文本快照的 YAML 前置数据
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TextFrontMatter {
    pub editor_line: Option<String>,
    pub editor_buffer: Option<String>,
    pub code_samples: Vec<String>,
}

/// 从内容中分离 YAML 前置数据，没有前置数据时返回空字符串
fn extract_front_matter(content: &str) -> Result<(&str, &str)> {
    let re = Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---[ \t]*(?:\r?\n(.*))?\z")?;
    match re.captures(content) {
        Some(caps) => {
            let yaml = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            debug!("提取到 YAML 前置数据，长度: {} 字节", yaml.len());
            Ok((yaml, body))
        }
        None => Ok(("", content)),
    }
}

/// 解析 YAML 前置数据
fn parse_front_matter(yaml: &str) -> Result<TextFrontMatter> {
    if yaml.trim().is_empty() {
        return Ok(TextFrontMatter::default());
    }
    serde_yaml::from_str(yaml).with_context(|| "无法解析 YAML 前置数据")
}

/// 把一段行内文本拆成普通文本节点和代码节点，反引号包裹的部分视为代码
fn push_inline(nodes: &mut Vec<Node>, code_samples: &mut Vec<String>, text: &str, code_re: &Regex) {
    let mut last = 0;
    for caps in code_re.captures_iter(text) {
        let (Some(whole), Some(code)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            nodes.push(Node::text(&text[last..whole.start()]));
        }
        nodes.push(Node::code(code.as_str()));
        code_samples.push(code.as_str().to_string());
        last = whole.end();
    }
    if last < text.len() {
        nodes.push(Node::text(&text[last..]));
    }
}

/// 解析纯文本题目描述
pub fn parse_text(content: &str, tokenizer: &LabelTokenizer) -> Result<PageSnapshot> {
    let (yaml, body) = extract_front_matter(content)?;
    let front_matter = parse_front_matter(yaml)?;
    let code_re = Regex::new(r"`([^`\n]+)`")?;

    let mut blocks = Vec::new();
    let mut code_samples = front_matter.code_samples.clone();
    let mut current: Vec<Node> = Vec::new();
    // 示例内容块可以跨越空行，直到下一个标题，或空行后出现不以标签开头的行
    let mut in_example = false;
    let mut pending_blank = false;

    for raw_line in body.lines() {
        let line = raw_line.replace('\u{a0}', " ");
        if line.trim().is_empty() {
            if !current.is_empty() {
                if in_example {
                    pending_blank = true;
                } else {
                    blocks.push(Block::new(std::mem::take(&mut current)));
                }
            }
            continue;
        }

        if tokenizer.is_example_header(&line) {
            if !current.is_empty() {
                blocks.push(Block::new(std::mem::take(&mut current)));
            }
            blocks.push(Block::new(vec![Node::label(line.trim())]));
            in_example = true;
            pending_blank = false;
            continue;
        }

        let label = tokenizer.split_line_label(&line);
        if pending_blank {
            pending_blank = false;
            if label.is_none() {
                blocks.push(Block::new(std::mem::take(&mut current)));
                in_example = false;
            }
        }

        if !current.is_empty() {
            current.push(Node::text("\n"));
        }
        match label {
            Some((label, rest)) => {
                current.push(Node::label(label.trim()));
                push_inline(&mut current, &mut code_samples, rest, &code_re);
            }
            None => push_inline(&mut current, &mut code_samples, &line, &code_re),
        }
    }
    if !current.is_empty() {
        blocks.push(Block::new(current));
    }

    debug!(
        "纯文本描述解析出 {} 个结构块，{} 个代码片段",
        blocks.len(),
        code_samples.len()
    );

    Ok(PageSnapshot {
        description: Description { blocks, code_samples },
        editor: EditorContext {
            line: front_matter.editor_line,
            buffer: front_matter.editor_buffer,
        },
    })
}
