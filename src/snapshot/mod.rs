//! 页面快照
//!
//! 生成器的输入边界：题目描述的结构块、行内代码片段，以及可选的编辑器上下文。
//! 快照可以从纯文本（带可选的 YAML 前置数据）或保存下来的页面 HTML 构建。

use serde::{Deserialize, Serialize};

mod html;
mod text;

pub use html::parse_html;
pub use text::{TextFrontMatter, parse_text};

use crate::config::InputFormat;
use crate::description::{Description, LabelTokenizer};

/// 编辑器上下文
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorContext {
    /// 编辑器中可见的一行代码
    pub line: Option<String>,
    /// 编辑器的完整内容
    pub buffer: Option<String>,
}

/// 一次生成所需的全部输入
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    pub description: Description,
    pub editor: EditorContext,
}

impl PageSnapshot {
    /// 按指定格式构建快照
    ///
    /// `Auto` 在这里按内容判断：以 `<` 开头视为 HTML。
    pub fn load(
        content: &str,
        format: InputFormat,
        tokenizer: &LabelTokenizer,
    ) -> anyhow::Result<Self> {
        match format {
            InputFormat::Html => Ok(parse_html(content)),
            InputFormat::Text => parse_text(content, tokenizer),
            InputFormat::Auto => {
                if content.trim_start().starts_with('<') {
                    Ok(parse_html(content))
                } else {
                    parse_text(content, tokenizer)
                }
            }
        }
    }

    /// 用命令行给出的编辑器内容覆盖快照中的值
    pub fn with_editor_overrides(mut self, line: Option<String>, buffer: Option<String>) -> Self {
        if line.is_some() {
            self.editor.line = line;
        }
        if buffer.is_some() {
            self.editor.buffer = buffer;
        }
        self
    }
}
