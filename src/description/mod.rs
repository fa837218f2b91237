//! 题目描述的结构化表示与示例抽取。
//!
//! 描述被展平成一串结构块（段落、`<pre>`、列表等），每个块又是一串按文档顺序排列的
//! 叶子文本节点。示例抽取只依赖这个表示，不依赖任何具体的文档对象模型。

use serde::{Deserialize, Serialize};

mod label;
mod segmenter;
mod walker;

pub use label::{LabelKind, LabelTokenizer};
pub use segmenter::{ExampleSegmenter, HeaderPosition, RawExampleBlock};
pub use walker::SectionWalker;

use crate::utils;

/// 叶子文本节点的类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// 强调元素中的文本（`<strong>`、`<b>`，或纯文本行首的标签）
    Label,
    /// 普通文本
    Text,
    /// 代码元素中的文本
    Code,
}

/// 结构块中的一个叶子文本节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    pub text: String,
}

impl Node {
    pub fn label(text: impl Into<String>) -> Self {
        Self { kind: NodeKind::Label, text: text.into() }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self { kind: NodeKind::Text, text: text.into() }
    }

    pub fn code(text: impl Into<String>) -> Self {
        Self { kind: NodeKind::Code, text: text.into() }
    }
}

/// 一个结构块，对应文档中的一个兄弟元素
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub nodes: Vec<Node>,
}

impl Block {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    /// 所有节点文本按顺序拼接后的结果
    pub fn flattened_text(&self) -> String {
        self.nodes.iter().map(|n| n.text.as_str()).collect()
    }

    /// 规范化后是否为空
    pub fn is_blank(&self) -> bool {
        self.nodes.iter().all(|n| utils::normalize_line(&n.text).is_empty())
    }
}

/// 题目描述
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    /// 按文档顺序排列的结构块
    pub blocks: Vec<Block>,
    /// 描述中的行内代码片段
    pub code_samples: Vec<String>,
}

/// 一个示例的输入、输出子句
///
/// 两个字段都已去掉标签并折叠了空白；任一字段为空的示例会被丢弃。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExample {
    pub input: String,
    pub output: String,
}

impl ParsedExample {
    /// 两个子句都非空时才构造示例
    pub fn new(input: String, output: String) -> Option<Self> {
        if input.is_empty() || output.is_empty() {
            None
        } else {
            Some(Self { input, output })
        }
    }
}
