//! 示例内容解析
//!
//! 先对整块文本做一次正则匹配（"输入：… 输出：… 解释：…" 这种常见的格式）；
//! 匹配失败时再按节点顺序逐个扫描，根据标签切换收集模式。

use log::debug;

use super::{Block, LabelKind, LabelTokenizer, NodeKind, ParsedExample, RawExampleBlock};
use crate::utils;

/// 扫描状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WalkState {
    Neutral,
    CollectingInput,
    CollectingOutput,
}

/// 示例内容解析器
#[derive(Debug, Clone)]
pub struct SectionWalker {
    tokenizer: LabelTokenizer,
}

impl SectionWalker {
    pub fn new(tokenizer: LabelTokenizer) -> Self {
        Self { tokenizer }
    }

    /// 解析一个示例内容块
    ///
    /// 单次匹配成功时直接采用其结果（即使某一侧为空导致示例被丢弃），否则逐节点扫描。
    pub fn extract(&self, raw: &RawExampleBlock<'_>) -> Option<ParsedExample> {
        let text = raw.content_text();
        let text = utils::normalize_line(&text);
        if text.is_empty() {
            return None;
        }

        if let Some((input, output)) = self.tokenizer.match_inline(&text) {
            debug!("示例 #{} 单次匹配成功", raw.header_index + 1);
            let example = ParsedExample::new(
                self.tokenizer.strip_leading_label(input),
                self.tokenizer.strip_leading_label(output),
            );
            if example.is_none() {
                debug!("示例 #{} 的输入或输出为空，丢弃", raw.header_index + 1);
            }
            return example;
        }

        debug!("示例 #{} 单次匹配失败，逐节点扫描", raw.header_index + 1);
        let example = self.walk(raw.content);
        if example.is_none() {
            debug!("示例 #{} 扫描后输入或输出为空，丢弃", raw.header_index + 1);
        }
        example
    }

    /// 逐节点扫描
    pub fn walk(&self, block: &Block) -> Option<ParsedExample> {
        let mut state = WalkState::Neutral;
        let mut input_parts: Vec<String> = Vec::new();
        let mut output_parts: Vec<String> = Vec::new();

        for node in &block.nodes {
            if node.kind == NodeKind::Label {
                let next = match self.tokenizer.classify(&node.text) {
                    LabelKind::Input => Some(WalkState::CollectingInput),
                    LabelKind::Output => Some(WalkState::CollectingOutput),
                    LabelKind::Explanation => Some(WalkState::Neutral),
                    LabelKind::None => None,
                };
                if let Some(next) = next {
                    state = next;
                    continue;
                }
            }

            let text = utils::collapse_lines(&node.text);
            if text.is_empty() {
                continue;
            }
            match state {
                WalkState::CollectingInput => input_parts.push(text),
                WalkState::CollectingOutput => output_parts.push(text),
                WalkState::Neutral => {}
            }
        }

        let input = self.tokenizer.strip_leading_label(&input_parts.join(" "));
        let output = self.tokenizer.strip_leading_label(&output_parts.join(" "));
        ParsedExample::new(input, output)
    }
}
