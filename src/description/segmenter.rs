//! 示例分段
//!
//! 找到每个 "示例 N：" 标题，再取标题所在结构块之后第一个非空的兄弟块作为示例内容。

use log::debug;

use super::{Block, Description, LabelTokenizer, NodeKind};

/// 示例标题在描述中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderPosition {
    /// 标题在所有标题中的序号（从 0 开始），只用于保持文档顺序
    pub ordinal: usize,
    /// 标题所在结构块的下标
    pub block_index: usize,
    /// 标题节点在块内的下标
    pub node_index: usize,
}

/// 一个示例标题及其内容块
#[derive(Debug, Clone, Copy)]
pub struct RawExampleBlock<'a> {
    pub header_index: usize,
    pub content: &'a Block,
}

impl RawExampleBlock<'_> {
    /// 内容块展平后的文本
    pub fn content_text(&self) -> String {
        self.content.flattened_text()
    }
}

/// 示例分段器
#[derive(Debug, Clone)]
pub struct ExampleSegmenter {
    tokenizer: LabelTokenizer,
}

impl ExampleSegmenter {
    pub fn new(tokenizer: LabelTokenizer) -> Self {
        Self { tokenizer }
    }

    /// 按文档顺序找出所有示例标题
    ///
    /// 标题必须是单独的强调节点，且整段文本就是 "示例 N："。
    pub fn locate_headers(&self, description: &Description) -> Vec<HeaderPosition> {
        let mut headers = Vec::new();
        for (block_index, block) in description.blocks.iter().enumerate() {
            for (node_index, node) in block.nodes.iter().enumerate() {
                if node.kind == NodeKind::Label && self.tokenizer.is_example_header(&node.text) {
                    headers.push(HeaderPosition {
                        ordinal: headers.len(),
                        block_index,
                        node_index,
                    });
                }
            }
        }
        debug!("找到 {} 个示例标题", headers.len());
        headers
    }

    /// 找到标题对应的内容块
    ///
    /// 从标题所在块的下一个兄弟开始，跳过空块。没有非空兄弟时返回 `None`。
    pub fn block_for<'a>(
        &self,
        description: &'a Description,
        header: &HeaderPosition,
    ) -> Option<RawExampleBlock<'a>> {
        description
            .blocks
            .iter()
            .skip(header.block_index + 1)
            .find(|block| !block.is_blank())
            .map(|content| RawExampleBlock {
                header_index: header.ordinal,
                content,
            })
    }

    /// 找出所有示例内容块，没有内容块的标题直接跳过
    pub fn segment<'a>(&self, description: &'a Description) -> Vec<RawExampleBlock<'a>> {
        self.locate_headers(description)
            .iter()
            .filter_map(|header| {
                let block = self.block_for(description, header);
                if block.is_none() {
                    debug!("示例 #{} 没有内容块，跳过", header.ordinal + 1);
                }
                block
            })
            .collect()
    }
}
