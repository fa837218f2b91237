//! 测试生成流水线
//!
//! 把各个阶段串起来：示例分段、示例内容解析、参数拆分、期望值转换、函数名推断、脚本生成。
//! 每次调用都从快照重新推导全部结果，不保留任何状态。

use anyhow::Result;
use log::{debug, info, warn};

use crate::codegen::{
    ArgumentSplitter, FunctionNameResolver, HarnessGenerator, LiteralCoercer, TestCase,
};
use crate::config::GeneratorConfig;
use crate::description::{
    Description, ExampleSegmenter, LabelTokenizer, ParsedExample, SectionWalker,
};
use crate::snapshot::PageSnapshot;

/// 测试生成器
///
/// 所有正则在构造时编译一次，之后只做只读使用。
#[derive(Debug, Clone)]
pub struct TestGenerator {
    tokenizer: LabelTokenizer,
    segmenter: ExampleSegmenter,
    walker: SectionWalker,
    splitter: ArgumentSplitter,
    coercer: LiteralCoercer,
    resolver: FunctionNameResolver,
    harness: HarnessGenerator,
}

impl TestGenerator {
    /// 根据配置创建生成器，标签词无效时返回错误
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        let tokenizer = LabelTokenizer::new(&config.labels)?;
        Ok(Self {
            segmenter: ExampleSegmenter::new(tokenizer.clone()),
            walker: SectionWalker::new(tokenizer.clone()),
            splitter: ArgumentSplitter::new(tokenizer.clone())?,
            coercer: LiteralCoercer::new(tokenizer.clone())?,
            resolver: FunctionNameResolver::new(config.fallback_function_name.clone())?,
            harness: HarnessGenerator::new(config.case_slow_ms(), config.total_slow_ms()),
            tokenizer,
        })
    }

    /// 生成器使用的标签识别器，构建快照时也需要它
    pub fn tokenizer(&self) -> &LabelTokenizer {
        &self.tokenizer
    }

    /// 抽取描述中所有格式完整的示例
    pub fn extract_examples(&self, description: &Description) -> Vec<ParsedExample> {
        let blocks = self.segmenter.segment(description);
        let examples: Vec<ParsedExample> = blocks
            .iter()
            .filter_map(|raw| self.walker.extract(raw))
            .collect();
        if examples.len() < blocks.len() {
            warn!(
                "{} 个示例中有 {} 个无法解析，已跳过",
                blocks.len(),
                blocks.len() - examples.len()
            );
        }
        debug!("抽取到 {} 个示例", examples.len());
        examples
    }

    /// 把示例转换成测试用例
    pub fn build_case(&self, example: &ParsedExample) -> TestCase {
        TestCase {
            args: self.splitter.parse_arguments(&example.input),
            expected: self.coercer.coerce(&example.output),
            comment: TestCase::comment_for(&example.input, &example.output),
        }
    }

    pub fn build_cases(&self, description: &Description) -> Vec<TestCase> {
        self.extract_examples(description)
            .iter()
            .map(|example| self.build_case(example))
            .collect()
    }

    pub fn resolve_function_name(&self, snapshot: &PageSnapshot) -> String {
        self.resolver.resolve(snapshot)
    }

    /// 生成完整的测试脚本
    pub fn generate(&self, snapshot: &PageSnapshot) -> String {
        let cases = self.build_cases(&snapshot.description);
        let function_name = self.resolve_function_name(snapshot);
        if cases.is_empty() {
            warn!("没有找到可用的示例，生成的脚本不包含用例");
        }
        info!("为函数 {function_name} 生成 {} 个测试用例", cases.len());
        self.harness.generate(&cases, &function_name)
    }
}
