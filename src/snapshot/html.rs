//! HTML 快照
//!
//! 从保存下来的题目页面中取出描述区域、行内代码和编辑器内容。
//! 描述区域的每个子元素是一个结构块；`<strong>`/`<b>` 中的文本是标签节点，
//! `<code>` 中的文本是代码节点，`<br>` 和块级元素的结尾贡献一个换行。

use log::debug;
use scraper::{ElementRef, Html, Selector};

use super::{EditorContext, PageSnapshot};
use crate::description::{Block, Description, Node, NodeKind};
use crate::utils;

/// 描述区域的候选选择器，按优先级排列
const DESCRIPTION_ROOTS: [&str; 2] = [
    r#"[data-track-load="description_content"]"#,
    r#"[data-cy="question-detail-description"]"#,
];

const EDITOR_LINE: &str = ".monaco-mouse-cursor-text";
const EDITOR_BUFFER: &str = r#"textarea, [role="textbox"]"#;

const BLOCK_ELEMENTS: [&str; 12] = [
    "p", "div", "pre", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6",
];

fn select_first<'a>(scope: ElementRef<'a>, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    scope.select(&selector).next()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().replace('\u{a0}', " ")
}

/// 找到描述区域，找不到时退回到 `<body>` 或整个文档
fn description_root(document: &Html) -> ElementRef<'_> {
    let html = document.root_element();
    DESCRIPTION_ROOTS
        .iter()
        .find_map(|css| select_first(html, css))
        .or_else(|| select_first(html, "body"))
        .unwrap_or(html)
}

/// 剥掉只有一个子元素的包装层
fn unwrap_wrappers(mut root: ElementRef<'_>) -> ElementRef<'_> {
    loop {
        let mut children = root.children().filter_map(ElementRef::wrap);
        let only_child = match (children.next(), children.next()) {
            (Some(child), None) => child,
            _ => return root,
        };
        let has_own_text = root
            .children()
            .filter_map(|c| c.value().as_text().map(|t| utils::normalize_line(t)))
            .any(|t| !t.is_empty());
        if has_own_text {
            return root;
        }
        root = only_child;
    }
}

fn kind_for(name: &str, inherited: NodeKind) -> NodeKind {
    match (name, inherited) {
        ("strong" | "b", _) => NodeKind::Label,
        ("code", NodeKind::Text) => NodeKind::Code,
        _ => inherited,
    }
}

/// 按文档顺序收集元素下的叶子文本节点
fn collect_nodes(element: ElementRef<'_>, kind: NodeKind, out: &mut Vec<Node>) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            let name = child_element.value().name();
            match name {
                "br" => out.push(Node::text("\n")),
                "script" | "style" => {}
                _ => {
                    collect_nodes(child_element, kind_for(name, kind), out);
                    if BLOCK_ELEMENTS.contains(&name) && !out.is_empty() {
                        out.push(Node::text("\n"));
                    }
                }
            }
        } else if let Some(text) = child.value().as_text() {
            let text = text.replace('\u{a0}', " ");
            if !text.is_empty() {
                out.push(Node { kind, text });
            }
        }
    }
}

/// 把描述区域展平成结构块
fn collect_blocks(root: ElementRef<'_>) -> Vec<Block> {
    let mut blocks = Vec::new();
    for child in root.children() {
        if let Some(element) = ElementRef::wrap(child) {
            let mut nodes = Vec::new();
            collect_nodes(element, kind_for(element.value().name(), NodeKind::Text), &mut nodes);
            blocks.push(Block::new(nodes));
        } else if let Some(text) = child.value().as_text() {
            if !utils::normalize_line(text).is_empty() {
                blocks.push(Block::new(vec![Node::text(text.replace('\u{a0}', " "))]));
            }
        }
    }
    blocks
}

/// 解析题目页面 HTML
pub fn parse_html(content: &str) -> PageSnapshot {
    let document = Html::parse_document(content);
    let root = unwrap_wrappers(description_root(&document));
    let blocks = collect_blocks(root);

    let code_samples: Vec<String> = match Selector::parse("code") {
        Ok(selector) => root
            .select(&selector)
            .map(|c| utils::normalize_line(&element_text(c)))
            .filter(|t| !t.is_empty())
            .collect(),
        Err(_) => Vec::new(),
    };

    let html = document.root_element();
    let line = select_first(html, EDITOR_LINE)
        .map(|e| utils::normalize_line(&element_text(e)))
        .filter(|t| !t.is_empty());
    let buffer = select_first(html, EDITOR_BUFFER)
        .map(element_text)
        .filter(|t| !t.trim().is_empty());

    debug!(
        "HTML 描述解析出 {} 个结构块，{} 个代码片段，编辑器行: {}，编辑器内容: {}",
        blocks.len(),
        code_samples.len(),
        line.is_some(),
        buffer.is_some()
    );

    PageSnapshot {
        description: Description { blocks, code_samples },
        editor: EditorContext { line, buffer },
    }
}
