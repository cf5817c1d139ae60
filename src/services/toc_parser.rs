//! 目录解析服务 - 业务能力层
//!
//! 职责：
//! - 把目录文档的锚点还原成 Part -> Chapter 层级
//! - 只处理单个文档的原始标记
//! - 不关心文档从哪来、选中哪章

use anyhow::Result;
use tracing::debug;

use crate::models::toc::{Toc, TocPart};
use crate::services::classify::{self, AnchorTag};
use crate::services::markup;

/// 目录解析服务
pub struct TocParser;

impl TocParser {
    pub fn new() -> Self {
        Self
    }

    /// 解析目录文档，返回 Part -> Chapter 层级
    ///
    /// # 参数
    /// - `html`: 目录文档的原始标记
    ///
    /// # 返回
    /// 输出顺序与锚点顺序一致；空 Part 已删除。
    /// 无法识别的锚点静默跳过，没有致命错误。
    pub fn parse(&self, html: &str) -> Result<Toc> {
        let mut toc = Toc::default();
        let mut current_part: Option<TocPart> = None;

        for anchor in markup::find_anchors(html)? {
            match classify::classify_anchor(&anchor)? {
                AnchorTag::Part { title } => {
                    // 新 Part 开始，前一个 Part 收尾
                    if let Some(part) = current_part.take() {
                        toc.parts.push(part);
                    }
                    current_part = Some(TocPart::new(title));
                }
                AnchorTag::Chapter { title, href } => match current_part.as_mut() {
                    Some(part) => {
                        part.chapters.insert(title, href);
                    }
                    None => {
                        // 还没遇到任何 Part 的章节锚点当作噪音丢弃
                        debug!("丢弃无 Part 归属的章节锚点: {}", title);
                    }
                },
                AnchorTag::Unrecognized => {}
            }
        }

        if let Some(part) = current_part.take() {
            toc.parts.push(part);
        }

        toc.prune_empty_parts();
        Ok(toc)
    }
}

impl Default for TocParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_HTML: &str = r#"
        <a href="intro.xhtml#intro">Introduction</a>
        <a href="part1.xhtml#part1">Part I Threats, Attacks, and Vulnerabilities</a>
        <a href="ch01.xhtml#ch01">Chapter 1 Social Engineering</a>
        <a href="ch02.xhtml#ch02">Chapter 2 Malware</a>
        <a href="part2.xhtml#part2">Part II Architecture and Design</a>
        <a href="ch03.xhtml#ch03">Chapter 3 Secure Protocols</a>
        <a href="part3.xhtml#part3">Part III Appendix Material</a>
    "#;

    #[test]
    fn test_parse_builds_hierarchy_in_document_order() {
        let toc = TocParser::new().parse(INDEX_HTML).unwrap();

        assert_eq!(toc.parts.len(), 2);
        assert_eq!(
            toc.parts[0].name,
            "Part I Threats, Attacks, and Vulnerabilities"
        );
        let chapters: Vec<_> = toc.parts[0].chapters.keys().cloned().collect();
        assert_eq!(
            chapters,
            vec!["Chapter 1 Social Engineering", "Chapter 2 Malware"]
        );
        assert_eq!(
            toc.parts[0].chapters["Chapter 1 Social Engineering"],
            "ch01.xhtml"
        );
        assert_eq!(toc.parts[1].name, "Part II Architecture and Design");
    }

    #[test]
    fn test_parse_prunes_empty_parts() {
        let toc = TocParser::new().parse(INDEX_HTML).unwrap();
        // Part III 没有任何章节，不能出现在结果里
        assert!(toc.parts.iter().all(|p| !p.chapters.is_empty()));
        assert!(!toc.parts.iter().any(|p| p.name.starts_with("Part III")));
    }

    #[test]
    fn test_parse_drops_chapter_before_any_part() {
        let html = r#"
            <a href="ch00.xhtml#ch00">Chapter 9 Orphan</a>
            <a href="part1.xhtml#part1">Part I Real</a>
            <a href="ch01.xhtml#ch01">Chapter 1 Kept</a>
        "#;
        let toc = TocParser::new().parse(html).unwrap();
        assert_eq!(toc.parts.len(), 1);
        assert_eq!(toc.parts[0].chapters.len(), 1);
        assert!(toc.parts[0].chapters.contains_key("Chapter 1 Kept"));
    }

    #[test]
    fn test_parse_empty_document() {
        let toc = TocParser::new().parse("<p>no anchors here</p>").unwrap();
        assert!(toc.is_empty());
    }
}
