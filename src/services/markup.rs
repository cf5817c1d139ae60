//! 标记文本扫描 - 业务能力层
//!
//! 书籍文档的标记松散且不规范，唯一可靠的信号是元素的
//! class 名和锚点 id 前缀约定，所以这里只做正则级别的扫描，
//! 不引入完整的 HTML 解析。

use anyhow::Result;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// 目录文档中的一个链接锚点
#[derive(Debug, Clone, PartialEq)]
pub struct Anchor {
    /// href 中 # 之前的部分（文档链接）
    pub href: String,
    /// href 中 # 之后的部分（文档内片段）
    pub fragment: String,
    /// 链接的显示文本
    pub text: String,
}

/// 章节文档中的一个带 class 的段落
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub class: String,
    /// 段落内嵌锚点的 id（没有则为 None）
    pub anchor_id: Option<String>,
    /// 去掉标签后的纯文本
    pub text: String,
}

/// 按文档顺序扫描所有 `<a href="...#...">` 锚点
pub fn find_anchors(html: &str) -> Result<Vec<Anchor>> {
    let re = Regex::new(r##"(?s)<a href="([^"#]*)#([^"]*)"[^>]*>(.*?)</a>"##)?;

    let anchors = re
        .captures_iter(html)
        .map(|cap| Anchor {
            href: cap[1].to_string(),
            fragment: cap[2].to_string(),
            text: strip_tags(&cap[3]),
        })
        .collect();
    Ok(anchors)
}

/// 按文档顺序扫描所有带 class 的 `<p>` 段落
///
/// 段落的分类（题目 / 选项 / 无关）交给 `classify` 模块。
pub fn find_paragraphs(html: &str) -> Result<Vec<Paragraph>> {
    let re = Regex::new(r#"(?s)<p class="([^"]+)"[^>]*>(.*?)</p>"#)?;
    let id_re = Regex::new(r#"<a[^>]*\bid="([^"]+)""#)?;

    let paragraphs = re
        .captures_iter(html)
        .map(|cap| {
            let inner = &cap[2];
            let anchor_id = id_re.captures(inner).map(|c| c[1].to_string());
            Paragraph {
                class: cap[1].to_string(),
                anchor_id,
                text: strip_tags(inner),
            }
        })
        .collect();
    Ok(paragraphs)
}

/// 去掉片段里的全部标签，留下纯文本
pub fn strip_tags(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    let mut in_tag = false;
    for c in fragment.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

/// Unicode 规范分解归一化（NFKD）
///
/// 源文档里混有全角标点和组合字符，归一化后再做模式匹配。
pub fn normalize(text: &str) -> String {
    text.nfkd().collect::<String>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_anchors() {
        let html = r#"<a href="part1.xhtml#part1">Part I Threats</a>
            <a href="ch01.xhtml#ch01">Chapter 1 Firewalls</a>
            <a href="plain.xhtml">no fragment</a>"#;
        let anchors = find_anchors(html).unwrap();
        assert_eq!(anchors.len(), 2);
        assert_eq!(anchors[0].href, "part1.xhtml");
        assert_eq!(anchors[0].fragment, "part1");
        assert_eq!(anchors[0].text, "Part I Threats");
    }

    #[test]
    fn test_find_paragraphs_with_anchor_id() {
        let html = r#"<p class="ques"><a id="r_1"></a>1. What is a firewall?</p>
            <p class="alpha">A. A router</p>"#;
        let paragraphs = find_paragraphs(html).unwrap();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].class, "ques");
        assert_eq!(paragraphs[0].anchor_id.as_deref(), Some("r_1"));
        assert_eq!(paragraphs[0].text, "1. What is a firewall?");
        assert_eq!(paragraphs[1].anchor_id, None);
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<b>bold</b> text"), "bold text");
        assert_eq!(strip_tags("no tags"), "no tags");
    }

    #[test]
    fn test_normalize_nfkd() {
        // 不换行空格归一化为普通空格
        assert_eq!(normalize("1.\u{a0}text"), "1. text");
    }
}
