//! 松散标记的分类器 - 业务能力层
//!
//! 把目录锚点和章节段落归类为带标签的变体
//! （Part / Chapter / 题目 / 答案 / 选项 / 无关），
//! 每个标签一个纯函数，方便用字面量直接测试。

use anyhow::Result;
use regex::Regex;

use crate::services::markup::Anchor;

/// 题目段落锚点 id 的前缀；带前缀的是题目，不带的是答案
const QUESTION_ID_PREFIX: &str = "r_";

/// 目录锚点的分类结果
#[derive(Debug, Clone, PartialEq)]
pub enum AnchorTag {
    /// "Part" + 罗马数字
    Part { title: String },
    /// "Chapter" + 1-2 位数字
    Chapter { title: String, href: String },
    /// 其他锚点一律忽略
    Unrecognized,
}

/// 测验段落的角色，由锚点 id 的前缀约定决定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizRole {
    Question,
    Answer,
}

/// 对目录锚点按显示文本分类
pub fn classify_anchor(anchor: &Anchor) -> Result<AnchorTag> {
    let part_re = Regex::new(r"^Part\s+[IVXLCDM]+\b")?;
    let chapter_re = Regex::new(r"^Chapter\s+[1-9][0-9]?\b")?;

    let text = anchor.text.trim();
    let tag = if part_re.is_match(text) {
        AnchorTag::Part {
            title: text.to_string(),
        }
    } else if chapter_re.is_match(text) {
        AnchorTag::Chapter {
            title: text.to_string(),
            href: anchor.href.clone(),
        }
    } else {
        AnchorTag::Unrecognized
    };
    Ok(tag)
}

/// 段落 class 是否标记为测验段落（题目/答案两个版式变体）
pub fn is_quiz_class(class: &str) -> bool {
    class == "ques" || class == "ques1"
}

/// 段落 class 是否标记为选项段落
pub fn is_choice_class(class: &str) -> bool {
    class == "alpha"
}

/// 从锚点 id 解析规范化题目键和段落角色
///
/// 题目段落和后面的答案段落共享去掉前缀后的同一个键。
pub fn canonical_key(anchor_id: &str) -> (String, QuizRole) {
    match anchor_id.strip_prefix(QUESTION_ID_PREFIX) {
        Some(key) => (key.to_string(), QuizRole::Question),
        None => (anchor_id.to_string(), QuizRole::Answer),
    }
}

/// 去掉题干前面的序号标签
///
/// 不同版次的标签宽度不同（2 或 3 个字符），指定 `width` 时按
/// 固定宽度截断，否则按 `^数字. ` 模式自动识别。
pub fn strip_ordinal_label(text: &str, width: Option<usize>) -> Result<String> {
    let stripped = match width {
        Some(n) => text.chars().skip(n).collect::<String>(),
        None => {
            let re = Regex::new(r"^\s*\d{1,2}\.\s*")?;
            re.replace(text, "").into_owned()
        }
    };
    Ok(stripped.trim().to_string())
}

/// 解析答案段落文本
///
/// 预期格式：`<题号>.<以大写字母结尾的答案字母表>.<解析>`，
/// 字母表中可能用 "and" 或逗号连接多个答案。
/// 不符合格式时返回 None，由调用方报非致命警告。
pub fn parse_answer_text(text: &str) -> Result<Option<(Vec<char>, String)>> {
    let re = Regex::new(r"(?s)^(\d+)\.(.*[A-Z])\.(.*)$")?;

    let caps = match re.captures(text.trim()) {
        Some(caps) => caps,
        None => return Ok(None),
    };

    // "BandD" / "B, D" -> ['B', 'D']：先去掉连接词和空白再按逗号拆分
    let letters: Vec<char> = caps[2]
        .replace("and", ",")
        .replace(char::is_whitespace, "")
        .split(',')
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.chars().next())
        .collect();

    if letters.is_empty() {
        return Ok(None);
    }

    let explanation = caps[3].trim_start().to_string();
    Ok(Some((letters, explanation)))
}
