//! 题目提取服务 - 业务能力层
//!
//! 职责：
//! - 把单个章节文档的段落还原成有序题库
//! - 题目段落先注册、答案段落后补齐（两阶段）
//! - 格式不符的答案降级为非致命警告，继续提取其余题目

use std::collections::BTreeSet;
use std::fmt;

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::Config;
use crate::models::question::{QuestionBank, QuestionRecord};
use crate::services::classify::{self, QuizRole};
use crate::services::markup::{self, Paragraph};
use crate::utils::logging::truncate_text;

/// 每道题目最多收集的选项段落数
const MAX_CHOICES: usize = 4;

/// 非致命解析警告
///
/// 答案段落不符合 `<题号>.<答案字母表>.<解析>` 格式时记录，
/// 对应题目保留在题库里但没有可恢复的正确答案。
#[derive(Debug, Clone, PartialEq)]
pub struct ParseWarning {
    /// 规范化题目键
    pub key: String,
    /// 出问题的段落文本
    pub text: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "题目 {} 的答案文本不符合预期格式: {}",
            self.key,
            truncate_text(&self.text, 80)
        )
    }
}

/// 提取结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub bank: QuestionBank,
    pub warnings: Vec<ParseWarning>,
}

/// 题目提取服务
pub struct QuestionExtractor {
    /// 题干序号标签宽度（None = 自动识别）
    prompt_label_width: Option<usize>,
}

impl QuestionExtractor {
    pub fn new(config: &Config) -> Self {
        Self {
            prompt_label_width: config.prompt_label_width,
        }
    }

    /// 提取一个章节文档的全部题目
    ///
    /// # 参数
    /// - `html`: 章节文档的原始标记
    ///
    /// # 返回
    /// 有序题库 + 非致命警告。没有任何可识别段落时返回空题库，
    /// 由测验流程负责优雅结束。
    pub fn extract(&self, html: &str) -> Result<Extraction> {
        let paragraphs = markup::find_paragraphs(html)?;
        let mut extraction = Extraction::default();

        for (index, paragraph) in paragraphs.iter().enumerate() {
            if !classify::is_quiz_class(&paragraph.class) {
                continue;
            }

            let anchor_id = match paragraph.anchor_id.as_deref() {
                Some(id) => id,
                None => {
                    // 测验段落缺少锚点 id，无法确定键，按噪音跳过
                    debug!("跳过缺少锚点 id 的测验段落: {}", truncate_text(&paragraph.text, 60));
                    continue;
                }
            };

            let (key, role) = classify::canonical_key(anchor_id);
            let text = markup::normalize(&paragraph.text);

            match role {
                QuizRole::Question => {
                    let record = self.build_question(&text, &paragraphs[index + 1..])?;
                    extraction.bank.register_question(key, record);
                }
                QuizRole::Answer => {
                    self.apply_answer(&key, &text, &mut extraction)?;
                }
            }
        }

        Ok(extraction)
    }

    /// 构建"仅题目"状态的记录，并收集紧随其后的选项段落
    fn build_question(&self, text: &str, following: &[Paragraph]) -> Result<QuestionRecord> {
        let prompt = classify::strip_ordinal_label(text, self.prompt_label_width)?;
        let mut record = QuestionRecord::new(prompt);

        for paragraph in following {
            if record.choices.len() >= MAX_CHOICES {
                break;
            }
            if classify::is_quiz_class(&paragraph.class) {
                // 下一道题目/答案开始，选项收集结束
                break;
            }
            if !classify::is_choice_class(&paragraph.class) {
                continue;
            }

            let text = markup::normalize(paragraph.text.trim());
            let mut chars = text.chars();
            let key = match chars.next() {
                Some(key) => key,
                None => continue,
            };
            // 跳过 2 字符标签（"A."），余下是选项文本
            let option_text: String = text.chars().skip(2).collect();
            record.choices.insert(key, option_text.trim().to_string());
        }

        Ok(record)
    }

    /// 用答案段落补齐已注册的题目记录
    fn apply_answer(&self, key: &str, text: &str, extraction: &mut Extraction) -> Result<()> {
        let parsed = classify::parse_answer_text(text)?;

        let (letters, explanation) = match parsed {
            Some(parsed) => parsed,
            None => {
                let warning = ParseWarning {
                    key: key.to_string(),
                    text: text.trim().to_string(),
                };
                warn!("⚠️ {}", warning);
                extraction.warnings.push(warning);
                return Ok(());
            }
        };

        let answer: BTreeSet<char> = letters.into_iter().collect();
        if let Err(e) = extraction.bank.apply_answer(key, answer, explanation) {
            // 答案先于题目出现违反文档约定，按警告处理
            let warning = ParseWarning {
                key: key.to_string(),
                text: text.trim().to_string(),
            };
            warn!("⚠️ {}: {}", e, warning);
            extraction.warnings.push(warning);
        }
        Ok(())
    }
}
