use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// 一条复习题记录
///
/// 生命周期分两个阶段：题目段落注册后处于"仅题目"状态
/// （answer / explanation 为空），同一文档后面的答案段落
/// 用相同的键补齐后半部分，记录才算完整。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// 题干（已归一化并去掉序号标签）
    pub prompt: String,
    /// 选项键 -> 选项文本，最多 4 项，顺序 = 文档顺序
    pub choices: IndexMap<char, String>,
    /// 正确答案的选项键集合（可能多选）
    pub answer: BTreeSet<char>,
    /// 答案解析
    pub explanation: String,
}

impl QuestionRecord {
    /// 创建"仅题目"状态的记录
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            choices: IndexMap::new(),
            answer: BTreeSet::new(),
            explanation: String::new(),
        }
    }

    /// 题目和答案两半是否都已填充
    pub fn is_complete(&self) -> bool {
        !self.answer.is_empty()
    }

    /// 是否为多选题
    pub fn is_multi_answer(&self) -> bool {
        self.answer.len() > 1
    }

    /// 按文档顺序返回全部选项键
    pub fn choice_keys(&self) -> Vec<char> {
        self.choices.keys().copied().collect()
    }

    /// 判定一次作答：与答案集合做无序相等比较，不支持部分得分
    pub fn judge(&self, guess: &BTreeSet<char>) -> bool {
        !self.answer.is_empty() && *guess == self.answer
    }
}

/// 一个章节提取出的有序题库
///
/// 键是题目段落与答案段落共享的规范化 id。
/// 插入顺序保持文档顺序，同一章节重复提取结果完全一致。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionBank {
    records: IndexMap<String, QuestionRecord>,
}

impl QuestionBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一条题目（第一阶段）
    ///
    /// 同键重复注册时以后出现的为准，与源文档的覆盖语义一致。
    pub fn register_question(&mut self, key: impl Into<String>, record: QuestionRecord) {
        self.records.insert(key.into(), record);
    }

    /// 补齐答案（第二阶段）
    ///
    /// # 参数
    /// - `key`: 规范化题目键
    /// - `answer`: 正确答案键集合
    /// - `explanation`: 答案解析
    ///
    /// # 返回
    /// 键未注册时返回 `ParseError::UnknownQuestionKey`，
    /// 由调用方决定降级为警告还是传播。
    pub fn apply_answer(
        &mut self,
        key: &str,
        answer: BTreeSet<char>,
        explanation: impl Into<String>,
    ) -> Result<(), ParseError> {
        let record = self
            .records
            .get_mut(key)
            .ok_or_else(|| ParseError::UnknownQuestionKey {
                key: key.to_string(),
            })?;
        record.answer = answer;
        record.explanation = explanation.into();
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&QuestionRecord> {
        self.records.get(key)
    }

    /// 按文档顺序返回全部题目键
    pub fn keys(&self) -> Vec<String> {
        self.records.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &QuestionRecord)> {
        self.records.iter()
    }
}
