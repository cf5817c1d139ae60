use indexmap::IndexMap;
use rand::seq::SliceRandom;

use crate::models::question::QuestionBank;

/// 单题得分状态
///
/// 源数据里用 -1/0/1 三个哨兵值表示，这里显式建模：
/// 只有第一次判定能得分，之后重试成功也不再改变。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Points {
    /// 尚未作答
    Unattempted,
    /// 最终判为错（首次判定错误，或放弃）
    Missed,
    /// 首次作答即正确
    FirstTry,
}

impl Points {
    /// 计入总分的分值
    pub fn value(self) -> u32 {
        match self {
            Points::FirstTry => 1,
            Points::Missed | Points::Unattempted => 0,
        }
    }

    /// 是否已经有过判定（得分被锁定）
    pub fn is_settled(self) -> bool {
        !matches!(self, Points::Unattempted)
    }
}

/// 单题作答状态
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptState {
    pub points: Points,
    /// 每次失败作答中用户提交的第一个选项键，按时间顺序，供复盘用
    pub guesses: Vec<char>,
}

impl Default for AttemptState {
    fn default() -> Self {
        Self {
            points: Points::Unattempted,
            guesses: Vec::new(),
        }
    }
}

/// 一次测验会话
///
/// 每次运行时根据当前章节的题库新建；出题顺序是题目键的
/// 均匀随机排列，作答状态只由测验流程逐题修改。
#[derive(Debug, Clone)]
pub struct QuizSession {
    /// 出题顺序（题目键的随机排列）
    pub order: Vec<String>,
    /// 题目键 -> 作答状态
    pub states: IndexMap<String, AttemptState>,
}

impl QuizSession {
    /// 随机排列题库中的全部题目键，初始化作答状态
    pub fn new(bank: &QuestionBank) -> Self {
        let mut order = bank.keys();
        order.shuffle(&mut rand::thread_rng());
        Self::with_order(order)
    }

    /// 按给定顺序创建会话（测试用）
    pub fn with_order(order: Vec<String>) -> Self {
        let states = order
            .iter()
            .map(|key| (key.clone(), AttemptState::default()))
            .collect();
        Self { order, states }
    }

    pub fn state_mut(&mut self, key: &str) -> Option<&mut AttemptState> {
        self.states.get_mut(key)
    }

    /// 汇总本次会话，生成最终报告
    ///
    /// 只有判定过的题目计入 answered；提前退出时未出到的题目
    /// 保持 Unattempted，不进入错题复盘。
    pub fn report(&self, bank: &QuestionBank) -> SessionReport {
        let mut report = SessionReport {
            total: self.order.len(),
            ..Default::default()
        };

        for key in &self.order {
            let state = match self.states.get(key) {
                Some(state) => state,
                None => continue,
            };
            report.score += state.points.value();
            if state.points.is_settled() {
                report.answered += 1;
            }

            if state.points != Points::Missed {
                continue;
            }
            let record = match bank.get(key) {
                Some(record) => record,
                None => continue,
            };
            let choices = record
                .choices
                .iter()
                .map(|(&key, text)| ChoiceReview {
                    key,
                    text: text.clone(),
                    guessed: state.guesses.contains(&key),
                    correct: record.answer.contains(&key),
                })
                .collect();
            report.missed.push(MissedReview {
                prompt: record.prompt.clone(),
                choices,
                explanation: record.explanation.clone(),
            });
        }

        report
    }
}

/// 会话结束时的汇总报告
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionReport {
    /// 总分（首次答对的题目数）
    pub score: u32,
    /// 判定过的题目数
    pub answered: usize,
    /// 本次会话的题目总数
    pub total: usize,
    /// 错题复盘
    pub missed: Vec<MissedReview>,
}

/// 一道错题的复盘记录
#[derive(Debug, Clone, PartialEq)]
pub struct MissedReview {
    pub prompt: String,
    pub choices: Vec<ChoiceReview>,
    pub explanation: String,
}

/// 错题复盘里对单个选项的标注
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceReview {
    pub key: char,
    pub text: String,
    /// 用户在失败作答中选过
    pub guessed: bool,
    /// 属于正确答案集合
    pub correct: bool,
}
