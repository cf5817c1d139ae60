//! 出题上下文
//!
//! 封装"我正在出第几题"这一信息

use std::fmt::Display;

/// 出题上下文
///
/// 包含展示和日志需要的当前题目定位信息
#[derive(Debug, Clone)]
pub struct QuizCtx {
    /// 规范化题目键
    pub key: String,

    /// 出题序号（从 1 开始，按随机出题顺序）
    pub question_index: usize,

    /// 本次会话题目总数
    pub total: usize,
}

impl QuizCtx {
    /// 创建新的出题上下文
    pub fn new(key: String, question_index: usize, total: usize) -> Self {
        Self {
            key,
            question_index,
            total,
        }
    }
}

impl Display for QuizCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[第 {}/{} 题 键#{}]",
            self.question_index, self.total, self.key
        )
    }
}
