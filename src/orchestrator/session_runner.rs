//! 会话处理器 - 编排层
//!
//! 遍历随机出题顺序，把每道题交给 QuizFlow，最后汇总报告。

use anyhow::Result;
use tracing::{info, warn};

use crate::models::question::QuestionBank;
use crate::models::session::{QuizSession, SessionReport};
use crate::ui::QuizUi;
use crate::workflow::{FlowOutcome, QuizCtx, QuizFlow};

/// 会话处理器
pub struct SessionRunner {
    flow: QuizFlow,
}

impl SessionRunner {
    pub fn new() -> Self {
        Self {
            flow: QuizFlow::new(),
        }
    }

    /// 对一个题库运行完整的测验会话
    ///
    /// # 参数
    /// - `ui`: 交互界面
    /// - `bank`: 当前章节的题库
    ///
    /// # 返回
    /// 会话汇总报告。空题库直接返回空报告，不进入任何提问。
    pub fn run(&self, ui: &mut dyn QuizUi, bank: &QuestionBank) -> Result<SessionReport> {
        if bank.is_empty() {
            warn!("⚠️ 本章节没有提取到任何题目，测验直接结束");
            return Ok(SessionReport::default());
        }

        let mut session = QuizSession::new(bank);
        let order = session.order.clone();
        let total = order.len();
        info!("🎲 出题顺序已随机排列，共 {} 题", total);

        for (index, key) in order.iter().enumerate() {
            let record = match bank.get(key) {
                Some(record) => record,
                None => continue,
            };
            let state = match session.state_mut(key) {
                Some(state) => state,
                None => continue,
            };
            let ctx = QuizCtx::new(key.clone(), index + 1, total);

            match self.flow.run(ui, &ctx, record, state)? {
                FlowOutcome::Advance => {}
                FlowOutcome::QuitEarly => {
                    info!("用户在 {} 提前结束测验", ctx);
                    break;
                }
            }
        }

        Ok(session.report(bank))
    }
}

impl Default for SessionRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionRecord, SessionReport as Report};
    use std::collections::BTreeSet;

    /// 全部直接答对的脚本界面
    struct AlwaysRight;

    impl QuizUi for AlwaysRight {
        fn pick(&mut self, _title: &str, _options: &[String]) -> Result<usize> {
            Ok(0)
        }
        fn show(&mut self, _text: &str) {}
        fn show_question(&mut self, _i: usize, _t: usize, _r: &QuestionRecord) {}
        fn read_single_choice(&mut self, _keys: &[char]) -> Result<char> {
            Ok('B')
        }
        fn read_multi_choice(&mut self, _keys: &[char]) -> Result<Vec<char>> {
            Ok(vec!['B'])
        }
        fn confirm(&mut self, _prompt: &str, _default: bool) -> Result<bool> {
            Ok(true)
        }
        fn show_verdict(&mut self, _correct: bool) {}
        fn show_explanation(&mut self, _record: &QuestionRecord) {}
        fn show_report(&mut self, _report: &Report) {}
    }

    /// 任何提问都算失败的界面，用来断言空题库不触发交互
    struct PanickingUi;

    impl QuizUi for PanickingUi {
        fn pick(&mut self, _title: &str, _options: &[String]) -> Result<usize> {
            panic!("空题库不应该有任何交互");
        }
        fn show(&mut self, _text: &str) {
            panic!("空题库不应该有任何交互");
        }
        fn show_question(&mut self, _i: usize, _t: usize, _r: &QuestionRecord) {
            panic!("空题库不应该有任何交互");
        }
        fn read_single_choice(&mut self, _keys: &[char]) -> Result<char> {
            panic!("空题库不应该有任何交互");
        }
        fn read_multi_choice(&mut self, _keys: &[char]) -> Result<Vec<char>> {
            panic!("空题库不应该有任何交互");
        }
        fn confirm(&mut self, _prompt: &str, _default: bool) -> Result<bool> {
            panic!("空题库不应该有任何交互");
        }
        fn show_verdict(&mut self, _correct: bool) {}
        fn show_explanation(&mut self, _record: &QuestionRecord) {}
        fn show_report(&mut self, _report: &Report) {}
    }

    #[test]
    fn test_empty_bank_ends_gracefully() {
        let bank = QuestionBank::new();
        let report = SessionRunner::new().run(&mut PanickingUi, &bank).unwrap();
        assert_eq!(report, SessionReport::default());
    }

    #[test]
    fn test_full_run_scores_every_question() {
        let mut bank = QuestionBank::new();
        for key in ["1", "2", "3"] {
            let mut record = QuestionRecord::new(format!("question {}", key));
            record.choices.insert('A', "wrong".to_string());
            record.choices.insert('B', "right".to_string());
            bank.register_question(key, record);
            bank.apply_answer(key, BTreeSet::from(['B']), "ok").unwrap();
        }

        let report = SessionRunner::new().run(&mut AlwaysRight, &bank).unwrap();
        assert_eq!(report.score, 3);
        assert_eq!(report.answered, 3);
        assert_eq!(report.total, 3);
        assert!(report.missed.is_empty());
    }
}
