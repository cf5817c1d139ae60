//! 单题作答流程 - 流程层
//!
//! 核心职责：定义"一道题"的完整作答循环
//!
//! 规则：
//! 1. 只有第一次判定能得分（之后重试答对也不补分）
//! 2. 多选题按集合相等判定，不支持部分得分
//! 3. 答错可以重试；答对后"继续"进入下一题，拒绝则提前结束会话

use std::collections::BTreeSet;

use anyhow::Result;
use tracing::debug;

use crate::models::question::QuestionRecord;
use crate::models::session::{AttemptState, Points};
use crate::ui::QuizUi;
use crate::workflow::quiz_ctx::QuizCtx;

/// 单题作答结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// 进入下一题
    Advance,
    /// 用户提前结束会话
    QuitEarly,
}

/// 单题作答流程
///
/// 职责：
/// - 编排展示、读取作答、判定、重试的循环
/// - 只修改当前题目的 `AttemptState`
/// - 不持有任何资源，所有交互走 `QuizUi`
pub struct QuizFlow;

impl QuizFlow {
    pub fn new() -> Self {
        Self
    }

    /// 对一道题运行完整的作答循环
    ///
    /// # 参数
    /// - `ui`: 交互界面
    /// - `ctx`: 出题上下文
    /// - `record`: 题目记录
    /// - `state`: 本题作答状态（只在这里被修改）
    pub fn run(
        &self,
        ui: &mut dyn QuizUi,
        ctx: &QuizCtx,
        record: &QuestionRecord,
        state: &mut AttemptState,
    ) -> Result<FlowOutcome> {
        loop {
            ui.show_question(ctx.question_index, ctx.total, record);

            // 多选题读自由文本键列表，单选题走受限选择
            let submitted: Vec<char> = if record.is_multi_answer() {
                ui.read_multi_choice(&record.choice_keys())?
            } else {
                vec![ui.read_single_choice(&record.choice_keys())?]
            };
            let guess: BTreeSet<char> = submitted.iter().copied().collect();

            if record.judge(&guess) {
                // 得分只在首次判定时锁定
                if !state.points.is_settled() {
                    state.points = Points::FirstTry;
                }
                ui.show_verdict(true);
                ui.show_explanation(record);

                return if ui.confirm("继续下一题?", true)? {
                    Ok(FlowOutcome::Advance)
                } else {
                    debug!("{} 用户选择提前结束", ctx);
                    Ok(FlowOutcome::QuitEarly)
                };
            }

            if !state.points.is_settled() {
                state.points = Points::Missed;
            }
            // 复盘只记录每次失败作答提交的第一个键
            if let Some(&first) = submitted.first() {
                state.guesses.push(first);
            }
            ui.show_verdict(false);

            if !ui.confirm("再试一次?", true)? {
                state.points = Points::Missed;
                return Ok(FlowOutcome::Advance);
            }
        }
    }
}

impl Default for QuizFlow {
    fn default() -> Self {
        Self::new()
    }
}
