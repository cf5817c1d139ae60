//! 交互界面层
//!
//! 核心只通过 `QuizUi` 这个能力接口和终端打交道，
//! 测验流程因此可以在测试里用脚本化输入驱动。

pub mod console;

pub use console::ConsoleUi;

use anyhow::Result;

use crate::models::{QuestionRecord, SessionReport};

/// 交互界面能力接口
///
/// 约定：
/// - `pick` 的返回值永远是给出标签的合法下标（界面层负责约束）
/// - `read_single_choice` / `read_multi_choice` 返回的键一定在
///   给出的键集合内且非空，非法输入由界面层重新提问
pub trait QuizUi {
    /// 渲染标签选项列表并读取一个选择
    fn pick(&mut self, title: &str, options: &[String]) -> Result<usize>;

    /// 渲染一段带样式的自由文本
    fn show(&mut self, text: &str);

    /// 展示题干与选项
    fn show_question(&mut self, index: usize, total: usize, record: &QuestionRecord);

    /// 读取单选作答（受限选择）
    fn read_single_choice(&mut self, keys: &[char]) -> Result<char>;

    /// 读取多选作答（自由文本，逗号分隔），保持提交顺序
    fn read_multi_choice(&mut self, keys: &[char]) -> Result<Vec<char>>;

    /// 是非确认，带默认值
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// 展示单次判定结果
    fn show_verdict(&mut self, correct: bool);

    /// 展示正确答案与解析
    fn show_explanation(&mut self, record: &QuestionRecord);

    /// 展示会话结束报告（含错题复盘）
    fn show_report(&mut self, report: &SessionReport);
}
