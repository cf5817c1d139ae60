//! 终端交互实现
//!
//! 用 inquire 做受限选择 / 自由文本 / 是非确认，
//! colored 做文本样式。非法作答在这一层重新提问，
//! 测验流程拿到的键一定是合法的。

use anyhow::Result;
use colored::Colorize;
use inquire::{Confirm, InquireError, Select, Text};

use crate::error::UiError;
use crate::models::{QuestionRecord, SessionReport};
use crate::ui::QuizUi;

/// 终端交互界面
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

/// 把 inquire 错误映射到应用错误
fn map_inquire_err(e: InquireError) -> anyhow::Error {
    match e {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            UiError::Interrupted.into()
        }
        other => UiError::Io {
            source: Box::new(other),
        }
        .into(),
    }
}

/// 解析逗号分隔的选项键列表，保持提交顺序、去重
///
/// 返回 None 表示输入为空或含有非法键，需要重新提问。
fn parse_key_list(input: &str, valid: &[char]) -> Option<Vec<char>> {
    let mut submitted = Vec::new();
    for piece in input.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let mut chars = piece.chars();
        let key = chars.next()?.to_ascii_uppercase();
        // "AB" 这种连写不接受，必须逗号分隔
        if chars.next().is_some() || !valid.contains(&key) {
            return None;
        }
        if !submitted.contains(&key) {
            submitted.push(key);
        }
    }
    if submitted.is_empty() {
        None
    } else {
        Some(submitted)
    }
}

impl QuizUi for ConsoleUi {
    fn pick(&mut self, title: &str, options: &[String]) -> Result<usize> {
        let chosen = Select::new(title, options.to_vec())
            .raw_prompt()
            .map_err(map_inquire_err)?;
        println!("\n你选择了: {}\n", chosen.value.green());
        Ok(chosen.index)
    }

    fn show(&mut self, text: &str) {
        println!("{}", text);
    }

    fn show_question(&mut self, index: usize, total: usize, record: &QuestionRecord) {
        println!("\n{} [{}/{}]", "题目".bold().cyan(), index, total);
        println!("\n{}\n", record.prompt.green());
        for (key, text) in &record.choices {
            println!("{} - {}", key.to_string().green().bold(), text);
        }
        if record.is_multi_answer() {
            println!("\n{}", "（多选题，请选出全部正确答案）".dimmed());
        }
        if !record.is_complete() {
            println!(
                "\n{}",
                "⚠️ 本题的答案段落解析失败，没有可核对的正确答案".yellow()
            );
        }
    }

    fn read_single_choice(&mut self, keys: &[char]) -> Result<char> {
        let options: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        let chosen = Select::new("请选择答案:", options)
            .raw_prompt()
            .map_err(map_inquire_err)?;
        Ok(keys[chosen.index])
    }

    fn read_multi_choice(&mut self, keys: &[char]) -> Result<Vec<char>> {
        loop {
            let input = Text::new("请输入答案:")
                .with_help_message("逗号分隔多个选项键，例如 B,D")
                .prompt()
                .map_err(map_inquire_err)?;

            match parse_key_list(&input, keys) {
                Some(submitted) => return Ok(submitted),
                None => {
                    println!(
                        "{}",
                        format!("输入无效，可用选项: {:?}，请重新输入", keys).red()
                    );
                }
            }
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new(prompt)
            .with_default(default)
            .prompt()
            .map_err(map_inquire_err)
    }

    fn show_verdict(&mut self, correct: bool) {
        if correct {
            println!("\n{}\n", "✓ 回答正确！".green().bold());
        } else {
            println!("\n{}\n", "✗ 回答错误！".red().bold());
        }
    }

    fn show_explanation(&mut self, record: &QuestionRecord) {
        if !record.answer.is_empty() {
            let answers: Vec<String> = record
                .answer
                .iter()
                .map(|key| match record.choices.get(key) {
                    Some(text) => format!("{} - {}", key, text),
                    None => key.to_string(),
                })
                .collect();
            println!("{}", "正确答案:".green());
            for line in answers {
                println!("{}", line.green());
            }
        }
        if !record.explanation.is_empty() {
            println!("\n{}\n", record.explanation.dimmed());
        }
    }

    fn show_report(&mut self, report: &SessionReport) {
        println!("\n{}", "=".repeat(60));
        println!("{}", "📊 测验结束".bold());
        println!("{}", "=".repeat(60));
        println!(
            "得分: {} / {}（作答 {} 题）",
            report.score.to_string().green().bold(),
            report.total,
            report.answered
        );

        if report.missed.is_empty() {
            println!("\n{}", "没有错题，完美！".green());
            return;
        }

        println!("\n{}", "错题复盘:".bold().red());
        for missed in &report.missed {
            println!("\n{}", missed.prompt.cyan());
            for choice in &missed.choices {
                let marker = match (choice.guessed, choice.correct) {
                    (true, true) => "✓✗".yellow(),
                    (false, true) => "✓ ".green(),
                    (true, false) => "✗ ".red(),
                    (false, false) => "  ".normal(),
                };
                println!("  {} {} - {}", marker, choice.key, choice.text);
            }
            if !missed.explanation.is_empty() {
                println!("  {}", missed.explanation.dimmed());
            }
        }
    }
}
