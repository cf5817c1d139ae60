//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use tracing::info;

/// 记录程序启动信息
pub fn log_startup() {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 章节复习题测验模式");
    info!("{}", "=".repeat(60));
}

/// 记录电子书打开成功
///
/// # 参数
/// - `title`: 书名
/// - `document_count`: 文档总数
pub fn log_book_opened(title: &str, document_count: usize) {
    info!("✓ 成功打开电子书: {}", title);
    info!("📄 共 {} 个文档", document_count);
}

/// 记录目录解析结果
///
/// # 参数
/// - `part_count`: Part 总数
/// - `chapter_count`: 章节总数
pub fn log_toc_parsed(part_count: usize, chapter_count: usize) {
    info!("✓ 目录解析完成: {} 个 Part / {} 个章节", part_count, chapter_count);
}

/// 记录题库提取结果
///
/// # 参数
/// - `question_count`: 题目总数
/// - `warning_count`: 非致命警告数
pub fn log_bank_extracted(question_count: usize, warning_count: usize) {
    info!("✓ 题库提取完成: {} 道题目", question_count);
    if warning_count > 0 {
        info!("⚠️ 其中 {} 个答案段落格式不符，相关题目缺少正确答案", warning_count);
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `score`: 总分
/// - `answered`: 作答题数
/// - `total`: 题目总数
pub fn log_final_stats(score: u32, answered: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📊 测验完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 得分: {}/{}", score, total);
    info!("📝 作答: {}/{}", answered, total);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("0123456789ab", 10), "0123456789...");
    }
}
