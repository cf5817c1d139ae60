use std::path::Path;
use std::process::ExitCode;

use epub_review_quiz::ui::ConsoleUi;
use epub_review_quiz::{logger, App, Config};
use tracing::error;

fn main() -> ExitCode {
    // 初始化日志
    logger::init();

    // 唯一的命令行参数：EPUB 文件路径
    let input = match std::env::args().nth(1) {
        Some(input) => input,
        None => {
            eprintln!("用法: epub_review_quiz <EPUB 文件路径>");
            return ExitCode::FAILURE;
        }
    };

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    let mut ui = ConsoleUi::new();
    let result = App::initialize(config, Path::new(&input)).and_then(|app| app.run(&mut ui));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}
