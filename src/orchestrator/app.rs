//! 应用处理器 - 编排层
//!
//! 管理一次完整运行：打开书 → 解析目录 → 选章 → 提取题库 → 测验 → 报告

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::BookError;
use crate::infrastructure::{BookDocument, BookReader};
use crate::models::toc::Toc;
use crate::orchestrator::session_runner::SessionRunner;
use crate::services::{QuestionExtractor, TocParser};
use crate::ui::QuizUi;
use crate::utils::logging;

/// 应用主结构
pub struct App {
    config: Config,
    reader: BookReader,
}

impl App {
    /// 初始化应用
    ///
    /// # 参数
    /// - `config`: 程序配置
    /// - `input_path`: EPUB 文件路径
    ///
    /// # 返回
    /// 文件不存在是唯一的致命启动条件，在任何解析之前报错退出。
    pub fn initialize(config: Config, input_path: &Path) -> Result<Self> {
        logging::log_startup();

        let reader = BookReader::open(input_path)
            .with_context(|| format!("无法加载电子书: {}", input_path.display()))?;

        Ok(Self { config, reader })
    }

    /// 运行应用主逻辑
    pub fn run(&self, ui: &mut dyn QuizUi) -> Result<()> {
        logging::log_book_opened(self.reader.title(), self.reader.documents().len());
        ui.show(&format!("已打开电子书: {}", self.reader.title()));

        // 定位目录并还原 Part -> Chapter 层级
        let toc = self.locate_toc()?;
        logging::log_toc_parsed(toc.parts.len(), toc.chapter_count());

        // 用户逐级选择 Part / Chapter
        let document = self.select_chapter(ui, &toc)?;

        // 提取所选章节的题库
        let extraction = QuestionExtractor::new(&self.config).extract(&document.content)?;
        logging::log_bank_extracted(extraction.bank.len(), extraction.warnings.len());

        if self.config.verbose_logging {
            debug!(
                "提取出的题库:\n{}",
                serde_json::to_string_pretty(&extraction.bank)?
            );
        }

        // 运行测验会话并输出最终报告
        let report = SessionRunner::new().run(ui, &extraction.bank)?;
        ui.show_report(&report);
        logging::log_final_stats(report.score, report.answered, report.total);

        Ok(())
    }

    /// 在书脊顺序里找第一个能解析出非空目录的文档
    ///
    /// 有的版次目录不在第一个文档里，所以逐个尝试而不是硬编码。
    fn locate_toc(&self) -> Result<Toc> {
        let parser = TocParser::new();
        for document in self.reader.documents() {
            let toc = parser.parse(&document.content)?;
            if !toc.is_empty() {
                info!("✓ 在 {} 中找到目录", document.file_name);
                return Ok(toc);
            }
        }
        Err(BookError::TocNotFound.into())
    }

    /// 驱动 Part / Chapter 两级选择，解析所选章节的文档
    fn select_chapter<'a>(&'a self, ui: &mut dyn QuizUi, toc: &Toc) -> Result<&'a BookDocument> {
        let part_names: Vec<String> = toc.parts.iter().map(|p| p.name.clone()).collect();
        let part_index = ui.pick("请选择一个 Part:", &part_names)?;
        let part = &toc.parts[part_index];

        let chapter_names: Vec<String> = part.chapters.keys().cloned().collect();
        let chapter_index = ui.pick("请选择一个章节:", &chapter_names)?;
        let (chapter_name, href) = part
            .chapters
            .get_index(chapter_index)
            .context("章节下标越界")?;

        info!("✓ 选中章节: {} ({})", chapter_name, href);

        self.reader
            .document_by_href(href)
            .ok_or_else(|| BookError::DocumentNotFound { href: href.clone() }.into())
    }
}
