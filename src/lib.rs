//! # EPUB Review Quiz
//!
//! 一个把电子书章节复习题变成交互式自测的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（EPUB 容器），只暴露能力
//! - `BookReader` - 唯一的容器 owner，提供书名 / 文档枚举能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个文档
//! - `TocParser` - 目录锚点 → Part/Chapter 层级能力
//! - `QuestionExtractor` - 章节段落 → 有序题库能力
//! - `classify` / `markup` - 松散标记的扫描与分类能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整作答流程
//! - `QuizCtx` - 上下文封装（第几题 / 总数 / 题目键）
//! - `QuizFlow` - 流程编排（展示 → 作答 → 判定 → 重试/前进）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/app` - 应用处理器，管理书籍资源和章节选择
//! - `orchestrator/session_runner` - 会话处理器，遍历出题顺序
//!
//! 交互全部走 `ui::QuizUi` 能力接口，终端实现在 `ui::ConsoleUi`，
//! 测试用脚本化实现驱动。

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod ui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, BookError, ParseError, Result, UiError};
pub use infrastructure::{BookDocument, BookReader};
pub use models::{QuestionBank, QuestionRecord, QuizSession, SessionReport, Toc};
pub use orchestrator::{App, SessionRunner};
pub use services::{Extraction, ParseWarning, QuestionExtractor, TocParser};
pub use ui::{ConsoleUi, QuizUi};
pub use workflow::{FlowOutcome, QuizCtx, QuizFlow};
