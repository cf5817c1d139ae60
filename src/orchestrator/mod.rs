//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责应用生命周期和会话调度，是整个系统的"指挥中心"。
//!
//! ### `app` - 应用处理器
//! - 管理应用生命周期（初始化、运行）
//! - 打开电子书容器（BookReader）
//! - 定位目录文档并驱动 Part / Chapter 选择
//! - 提取所选章节的题库
//!
//! ### `session_runner` - 会话处理器
//! - 按随机出题顺序遍历题库
//! - 创建并复用 QuizFlow
//! - 汇总会话结果
//!
//! ## 层次关系
//!
//! ```text
//! app (处理一本书)
//!     ↓
//! session_runner (处理一个题库)
//!     ↓
//! workflow::QuizFlow (处理单个 Question)
//!     ↓
//! services (能力层：toc_parser / question_extractor)
//!     ↓
//! infrastructure (基础设施：BookReader)
//! ```

pub mod app;
pub mod session_runner;

pub use app::App;
pub use session_runner::SessionRunner;
