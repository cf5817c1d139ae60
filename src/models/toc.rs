use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 目录中的一个 Part
///
/// 章节映射保持文档（锚点）顺序，选择界面的编号依赖这个顺序。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TocPart {
    /// Part 标题，如 "Part I Threats, Attacks, and Vulnerabilities"
    pub name: String,
    /// 章节标题 -> 文档链接（容器内的文件标识）
    pub chapters: IndexMap<String, String>,
}

impl TocPart {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chapters: IndexMap::new(),
        }
    }
}

/// 全书的 Part -> Chapter 层级目录
///
/// 构建完成后只读；不变量：不含空 Part（见 `prune_empty_parts`）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Toc {
    pub parts: Vec<TocPart>,
}

impl Toc {
    /// 删除没有任何章节的 Part
    ///
    /// 目录页里有些 Part 标题下的章节锚点无法识别，这种 Part 不能
    /// 出现在选择界面上。
    pub fn prune_empty_parts(&mut self) {
        self.parts.retain(|part| !part.chapters.is_empty());
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// 章节总数
    pub fn chapter_count(&self) -> usize {
        self.parts.iter().map(|p| p.chapters.len()).sum()
    }
}
