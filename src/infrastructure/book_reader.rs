//! 电子书容器读取器 - 基础设施层
//!
//! 持有唯一的 EPUB 容器资源，只暴露"书名 / 文档枚举 / 按链接取文档"
//! 三个能力，不认识目录和题目。

use std::path::Path;

use anyhow::Result;
use epub::doc::EpubDoc;
use tracing::debug;

use crate::error::BookError;

/// 容器内的一个文档内容项
#[derive(Debug, Clone)]
pub struct BookDocument {
    /// 容器内的文件标识（归档路径）
    pub file_name: String,
    /// 原始标记内容
    pub content: String,
}

/// 电子书容器读取器
///
/// 职责：
/// - 打开并校验 EPUB 容器
/// - 按书脊顺序枚举文档
/// - 不处理任何标记解析
pub struct BookReader {
    title: String,
    documents: Vec<BookDocument>,
}

impl BookReader {
    /// 打开 EPUB 文件并读入全部文档
    ///
    /// # 参数
    /// - `path`: EPUB 文件路径
    ///
    /// # 返回
    /// 文件不存在或容器无法打开时返回错误（唯一的致命启动条件）。
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(BookError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let mut doc = EpubDoc::new(path).map_err(|e| BookError::OpenFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        let title = doc.mdata("title").map(|m| m.value.clone()).unwrap_or_else(|| {
            path.file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "未命名书籍".to_string())
        });

        // 按书脊顺序逐个读出文档内容
        let mut documents = Vec::new();
        loop {
            if let (Some(file_path), Some((content, _mime))) =
                (doc.get_current_path(), doc.get_current_str())
            {
                documents.push(BookDocument {
                    file_name: file_path.to_string_lossy().into_owned(),
                    content,
                });
            }
            if !doc.go_next() {
                break;
            }
        }

        debug!("读入 {} 个文档", documents.len());
        Ok(Self { title, documents })
    }

    /// 书名
    pub fn title(&self) -> &str {
        &self.title
    }

    /// 按书脊顺序枚举全部文档
    pub fn documents(&self) -> &[BookDocument] {
        &self.documents
    }

    /// 按目录链接找文档
    ///
    /// 目录里的链接相对于目录文档所在目录，归档路径可能带前缀目录，
    /// 所以精确匹配失败时退回后缀匹配。
    pub fn document_by_href(&self, href: &str) -> Option<&BookDocument> {
        self.documents
            .iter()
            .find(|d| d.file_name == href)
            .or_else(|| {
                let suffix = format!("/{}", href);
                self.documents
                    .iter()
                    .find(|d| d.file_name.ends_with(&suffix))
            })
    }
}
