use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 电子书容器相关错误
    Book(BookError),
    /// 解析错误
    Parse(ParseError),
    /// 交互界面错误
    Ui(UiError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Book(e) => write!(f, "电子书错误: {}", e),
            AppError::Parse(e) => write!(f, "解析错误: {}", e),
            AppError::Ui(e) => write!(f, "界面错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Book(e) => Some(e),
            AppError::Parse(e) => Some(e),
            AppError::Ui(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 电子书容器相关错误
#[derive(Debug)]
pub enum BookError {
    /// 输入文件不存在
    NotFound { path: String },
    /// 打开 EPUB 容器失败
    OpenFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 整本书中找不到目录文档
    TocNotFound,
    /// 按链接找不到章节文档
    DocumentNotFound { href: String },
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::NotFound { path } => {
                write!(f, "输入文件不存在: {}", path)
            }
            BookError::OpenFailed { path, source } => {
                write!(f, "无法打开 EPUB 文件 {}: {}", path, source)
            }
            BookError::TocNotFound => {
                write!(f, "整本书中没有找到可识别的目录文档")
            }
            BookError::DocumentNotFound { href } => {
                write!(f, "按链接找不到章节文档: {}", href)
            }
        }
    }
}

impl std::error::Error for BookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookError::OpenFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 解析错误
///
/// 注意：答案段落格式不符属于非致命警告（见提取器的 `ParseWarning`），
/// 这里只收集真正需要向上传播的解析失败。
#[derive(Debug)]
pub enum ParseError {
    /// 答案段落引用了未注册的题目键
    UnknownQuestionKey { key: String },
    /// 段落缺少锚点 id，无法确定题目键
    MissingAnchorId,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownQuestionKey { key } => {
                write!(f, "答案段落引用了未注册的题目键: {}", key)
            }
            ParseError::MissingAnchorId => {
                write!(f, "段落缺少锚点 id")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// 交互界面错误
#[derive(Debug)]
pub enum UiError {
    /// 用户中断了输入（Ctrl+C / Esc）
    Interrupted,
    /// 终端读写失败
    Io {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Interrupted => write!(f, "用户中断了输入"),
            UiError::Io { source } => write!(f, "终端读写失败: {}", source),
        }
    }
}

impl std::error::Error for UiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UiError::Interrupted => None,
            UiError::Io { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 应用程序 Result 类型别名
pub type Result<T> = std::result::Result<T, AppError>;

impl From<BookError> for AppError {
    fn from(e: BookError) -> Self {
        AppError::Book(e)
    }
}

impl From<ParseError> for AppError {
    fn from(e: ParseError) -> Self {
        AppError::Parse(e)
    }
}

impl From<UiError> for AppError {
    fn from(e: UiError) -> Self {
        AppError::Ui(e)
    }
}
