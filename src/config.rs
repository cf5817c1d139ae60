/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 题干序号标签宽度（字符数）
    ///
    /// 不同版次的书籍题干前缀长度不同（观察到 2 或 3），
    /// 为 `None` 时按正则自动识别。
    pub prompt_label_width: Option<usize>,
    /// 是否显示详细日志（包括提取出的完整题库 JSON）
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt_label_width: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            prompt_label_width: std::env::var("QUIZ_PROMPT_LABEL_WIDTH")
                .ok()
                .and_then(|v| v.parse().ok()),
            verbose_logging: std::env::var("QUIZ_VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }
}
