use std::fmt;

#[derive(Debug, Clone)]
pub enum ManybahtError {
    InvalidInputFormat(String),
    UnsupportedPlatform(String),
    MalformedPlatformUrl(String),
    UnsupportedVariant(String),
    Configuration(String),
}

impl ManybahtError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ManybahtError::InvalidInputFormat(_) => "E001",
            ManybahtError::UnsupportedPlatform(_) => "E002",
            ManybahtError::MalformedPlatformUrl(_) => "E003",
            ManybahtError::UnsupportedVariant(_) => "E004",
            ManybahtError::Configuration(_) => "E005",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ManybahtError::InvalidInputFormat(_) => "Invalid Input Format",
            ManybahtError::UnsupportedPlatform(_) => "Unsupported Platform",
            ManybahtError::MalformedPlatformUrl(_) => "Malformed Platform URL",
            ManybahtError::UnsupportedVariant(_) => "Unsupported Variant",
            ManybahtError::Configuration(_) => "Configuration Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ManybahtError::InvalidInputFormat(msg) => msg,
            ManybahtError::UnsupportedPlatform(msg) => msg,
            ManybahtError::MalformedPlatformUrl(msg) => msg,
            ManybahtError::UnsupportedVariant(msg) => msg,
            ManybahtError::Configuration(msg) => msg,
        }
    }

    /// 格式化为彩色输出（用于终端）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ManybahtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 默认使用简洁格式
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ManybahtError {}

// 便捷的构造函数
impl ManybahtError {
    pub fn invalid_input_format<T: Into<String>>(msg: T) -> Self {
        ManybahtError::InvalidInputFormat(msg.into())
    }

    pub fn unsupported_platform<T: Into<String>>(msg: T) -> Self {
        ManybahtError::UnsupportedPlatform(msg.into())
    }

    pub fn malformed_platform_url<T: Into<String>>(msg: T) -> Self {
        ManybahtError::MalformedPlatformUrl(msg.into())
    }

    pub fn unsupported_variant<T: Into<String>>(msg: T) -> Self {
        ManybahtError::UnsupportedVariant(msg.into())
    }

    pub fn configuration<T: Into<String>>(msg: T) -> Self {
        ManybahtError::Configuration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ManybahtError>;
