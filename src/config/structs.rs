use serde::Deserialize;

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub encoding: EncodingSection,
    pub logging: LoggingConfig,
}

/// Raw encoding parameters as found in the config file.
///
/// Both values are decimal strings so that arbitrary-precision integers
/// survive TOML without loss; they are parsed and validated by
/// [`EncodingConfig::from_section`](super::EncodingConfig::from_section).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EncodingSection {
    pub modulus: String,
    pub exponent: String,
}

impl Default for EncodingSection {
    fn default() -> Self {
        // 与历史已生成链接保持兼容，默认值不可改动
        Self {
            modulus: "159020092212146830289645291".to_string(),
            exponent: "65537".to_string(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (tracing EnvFilter syntax)
    pub level: String,
    /// Log file path; empty or absent means stdout
    pub file: Option<String>,
    /// Output format: "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            format: "text".to_string(),
        }
    }
}
