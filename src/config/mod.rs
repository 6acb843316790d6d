mod encoding;
mod structs;

pub use encoding::EncodingConfig;
pub use structs::{AppConfig, EncodingSection, LoggingConfig};

use std::env;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

impl AppConfig {
    /// Load configuration from TOML file with environment variable fallback
    pub fn load(path_override: Option<&str>) -> Self {
        let mut config = Self::load_from_file(path_override);
        config.override_with_env();
        config
    }

    /// Load configuration from TOML file
    fn load_from_file(path_override: Option<&str>) -> Self {
        let default_paths = ["config.toml", "manybaht.toml", "/etc/manybaht/config.toml"];
        let paths: Vec<&str> = match path_override {
            Some(p) => vec![p],
            None => default_paths.to_vec(),
        };

        for path in &paths {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                match fs::read_to_string(path) {
                    Ok(content) => match toml::from_str::<AppConfig>(&content) {
                        Ok(config) => {
                            debug!("Successfully loaded config from: {}", path);
                            return config;
                        }
                        Err(e) => {
                            warn!("Failed to parse config file {}: {}", path, e);
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file {}: {}", path, e);
                    }
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    /// Override configuration with environment variables
    fn override_with_env(&mut self) {
        // Encoding config（沿用原服务的环境变量名）
        if let Ok(modulus) = env::var("MANYBAHT_RSA_MOD") {
            self.encoding.modulus = modulus;
        }
        if let Ok(exponent) = env::var("MANYBAHT_RSA_EXP") {
            self.encoding.exponent = exponent;
        }

        // Logging config
        if let Ok(level) = env::var("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(file) = env::var("LOG_FILE") {
            self.logging.file = Some(file);
        }
        if let Ok(format) = env::var("LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}
