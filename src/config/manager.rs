//! 简化的配置管理器
//!
//! 提供统一的配置接口，支持文件配置、环境变量和默认值

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::constants;
use crate::error::{TranslationError, TranslationResult};
use crate::language::SupportedLanguage;

/// 翻译配置
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TranslationConfig {
    /// 是否启用翻译，关闭时所有操作恒等返回原文
    pub enabled: bool,
    /// 默认目标语言代码
    pub target_lang: String,
    /// 是否启用内存缓存
    pub cache_enabled: bool,
}

impl TranslationConfig {
    /// 创建带指定语言的默认配置
    pub fn default_with_lang(target_lang: &str) -> Self {
        Self {
            target_lang: target_lang.to_string(),
            ..Default::default()
        }
    }

    /// 验证配置
    pub fn validate(&self) -> TranslationResult<()> {
        self.target_lang
            .parse::<SupportedLanguage>()
            .map_err(|e| TranslationError::ConfigError(format!("目标语言无效: {}", e)))?;

        Ok(())
    }

    /// 解析配置的目标语言
    pub fn target_language(&self) -> TranslationResult<SupportedLanguage> {
        self.target_lang
            .parse::<SupportedLanguage>()
            .map_err(|e| TranslationError::ConfigError(format!("目标语言无效: {}", e)))
    }

    /// 应用环境变量覆盖
    pub fn apply_env_overrides(&mut self) {
        use crate::env::{translation, EnvVar};

        if let Ok(enabled) = translation::Enabled::get() {
            self.enabled = enabled;
        }

        if let Ok(target_lang) = translation::TargetLang::get() {
            tracing::info!("环境变量覆盖目标语言: {}", target_lang);
            self.target_lang = target_lang;
        }

        if let Ok(cache_enabled) = translation::CacheEnabled::get() {
            self.cache_enabled = cache_enabled;
        }
    }
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            target_lang: constants::DEFAULT_TARGET_LANG.to_string(),
            cache_enabled: true,
        }
    }
}

/// 简化的配置管理器
pub struct ConfigManager {
    config: TranslationConfig,
}

impl ConfigManager {
    /// 创建新的配置管理器
    ///
    /// 依次加载 .env 文件、配置文件、环境变量覆盖，最后验证。
    pub fn new() -> TranslationResult<Self> {
        let mut config = Self::load_config()?;
        config.apply_env_overrides();
        config.validate()?;

        Ok(Self { config })
    }

    /// 获取配置
    pub fn get_config(&self) -> &TranslationConfig {
        &self.config
    }

    /// 基于已加载的配置创建指定语言的配置
    pub fn create_simple_config(&self, target_lang: &str) -> TranslationResult<TranslationConfig> {
        if self.config.target_lang == target_lang {
            return Ok(self.config.clone());
        }

        let mut config = self.config.clone();
        config.target_lang = target_lang.to_string();
        config.validate()?;
        Ok(config)
    }

    /// 从文件加载配置
    fn load_config() -> TranslationResult<TranslationConfig> {
        // 首先尝试加载 .env 文件
        Self::load_dotenv();

        // 查找配置文件
        for path in constants::CONFIG_PATHS {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                tracing::info!("加载配置文件: {}", expanded_path);
                return Self::load_from_file(&expanded_path);
            }
        }

        tracing::info!("未找到配置文件，使用默认配置");
        Ok(TranslationConfig::default())
    }

    /// 从指定文件加载配置
    fn load_from_file(path: &str) -> TranslationResult<TranslationConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TranslationError::ConfigError(format!("读取配置文件失败: {}", e)))?;

        if path.ends_with(".toml") {
            toml::from_str(&content)
                .map_err(|e| TranslationError::ConfigError(format!("解析TOML配置失败: {}", e)))
        } else {
            serde_json::from_str(&content)
                .map_err(|e| TranslationError::ConfigError(format!("解析JSON配置失败: {}", e)))
        }
    }

    /// 加载 .env 文件
    fn load_dotenv() {
        let env_files = [".env.local", ".env.development", ".env.production", ".env"];

        for env_file in &env_files {
            if Path::new(env_file).exists() && dotenv::from_filename(env_file).is_ok() {
                tracing::info!("已加载环境变量文件: {}", env_file);
                break;
            }
        }
    }

    /// 生成示例配置文件
    pub fn generate_example_config(path: &str) -> TranslationResult<()> {
        let config = TranslationConfig::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| TranslationError::ConfigError(format!("序列化配置失败: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| TranslationError::ConfigError(format!("写入配置文件失败: {}", e)))?;

        Ok(())
    }
}
