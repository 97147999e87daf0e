//! 翻译配置管理模块
//!
//! 提供简化的配置管理，支持环境变量、配置文件和默认值

pub mod manager;

// 重新导出主要类型
pub use manager::{ConfigManager, TranslationConfig};

/// 配置常量
pub mod constants {
    /// 默认目标语言代码
    pub const DEFAULT_TARGET_LANG: &str = "hi";

    /// 文本过滤相关
    pub const MIN_TEXT_LENGTH: usize = 1;

    /// 对象翻译的最大递归深度
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// 配置文件搜索路径
    pub const CONFIG_PATHS: &[&str] = &[
        "phrasebook-config.toml",
        "config.toml",
        ".phrasebook-config.toml",
        "~/.config/phrasebook/config.toml",
        "/etc/phrasebook/config.toml",
    ];
}

/// 检查是否存在配置文件
pub fn config_file_exists() -> bool {
    constants::CONFIG_PATHS.iter().any(|path| {
        let expanded = shellexpand::tilde(path);
        std::path::Path::new(expanded.as_ref()).exists()
    })
}

/// 获取最小可翻译文本长度
pub fn get_min_text_length() -> usize {
    constants::MIN_TEXT_LENGTH
}

/// 便利的配置加载函数
///
/// 找不到配置文件或解析失败时回退到带指定语言的默认配置。
pub fn load_translation_config(target_lang: &str) -> TranslationConfig {
    match ConfigManager::new() {
        Ok(manager) => match manager.create_simple_config(target_lang) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("配置加载失败，使用默认配置: {}", e);
                TranslationConfig::default_with_lang(target_lang)
            }
        },
        Err(e) => {
            tracing::warn!("创建配置管理器失败，使用默认配置: {}", e);
            TranslationConfig::default_with_lang(target_lang)
        }
    }
}
