//! # Phrasebook Library
//!
//! 短语查询与翻译缓存库。给定原文和目标语言代码返回译文：
//! 优先使用人工维护的静态词典，其次是进程内缓存，最终以原文
//! 兜底。当前没有接入真实翻译后端。
//!
//! ## 模块组织
//!
//! - `core` - 翻译服务和统计信息
//! - `language` - 支持的语言枚举和UI信息列表
//! - `dictionary` - 静态短语词典
//! - `storage` - 翻译结果缓存
//! - `pipeline` - 对象文本收集与过滤
//! - `config` - 配置管理
//! - `error` - 错误处理
//! - `env` - 环境变量访问
//!
//! ## 基本用法
//!
//! ```rust,no_run
//! use phrasebook::{SupportedLanguage, TranslationService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = TranslationService::create_default("hi")?;
//!
//! let translated = service.translate("Explore Colleges", SupportedLanguage::Hi).await;
//! let batch = service
//!     .translate_batch(&["a".to_string(), "b".to_string()], SupportedLanguage::Hi)
//!     .await;
//! service.clear_cache();
//! # Ok(())
//! # }
//! ```

use std::sync::OnceLock;

pub mod config;
pub mod core;
pub mod dictionary;
pub mod env;
pub mod error;
pub mod language;
pub mod pipeline;
pub mod storage;

// ============================================================================
// 核心API导出
// ============================================================================

/// 翻译服务的主要组件
pub use crate::core::{
    HealthLevel, HealthStatus, ServiceStats, ServiceStatsSnapshot, TranslationService,
};

/// 配置管理相关组件
pub use config::{constants, ConfigManager, TranslationConfig};

/// 错误处理相关类型
pub use error::{ErrorCategory, ErrorSeverity, TranslationError, TranslationResult};

/// 语言相关类型
pub use language::{supported_languages, LanguageInfo, SupportedLanguage};

/// 词典与缓存组件
pub use dictionary::PhraseDictionary;
pub use storage::{cache_key, CacheEntry, CacheStats, TranslationCache};

/// 文本处理管道组件
pub use pipeline::{CollectorConfig, TextCollector, TextFilter, TextItem};

// ============================================================================
// 便利函数
// ============================================================================

/// 进程级默认翻译服务
///
/// 仅供便利函数使用。需要独立缓存生命周期时应自行构造
/// `TranslationService`。
fn default_service() -> &'static TranslationService {
    static SERVICE: OnceLock<TranslationService> = OnceLock::new();
    SERVICE.get_or_init(|| {
        let config = config::load_translation_config(constants::DEFAULT_TARGET_LANG);
        TranslationService::new(config).unwrap_or_else(|e| {
            tracing::warn!("默认翻译服务初始化失败，回退到内置配置: {}", e);
            TranslationService::new(TranslationConfig::default())
                .expect("内置默认配置必定有效")
        })
    })
}

/// 翻译单个文本（便利函数）
///
/// 使用进程级默认服务。
pub async fn translate_text(text: &str, target_lang: SupportedLanguage) -> String {
    default_service().translate(text, target_lang).await
}

/// 批量翻译文本（便利函数）
pub async fn translate_batch(texts: &[String], target_lang: SupportedLanguage) -> Vec<String> {
    default_service().translate_batch(texts, target_lang).await
}

/// 清空进程级默认服务的缓存（便利函数）
pub fn clear_cache() {
    default_service().clear_cache();
}

/// 检查文本是否应该翻译（便利函数）
///
/// ```rust
/// use phrasebook::should_translate;
///
/// assert!(should_translate("Hello World"));
/// assert!(!should_translate(""));
/// assert!(!should_translate("   "));
/// ```
pub fn should_translate(text: &str) -> bool {
    TextFilter::new().should_translate(text)
}

// ============================================================================
// 模块信息
// ============================================================================

/// 库版本信息
pub const VERSION: &str = "0.3.0";

/// 运行库自检
pub async fn self_check() -> TranslationResult<()> {
    tracing::info!("开始自检...");

    // 检查内置配置
    TranslationConfig::default().validate()?;
    tracing::debug!("✓ 配置正常");

    // 检查文本过滤器
    let filter = TextFilter::new();
    if !filter.should_translate("Hello World") {
        return Err(TranslationError::InternalError("文本过滤器异常".to_string()));
    }
    tracing::debug!("✓ 文本过滤器正常");

    // 检查内置词典
    let dictionary = PhraseDictionary::builtin();
    if dictionary.phrase_count(SupportedLanguage::Hi) == 0 {
        return Err(TranslationError::InternalError("内置词典为空".to_string()));
    }
    tracing::debug!("✓ 词典正常");

    // 检查缓存读写
    let cache = TranslationCache::new();
    cache.insert("self-check", SupportedLanguage::Hi, "ok".to_string());
    if cache.get("self-check", SupportedLanguage::Hi).as_deref() != Some("ok") {
        return Err(TranslationError::CacheError("缓存读写异常".to_string()));
    }
    tracing::debug!("✓ 缓存正常");

    tracing::info!("自检完成，所有组件正常");
    Ok(())
}

/// 库初始化日志
pub fn init() {
    tracing::info!("phrasebook v{} 已加载", VERSION);
}
