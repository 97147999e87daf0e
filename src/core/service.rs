//! 翻译服务核心实现
//!
//! 本模块提供统一的翻译服务接口，整合词典查询、缓存管理和对象
//! 文本收集。这是翻译系统的主要入口点。
//!
//! ## 查询顺序
//!
//! 1. 目标语言为默认语言时恒等返回原文
//! 2. 静态词典按原文精确匹配
//! 3. 内存缓存按规范化键匹配
//! 4. 以原文兜底，并写入缓存
//!
//! 当前没有接入真实翻译后端，兜底即把原文当作译文。保留
//! 缓存在兜底之前的查询顺序，便于将来接入后端时不改变对外契约。
//!
//! ## 错误处理
//!
//! 翻译入口不向调用方传播错误。内部错误按严重程度记录日志，
//! 调用方拿到的始终是译文或原文。
//!
//! ## 使用示例
//!
//! ```rust,no_run
//! use phrasebook::core::TranslationService;
//! use phrasebook::language::SupportedLanguage;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let service = TranslationService::create_default("hi")?;
//!
//! let translated = service
//!     .translate("Take Aptitude Quiz", SupportedLanguage::Hi)
//!     .await;
//! assert_eq!(translated, "योग्यता परीक्षा लें");
//!
//! let stats = service.get_stats().snapshot();
//! println!("已处理 {} 个文本", stats.translations_total);
//! # Ok(())
//! # }
//! ```

use std::sync::{
    atomic::{AtomicU64, AtomicUsize, Ordering},
    Arc,
};
use std::time::Instant;

use serde_json::Value;

use crate::config::TranslationConfig;
use crate::dictionary::PhraseDictionary;
use crate::error::{helpers, TranslationResult};
use crate::language::SupportedLanguage;
use crate::pipeline::{TextCollector, TextFilter};
use crate::storage::TranslationCache;

/// 统一的翻译服务
///
/// 持有静态词典、可注入的缓存句柄、配置和统计信息。所有翻译
/// 操作通过共享引用工作，可以放入 `Arc` 在多处使用；缓存句柄
/// 克隆共享同一份底层存储，生命周期由调用方控制（构造、使用、
/// 显式清空）。
pub struct TranslationService {
    /// 翻译配置
    config: TranslationConfig,

    /// 静态短语词典，构造后只读
    dictionary: Arc<PhraseDictionary>,

    /// 翻译缓存句柄
    cache: TranslationCache,

    /// 服务统计信息
    stats: ServiceStats,
}

impl TranslationService {
    /// 创建新的翻译服务实例
    ///
    /// 使用内置词典和新建的空缓存。配置验证失败时返回错误。
    pub fn new(config: TranslationConfig) -> TranslationResult<Self> {
        Self::with_dictionary(config, PhraseDictionary::builtin().clone(), TranslationCache::new())
    }

    /// 创建使用调用方缓存的翻译服务
    ///
    /// 调用方保留缓存句柄的克隆即可在服务之外观察和清空缓存。
    pub fn with_cache(
        config: TranslationConfig,
        cache: TranslationCache,
    ) -> TranslationResult<Self> {
        Self::with_dictionary(config, PhraseDictionary::builtin().clone(), cache)
    }

    /// 创建使用自定义词典和缓存的翻译服务
    pub fn with_dictionary(
        config: TranslationConfig,
        dictionary: PhraseDictionary,
        cache: TranslationCache,
    ) -> TranslationResult<Self> {
        config.validate()?;

        Ok(Self {
            config,
            dictionary: Arc::new(dictionary),
            cache,
            stats: ServiceStats::default(),
        })
    }

    /// 创建使用默认配置的翻译服务
    ///
    /// # 参数
    ///
    /// * `target_lang` - 默认目标语言代码（en, hi, bn, mr, te, ta）
    pub fn create_default(target_lang: &str) -> TranslationResult<Self> {
        let config = crate::config::load_translation_config(target_lang);
        Self::new(config)
    }

    /// 翻译单个文本
    ///
    /// 依次尝试默认语言捷径、词典精确匹配、缓存命中，最后以原文
    /// 兜底并写入缓存。任何内部错误都会被记录并以原文兜底，调用
    /// 方不会看到错误。
    pub async fn translate(&self, text: &str, target_lang: SupportedLanguage) -> String {
        let start = Instant::now();

        let result = match self.try_translate(text, target_lang) {
            Ok(translated) => translated,
            Err(e) => {
                helpers::log_error(&e);
                self.stats.inc_errors();
                text.to_string()
            }
        };

        self.stats.add_processing_time(start.elapsed());
        result
    }

    fn try_translate(
        &self,
        text: &str,
        target_lang: SupportedLanguage,
    ) -> TranslationResult<String> {
        self.stats.inc_translations();
        self.stats.add_chars_processed(text.chars().count());

        // 翻译被禁用或目标为默认语言时恒等返回
        if !self.config.enabled || target_lang.is_default() {
            return Ok(text.to_string());
        }

        // 词典按原文精确匹配，优先于缓存，命中不写缓存
        if let Some(translated) = self.dictionary.lookup(text, target_lang) {
            self.stats.inc_dictionary_hits();
            tracing::debug!("词典命中: '{}' -> {}", text, target_lang);
            return Ok(translated.to_string());
        }

        if self.config.cache_enabled {
            if let Some(cached) = self.cache.get(text, target_lang) {
                self.stats.inc_cache_hits();
                return Ok(cached);
            }
            self.stats.inc_cache_misses();
        }

        // 没有翻译后端，以原文作为译文兜底
        let translated = text.to_string();
        if self.config.cache_enabled {
            self.cache.insert(text, target_lang, translated.clone());
        }
        self.stats.inc_identity_fallbacks();

        Ok(translated)
    }

    /// 批量翻译文本序列
    ///
    /// 各文本相互独立，结果保持输入顺序和长度。目标为默认语言时
    /// 整批直接返回。
    pub async fn translate_batch(
        &self,
        texts: &[String],
        target_lang: SupportedLanguage,
    ) -> Vec<String> {
        if !self.config.enabled || target_lang.is_default() {
            return texts.to_vec();
        }

        let mut translations = Vec::with_capacity(texts.len());
        for text in texts {
            translations.push(self.translate(text, target_lang).await);
        }

        self.stats.inc_batches_processed();
        translations
    }

    /// 翻译嵌套对象中的字符串字段
    ///
    /// 递归遍历对象映射，收集未被 `exclude_keys` 排除的非空白
    /// 字符串叶子，整批翻译后按原路径回写。数组、非字符串值和
    /// 被排除的子树原样保留。失败时记录日志并返回原对象。
    pub async fn translate_object(
        &self,
        value: Value,
        target_lang: SupportedLanguage,
        exclude_keys: &[String],
    ) -> Value {
        if !self.config.enabled || target_lang.is_default() {
            return value;
        }

        let collector = TextCollector::with_exclude_keys(exclude_keys);

        let items = match collector.collect_texts(&value) {
            Ok(items) => items,
            Err(e) => {
                helpers::log_error(&e);
                self.stats.inc_errors();
                return value;
            }
        };

        if items.is_empty() {
            return value;
        }

        let texts: Vec<String> = items.iter().map(|item| item.text.clone()).collect();
        let translations = self.translate_batch(&texts, target_lang).await;

        let mut result = value;
        if let Err(e) = collector.apply_translations(&mut result, &items, &translations) {
            helpers::log_error(&e);
            self.stats.inc_errors();
            return result;
        }

        self.stats.inc_objects_processed();
        result
    }

    /// 无条件清空全部缓存条目
    pub fn clear_cache(&self) {
        self.cache.clear();
        tracing::info!("翻译缓存已清空");
    }

    /// 获取缓存句柄
    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    /// 获取配置
    pub fn config(&self) -> &TranslationConfig {
        &self.config
    }

    /// 获取词典
    pub fn dictionary(&self) -> &PhraseDictionary {
        &self.dictionary
    }

    /// 获取服务统计信息
    pub fn get_stats(&self) -> &ServiceStats {
        &self.stats
    }

    /// 重置所有统计信息
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    /// 获取服务健康状态
    ///
    /// 检查配置、词典、缓存和文本过滤器，返回各组件与整体的
    /// 健康等级。
    pub fn get_health(&self) -> HealthStatus {
        let mut components = std::collections::HashMap::new();

        let config_health = if self.config.validate().is_ok() {
            HealthLevel::Healthy
        } else {
            HealthLevel::Unhealthy
        };
        components.insert("config".to_string(), config_health);

        let dictionary_health = if self.dictionary.is_empty() {
            // 空词典仍可服务，只是全部走缓存和兜底
            HealthLevel::Degraded
        } else {
            HealthLevel::Healthy
        };
        components.insert("dictionary".to_string(), dictionary_health);

        components.insert("cache".to_string(), HealthLevel::Healthy);

        let filter_health = if TextFilter::new().should_translate("Hello World") {
            HealthLevel::Healthy
        } else {
            HealthLevel::Unhealthy
        };
        components.insert("filter".to_string(), filter_health);

        let overall = if components.values().any(|&level| level == HealthLevel::Unhealthy) {
            HealthLevel::Unhealthy
        } else if components.values().all(|&level| level == HealthLevel::Healthy) {
            HealthLevel::Healthy
        } else {
            HealthLevel::Degraded
        };

        HealthStatus { overall, components }
    }
}

/// 翻译服务统计信息（线程安全版本）
///
/// 使用原子操作收集性能指标，支持无锁并发访问。
#[derive(Debug, Default)]
pub struct ServiceStats {
    /// 处理的翻译请求总数
    pub translations_total: AtomicUsize,

    /// 词典命中次数
    pub dictionary_hits: AtomicUsize,

    /// 缓存命中次数
    pub cache_hits: AtomicUsize,

    /// 缓存未命中次数
    pub cache_misses: AtomicUsize,

    /// 原文兜底次数
    pub identity_fallbacks: AtomicUsize,

    /// 处理的批次数量
    pub batches_processed: AtomicUsize,

    /// 处理的对象数量
    pub objects_processed: AtomicUsize,

    /// 遇到的错误次数
    pub errors_encountered: AtomicUsize,

    /// 总处理时间，以微秒为单位存储
    pub processing_time: AtomicU64,

    /// 处理的字符总数
    pub total_chars_processed: AtomicUsize,
}

impl ServiceStats {
    pub fn inc_translations(&self) {
        self.translations_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_dictionary_hits(&self) {
        self.dictionary_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_cache_hits(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_cache_misses(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_identity_fallbacks(&self) {
        self.identity_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_batches_processed(&self) {
        self.batches_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_objects_processed(&self) {
        self.objects_processed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_errors(&self) {
        self.errors_encountered.fetch_add(1, Ordering::Relaxed);
    }

    /// 累加处理时间，微秒精度
    pub fn add_processing_time(&self, duration: std::time::Duration) {
        self.processing_time
            .fetch_add(duration.as_micros() as u64, Ordering::Relaxed);
    }

    pub fn add_chars_processed(&self, count: usize) {
        self.total_chars_processed.fetch_add(count, Ordering::Relaxed);
    }

    /// 获取统计数据的一致性快照
    pub fn snapshot(&self) -> ServiceStatsSnapshot {
        ServiceStatsSnapshot {
            translations_total: self.translations_total.load(Ordering::Relaxed),
            dictionary_hits: self.dictionary_hits.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            cache_misses: self.cache_misses.load(Ordering::Relaxed),
            identity_fallbacks: self.identity_fallbacks.load(Ordering::Relaxed),
            batches_processed: self.batches_processed.load(Ordering::Relaxed),
            objects_processed: self.objects_processed.load(Ordering::Relaxed),
            errors_encountered: self.errors_encountered.load(Ordering::Relaxed),
            processing_time: std::time::Duration::from_micros(
                self.processing_time.load(Ordering::Relaxed),
            ),
            total_chars_processed: self.total_chars_processed.load(Ordering::Relaxed),
        }
    }

    /// 重置所有统计计数器
    pub fn reset(&self) {
        self.translations_total.store(0, Ordering::Relaxed);
        self.dictionary_hits.store(0, Ordering::Relaxed);
        self.cache_hits.store(0, Ordering::Relaxed);
        self.cache_misses.store(0, Ordering::Relaxed);
        self.identity_fallbacks.store(0, Ordering::Relaxed);
        self.batches_processed.store(0, Ordering::Relaxed);
        self.objects_processed.store(0, Ordering::Relaxed);
        self.errors_encountered.store(0, Ordering::Relaxed);
        self.processing_time.store(0, Ordering::Relaxed);
        self.total_chars_processed.store(0, Ordering::Relaxed);
    }
}

/// 翻译服务统计数据的不可变快照
///
/// 同一时刻读取的全部计数器副本，适合展示和分析。
#[derive(Debug, Clone, Copy)]
pub struct ServiceStatsSnapshot {
    pub translations_total: usize,
    pub dictionary_hits: usize,
    pub cache_hits: usize,
    pub cache_misses: usize,
    pub identity_fallbacks: usize,
    pub batches_processed: usize,
    pub objects_processed: usize,
    pub errors_encountered: usize,
    pub processing_time: std::time::Duration,
    pub total_chars_processed: usize,
}

impl ServiceStatsSnapshot {
    /// 计算缓存命中率
    pub fn cache_hit_rate(&self) -> f64 {
        let total = self.cache_hits + self.cache_misses;
        if total == 0 {
            0.0
        } else {
            self.cache_hits as f64 / total as f64
        }
    }
}

/// 翻译服务的健康状态报告
#[derive(Debug, Clone)]
pub struct HealthStatus {
    /// 整体健康级别
    pub overall: HealthLevel,

    /// 各组件的健康状态映射
    pub components: std::collections::HashMap<String, HealthLevel>,
}

/// 健康状态级别枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthLevel {
    /// 健康状态，组件运行正常
    Healthy,

    /// 降级状态，组件功能受限但仍可用
    Degraded,

    /// 不健康状态，组件无法正常工作
    Unhealthy,
}
