// 集成测试公共模块
//
// 提供测试辅助工具和共享功能

#![allow(dead_code)]

use std::future::Future;
use std::time::{Duration, Instant};

use serde_json::{json, Value};

use phrasebook::{PhraseDictionary, TranslationCache, TranslationConfig, TranslationService};

/// 测试环境
///
/// 服务与缓存共享同一份底层存储，测试可以通过 `cache` 句柄
/// 从外部观察服务的缓存行为。
pub struct TestEnvironment {
    pub config: TranslationConfig,
    pub cache: TranslationCache,
    pub service: TranslationService,
}

impl TestEnvironment {
    /// 默认测试环境：内置词典，目标语言印地语
    pub fn new() -> Self {
        Self::with_config(TranslationConfig::default_with_lang("hi"))
    }

    /// 使用指定配置创建测试环境
    pub fn with_config(config: TranslationConfig) -> Self {
        let cache = TranslationCache::new();
        let service = TranslationService::with_cache(config.clone(), cache.clone())
            .expect("测试配置应当有效");

        Self {
            config,
            cache,
            service,
        }
    }

    /// 禁用翻译的环境
    pub fn disabled() -> Self {
        let config = TranslationConfig {
            enabled: false,
            ..TranslationConfig::default_with_lang("hi")
        };
        Self::with_config(config)
    }

    /// 禁用缓存的环境
    pub fn without_cache() -> Self {
        let config = TranslationConfig {
            cache_enabled: false,
            ..TranslationConfig::default_with_lang("hi")
        };
        Self::with_config(config)
    }

    /// 使用自定义词典的环境
    pub fn with_dictionary(dictionary: PhraseDictionary) -> Self {
        let config = TranslationConfig::default_with_lang("hi");
        let cache = TranslationCache::new();
        let service =
            TranslationService::with_dictionary(config.clone(), dictionary, cache.clone())
                .expect("测试配置应当有效");

        Self {
            config,
            cache,
            service,
        }
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

/// 测试数据生成器
pub struct TestDataGenerator;

impl TestDataGenerator {
    /// 内置词典中已知的印地语短语对
    pub fn known_hindi_phrases() -> Vec<(&'static str, &'static str)> {
        vec![
            ("Take Aptitude Quiz", "योग्यता परीक्षा लें"),
            ("Explore Colleges", "कॉलेज देखें"),
            ("Get Started Today", "आज ही शुरू करें"),
            ("Success Rate", "सफलता दर"),
        ]
    }

    /// 生成指定数量的不重复测试文本
    pub fn create_test_texts(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("sample text {}", i)).collect()
    }

    /// 生成嵌套测试对象
    pub fn create_nested_object() -> Value {
        json!({
            "title": "Take Aptitude Quiz",
            "description": "Find government colleges near you with detailed information",
            "id": "feature-quiz",
            "count": 42,
            "tags": ["quiz", "career"],
            "details": {
                "heading": "Career Mapping",
                "id": "nested-id",
                "body": {
                    "text": "Some free-form text"
                }
            }
        })
    }
}

/// 断言辅助
pub struct AssertionHelper;

impl AssertionHelper {
    /// 断言集合大小在范围内
    pub fn assert_size_in_range<T>(items: &[T], min: usize, max: usize, label: &str) {
        assert!(
            items.len() >= min && items.len() <= max,
            "{}: expected size in [{}, {}], got {}",
            label,
            min,
            max,
            items.len()
        );
    }
}

/// 性能测量辅助
pub struct PerformanceHelper;

impl PerformanceHelper {
    /// 测量同步操作耗时
    pub fn measure_time<F, R>(f: F) -> (R, Duration)
    where
        F: FnOnce() -> R,
    {
        let start = Instant::now();
        let result = f();
        (result, start.elapsed())
    }

    /// 测量异步操作耗时
    pub async fn measure_async_time<F, Fut, R>(f: F) -> (R, Duration)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = R>,
    {
        let start = Instant::now();
        let result = f().await;
        (result, start.elapsed())
    }

    /// 断言操作在时限内完成
    pub fn assert_performance<F, R>(f: F, max_duration: Duration, label: &str) -> R
    where
        F: FnOnce() -> R,
    {
        let (result, elapsed) = Self::measure_time(f);
        assert!(
            elapsed <= max_duration,
            "{}: expected to finish within {:?}, took {:?}",
            label,
            max_duration,
            elapsed
        );
        result
    }
}
