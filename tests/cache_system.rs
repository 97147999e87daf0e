//! 缓存系统集成测试
//!
//! 针对翻译缓存的存取、统计、生命周期和并发行为

use std::time::Duration;

use phrasebook::{cache_key, SupportedLanguage, TranslationCache};

mod common;

use common::{PerformanceHelper, TestDataGenerator, TestEnvironment};

/// 测试缓存句柄与服务共享存储
#[tokio::test]
async fn test_injected_cache_is_shared() {
    let env = TestEnvironment::default();

    // 通过服务写入，从外部句柄读取
    env.service.translate("shared entry", SupportedLanguage::Hi).await;
    assert_eq!(
        env.cache.get("shared entry", SupportedLanguage::Hi),
        Some("shared entry".to_string())
    );

    // 通过外部句柄预置，服务直接命中
    env.cache
        .insert("preseeded", SupportedLanguage::Ta, "முன்பே".to_string());
    let translated = env.service.translate("preseeded", SupportedLanguage::Ta).await;
    assert_eq!(translated, "முன்பே", "Service must serve values seeded by the caller");

    println!("✅ Shared cache handle test passed");
}

/// 测试缓存键规范化
#[test]
fn test_cache_key_normalization_rules() {
    assert_eq!(cache_key("  Hello World  "), "hello world");
    assert_eq!(cache_key("HELLO"), "hello");
    assert_eq!(cache_key("\tmixed Case\n"), "mixed case");
    // 已规范化的键保持不变
    assert_eq!(cache_key("hello"), "hello");
}

/// 测试每个键按语言独立存放
#[test]
fn test_per_language_slots() {
    let cache = TranslationCache::new();

    cache.insert("greeting", SupportedLanguage::Hi, "नमस्ते".to_string());
    cache.insert("greeting", SupportedLanguage::Bn, "হ্যালো".to_string());

    assert_eq!(cache.len(), 1, "One normalized key, two language slots");
    assert_eq!(cache.get("greeting", SupportedLanguage::Hi), Some("नमस्ते".to_string()));
    assert_eq!(cache.get("greeting", SupportedLanguage::Bn), Some("হ্যালো".to_string()));
    assert_eq!(cache.get("greeting", SupportedLanguage::Mr), None);
}

/// 测试统计信息口径
#[test]
fn test_cache_stats_accounting() {
    let cache = TranslationCache::new();

    cache.insert("a", SupportedLanguage::Hi, "1".to_string());

    cache.get("a", SupportedLanguage::Hi); // 命中
    cache.get("a", SupportedLanguage::Ta); // 键存在但语言未命中
    cache.get("b", SupportedLanguage::Hi); // 键不存在

    let stats = cache.get_stats();
    assert_eq!(stats.total_requests, 3);
    assert_eq!(stats.cache_hits, 1);
    assert_eq!(stats.cache_misses, 2);
    assert!((stats.hit_rate() - 1.0 / 3.0).abs() < f64::EPSILON);

    cache.reset_stats();
    let reset = cache.get_stats();
    assert_eq!(reset.total_requests, 0);
    assert_eq!(reset.total_entries, 1, "Entries survive a stats reset");
}

/// 测试缓存无上限、不过期
#[test]
fn test_unbounded_no_expiry() {
    let cache = TranslationCache::new();

    for i in 0..2000 {
        cache.insert(&format!("key-{}", i), SupportedLanguage::Hi, format!("v-{}", i));
    }

    assert_eq!(cache.len(), 2000, "No size bound, nothing evicted");
    assert_eq!(cache.get("key-0", SupportedLanguage::Hi), Some("v-0".to_string()));
    assert_eq!(
        cache.get("key-1999", SupportedLanguage::Hi),
        Some("v-1999".to_string())
    );
}

/// 测试显式清空是唯一的移除手段
#[tokio::test]
async fn test_explicit_clear_lifecycle() {
    let env = TestEnvironment::default();

    for text in TestDataGenerator::create_test_texts(10) {
        env.service.translate(&text, SupportedLanguage::Hi).await;
    }
    assert_eq!(env.cache.len(), 10);

    env.service.clear_cache();

    assert!(env.cache.is_empty());
    assert_eq!(env.cache.get_stats().clears, 1);
    assert!(env.cache.keys().is_empty());

    println!("✅ Explicit clear lifecycle test passed");
}

/// 测试并发缓存操作
#[tokio::test]
async fn test_concurrent_cache_operations() {
    let cache = TranslationCache::new();

    let mut handles = Vec::new();
    for i in 0..50 {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            let key = format!("concurrent-{}", i);
            cache.insert(&key, SupportedLanguage::Hi, format!("value-{}", i));
            cache.get(&key, SupportedLanguage::Hi)
        }));
    }

    for handle in handles {
        let value = handle.await.expect("Concurrent operation should complete");
        assert!(value.is_some(), "Concurrent retrieval should find the inserted value");
    }

    assert_eq!(cache.len(), 50);
    assert_eq!(cache.get_stats().cache_hits, 50);

    println!("✅ Concurrent cache operations test passed");
}

/// 测试大量缓存操作的性能
#[test]
fn test_cache_operation_performance() {
    let cache = TranslationCache::new();

    PerformanceHelper::assert_performance(
        || {
            for i in 0..1000 {
                let key = format!("perf-{}", i);
                cache.insert(&key, SupportedLanguage::Hi, format!("v-{}", i));
                assert!(cache.get(&key, SupportedLanguage::Hi).is_some());
            }
        },
        Duration::from_secs(1),
        "1000 insert+get pairs",
    );

    println!("✅ Cache performance test passed");
}
