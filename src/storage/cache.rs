//! 翻译缓存模块
//!
//! 按规范化文本键缓存各语言的翻译结果。缓存无上限、不过期，
//! 只能通过显式清空操作移除条目。

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;

use crate::language::SupportedLanguage;

/// 生成缓存键
///
/// 去除首尾空白并转为小写，使大小写和空白差异共享同一条目。
/// 词典查询不经过这里，词典始终按原文精确匹配。
pub fn cache_key(text: &str) -> String {
    text.trim().to_lowercase()
}

/// 缓存条目
///
/// 一个规范化原文键下按目标语言存放的翻译集合。
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub original_text: String,
    pub translations: HashMap<SupportedLanguage, String>,
    pub created_at: Instant,
    pub access_count: u64,
    pub last_accessed: Instant,
}

impl CacheEntry {
    /// 创建新的缓存条目
    pub fn new(original_text: String) -> Self {
        let now = Instant::now();
        Self {
            original_text,
            translations: HashMap::new(),
            created_at: now,
            access_count: 0,
            last_accessed: now,
        }
    }

    /// 更新访问信息
    pub fn access(&mut self) {
        self.access_count += 1;
        self.last_accessed = Instant::now();
    }

    /// 查询指定语言的翻译
    pub fn get(&self, target_lang: SupportedLanguage) -> Option<&str> {
        self.translations.get(&target_lang).map(String::as_str)
    }

    /// 写入指定语言的翻译
    pub fn insert(&mut self, target_lang: SupportedLanguage, translated: String) {
        self.translations.insert(target_lang, translated);
    }
}

/// 缓存统计信息
#[derive(Debug, Default, Clone)]
pub struct CacheStats {
    pub total_requests: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub total_entries: usize,
    pub clears: u64,
}

impl CacheStats {
    /// 计算缓存命中率
    pub fn hit_rate(&self) -> f64 {
        if self.total_requests == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.total_requests as f64
        }
    }

    /// 计算缓存未命中率
    pub fn miss_rate(&self) -> f64 {
        1.0 - self.hit_rate()
    }

    /// 重置统计信息
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 合并统计信息
    pub fn merge(&mut self, other: &CacheStats) {
        self.total_requests += other.total_requests;
        self.cache_hits += other.cache_hits;
        self.cache_misses += other.cache_misses;
        self.clears += other.clears;
        // total_entries使用当前值，因为它是快照
    }
}

/// 翻译缓存
///
/// 规范化原文键到各语言翻译的进程内映射。克隆共享同一份底层存储。
#[derive(Debug, Clone)]
pub struct TranslationCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    stats: Arc<RwLock<CacheStats>>,
}

impl TranslationCache {
    /// 创建新的翻译缓存
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            stats: Arc::new(RwLock::new(CacheStats::default())),
        }
    }

    /// 查询缓存
    ///
    /// 键在内部规范化，命中时更新条目的访问信息。
    /// 两把锁从不同时持有，避免锁序问题。
    pub fn get(&self, text: &str, target_lang: SupportedLanguage) -> Option<String> {
        let key = cache_key(text);

        let result = {
            let mut entries = self.entries.write().unwrap();
            entries.get_mut(&key).and_then(|entry| {
                let translated = entry.get(target_lang).map(str::to_string);
                if translated.is_some() {
                    entry.access();
                }
                translated
            })
        };

        let mut stats = self.stats.write().unwrap();
        stats.total_requests += 1;
        if result.is_some() {
            stats.cache_hits += 1;
        } else {
            stats.cache_misses += 1;
        }

        result
    }

    /// 写入缓存
    pub fn insert(&self, text: &str, target_lang: SupportedLanguage, translated: String) {
        let key = cache_key(text);

        let entry_count = {
            let mut entries = self.entries.write().unwrap();
            entries
                .entry(key)
                .or_insert_with(|| CacheEntry::new(text.to_string()))
                .insert(target_lang, translated);
            entries.len()
        };

        let mut stats = self.stats.write().unwrap();
        stats.total_entries = entry_count;
    }

    /// 无条件清空全部缓存条目
    pub fn clear(&self) {
        let removed = {
            let mut entries = self.entries.write().unwrap();
            let removed = entries.len();
            entries.clear();
            removed
        };

        {
            let mut stats = self.stats.write().unwrap();
            stats.total_entries = 0;
            stats.clears += 1;
        }

        tracing::debug!("缓存已清空，移除 {} 个条目", removed);
    }

    /// 获取缓存条目数
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap();
        entries.len()
    }

    /// 缓存是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 检查指定文本和语言是否已缓存
    pub fn contains(&self, text: &str, target_lang: SupportedLanguage) -> bool {
        let entries = self.entries.read().unwrap();
        entries
            .get(&cache_key(text))
            .is_some_and(|entry| entry.translations.contains_key(&target_lang))
    }

    /// 获取所有规范化缓存键
    pub fn keys(&self) -> Vec<String> {
        let entries = self.entries.read().unwrap();
        entries.keys().cloned().collect()
    }

    /// 获取统计信息
    pub fn get_stats(&self) -> CacheStats {
        let mut result = {
            let stats = self.stats.read().unwrap();
            stats.clone()
        };
        result.total_entries = self.len();
        result
    }

    /// 获取缓存命中率
    pub fn hit_rate(&self) -> f64 {
        let stats = self.stats.read().unwrap();
        stats.hit_rate()
    }

    /// 重置统计信息
    pub fn reset_stats(&self) {
        let mut stats = self.stats.write().unwrap();
        *stats = CacheStats::default();
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::new()
    }
}
