//! 文本收集器模块
//!
//! 从嵌套的JSON对象中收集可翻译的字符串叶子，并在翻译完成后
//! 按字段路径回写。只递归对象映射：数组、数字、布尔、null
//! 以及被排除键下的整棵子树原样保留。

use std::collections::HashSet;

use serde_json::Value;

use crate::config::constants;
use crate::error::{helpers, TranslationResult};
use crate::pipeline::filters::TextFilter;

/// 存储需要翻译的文本及其位置信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextItem {
    /// 文本内容
    pub text: String,
    /// 字段路径，从对象根到该叶子
    pub path: Vec<String>,
    /// 在对象中的嵌套深度
    pub depth: usize,
}

/// 收集器配置
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 排除的键名，命中后整棵子树不再收集
    pub exclude_keys: Vec<String>,
    /// 最大递归深度
    pub max_depth: usize,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            exclude_keys: Vec::new(),
            max_depth: constants::DEFAULT_MAX_DEPTH,
        }
    }
}

/// 文本收集器
#[derive(Debug, Clone)]
pub struct TextCollector {
    config: CollectorConfig,
    filter: TextFilter,
}

impl TextCollector {
    /// 创建新的文本收集器
    pub fn new(config: CollectorConfig) -> Self {
        Self {
            config,
            filter: TextFilter::new(),
        }
    }

    /// 创建带排除键列表的收集器
    pub fn with_exclude_keys(exclude_keys: &[String]) -> Self {
        Self::new(CollectorConfig {
            exclude_keys: exclude_keys.to_vec(),
            ..Default::default()
        })
    }

    /// 收集对象中所有可翻译的字符串叶子
    ///
    /// 非对象值没有可收集的内容，返回空列表。
    pub fn collect_texts(&self, value: &Value) -> TranslationResult<Vec<TextItem>> {
        let mut items = Vec::new();

        if let Value::Object(map) = value {
            let excluded: HashSet<&str> =
                self.config.exclude_keys.iter().map(String::as_str).collect();
            let mut path = Vec::new();
            self.walk(map, &excluded, &mut path, 1, &mut items);
        }

        Ok(items)
    }

    fn walk(
        &self,
        map: &serde_json::Map<String, Value>,
        excluded: &HashSet<&str>,
        path: &mut Vec<String>,
        depth: usize,
        items: &mut Vec<TextItem>,
    ) {
        for (key, value) in map {
            if excluded.contains(key.as_str()) {
                continue;
            }

            match value {
                Value::String(text) => {
                    if self.filter.should_translate(text) {
                        let mut item_path = path.clone();
                        item_path.push(key.clone());
                        items.push(TextItem {
                            text: text.clone(),
                            path: item_path,
                            depth,
                        });
                    }
                }
                Value::Object(inner) => {
                    if depth >= self.config.max_depth {
                        tracing::warn!(
                            "对象嵌套超过最大深度 {}，跳过字段 '{}'",
                            self.config.max_depth,
                            key
                        );
                        continue;
                    }
                    path.push(key.clone());
                    self.walk(inner, excluded, path, depth + 1, items);
                    path.pop();
                }
                // 数组和其他非字符串值原样保留
                _ => {}
            }
        }
    }

    /// 将翻译结果按路径回写到对象中
    pub fn apply_translations(
        &self,
        value: &mut Value,
        items: &[TextItem],
        translations: &[String],
    ) -> TranslationResult<()> {
        if items.len() != translations.len() {
            return Err(helpers::internal_error(format!(
                "翻译结果数量不匹配: 期望 {}，实际 {}",
                items.len(),
                translations.len()
            )));
        }

        for (item, translated) in items.iter().zip(translations) {
            let Some((leaf_key, parents)) = item.path.split_last() else {
                continue;
            };

            let mut current = &mut *value;
            for segment in parents {
                let Some(next) = current.get_mut(segment.as_str()) else {
                    return Err(helpers::internal_error(format!(
                        "回写路径不存在: {}",
                        item.path.join(".")
                    )));
                };
                current = next;
            }

            if let Some(slot) = current.get_mut(leaf_key.as_str()) {
                *slot = Value::String(translated.clone());
            }
        }

        Ok(())
    }
}

impl Default for TextCollector {
    fn default() -> Self {
        Self::new(CollectorConfig::default())
    }
}
