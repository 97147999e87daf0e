//! 文本处理管道模块
//!
//! 负责从嵌套对象中收集可翻译文本、过滤空白内容并回写翻译结果

pub mod collector;
pub mod filters;

pub use collector::{CollectorConfig, TextCollector, TextItem};
pub use filters::TextFilter;
