//! 核心翻译服务模块
//!
//! 包含翻译服务、健康检查、统计信息等核心功能

pub mod service;

pub use service::{
    HealthLevel, HealthStatus, ServiceStats, ServiceStatsSnapshot, TranslationService,
};
