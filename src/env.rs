//! 统一的环境变量管理
//!
//! 提供类型安全、可验证的环境变量访问。配置加载时用这里的
//! 访问器覆盖文件配置，变量未设置时不产生覆盖。

use std::env;
use std::fmt;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    /// 读取并解析变量，未设置时返回错误
    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => Err(EnvError {
                variable: Self::NAME.to_string(),
                message: "Environment variable not set".to_string(),
            }),
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 布尔型变量的统一解析
fn parse_bool(name: &str, value: &str) -> EnvResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(EnvError {
            variable: name.to_string(),
            message: format!("Invalid boolean '{}'. Use: true/false, 1/0, yes/no, on/off", value),
        }),
    }
}

/// 翻译相关环境变量
pub mod translation {
    use super::*;
    use crate::language::SupportedLanguage;

    /// 是否启用翻译
    pub struct Enabled;
    impl EnvVar<bool> for Enabled {
        const NAME: &'static str = "PHRASEBOOK_TRANSLATION_ENABLED";
        const DESCRIPTION: &'static str = "Enable translation: true/false";

        fn parse(value: &str) -> EnvResult<bool> {
            parse_bool(Self::NAME, value)
        }
    }

    /// 默认目标语言
    pub struct TargetLang;
    impl EnvVar<String> for TargetLang {
        const NAME: &'static str = "PHRASEBOOK_TARGET_LANG";
        const DESCRIPTION: &'static str = "Default target language code: en, hi, bn, mr, te, ta";

        fn parse(value: &str) -> EnvResult<String> {
            value
                .parse::<SupportedLanguage>()
                .map(|lang| lang.as_str().to_string())
                .map_err(|e| EnvError {
                    variable: Self::NAME.to_string(),
                    message: e.to_string(),
                })
        }
    }

    /// 是否启用缓存
    pub struct CacheEnabled;
    impl EnvVar<bool> for CacheEnabled {
        const NAME: &'static str = "PHRASEBOOK_CACHE_ENABLED";
        const DESCRIPTION: &'static str = "Enable the in-memory translation cache: true/false";

        fn parse(value: &str) -> EnvResult<bool> {
            parse_bool(Self::NAME, value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::translation::*;
    use super::*;

    #[test]
    fn test_parse_bool_values() {
        assert!(Enabled::parse("true").unwrap());
        assert!(!Enabled::parse("0").unwrap());
        assert!(CacheEnabled::parse("YES").unwrap());
        assert!(Enabled::parse("maybe").is_err());
    }

    #[test]
    fn test_parse_target_lang() {
        assert_eq!(TargetLang::parse("hi").unwrap(), "hi");
        assert_eq!(TargetLang::parse("TA").unwrap(), "ta");
        assert!(TargetLang::parse("xx").is_err());
    }

    #[test]
    fn test_unset_variable_is_error() {
        // 未设置时返回错误而非默认值，覆盖逻辑据此判断是否生效
        std::env::remove_var(Enabled::NAME);
        assert!(Enabled::get().is_err());
        assert!(Enabled::get_or_default(true));
    }
}
