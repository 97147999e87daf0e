//! 支持的语言定义
//!
//! 提供封闭的语言代码枚举和面向UI的语言信息列表

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TranslationError;

/// 支持的目标语言
///
/// 封闭枚举，语言代码为小写两字母形式。`En` 是默认语言，
/// 翻译到默认语言时恒等返回原文。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLanguage {
    /// 英语（默认语言）
    En,
    /// 印地语
    Hi,
    /// 孟加拉语
    Bn,
    /// 马拉地语
    Mr,
    /// 泰卢固语
    Te,
    /// 泰米尔语
    Ta,
}

impl SupportedLanguage {
    /// 默认语言代码
    pub const DEFAULT: SupportedLanguage = SupportedLanguage::En;

    /// 所有支持的语言，按UI展示顺序排列
    pub const ALL: [SupportedLanguage; 6] = [
        SupportedLanguage::En,
        SupportedLanguage::Hi,
        SupportedLanguage::Bn,
        SupportedLanguage::Mr,
        SupportedLanguage::Te,
        SupportedLanguage::Ta,
    ];

    /// 语言代码字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportedLanguage::En => "en",
            SupportedLanguage::Hi => "hi",
            SupportedLanguage::Bn => "bn",
            SupportedLanguage::Mr => "mr",
            SupportedLanguage::Te => "te",
            SupportedLanguage::Ta => "ta",
        }
    }

    /// 英文显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportedLanguage::En => "English",
            SupportedLanguage::Hi => "Hindi",
            SupportedLanguage::Bn => "Bengali",
            SupportedLanguage::Mr => "Marathi",
            SupportedLanguage::Te => "Telugu",
            SupportedLanguage::Ta => "Tamil",
        }
    }

    /// 母语书写的名称
    pub fn native_name(&self) -> &'static str {
        match self {
            SupportedLanguage::En => "English",
            SupportedLanguage::Hi => "हिंदी",
            SupportedLanguage::Bn => "বাংলা",
            SupportedLanguage::Mr => "मराठी",
            SupportedLanguage::Te => "తెలుగు",
            SupportedLanguage::Ta => "தமிழ்",
        }
    }

    /// 是否为默认语言
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// 构造该语言的信息条目
    pub fn info(&self) -> LanguageInfo {
        LanguageInfo {
            code: *self,
            name: self.display_name(),
            native_name: self.native_name(),
        }
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupportedLanguage {
    type Err = TranslationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(SupportedLanguage::En),
            "hi" => Ok(SupportedLanguage::Hi),
            "bn" => Ok(SupportedLanguage::Bn),
            "mr" => Ok(SupportedLanguage::Mr),
            "te" => Ok(SupportedLanguage::Te),
            "ta" => Ok(SupportedLanguage::Ta),
            other => Err(TranslationError::InvalidInput(format!(
                "不支持的语言代码: '{}'，可用: en, hi, bn, mr, te, ta",
                other
            ))),
        }
    }
}

impl Default for SupportedLanguage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// 单个语言的UI信息
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageInfo {
    /// 语言代码
    pub code: SupportedLanguage,
    /// 英文显示名称
    pub name: &'static str,
    /// 母语书写的名称
    pub native_name: &'static str,
}

/// 获取全部支持语言的信息列表，供UI下拉框等消费
pub fn supported_languages() -> Vec<LanguageInfo> {
    SupportedLanguage::ALL.iter().map(|lang| lang.info()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_roundtrip() {
        for lang in SupportedLanguage::ALL {
            let parsed: SupportedLanguage = lang.as_str().parse().unwrap();
            assert_eq!(parsed, lang);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("HI".parse::<SupportedLanguage>().unwrap(), SupportedLanguage::Hi);
        assert_eq!(" ta ".parse::<SupportedLanguage>().unwrap(), SupportedLanguage::Ta);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!("fr".parse::<SupportedLanguage>().is_err());
        assert!("".parse::<SupportedLanguage>().is_err());
    }

    #[test]
    fn test_default_language() {
        assert!(SupportedLanguage::En.is_default());
        assert!(!SupportedLanguage::Hi.is_default());
        assert_eq!(SupportedLanguage::default(), SupportedLanguage::En);
    }

    #[test]
    fn test_supported_languages_list() {
        let langs = supported_languages();
        assert_eq!(langs.len(), 6);
        assert_eq!(langs[0].code, SupportedLanguage::En);
        assert_eq!(langs[1].name, "Hindi");
        assert_eq!(langs[1].native_name, "हिंदी");
    }
}
