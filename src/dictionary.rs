//! 静态短语词典
//!
//! 人工维护的精确匹配短语翻译表。查询优先级高于缓存，
//! 进程启动后不可变。

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::language::SupportedLanguage;

/// 印地语内置短语表
///
/// 键为英文原文，按精确匹配查询。其余语言暂无人工条目。
const HINDI_PHRASES: &[(&str, &str)] = &[
    // 首页内容
    (
        "Your Future Starts with the Right Choice",
        "आपका भविष्य सही चुनाव से शुरू होता है",
    ),
    (
        "Personalized career guidance for Class 10 & 12 students. Discover your path through government colleges and build your dream career.",
        "कक्षा 10 और 12 के छात्रों के लिए व्यक्तिगत करियर मार्गदर्शन। सरकारी कॉलेजों के माध्यम से अपना रास्ता खोजें और अपना सपनों का करियर बनाएं।",
    ),
    ("Take Aptitude Quiz", "योग्यता परीक्षा लें"),
    ("Explore Colleges", "कॉलेज देखें"),
    (
        "Everything You Need for Career Success",
        "करियर सफलता के लिए आपको जो कुछ चाहिए",
    ),
    (
        "Our comprehensive platform provides all the tools and guidance you need to make informed decisions about your future.",
        "हमारा व्यापक प्लेटफॉर्म आपके भविष्य के बारे में सूचित निर्णय लेने के लिए आवश्यक सभी उपकरण और मार्गदर्शन प्रदान करता है।",
    ),
    ("Ready to Discover Your Path?", "अपना रास्ता खोजने के लिए तैयार हैं?"),
    (
        "Join thousands of students who have found their perfect career match through our platform.",
        "हजारों छात्रों से जुड़ें जिन्होंने हमारे प्लेटफॉर्म के माध्यम से अपना सही करियर मैच पाया है।",
    ),
    ("Get Started Today", "आज ही शुरू करें"),
    // 功能板块
    ("Aptitude Assessment", "योग्यता मूल्यांकन"),
    (
        "Discover your strengths and interests through scientifically designed quizzes",
        "वैज्ञानिक रूप से डिज़ाइन की गई प्रश्नोत्तरी के माध्यम से अपनी शक्तियों और रुचियों की खोज करें",
    ),
    ("Career Mapping", "करियर मैपिंग"),
    (
        "Visualize your career journey from degree to dream job",
        "डिग्री से लेकर सपनों की नौकरी तक अपनी करियर यात्रा को देखें",
    ),
    ("College Directory", "कॉलेज निर्देशिका"),
    (
        "Find government colleges near you with detailed information",
        "विस्तृत जानकारी के साथ अपने पास के सरकारी कॉलेज खोजें",
    ),
    ("Timeline Tracker", "समयसीमा ट्रैकर"),
    (
        "Never miss important admission deadlines and exam dates",
        "महत्वपूर्ण प्रवेश की अंतिम तिथि और परीक्षा की तारीखें कभी न चूकें",
    ),
    ("Expert Guidance", "विशेषज्ञ मार्गदर्शन"),
    (
        "Get personalized recommendations based on your profile",
        "अपनी प्रोफ़ाइल के आधार पर व्यक्तिगत सिफारिशें प्राप्त करें",
    ),
    ("Scholarship Info", "छात्रवृत्ति जानकारी"),
    (
        "Access information about scholarships and financial aid",
        "छात्रवृत्ति और वित्तीय सहायता के बारे में जानकारी प्राप्त करें",
    ),
    // 统计数据
    ("Students Guided", "छात्रों का मार्गदर्शन"),
    ("Government Colleges", "सरकारी कॉलेज"),
    ("Career Paths", "करियर पथ"),
    ("Success Rate", "सफलता दर"),
];

/// 短语词典
///
/// 语言代码到短语映射的固定表，构造后只读。
#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
    entries: HashMap<SupportedLanguage, HashMap<String, String>>,
}

impl PhraseDictionary {
    /// 创建空词典
    pub fn new() -> Self {
        Self::default()
    }

    /// 从条目列表构造词典
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (SupportedLanguage, S, S)>,
        S: Into<String>,
    {
        let mut map: HashMap<SupportedLanguage, HashMap<String, String>> = HashMap::new();
        for (lang, source, translated) in entries {
            map.entry(lang)
                .or_default()
                .insert(source.into(), translated.into());
        }
        Self { entries: map }
    }

    /// 获取内置词典单例
    pub fn builtin() -> &'static PhraseDictionary {
        static BUILTIN: OnceLock<PhraseDictionary> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            PhraseDictionary::from_entries(
                HINDI_PHRASES
                    .iter()
                    .map(|(source, translated)| (SupportedLanguage::Hi, *source, *translated)),
            )
        })
    }

    /// 精确匹配查询
    ///
    /// 原文不做任何规范化，与缓存键不同。
    pub fn lookup(&self, text: &str, target_lang: SupportedLanguage) -> Option<&str> {
        self.entries
            .get(&target_lang)
            .and_then(|phrases| phrases.get(text))
            .map(String::as_str)
    }

    /// 指定语言的短语条目数
    pub fn phrase_count(&self, target_lang: SupportedLanguage) -> usize {
        self.entries.get(&target_lang).map_or(0, HashMap::len)
    }

    /// 全部条目数
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    /// 词典是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_hindi_lookup() {
        let dict = PhraseDictionary::builtin();
        assert_eq!(
            dict.lookup("Take Aptitude Quiz", SupportedLanguage::Hi),
            Some("योग्यता परीक्षा लें")
        );
        assert_eq!(
            dict.lookup("Success Rate", SupportedLanguage::Hi),
            Some("सफलता दर")
        );
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let dict = PhraseDictionary::builtin();
        // 大小写或空白不同时不命中
        assert_eq!(dict.lookup("take aptitude quiz", SupportedLanguage::Hi), None);
        assert_eq!(dict.lookup(" Take Aptitude Quiz", SupportedLanguage::Hi), None);
    }

    #[test]
    fn test_other_languages_have_no_entries() {
        let dict = PhraseDictionary::builtin();
        assert_eq!(dict.phrase_count(SupportedLanguage::Hi), HINDI_PHRASES.len());
        assert_eq!(dict.phrase_count(SupportedLanguage::Bn), 0);
        assert_eq!(dict.lookup("Take Aptitude Quiz", SupportedLanguage::Ta), None);
    }

    #[test]
    fn test_custom_dictionary() {
        let dict = PhraseDictionary::from_entries([
            (SupportedLanguage::Bn, "Hello", "হ্যালো"),
            (SupportedLanguage::Bn, "World", "বিশ্ব"),
        ]);
        assert_eq!(dict.lookup("Hello", SupportedLanguage::Bn), Some("হ্যালো"));
        assert_eq!(dict.len(), 2);
        assert!(!dict.is_empty());
        assert!(PhraseDictionary::new().is_empty());
    }
}
