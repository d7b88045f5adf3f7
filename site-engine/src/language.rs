// language.rs - Language code mapping
//
// Three code families meet here: the site config code (`zh`), the page
// translation service code (`chinese_simplified`) and the BCP 47 locale
// (`zh-CN`). String tables live elsewhere.

/// One supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub display_name: &'static str,
    pub translate_code: &'static str,
    pub locale: &'static str,
}

pub const LANGUAGES: [Language; 9] = [
    Language {
        code: "zh",
        display_name: "简体中文",
        translate_code: "chinese_simplified",
        locale: "zh-CN",
    },
    Language {
        code: "en",
        display_name: "English",
        translate_code: "english",
        locale: "en-US",
    },
    Language {
        code: "ja",
        display_name: "日本語",
        translate_code: "japanese",
        locale: "ja-JP",
    },
    Language {
        code: "ko",
        display_name: "한국어",
        translate_code: "korean",
        locale: "ko-KR",
    },
    Language {
        code: "es",
        display_name: "Español",
        translate_code: "spanish",
        locale: "es-ES",
    },
    Language {
        code: "th",
        display_name: "ไทย",
        translate_code: "thai",
        locale: "th-TH",
    },
    Language {
        code: "vi",
        display_name: "Tiếng Việt",
        translate_code: "vietnamese",
        locale: "vi-VN",
    },
    Language {
        code: "tr",
        display_name: "Türkçe",
        translate_code: "turkish",
        locale: "tr-TR",
    },
    Language {
        code: "id",
        display_name: "Bahasa Indonesia",
        translate_code: "indonesian",
        locale: "id-ID",
    },
];

pub const DEFAULT_TRANSLATE_CODE: &str = "chinese_simplified";
pub const DEFAULT_CONFIG_CODE: &str = "zh";
pub const DEFAULT_BROWSER_FALLBACK: &str = "en";
pub const DEFAULT_LOCALE: &str = "en-US";

pub fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code == code)
}

fn find_by_translate(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.translate_code == code)
}

pub fn is_supported(code: &str) -> bool {
    find(code).is_some()
}

/// Locale for a config code. Unset means English; unknown codes get
/// `DEFAULT_LOCALE`.
pub fn locale_for(code: Option<&str>) -> &'static str {
    find(code.unwrap_or(DEFAULT_BROWSER_FALLBACK)).map_or(DEFAULT_LOCALE, |l| l.locale)
}

pub fn translate_language_from_config(code: &str) -> &'static str {
    find(code).map_or(DEFAULT_TRANSLATE_CODE, |l| l.translate_code)
}

pub fn config_language_from_translate(code: &str) -> &'static str {
    find_by_translate(code).map_or(DEFAULT_CONFIG_CODE, |l| l.code)
}

/// Accepts either a config or a translation-service code; unknown codes come
/// back unchanged.
pub fn language_display_name(code: &str) -> &str {
    find(code)
        .or_else(|| find_by_translate(code))
        .map_or(code, |l| l.display_name)
}

/// First browser language whose primary subtag is supported.
pub fn detect_browser_language<S: AsRef<str>>(
    browser: &[S],
    fallback: &'static str,
) -> &'static str {
    browser
        .iter()
        .filter_map(|tag| {
            let lower = tag.as_ref().to_lowercase();
            find(lower.split('-').next().unwrap_or_default())
        })
        .map(|l| l.code)
        .next()
        .unwrap_or(fallback)
}

/// Configured language if supported, otherwise browser detection.
pub fn site_language<S: AsRef<str>>(configured: Option<&str>, browser: &[S]) -> &'static str {
    configured
        .and_then(find)
        .map(|l| l.code)
        .unwrap_or_else(|| detect_browser_language(browser, DEFAULT_BROWSER_FALLBACK))
}
