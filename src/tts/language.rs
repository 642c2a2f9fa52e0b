use serde::Serialize;

/// Engine code used when a request names a language outside the table.
pub const FALLBACK_CODE: &str = "en";

/// Request language code -> speech engine language code.
const LANGUAGE_CODES: &[(&str, &str)] = &[
    ("en", "en"),
    ("es", "es"),
    ("fr", "fr"),
    ("de", "de"),
    ("it", "it"),
    ("pt", "pt"),
    ("ru", "ru"),
    ("ja", "ja"),
    ("ko", "ko"),
    ("zh", "zh-cn"),
    ("ar", "ar"),
    ("hi", "hi"),
    ("bn", "bn"),
    ("pa", "pa"),
    ("te", "te"),
    ("ta", "ta"),
    ("ur", "ur"),
    ("vi", "vi"),
    ("th", "th"),
    ("tr", "tr"),
    ("pl", "pl"),
    ("nl", "nl"),
    ("sv", "sv"),
    ("he", "he"),
];

/// Look up the engine code for `lang`, if the table has one.
pub fn lookup(lang: &str) -> Option<&'static str> {
    LANGUAGE_CODES
        .iter()
        .find(|(code, _)| *code == lang)
        .map(|(_, engine)| *engine)
}

/// Engine code for `lang`, falling back to [`FALLBACK_CODE`].
pub fn engine_code(lang: &str) -> &'static str {
    lookup(lang).unwrap_or(FALLBACK_CODE)
}

#[derive(Debug, Clone, Serialize)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub engine_code: &'static str,
}

/// All supported request codes, sorted by code.
pub fn supported() -> Vec<LanguageInfo> {
    let mut languages: Vec<LanguageInfo> = LANGUAGE_CODES
        .iter()
        .map(|&(code, engine_code)| LanguageInfo { code, engine_code })
        .collect();
    languages.sort_by_key(|l| l.code);
    languages
}
