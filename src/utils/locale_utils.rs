use regex::Regex;
use std::sync::LazyLock;

static EXTENSION_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<locale>.+?)\.[A-Za-z][A-Za-z0-9]{0,7}$").expect("valid regex")
});

/// Language code sent to the translator for a locale identifier, with any
/// trailing file extension dropped (`fr.yaml` -> `fr`).
pub fn target_lang(locale: &str) -> &str {
    EXTENSION_SUFFIX
        .captures(locale)
        .and_then(|caps| caps.name("locale"))
        .map(|m| m.as_str())
        .unwrap_or(locale)
}
