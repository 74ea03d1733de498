use tracing::warn;

/// Locale used when the configured one has no translation file
pub const FALLBACK_LOCALE: &str = "en";

/// Whether a translation file exists for `locale`
pub fn is_supported(locale: &str) -> bool {
    rust_i18n::available_locales!()
        .iter()
        .any(|available| *available == locale)
}

/// Return `locale` when supported, otherwise the fallback locale
pub fn resolve_locale(locale: &str) -> String {
    if is_supported(locale) {
        locale.to_string()
    } else {
        warn!("Locale {} is not available, using {}", locale, FALLBACK_LOCALE);
        FALLBACK_LOCALE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_locale() {
        assert_eq!(resolve_locale("pt-BR"), "pt-BR");
        assert_eq!(resolve_locale("en"), "en");
        assert_eq!(resolve_locale("fi"), FALLBACK_LOCALE);
    }
}
