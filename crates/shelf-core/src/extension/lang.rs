//! Display names for extension language codes.

/// English names for the language codes extension repositories use.
const LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("bg", "Bulgarian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("ms", "Malay"),
    ("my", "Burmese"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese"),
];

const REGIONS: &[(&str, &str)] = &[
    ("419", "Latin America"),
    ("AR", "Argentina"),
    ("BR", "Brazil"),
    ("CN", "China"),
    ("ES", "Spain"),
    ("HK", "Hong Kong"),
    ("Hans", "Simplified"),
    ("Hant", "Traditional"),
    ("MX", "Mexico"),
    ("PT", "Portugal"),
    ("TW", "Taiwan"),
];

fn lookup(table: &[(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(code))
        .map(|(_, v)| *v)
}

/// Label shown for an extension's language.
///
/// `all` and `other` are pseudo-languages; codes with a region subtag render
/// as `Language (Region)`; unknown codes are returned unchanged.
pub fn source_display_name(lang: &str) -> String {
    match lang {
        "all" => return "All".to_string(),
        "" | "other" => return "Other".to_string(),
        _ => {}
    }

    let (base, region) = match lang.split_once(['-', '_']) {
        Some((base, region)) => (base, Some(region)),
        None => (lang, None),
    };
    let Some(language) = lookup(LANGUAGES, base) else {
        return lang.to_string();
    };
    match region {
        None => language.to_string(),
        Some(region) => {
            let region = lookup(REGIONS, region).unwrap_or(region);
            format!("{language} ({region})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pseudo_languages() {
        assert_eq!(source_display_name("all"), "All");
        assert_eq!(source_display_name("other"), "Other");
        assert_eq!(source_display_name(""), "Other");
    }

    #[test]
    fn plain_and_regional_codes() {
        assert_eq!(source_display_name("en"), "English");
        assert_eq!(source_display_name("ja"), "Japanese");
        assert_eq!(source_display_name("pt-BR"), "Portuguese (Brazil)");
        assert_eq!(source_display_name("es-419"), "Spanish (Latin America)");
        assert_eq!(source_display_name("zh-Hans"), "Chinese (Simplified)");
        assert_eq!(source_display_name("fr-CA"), "French (CA)");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(source_display_name("xx"), "xx");
        assert_eq!(source_display_name("xx-YY"), "xx-YY");
    }
}
