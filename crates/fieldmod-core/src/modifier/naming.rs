//! Naming conventions for `FORMAT` on the `name` attribute
//!
//! Words are split on any non-alphanumeric character, on a lowercase or digit
//! followed by an uppercase letter, and at the end of an acronym
//! (`HTTPServer` is `HTTP` + `Server`).

/// Supported naming conventions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingConvention {
    /// Whole value uppercased, separators kept
    Upper,
    /// Whole value lowercased, separators kept
    Lower,
    /// `Title Case Words`
    Title,
    /// `snake_case_words`
    Snake,
    /// `kebab-case-words`
    Kebab,
    /// `camelCaseWords`
    Camel,
    /// `PascalCaseWords`
    Pascal,
    /// `CONSTANT_CASE_WORDS`
    Constant,
}

impl NamingConvention {
    /// Resolve a convention identifier, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        let convention = match name.to_ascii_lowercase().as_str() {
            "upper" => NamingConvention::Upper,
            "lower" => NamingConvention::Lower,
            "title" => NamingConvention::Title,
            "snake" => NamingConvention::Snake,
            "kebab" => NamingConvention::Kebab,
            "camel" => NamingConvention::Camel,
            "pascal" => NamingConvention::Pascal,
            "constant" => NamingConvention::Constant,
            _ => return None,
        };
        Some(convention)
    }

    /// Rewrite `value` in this convention
    pub fn apply(&self, value: &str) -> String {
        match self {
            NamingConvention::Upper => value.to_uppercase(),
            NamingConvention::Lower => value.to_lowercase(),
            NamingConvention::Title => join_mapped(value, " ", capitalize),
            NamingConvention::Snake => join_mapped(value, "_", |w| w.to_lowercase()),
            NamingConvention::Kebab => join_mapped(value, "-", |w| w.to_lowercase()),
            NamingConvention::Constant => join_mapped(value, "_", |w| w.to_uppercase()),
            NamingConvention::Pascal => join_mapped(value, "", capitalize),
            NamingConvention::Camel => split_words(value)
                .iter()
                .enumerate()
                .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
                .collect(),
        }
    }
}

fn join_mapped<F>(value: &str, separator: &str, map: F) -> String
where
    F: Fn(&str) -> String,
{
    split_words(value)
        .iter()
        .map(|w| map(w))
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Split a value into words
pub fn split_words(value: &str) -> Vec<String> {
    let mut words = Vec::new();

    for chunk in value.split(|c: char| !c.is_alphanumeric()).filter(|c| !c.is_empty()) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut start = 0;

        for i in 1..chars.len() {
            let (prev, cur) = (chars[i - 1], chars[i]);
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            let hump = cur.is_uppercase() && (prev.is_lowercase() || prev.is_numeric());
            let acronym_end = cur.is_uppercase() && prev.is_uppercase() && next_is_lower;

            if hump || acronym_end {
                words.push(chars[start..i].iter().collect());
                start = i;
            }
        }
        words.push(chars[start..].iter().collect());
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("my_file-name.txt"), vec!["my", "file", "name", "txt"]);
        assert_eq!(split_words("parseHTTPServer2Response"), vec!["parse", "HTTP", "Server2", "Response"]);
        assert_eq!(split_words("  "), Vec::<String>::new());
    }

    #[test]
    fn test_conventions() {
        let input = "Quarterly report_FINAL draft";
        assert_eq!(NamingConvention::Snake.apply(input), "quarterly_report_final_draft");
        assert_eq!(NamingConvention::Kebab.apply(input), "quarterly-report-final-draft");
        assert_eq!(NamingConvention::Camel.apply(input), "quarterlyReportFinalDraft");
        assert_eq!(NamingConvention::Pascal.apply(input), "QuarterlyReportFinalDraft");
        assert_eq!(NamingConvention::Constant.apply(input), "QUARTERLY_REPORT_FINAL_DRAFT");
        assert_eq!(NamingConvention::Title.apply(input), "Quarterly Report Final Draft");
        assert_eq!(NamingConvention::Upper.apply("a-b c"), "A-B C");
        assert_eq!(NamingConvention::Lower.apply("A-B C"), "a-b c");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(NamingConvention::from_name("SNAKE"), Some(NamingConvention::Snake));
        assert_eq!(NamingConvention::from_name("Camel"), Some(NamingConvention::Camel));
        assert_eq!(NamingConvention::from_name("hungarian"), None);
        assert_eq!(NamingConvention::from_name(""), None);
    }
}
