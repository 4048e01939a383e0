//! Singularization for English nouns
//!
//! Works through three ordered tables: uncountable words, irregular plurals and
//! suffix rules. The first entry that matches decides the result.

use regex::Regex;
use std::sync::OnceLock;

/// Words that have no distinct plural form
const UNCOUNTABLE: &[&str] = &[
    "audio",
    "equipment",
    "deer",
    "fish",
    "gold",
    "information",
    "money",
    "rice",
    "police",
    "series",
    "sheep",
    "species",
    "moose",
];

/// (singular, plural suffix) pairs that no suffix rule can express
const IRREGULAR: &[(&str, &str)] = &[
    ("child", "children"),
    ("foot", "feet"),
    ("goose", "geese"),
    ("man", "men"),
    ("move", "moves"),
    ("person", "people"),
    ("sex", "sexes"),
    ("tooth", "teeth"),
];

/// (pattern, replacement) suffix rules, most specific first
///
/// The trailing `s$` rule must stay last: it matches any word ending in `s`.
const RULES: &[(&str, &str)] = &[
    (r"(quiz)zes$", "${1}"),
    (r"(matr)ices$", "${1}ix"),
    (r"(vert|ind)ices$", "${1}ex"),
    (r"^(ox)en$", "${1}"),
    (r"(alias)es$", "${1}"),
    (r"(octop|vir)i$", "${1}us"),
    (r"(cris|ax|test)es$", "${1}is"),
    (r"(shoe)s$", "${1}"),
    (r"(o)es$", "${1}"),
    (r"(bus)es$", "${1}"),
    (r"([m|l])ice$", "${1}ouse"),
    (r"(x|ch|ss|sh)es$", "${1}"),
    (r"(m)ovies$", "${1}ovie"),
    (r"(s)eries$", "${1}eries"),
    (r"([^aeiouy]|qu)ies$", "${1}y"),
    (r"([lr])ves$", "${1}f"),
    (r"(tive)s$", "${1}"),
    (r"(hive)s$", "${1}"),
    (r"(li|wi|kni)ves$", "${1}fe"),
    (r"(shea|loa|lea|thie)ves$", "${1}f"),
    (r"(^analy)ses$", "${1}sis"),
    (
        r"((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)ses$",
        "${1}${2}sis",
    ),
    (r"([ti])a$", "${1}um"),
    (r"(n)ews$", "${1}ews"),
    (r"(h|bl)ouses$", "${1}ouse"),
    (r"(corpse)s$", "${1}"),
    (r"(us)es$", "${1}"),
    (r"(us|ss)$", "${1}"),
    (r"s$", ""),
];

/// A compiled substitution: the first matching suffix is replaced
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn compile(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(&format!("(?i){}", pattern)).unwrap(),
            replacement,
        }
    }

    fn apply(&self, word: &str) -> Option<String> {
        if self.pattern.is_match(word) {
            Some(self.pattern.replace(word, self.replacement).into_owned())
        } else {
            None
        }
    }
}

fn irregular_rules() -> &'static [Rule] {
    static IRREGULAR_RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    IRREGULAR_RULES.get_or_init(|| {
        IRREGULAR
            .iter()
            .map(|&(singular, plural)| Rule::compile(&format!("{}$", plural), singular))
            .collect()
    })
}

fn suffix_rules() -> &'static [Rule] {
    static SUFFIX_RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    SUFFIX_RULES.get_or_init(|| {
        RULES
            .iter()
            .map(|&(pattern, replacement)| Rule::compile(pattern, replacement))
            .collect()
    })
}

/// Utility for reducing English plural nouns to their singular form
pub struct Singularizer;

impl Singularizer {
    /// Convert a plural noun to its singular form
    ///
    /// Matching ignores case, but the replacement only keeps whatever casing the
    /// matched groups carry. A word no rule recognizes comes back unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use restful::core::singularize::Singularizer;
    ///
    /// assert_eq!(Singularizer::singularize("children"), "child");
    /// assert_eq!(Singularizer::singularize("cities"), "city");
    /// assert_eq!(Singularizer::singularize("knives"), "knife");
    /// assert_eq!(Singularizer::singularize("sheep"), "sheep");
    /// ```
    pub fn singularize(word: &str) -> String {
        if word.is_empty() {
            return String::new();
        }

        let lowered = word.to_lowercase();
        if UNCOUNTABLE.contains(&lowered.as_str()) {
            return word.to_string();
        }

        irregular_rules()
            .iter()
            .chain(suffix_rules())
            .find_map(|rule| rule.apply(word))
            .unwrap_or_else(|| word.to_string())
    }
}

/// Upper-case the first character if it is ASCII, leaving the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => std::iter::once(first.to_ascii_uppercase())
            .chain(chars)
            .collect(),
        None => String::new(),
    }
}
