/// English pluralization of Kubernetes kinds for REST resource names.
///
/// `Bucket` -> `buckets`, `Policy` -> `policies`, `Address` -> `addresses`.
/// The result is always lower-case.
pub struct Pluralizer;

/// Words whose plural does not follow the suffix rules.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("quota", "quotas"),
    ("schema", "schemas"),
];

/// Words that are the same in singular and plural.
const UNCOUNTABLE: &[&str] = &["data", "metadata", "information", "equipment", "series", "species"];

/// `-f` / `-fe` words that take `-ves`.
const F_TO_VES: &[&str] = &["leaf", "half", "shelf", "wolf", "knife", "life", "wife"];

impl Pluralizer {
    pub fn plural(kind: &str) -> String {
        let word = kind.to_lowercase();

        if word.is_empty() || UNCOUNTABLE.iter().any(|u| word.ends_with(u)) {
            return word;
        }

        if let Some((singular, plural)) = IRREGULAR.iter().find(|(s, _)| word.ends_with(s)) {
            let stem = &word[..word.len() - singular.len()];
            return format!("{}{}", stem, plural);
        }

        if F_TO_VES.iter().any(|f| word.ends_with(f)) {
            let stem = word.trim_end_matches('e').trim_end_matches('f');
            return format!("{}ves", stem);
        }

        if word.ends_with("ss")
            || word.ends_with("us")
            || word.ends_with('x')
            || word.ends_with('z')
            || word.ends_with("ch")
            || word.ends_with("sh")
        {
            return format!("{}es", word);
        }

        if let Some(stem) = word.strip_suffix('y') {
            if stem.chars().last().is_some_and(|c| !"aeiou".contains(c)) {
                return format!("{}ies", stem);
            }
        }

        // "Alias" takes -es; any other trailing s is taken as already plural ("Endpoints")
        if word.ends_with("as") {
            return format!("{}es", word);
        }
        if word.ends_with('s') {
            return word;
        }

        format!("{}s", word)
    }
}
