use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

/// Spelling applied to struct field names.
///
/// Keys are split into words on `_`/`-` separators, on lower-to-upper case
/// transitions and before the last capital of an acronym (`HTTPServer` becomes
/// `HTTP` + `Server`). Digits stay attached to the word before them, so
/// `field_2` and `field2` spell the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingPolicy {
    CamelCase,
    PascalCase,
}

/// Converted field names, keyed by policy and source name. Field names are
/// `&'static str` in serde's data model and the set of them is fixed by the
/// program's types, so each conversion is leaked once and reused.
static RENAMED_FIELDS: LazyLock<RwLock<HashMap<(NamingPolicy, &'static str), &'static str>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

impl NamingPolicy {
    pub fn convert(&self, key: &str) -> String {
        let words = split_words(key);
        let mut out = String::with_capacity(key.len());

        match self {
            Self::CamelCase => {
                for (index, word) in words.iter().enumerate() {
                    if index == 0 {
                        out.push_str(&word.to_lowercase());
                    } else {
                        push_capitalized(&mut out, word);
                    }
                }
            }
            Self::PascalCase => {
                for word in &words {
                    push_capitalized(&mut out, word);
                }
            }
        }

        out
    }

    /// Spelling of a struct field under this policy.
    ///
    /// Only plain Rust field names (`[a-z0-9_]`) are converted. Anything else was
    /// already renamed with a serde attribute and is kept verbatim.
    pub fn rename_field(&self, field: &'static str) -> &'static str {
        if !is_rust_field_name(field) {
            return field;
        }

        let cache_key = (*self, field);
        if let Some(renamed) = RENAMED_FIELDS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&cache_key)
            .copied()
        {
            return renamed;
        }

        let converted = self.convert(field);
        let renamed: &'static str = if converted == field {
            field
        } else {
            Box::leak(converted.into_boxed_str())
        };

        *RENAMED_FIELDS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(cache_key)
            .or_insert(renamed)
    }
}

fn is_rust_field_name(field: &str) -> bool {
    !field.is_empty()
        && field
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn split_words(key: &str) -> Vec<String> {
    let chars: Vec<char> = key.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (index, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase()
            && let Some(prev) = current.chars().last()
        {
            let next_is_lower = chars.get(index + 1).is_some_and(|next| next.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(&chars.as_str().to_lowercase());
    }
}
