use once_cell::sync::Lazy;
use serde_json::Value;

use crate::locale::Locale;

static EN: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../messages/en.json"))
        .unwrap_or_else(|e| panic!("messages/en.json invalid: {}", e))
});

static FR: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../messages/fr.json"))
        .unwrap_or_else(|e| panic!("messages/fr.json invalid: {}", e))
});

fn bundle(locale: Locale) -> &'static Value {
    match locale {
        Locale::En => &EN,
        Locale::Fr => &FR,
    }
}

fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a str> {
    let mut node = root;
    for part in key.split('.') {
        node = node.get(part)?;
    }
    node.as_str()
}

/// Resolves a dotted message key for the locale, falling back to English,
/// then to the key itself so missing entries stay visible in markup.
pub fn message(locale: Locale, key: &str) -> String {
    lookup(bundle(locale), key)
        .or_else(|| lookup(&EN, key))
        .unwrap_or(key)
        .to_string()
}
