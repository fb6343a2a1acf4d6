//! Locale resolution for path-prefixed routing.
//!
//! Pages live under `/{locale}/...` with `en` and `fr` supported. Paths
//! without a valid prefix are redirected to the default locale by the
//! `locale_handler` middleware; `/api` paths are never locale-prefixed.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    En,
    Fr,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }

    pub fn parse(value: &str) -> Option<Locale> {
        match value {
            "en" => Some(Locale::En),
            "fr" => Some(Locale::Fr),
            _ => None,
        }
    }

    pub fn other(&self) -> Locale {
        match self {
            Locale::En => Locale::Fr,
            Locale::Fr => Locale::En,
        }
    }
}

/// Splits a request path into its locale prefix (if any) and the remainder.
/// The remainder always starts with `/`, so `/fr` yields `(Some(Fr), "/")`.
pub fn split_locale(path: &str) -> (Option<Locale>, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (first, rest) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, "/"),
    };
    match Locale::parse(first) {
        Some(locale) => (Some(locale), rest),
        None => (None, path),
    }
}

pub fn is_api_path(path: &str) -> bool {
    path == "/api" || path.starts_with("/api/")
}

/// Prefixes that require a session. Checked against the locale-stripped path.
pub fn is_protected_path(path: &str) -> bool {
    for prefix in ["/dashboard", "/admin"] {
        if path == prefix || path.starts_with(&format!("{}/", prefix)) {
            return true;
        }
    }
    false
}

/// Target for requests whose path carries no valid locale prefix.
pub fn redirect_target(default_locale: Locale, path: &str, query: &str) -> String {
    let suffix = if path == "/" { "" } else { path };
    if query.is_empty() {
        format!("/{}{}", default_locale.as_str(), suffix)
    } else {
        format!("/{}{}?{}", default_locale.as_str(), suffix, query)
    }
}

pub fn sign_in_path(locale: Locale) -> String {
    format!("/{}/sign-in", locale.as_str())
}
