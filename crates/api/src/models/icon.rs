use std::fmt;
use url::Url;

/// Opaque icon reference handed out by the introspection layer.
///
/// Only used as a deduplication key by the site builder; whether bytes can be
/// fetched for it is decided by the icon loader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IconRef {
    Url(Url),
    /// Symbolic name (e.g. a font icon class); never stored as an asset.
    Symbolic(String),
}

impl IconRef {
    /// Interprets `s` as a URL when it parses as one, otherwise as a symbolic name.
    pub fn parse(s: &str) -> Self {
        match Url::parse(s) {
            Ok(url) => IconRef::Url(url),
            Err(_) => IconRef::Symbolic(s.to_string()),
        }
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconRef::Url(url) => write!(f, "{}", url),
            IconRef::Symbolic(name) => write!(f, "{}", name),
        }
    }
}
