//! Candidate service URLs for one registry.

use std::fmt;

/// ServiceUrls is the ordered set of base URLs a registry publishes.
///
/// Order is significant: within each scheme the first URL wins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceUrls {
    urls: Vec<String>,
}

impl ServiceUrls {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a URL, preserving insertion order.
    pub fn add_url(&mut self, url: impl Into<String>) {
        self.urls.push(url.into());
    }

    /// All URLs in insertion order.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// First URL with an `http://` scheme.
    pub fn http_url(&self) -> Option<&str> {
        self.first_with_scheme("http://")
    }

    /// First URL with an `https://` scheme.
    pub fn https_url(&self) -> Option<&str> {
        self.first_with_scheme("https://")
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    fn first_with_scheme(&self, prefix: &str) -> Option<&str> {
        self.urls
            .iter()
            .find(|url| {
                url.get(..prefix.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
            })
            .map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ServiceUrls {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            urls: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ServiceUrls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.urls.join(", "))
    }
}
