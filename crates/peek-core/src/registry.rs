//! Previewed-URL registry: the distinct URLs that received a preview on this page.

/// Ordered, duplicate-free list of normalized URLs.
///
/// Lives as long as one page session. Its length is what the badge shows.
#[derive(Debug, Default, Clone)]
pub struct PreviewRegistry {
    urls: Vec<String>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.iter().any(|u| u == url)
    }

    /// Appends `url` unless present. Returns true if it was added.
    pub fn insert(&mut self, url: &str) -> bool {
        if self.contains(url) {
            return false;
        }
        self.urls.push(url.to_string());
        true
    }

    /// Removes `url`. Returns false (and changes nothing) if it was never registered.
    pub fn remove(&mut self, url: &str) -> bool {
        match self.urls.iter().position(|u| u == url) {
            Some(i) => {
                self.urls.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// URLs in registration order.
    pub fn urls(&self) -> &[String] {
        &self.urls
    }
}
