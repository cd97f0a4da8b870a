//! Endpoint catalog
//!
//! The list of endpoints is fixed at startup: it is validated once, and after
//! that the only thing that ever changes is which entry is active. Selection
//! clamps at both ends rather than wrapping.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no endpoints configured")]
    Empty,

    #[error("invalid endpoint url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

/// A single endpoint URL, validated at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ordered list of endpoints plus the active selection
///
/// Invariant: `active < items.len()` at all times. The constructor rejects an
/// empty list, which is what makes `current()` total.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointList {
    items: Vec<Endpoint>,
    active: usize,
}

impl EndpointList {
    /// Build the catalog from URL strings, rejecting an empty list and any
    /// URL that does not parse as an absolute http(s) URL.
    pub fn new<I, S>(urls: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items = Vec::new();
        for url in urls {
            let url = url.into();
            match url::Url::parse(&url) {
                Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {
                    items.push(Endpoint(url));
                }
                Ok(parsed) => {
                    return Err(CatalogError::InvalidUrl {
                        url: url.clone(),
                        reason: format!("unsupported scheme {:?}", parsed.scheme()),
                    });
                }
                Err(e) => {
                    return Err(CatalogError::InvalidUrl {
                        url,
                        reason: e.to_string(),
                    });
                }
            }
        }

        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        Ok(Self { items, active: 0 })
    }

    /// Move the selection down by one, stopping at the last entry
    pub fn select_next(&mut self) {
        if self.active + 1 < self.items.len() {
            self.active += 1;
        }
    }

    /// Move the selection up by one, stopping at the first entry
    pub fn select_previous(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    /// The currently selected endpoint
    pub fn current(&self) -> &Endpoint {
        // items is never empty and active is always in bounds
        &self.items[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Endpoint> {
        self.items.iter()
    }
}
