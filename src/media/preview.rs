/// Owned handle to a host preview resource (e.g. an object URL for a local file).
///
/// The release callback runs exactly once, when the handle is dropped. Replacing the handle in an
/// `Option` or dropping the owning session both release it.
pub struct PreviewHandle {
    url: String,
    release: Option<Box<dyn FnOnce(&str)>>,
}

impl PreviewHandle {
    /// Wrap `url`; `release` is invoked with it on drop.
    pub fn new(url: impl Into<String>, release: impl FnOnce(&str) + 'static) -> Self {
        Self {
            url: url.into(),
            release: Some(Box::new(release)),
        }
    }

    /// Handle with nothing to release.
    pub fn detached(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            release: None,
        }
    }

    /// Resource locator.
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            tracing::debug!(url = %self.url, "releasing preview resource");
            release(&self.url);
        }
    }
}

impl std::fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("url", &self.url)
            .field("pending_release", &self.release.is_some())
            .finish()
    }
}
