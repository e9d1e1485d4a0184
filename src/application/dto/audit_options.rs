//! Audit options DTO

use crate::domain::entities::{DEFAULT_EXTENSIONS, ExtensionFilter};

/// Options for an audit run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOptions {
    /// Extensions to classify, without the leading dot
    pub extensions: Vec<String>,
    /// Whether to classify and copy files on a worker pool
    pub parallel: bool,
    /// Number of workers when `parallel` is set
    pub thread_count: usize,
    /// Whether to prune the vault from the walk when it lies inside the source
    pub exclude_vault: bool,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            parallel: false,
            thread_count: available_threads(),
            exclude_vault: true,
        }
    }
}

impl AuditOptions {
    /// Replaces the accepted extensions
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    /// Enables the worker pool
    pub fn parallel(mut self) -> Self {
        self.parallel = true;
        self
    }

    /// Sets the worker count; zero falls back to the available parallelism
    pub fn with_threads(mut self, count: usize) -> Self {
        self.thread_count = if count == 0 { available_threads() } else { count };
        self
    }

    /// Builds the extension filter for these options
    pub fn extension_filter(&self) -> ExtensionFilter {
        ExtensionFilter::new(&self.extensions)
    }
}

fn available_threads() -> usize {
    std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(4)
}
