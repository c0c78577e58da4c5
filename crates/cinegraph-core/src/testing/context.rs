//! TestContext - owns the temporary directory a test writes into

use std::path::Path;
use tempfile::TempDir;

/// Context for managing test resources and lifecycle
///
/// The directory and everything under it is removed when the context is
/// dropped, so keep the context alive for as long as a store opened inside
/// it is in use.
///
/// # Example
///
/// ```rust,ignore
/// use cinegraph_core::testing::TestContext;
///
/// let ctx = TestContext::new();
/// let store = cinegraph_core::store::LmdbStore::open(ctx.path(), 10 << 20).unwrap();
/// ```
pub struct TestContext {
    temp_dir: TempDir,
}

impl TestContext {
    /// Create a new TestContext with a unique temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        Self { temp_dir }
    }

    /// Path to the temporary directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_context_creates_directory() {
        let ctx = TestContext::new();
        assert!(ctx.path().is_dir(), "Test path should be a directory");
    }

    #[test]
    fn test_context_cleanup_on_drop() {
        let path = {
            let ctx = TestContext::new();
            fs::write(ctx.path().join("probe.txt"), "x").unwrap();
            ctx.path().to_path_buf()
        };
        assert!(!path.exists(), "Directory should be removed on drop");
    }
}
