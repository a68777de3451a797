/// Test utilities for event-file tests
///
/// Each harness owns a fresh temporary directory that is removed when the
/// harness is dropped, so tests never touch the user's real event file.
///
/// ## Usage Examples
///
/// ```ignore
/// use crate::infrastructure::test_utils::test_harness::TestEventFile;
///
/// #[test]
/// fn my_test() {
///     let test_file = TestEventFile::new();
///     let store = test_file.store();
///
///     // Use store for testing...
/// }
/// ```
#[cfg(test)]
pub mod test_harness {
    use crate::infrastructure::JsonEventFile;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    pub struct TestEventFile {
        store: JsonEventFile,
        _temp_dir: TempDir, // Keep temp dir alive
    }

    impl TestEventFile {
        /// An event file path inside a fresh temp dir; the file does not exist yet
        pub fn new() -> Self {
            Self::at(|dir| dir.join("events.json"))
        }

        /// Event file below directories that do not exist yet
        pub fn nested() -> Self {
            Self::at(|dir| dir.join("data").join("monthgrid").join("events.json"))
        }

        /// Event file pre-filled with `content`
        pub fn with_content(content: &str) -> Self {
            let test_file = Self::new();
            std::fs::write(test_file.path(), content).expect("Failed to write test event file");
            test_file
        }

        fn at(path: impl FnOnce(&Path) -> PathBuf) -> Self {
            let temp_dir = TempDir::new().expect("Failed to create temp directory");
            let store = JsonEventFile::new(path(temp_dir.path()));

            Self {
                store,
                _temp_dir: temp_dir,
            }
        }

        pub fn store(&self) -> &JsonEventFile {
            &self.store
        }

        pub fn path(&self) -> &Path {
            self.store.path()
        }

        /// Temp directory root, for tests that place other files beside the events
        pub fn dir(&self) -> &Path {
            self._temp_dir.path()
        }
    }

    /// Run a test with a fresh event file
    pub fn with_event_file<F, R>(test_fn: F) -> R
    where
        F: FnOnce(&TestEventFile) -> R,
    {
        let test_file = TestEventFile::new();
        test_fn(&test_file)
    }
}

#[cfg(test)]
mod tests {
    use super::test_harness::*;
    use crate::entities::DateKey;
    use crate::infrastructure::EventStore;

    #[test]
    fn test_harness_isolation() {
        let first = TestEventFile::new();
        let second = TestEventFile::new();

        first.store().save(&["2024-03-15".parse::<DateKey>().unwrap()].into()).unwrap();

        assert_ne!(first.dir(), second.dir());
        assert!(second.store().load().unwrap().is_empty());
    }

    #[test]
    fn test_harness_with_content() {
        let test_file = TestEventFile::with_content(r#"["2024-03-15"]"#);
        assert_eq!(test_file.store().load().unwrap().len(), 1);
    }
}
