//! [`TestContentRoot`] builder for layered-settings test scenarios.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tempfile::TempDir;

/// A temporary content root with helpers for writing settings files.
///
/// # Example
///
/// ```rust,no_run
/// use serde_json::json;
/// use settings_test_utils::TestContentRoot;
///
/// let root = TestContentRoot::new();
/// root.write_base(&json!({ "name": "base" }));
/// root.write_layer("PPE", &json!({ "name": "ppe" }));
/// root.assert_file_exists("appsettings.PPE.json");
/// ```
pub struct TestContentRoot {
    temp_dir: TempDir,
}

impl Default for TestContentRoot {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContentRoot {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `appsettings.json`.
    pub fn write_base(&self, settings: &Value) {
        self.write_json("appsettings.json", settings);
    }

    /// Write `appsettings.<environment>.json`.
    pub fn write_layer(&self, environment: &str, settings: &Value) {
        self.write_json(&format!("appsettings.{environment}.json"), settings);
    }

    /// Write `value` as pretty JSON to `name` (relative to the root).
    pub fn write_json(&self, name: &str, value: &Value) {
        let content = serde_json::to_string_pretty(value).unwrap();
        self.write_file(name, &content);
    }

    /// Write raw `content` to `name` (relative to the root).
    pub fn write_file(&self, name: &str, content: &str) {
        let path = self.root().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("Could not write {}: {}", path.display(), e));
    }

    /// Assert that `path` (relative to the root) exists.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
