//! Handing resolved sources to a configuration store

use std::path::PathBuf;

use config::builder::DefaultState;
use config::{ConfigBuilder, File, FileFormat};
use settings_core::JsonSource;

/// Receives JSON source load requests in load order
pub trait SourceSink {
    fn add_json_source(&mut self, source: &JsonSource);
}

/// Records requests without loading anything
impl SourceSink for Vec<JsonSource> {
    fn add_json_source(&mut self, source: &JsonSource) {
        self.push(source.clone());
    }
}

/// Adds sources, relative to a content root, to a `config` builder
///
/// Later sources override earlier ones. The reload flag is carried on the
/// [`JsonSource`] only; the store does not watch files.
#[derive(Debug)]
pub struct ConfigSink {
    content_root: PathBuf,
    builder: ConfigBuilder<DefaultState>,
}

impl ConfigSink {
    pub fn new(content_root: impl Into<PathBuf>) -> Self {
        Self {
            content_root: content_root.into(),
            builder: ConfigBuilder::default(),
        }
    }

    /// Finish adding JSON sources
    pub fn into_builder(self) -> ConfigBuilder<DefaultState> {
        self.builder
    }
}

impl SourceSink for ConfigSink {
    fn add_json_source(&mut self, source: &JsonSource) {
        let path = self.content_root.join(&source.path);
        tracing::debug!(
            ?path,
            reload_on_change = source.reload_on_change,
            "Adding JSON settings source"
        );

        let file = File::from(path)
            .format(FileFormat::Json)
            .required(!source.optional);
        self.builder = std::mem::take(&mut self.builder).add_source(file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn vec_sink_records_in_order() {
        let mut sink: Vec<JsonSource> = Vec::new();
        sink.add_json_source(&JsonSource::optional("appsettings.json", true));
        sink.add_json_source(&JsonSource::optional("appsettings.PPE.json", true));

        let paths: Vec<_> = sink.iter().map(|s| s.path.as_str()).collect();
        assert_eq!(paths, ["appsettings.json", "appsettings.PPE.json"]);
    }

    #[test]
    fn config_sink_later_source_wins() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.json"), r#"{ "name": "a", "only_a": 1 }"#).unwrap();
        fs::write(temp_dir.path().join("b.json"), r#"{ "name": "b" }"#).unwrap();

        let mut sink = ConfigSink::new(temp_dir.path());
        sink.add_json_source(&JsonSource::optional("a.json", false));
        sink.add_json_source(&JsonSource::optional("b.json", false));
        let config = sink.into_builder().build().unwrap();

        assert_eq!(config.get_string("name").unwrap(), "b");
        assert_eq!(config.get_int("only_a").unwrap(), 1);
    }

    #[test]
    fn config_sink_skips_missing_optional_sources() {
        let temp_dir = TempDir::new().unwrap();

        let mut sink = ConfigSink::new(temp_dir.path());
        sink.add_json_source(&JsonSource::optional("appsettings.json", true));
        let config = sink.into_builder().build().unwrap();

        assert!(config.get_string("anything").is_err());
    }
}
