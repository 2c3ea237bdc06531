use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// One 2-D image plane and the metadata the extractor attached to it.
///
/// JSON-lines input format (one plane per line):
///
/// ```text
/// {"url":"file:/images/a.tif","series":0,"index":3,"metadata":{"ColorFormat":"monochrome"}}
/// ```
///
/// `url` is required; `series` and `index` default to 0, `channel` to none
/// and `metadata` to empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImagePlaneDetails {
    pub url: String,
    #[serde(default)]
    pub series: u32,
    #[serde(default)]
    pub index: u32,
    /// Channel within an interleaved color plane, if the plane was split out of one.
    #[serde(default)]
    pub channel: Option<u32>,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl ImagePlaneDetails {
    pub fn new(url: impl Into<String>, series: u32, index: u32) -> Self {
        Self {
            url: url.into(),
            series,
            index,
            channel: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Add (or replace) a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn with_channel(mut self, channel: u32) -> Self {
        self.channel = Some(channel);
        self
    }

    // -- Metadata lookup ---------------------------------------------------------

    pub fn get(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    // -- Loading -----------------------------------------------------------------

    /// Parse newline-delimited JSON plane descriptors. Blank lines are skipped.
    pub fn parse_json_lines(content: &str) -> Result<Vec<Self>, PlaneError> {
        let mut planes = Vec::new();
        for (i, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let plane = serde_json::from_str(line)
                .map_err(|source| PlaneError::Parse { line: i + 1, source })?;
            planes.push(plane);
        }
        Ok(planes)
    }

    pub fn read_json_lines(path: &Path) -> Result<Vec<Self>, PlaneError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PlaneError::ReadFile(path.display().to_string(), e))?;
        let planes = Self::parse_json_lines(&content)?;
        debug!(path = %path.display(), count = planes.len(), "loaded plane descriptors");
        Ok(planes)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlaneError {
    #[error("failed to read plane descriptors from {0}: {1}")]
    ReadFile(String, std::io::Error),
    #[error("invalid plane descriptor on line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },
}
