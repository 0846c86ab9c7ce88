//! Where dataset bytes come from.

use std::borrow::Cow;

use rust_embed::Embed;

use super::DataError;

/// Read access to named data files (`deep_work.csv`, `dashboard.json`, ...).
pub trait DataSource {
    /// `Ok(None)` when the file does not exist.
    fn read(&self, name: &str) -> Result<Option<Cow<'static, [u8]>>, DataError>;

    fn describe(&self) -> String;
}

/// CSV files compiled into the binary from `ui/data/`.
#[derive(Embed)]
#[folder = "data"]
struct BundledData;

#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl DataSource for EmbeddedSource {
    fn read(&self, name: &str) -> Result<Option<Cow<'static, [u8]>>, DataError> {
        Ok(BundledData::get(name).map(|file| file.data))
    }

    fn describe(&self) -> String {
        "embedded data".into()
    }
}

/// Files read from a directory at runtime (native targets only).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl DirectorySource {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl DataSource for DirectorySource {
    fn read(&self, name: &str) -> Result<Option<Cow<'static, [u8]>>, DataError> {
        match std::fs::read(self.root.join(name)) {
            Ok(bytes) => Ok(Some(Cow::Owned(bytes))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(DataError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}
