use std::fs;
use std::path::Path;

use polars::prelude::DataFrame;
use tracing::debug;

use crate::errors::LoaderError;
use crate::formats::{JsonLoader, TsvLoader};

/// Reads one source format into a table.
///
/// Loaders for long formats must hand back the six canonical columns; loaders
/// for the wide layout hand back the raw composed-key table untouched.
pub trait DataLoader: Send + Sync {
    fn name(&self) -> &'static str;

    /// Lower-case file suffix including the leading dot, e.g. `.tsv`.
    fn extension(&self) -> &'static str;

    fn parse(&self, content: &[u8]) -> Result<DataFrame, LoaderError>;

    fn load(&self, path: &Path) -> Result<DataFrame, LoaderError> {
        let content = fs::read(path).map_err(|source| LoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let df = self.parse(&content)?;
        debug!(
            loader = self.name(),
            path = %path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded table"
        );
        Ok(df)
    }
}

/// Suffix-keyed set of loaders.
pub struct LoaderRegistry {
    loaders: Vec<Box<dyn DataLoader>>,
}

impl Default for LoaderRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(TsvLoader).register(JsonLoader);
        registry
    }
}

impl LoaderRegistry {
    pub fn empty() -> Self {
        Self {
            loaders: Vec::new(),
        }
    }

    /// Adds a loader, replacing any loader already registered for the same suffix.
    pub fn register<L: DataLoader + 'static>(&mut self, loader: L) -> &mut Self {
        let extension = loader.extension();
        match self
            .loaders
            .iter_mut()
            .find(|existing| existing.extension().eq_ignore_ascii_case(extension))
        {
            Some(slot) => *slot = Box::new(loader),
            None => self.loaders.push(Box::new(loader)),
        }
        self
    }

    pub fn supported_extensions(&self) -> Vec<&'static str> {
        self.loaders.iter().map(|loader| loader.extension()).collect()
    }

    pub fn loader_for(&self, path: &Path) -> Result<&dyn DataLoader, LoaderError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
            .unwrap_or_default();

        let loader = self
            .loaders
            .iter()
            .find(|loader| loader.extension().eq_ignore_ascii_case(&extension))
            .ok_or_else(|| LoaderError::UnsupportedFormat {
                extension: extension.clone(),
                supported: self
                    .supported_extensions()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })?;

        debug!(loader = loader.name(), path = %path.display(), "selected loader");
        Ok(&**loader)
    }

    pub fn load(&self, path: &Path) -> Result<DataFrame, LoaderError> {
        self.loader_for(path)?.load(path)
    }
}

/// Loads `path` with the default `.tsv` / `.json` registry.
pub fn load_table(path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
    LoaderRegistry::default().load(path.as_ref())
}
