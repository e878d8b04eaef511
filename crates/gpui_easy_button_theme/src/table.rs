use std::{
    path::{Path, PathBuf},
    sync::{Arc, LazyLock},
};

use gpui::SharedString;
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

use crate::StyleAttributes;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("could not read theme table at \"{}\"", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid theme table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The style layers of a single theme.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeEntry {
    #[serde(default)]
    pub normal: StyleAttributes,
    #[serde(default)]
    pub hover: StyleAttributes,
    #[serde(default, alias = "disable")]
    pub disabled: Option<StyleAttributes>,
}

/// On-disk shape of a theme table. `base` is merged under every `normal` layer.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeTableSource {
    #[serde(default)]
    base: StyleAttributes,
    themes: IndexMap<SharedString, ThemeEntry>,
}

/// Theme key to [`ThemeEntry`], in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "ThemeTableSource")]
pub struct ThemeTable {
    entries: IndexMap<SharedString, ThemeEntry>,
}

static BUILTIN: LazyLock<Arc<ThemeTable>> = LazyLock::new(|| {
    Arc::new(ThemeTable::from_json(include_str!("../themes/builtin.json")).unwrap())
});

impl From<ThemeTableSource> for ThemeTable {
    fn from(source: ThemeTableSource) -> Self {
        let entries = source
            .themes
            .into_iter()
            .map(|(key, mut entry)| {
                entry.normal = source.base.refined(&entry.normal);
                (key, entry)
            })
            .collect();

        Self { entries }
    }
}

impl ThemeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The table shipped with the crate.
    pub fn builtin() -> &'static ThemeTable {
        &BUILTIN
    }

    pub(crate) fn builtin_arc() -> Arc<ThemeTable> {
        BUILTIN.clone()
    }

    pub fn from_json(json: impl AsRef<str>) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json.as_ref())?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::from_json(json)?;
        tracing::debug!(path = %path.display(), themes = table.len(), "loaded button theme table");

        Ok(table)
    }

    pub fn get(&self, key: &str) -> Option<&ThemeEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Inserts or replaces a theme, returning the previous entry.
    pub fn insert(&mut self, key: impl Into<SharedString>, entry: ThemeEntry) -> Option<ThemeEntry> {
        self.entries.insert(key.into(), entry)
    }

    /// Adds every theme of `overrides`, replacing entries with the same key.
    pub fn extend(&mut self, overrides: &ThemeTable) {
        for (key, entry) in &overrides.entries {
            self.entries.insert(key.clone(), entry.clone());
        }
    }

    pub fn merged(&self, overrides: &ThemeTable) -> Self {
        let mut table = self.clone();
        table.extend(overrides);
        table
    }

    pub fn keys(&self) -> impl Iterator<Item = &SharedString> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(SharedString, ThemeEntry)> for ThemeTable {
    fn from_iter<T: IntoIterator<Item = (SharedString, ThemeEntry)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
