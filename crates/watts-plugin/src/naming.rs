//! Store file naming.

use std::path::{Path, PathBuf};

/// Derives the store file name from the input template name.
///
/// The default maps `scenario.xml` to `scenario.sqlite`.  Owned by the
/// [`CyclusPlugin`](crate::CyclusPlugin) that uses it; change it per plugin.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutputNaming {
    /// Extension written by Cyclus.  Must agree with
    /// `ResultsConfig::store_extension` for the results layer to find it.
    pub store_extension: String,
}

impl Default for OutputNaming {
    fn default() -> Self {
        Self { store_extension: "sqlite".to_owned() }
    }
}

impl OutputNaming {
    /// File name (no directory) of the store for `template`.
    pub fn store_file_name(&self, template: &Path) -> PathBuf {
        let stem = template.file_stem().unwrap_or(template.as_os_str());
        PathBuf::from(stem).with_extension(&self.store_extension)
    }

    /// Store path for `template` inside `workdir`.
    pub fn store_path(&self, template: &Path, workdir: &Path) -> PathBuf {
        workdir.join(self.store_file_name(template))
    }
}
