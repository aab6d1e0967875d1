use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use url::Url;

/// Cache filename for a fetched page: the final path segment of its
/// source URL. Distinct URLs sharing a final segment land on the same
/// file.
pub fn cache_key(url: &Url) -> String {
    url.path().rsplit('/').next().unwrap_or_default().to_string()
}

/// A directory of raw HTML fragments, one file per fetched page.
/// Existence of a key means "already fetched"; files are written once
/// and never mutated.
pub struct PageCache {
    dir: PathBuf,
}

impl PageCache {
    /// Opens an existing cache directory. Directories are assumed
    /// pre-created; a missing one is a setup error.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        if !dir.is_dir() {
            bail!("cache directory {} does not exist", dir.display());
        }
        Ok(Self { dir })
    }

    pub fn contains(&self, key: &str) -> bool {
        self.dir.join(key).exists()
    }

    pub fn store(&self, key: &str, html: &str) -> Result<()> {
        let path = self.dir.join(key);
        fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Cached entries with an `.html` extension, sorted by filename.
    pub fn html_files(&self) -> Result<Vec<PathBuf>> {
        let mut out = Vec::new();
        for entry in
            fs::read_dir(&self.dir).with_context(|| format!("listing {}", self.dir.display()))?
        {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) == Some("html") {
                out.push(path);
            }
        }
        out.sort();
        Ok(out)
    }
}
