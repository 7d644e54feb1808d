//! Durable snapshot of the listings observed in the most recent run.
//!
//! The catalog is a plain JSON array of listings. A missing file is the
//! normal first-run state, not an error. Saving replaces the whole snapshot;
//! entries absent from the latest extraction are dropped. The write goes
//! through a temp file and a rename so a crash cannot leave a truncated
//! snapshot behind.
//!
//! At most one pipeline run per catalog location at a time; concurrent runs
//! against the same path are not supported.

use std::fs;
use std::path::PathBuf;

use tracing::info;

use crate::error::Error;
use crate::types::Listing;

pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Vec<Listing>, Error> {
        if !self.path.exists() {
            info!("catalog {} does not exist yet, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        let catalog = serde_json::from_str(&data)?;
        Ok(catalog)
    }

    pub fn save(&self, catalog: &[Listing]) -> Result<(), Error> {
        let data = serde_json::to_vec(catalog)?;

        let tmp = self.tmp_path();
        fs::write(&tmp, &data).map_err(|source| Error::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| Error::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}
