//! PDB and AlphaFold structure fetching.

use anyhow::Result;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Client for fetching protein structures from RCSB and AlphaFold.
///
/// Downloads land in the structures upload directory and are reused on
/// subsequent requests for the same id.
pub struct StructureFetcher {
    client: Client,
    cache_dir: PathBuf,
}

impl StructureFetcher {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Self {
        Self {
            client: Client::new(),
            cache_dir: cache_dir.as_ref().to_path_buf(),
        }
    }

    /// Fetch a PDB file by its four-character id.
    pub async fn fetch_pdb(&self, pdb_id: &str) -> Result<PathBuf> {
        let file_name = format!("{}.pdb", pdb_id.to_lowercase());
        let file_path = self.cache_dir.join(&file_name);

        if file_path.exists() {
            debug!("PDB {} found in cache", pdb_id);
            return Ok(file_path);
        }

        info!("fetching PDB {} from RCSB", pdb_id);
        let url = format!("https://files.rcsb.org/download/{}", file_name);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let content = response.bytes().await?;

        fs::create_dir_all(&self.cache_dir).await?;
        fs::write(&file_path, content).await?;

        Ok(file_path)
    }

    /// Fetch an AlphaFold predicted structure by UniProt id.
    pub async fn fetch_alphafold(&self, uniprot_id: &str) -> Result<PathBuf> {
        let file_name = format!("AF-{}-F1-model_v4.pdb", uniprot_id);
        let file_path = self.cache_dir.join(&file_name);

        if file_path.exists() {
            debug!("AlphaFold structure for {} found in cache", uniprot_id);
            return Ok(file_path);
        }

        info!("fetching AlphaFold structure for {} from EBI", uniprot_id);
        let url = format!("https://alphafold.ebi.ac.uk/files/{}", file_name);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let content = response.bytes().await?;

        fs::create_dir_all(&self.cache_dir).await?;
        fs::write(&file_path, content).await?;

        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn cached_file_is_returned_without_network() {
        let dir = tempdir().unwrap();
        let cached = dir.path().join("1xyz.pdb");
        fs::write(&cached, b"HEADER    TEST\n").await.unwrap();

        let fetcher = StructureFetcher::new(dir.path());
        let path = fetcher.fetch_pdb("1XYZ").await.unwrap();
        assert_eq!(path, cached);
    }

    #[tokio::test]
    #[ignore] // requires network access
    async fn fetch_small_known_pdb() {
        let dir = tempdir().unwrap();
        let fetcher = StructureFetcher::new(dir.path());
        let path = fetcher.fetch_pdb("1CRN").await.unwrap();
        assert!(path.exists());
    }
}
