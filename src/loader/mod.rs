//! Reading the three record collections from JSON exports
//!
//! The collections are independent, so they are read and parsed in
//! parallel and joined before anything is indexed. Nothing partial is ever
//! returned: one failing collection fails the whole load.

mod error;

pub use error::{LoadError, LoadResult};

use crate::config::DataConfig;
use crate::models::{Dataset, EntityType, Organization, Ticket, User};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Where raw collection bytes come from
pub trait Source: Send + Sync {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// Reads collections from the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSource;

impl Source for FileSource {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Produces a complete [`Dataset`] or fails
pub trait Loader {
    fn load(&self) -> LoadResult<Dataset>;
}

/// Locations of the three collection files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub tickets: PathBuf,
    pub users: PathBuf,
    pub organizations: PathBuf,
}

impl DataPaths {
    pub fn from_config(config: &DataConfig) -> Self {
        Self {
            tickets: config.dir.join(&config.tickets_file),
            users: config.dir.join(&config.users_file),
            organizations: config.dir.join(&config.organizations_file),
        }
    }

    pub fn path_of(&self, collection: EntityType) -> &Path {
        match collection {
            EntityType::Ticket => &self.tickets,
            EntityType::User => &self.users,
            EntityType::Organization => &self.organizations,
        }
    }
}

/// Loads JSON array exports through a [`Source`]
#[derive(Debug, Clone)]
pub struct JsonLoader<S = FileSource> {
    source: S,
    paths: DataPaths,
}

impl JsonLoader<FileSource> {
    pub fn from_files(paths: DataPaths) -> Self {
        Self::new(FileSource, paths)
    }
}

impl<S: Source> JsonLoader<S> {
    pub fn new(source: S, paths: DataPaths) -> Self {
        Self { source, paths }
    }

    fn load_collection<T: DeserializeOwned>(&self, collection: EntityType) -> LoadResult<Vec<T>> {
        let path = self.paths.path_of(collection);
        let bytes = self.source.read(path).map_err(|source| LoadError::Read {
            collection,
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<T> = serde_json::from_slice(&bytes)
            .map_err(|source| LoadError::Parse { collection, source })?;

        tracing::debug!(
            collection = %collection,
            path = %path.display(),
            records = records.len(),
            "Collection parsed"
        );

        Ok(records)
    }
}

impl<S: Source> Loader for JsonLoader<S> {
    /// Read and parse all three collections in parallel.
    ///
    /// When several collections fail, the error of the first one in
    /// tickets, users, organizations order is returned.
    fn load(&self) -> LoadResult<Dataset> {
        let started = Instant::now();

        let (tickets, (users, organizations)) = rayon::join(
            || self.load_collection::<Ticket>(EntityType::Ticket),
            || {
                rayon::join(
                    || self.load_collection::<User>(EntityType::User),
                    || self.load_collection::<Organization>(EntityType::Organization),
                )
            },
        );

        let dataset = Dataset::new(tickets?, users?, organizations?);

        tracing::info!(
            tickets = dataset.tickets.len(),
            users = dataset.users.len(),
            organizations = dataset.organizations.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Dataset loaded"
        );

        Ok(dataset)
    }
}
