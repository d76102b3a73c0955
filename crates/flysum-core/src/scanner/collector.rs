//! File collector: Finds migration files under source roots

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

/// Location scanned when none is configured
pub const DEFAULT_LOCATION: &str = "/db/migration";

/// Extension matched when none is configured
pub const DEFAULT_EXTENSION: &str = ".java";

/// A migration file found by the collector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReference {
    /// Absolute path to the file
    pub path: PathBuf,
    /// File name, extension included
    pub name: String,
}

impl FileReference {
    /// Create a reference from an absolute path and its base name
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Constant name for this file: the base name up to the first `.`
    ///
    /// `V1__init.sql.java` yields `V1__init`. A name without any `.` is
    /// returned whole.
    #[must_use]
    pub fn identifier(&self) -> &str {
        self.name
            .split_once('.')
            .map_or(self.name.as_str(), |(head, _)| head)
    }
}

/// Check whether a file name ends with any of the given extensions
#[must_use]
pub fn matches_extension<S: AsRef<str>>(name: &str, extensions: &[S]) -> bool {
    extensions
        .iter()
        .any(|extension| name.ends_with(extension.as_ref()))
}

/// Collector for migration files across several source roots
#[derive(Debug)]
pub struct Collector {
    roots: Vec<PathBuf>,
    locations: Vec<String>,
    extensions: Vec<String>,
}

impl Collector {
    /// Create a collector over the given roots with the default location
    /// and extension
    #[must_use]
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            locations: vec![DEFAULT_LOCATION.to_string()],
            extensions: vec![DEFAULT_EXTENSION.to_string()],
        }
    }

    /// Sub-paths to list under each root; an empty list keeps the current ones
    #[must_use]
    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        if !locations.is_empty() {
            self.locations = locations;
        }
        self
    }

    /// File suffixes to keep; an empty list keeps the current ones
    #[must_use]
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        if !extensions.is_empty() {
            self.extensions = extensions;
        }
        self
    }

    /// Collect matching files in root order, then location order, then
    /// directory-listing order
    ///
    /// Nothing is sorted or deduplicated.
    #[must_use]
    pub fn collect(&self) -> Vec<FileReference> {
        let mut files = Vec::new();
        for root in &self.roots {
            for location in &self.locations {
                let dir = location_dir(root, location);
                files.extend(self.list_directory(&dir));
            }
        }
        files
    }

    /// Get the roots being scanned
    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Get the locations listed under each root
    #[must_use]
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Get the extensions being matched
    #[must_use]
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn list_directory(&self, dir: &Path) -> Vec<FileReference> {
        if !dir.is_dir() {
            debug!("Skipping missing location {}", dir.display());
            return Vec::new();
        }

        let base = dir
            .canonicalize()
            .or_else(|_| std::path::absolute(dir))
            .unwrap_or_else(|_| dir.to_path_buf());

        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) if entry.file_type().is_dir() => None,
                Ok(entry) => Some(entry.into_path()),
                // Unresolvable entries (dangling links) are kept so that
                // reading them fails instead of dropping a migration
                Err(err) if err.depth() > 0 => err.path().map(Path::to_path_buf),
                Err(_) => None,
            })
            .filter_map(|path| {
                let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                    warn!("Skipping non UTF-8 file name in {}", dir.display());
                    return None;
                };
                matches_extension(name, &self.extensions)
                    .then(|| FileReference::new(base.join(name), name))
            })
            .collect()
    }
}

/// Collect files under `roots` × `locations` whose names end with one of
/// `extensions`
///
/// Empty `locations` or `extensions` fall back to [`DEFAULT_LOCATION`] and
/// [`DEFAULT_EXTENSION`].
#[must_use]
pub fn collect<P, L, E>(roots: &[P], locations: &[L], extensions: &[E]) -> Vec<FileReference>
where
    P: AsRef<Path>,
    L: AsRef<str>,
    E: AsRef<str>,
{
    Collector::new(roots.iter().map(|root| root.as_ref().to_path_buf()))
        .with_locations(locations.iter().map(|l| l.as_ref().to_string()).collect())
        .with_extensions(extensions.iter().map(|e| e.as_ref().to_string()).collect())
        .collect()
}

/// Join a root and a location by plain concatenation
///
/// Locations are configured with a leading separator (`/db/migration`),
/// so `Path::join` would discard the root.
fn location_dir(root: &Path, location: &str) -> PathBuf {
    let mut dir = root.as_os_str().to_os_string();
    dir.push(location);
    PathBuf::from(dir)
}
