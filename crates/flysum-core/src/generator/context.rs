//! Build context: where source roots come from and go to

use std::path::PathBuf;

/// The surrounding build, as far as the generator is concerned
pub trait BuildContext {
    /// Roots to scan for migration locations
    fn compile_source_roots(&self) -> Vec<PathBuf>;

    /// Register a directory holding generated sources
    fn add_compile_source_root(&mut self, root: PathBuf);
}

/// In-memory list of source roots
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRoots {
    roots: Vec<PathBuf>,
}

impl SourceRoots {
    #[must_use]
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl BuildContext for SourceRoots {
    fn compile_source_roots(&self) -> Vec<PathBuf> {
        self.roots.clone()
    }

    fn add_compile_source_root(&mut self, root: PathBuf) {
        if !self.roots.contains(&root) {
            self.roots.push(root);
        }
    }
}
