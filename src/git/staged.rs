use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

use crate::{FormatGuardError, Result};

/// Source of the files staged for the next commit.
pub trait StagedFiles {
    /// Get files whose index entry differs from HEAD, as absolute paths.
    ///
    /// # Errors
    /// Returns an error if the repository cannot be accessed.
    fn staged_files(&self) -> Result<BTreeSet<PathBuf>>;
}

/// Staged-file lookup backed by gix.
pub struct GitIndex {
    repo_path: PathBuf,
    workdir: PathBuf,
}

impl GitIndex {
    /// Open the repository containing the given path.
    ///
    /// # Errors
    /// Returns an error if no git repository is found.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path).map_err(|e| {
            FormatGuardError::Git(format!("Failed to discover git repository: {e}"))
        })?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| FormatGuardError::Git("Repository has no working directory".into()))?
            .to_path_buf();
        Ok(Self {
            repo_path: repo.path().to_path_buf(),
            workdir,
        })
    }

    /// Get the working directory of the repository.
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn open_repo(&self) -> Result<gix::Repository> {
        gix::open(&self.repo_path)
            .map_err(|e| FormatGuardError::Git(format!("Failed to open git repository: {e}")))
    }

    fn collect_tree_blobs(
        tree: &gix::Tree<'_>,
        prefix: &Path,
        blobs: &mut HashMap<PathBuf, gix::ObjectId>,
    ) -> Result<()> {
        for entry in tree.iter() {
            let entry = entry
                .map_err(|e| FormatGuardError::Git(format!("Failed to read tree entry: {e}")))?;
            let name = std::str::from_utf8(entry.filename())
                .map_err(|e| FormatGuardError::Git(format!("Invalid filename encoding: {e}")))?;
            let path = prefix.join(name);

            match entry.mode().kind() {
                gix::object::tree::EntryKind::Blob
                | gix::object::tree::EntryKind::BlobExecutable => {
                    blobs.insert(path, entry.oid().into());
                }
                gix::object::tree::EntryKind::Tree => {
                    let subtree = entry
                        .object()
                        .map_err(|e| {
                            FormatGuardError::Git(format!("Failed to get subtree object: {e}"))
                        })?
                        .into_tree();
                    Self::collect_tree_blobs(&subtree, &path, blobs)?;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

impl StagedFiles for GitIndex {
    fn staged_files(&self) -> Result<BTreeSet<PathBuf>> {
        let repo = self.open_repo()?;

        let index = repo
            .index_or_empty()
            .map_err(|e| FormatGuardError::Git(format!("Failed to open git index: {e}")))?;

        // New repositories have no HEAD commit; everything in the index is staged.
        let mut head_blobs = HashMap::new();
        if let Ok(commit) = repo.head_commit() {
            let head_tree = commit
                .tree()
                .map_err(|e| FormatGuardError::Git(format!("Failed to get HEAD tree: {e}")))?;
            Self::collect_tree_blobs(&head_tree, Path::new(""), &mut head_blobs)?;
        }

        let mut staged = BTreeSet::new();
        for entry in index.entries() {
            let path = PathBuf::from(String::from_utf8_lossy(entry.path(&index)).to_string());

            let unchanged = head_blobs
                .get(&path)
                .is_some_and(|head_oid| *head_oid == entry.id);

            if !unchanged {
                staged.insert(self.workdir.join(path));
            }
        }

        Ok(staged)
    }
}
