//! Where the corpus lives, remotely and on disk.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

pub const CORPUS_URL: &str =
    "https://raw.githubusercontent.com/karpathy/char-rnn/master/data/tinyshakespeare/input.txt";

pub const CORPUS_FILE_NAME: &str = "tiny_shakespeare.txt";

/// Base directory used when none is given: the current working directory.
pub const DEFAULT_BASE_DIR: &str = ".";

/// The local copy of the corpus. Written at most once, never refreshed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    path: PathBuf,
}

impl TargetFile {
    pub fn new(base_dir: impl AsRef<Path>, file_name: impl AsRef<Path>) -> Self {
        Self {
            path: base_dir.as_ref().join(file_name),
        }
    }

    pub fn in_dir(base_dir: impl AsRef<Path>) -> Self {
        Self::new(base_dir, CORPUS_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> io::Result<bool> {
        fs::exists(&self.path)
    }
}

impl Default for TargetFile {
    fn default() -> Self {
        Self::in_dir(DEFAULT_BASE_DIR)
    }
}

impl AsRef<Path> for TargetFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl From<TargetFile> for PathBuf {
    fn from(target: TargetFile) -> Self {
        target.path
    }
}
