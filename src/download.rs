use crate::error::{FetchError, Result};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

/// How a call to [`ensure_local_copy`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    AlreadyPresent,
    Downloaded { bytes: usize },
}

/// Downloads `url` into `path` unless something already exists there.
///
/// An existing entry is trusted as-is, even if empty. The parent directory
/// must already exist. The body lands in a temporary sibling first and is
/// moved into place without clobbering, so a returned error leaves no file
/// behind. A process killed mid-download can leave a stray `.tmp*` sibling.
pub fn ensure_local_copy(path: impl Into<PathBuf>, url: impl AsRef<str>) -> Result<Outcome> {
    let path = path.into();
    let url = url.as_ref();

    if fs::exists(&path).map_err(|e| FetchError::fs(&path, e))? {
        debug!("{} already present, skipping download", path.display());
        return Ok(Outcome::AlreadyPresent);
    }

    let mut staging = staging_file(parent_dir(&path)).map_err(|e| FetchError::fs(&path, e))?;

    info!("Downloading {url} into {}", path.display());

    let text = fetch_text(url)?;

    staging
        .write_all(text.as_bytes())
        .and_then(|_| staging.flush())
        .map_err(|e| FetchError::fs(&path, e))?;

    match staging.persist_noclobber(&path) {
        Ok(_) => {
            info!("Wrote {} bytes to {}", text.len(), path.display());
            Ok(Outcome::Downloaded { bytes: text.len() })
        }

        Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
            debug!("{} appeared while downloading, keeping it", path.display());
            Ok(Outcome::AlreadyPresent)
        }

        Err(err) => Err(FetchError::fs(&path, err.error)),
    }
}

fn fetch_text(url: &str) -> Result<String> {
    let network = |source: reqwest::Error| FetchError::Network {
        url: url.into(),
        source,
    };

    let res = reqwest::blocking::get(url).map_err(network)?;
    let status = res.status();

    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.into(),
            status,
        });
    }

    res.text().map_err(network)
}

/// Temporary file in `dir` that persists with the mode a plain create would give.
fn staging_file(dir: &Path) -> io::Result<NamedTempFile> {
    #[allow(unused_mut)]
    let mut builder = Builder::new();

    // 0666 before umask, like `fs::write`.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    builder.tempfile_in(dir)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}
