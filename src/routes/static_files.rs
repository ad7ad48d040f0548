//! Static file delivery
//!
//! A served sub-path such as `/foo.txt` is appended verbatim to the content
//! root, giving `<root>/foo.txt`. The whole file is read into memory and sent
//! as `application/octet-stream`.
//!
//! Under [`PathPolicy::Raw`] the sub-path is not normalised at all, so
//! `/static/../secret` escapes the root. [`PathPolicy::Contained`] (the
//! default) refuses any sub-path with a `..` segment before the filesystem is
//! touched; see [`is_contained`].

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use bytes::Bytes;
use tokio::io::AsyncReadExt;

use crate::config::{PathPolicy, StaticConfig};
use crate::http::response::Response;

/// Returns false if any `/`-separated segment of `sub_path` is `..`.
pub fn is_contained(sub_path: &str) -> bool {
    !sub_path.split(['/', '\\']).any(|segment| segment == "..")
}

#[derive(Debug, Clone)]
pub struct StaticContent {
    root: PathBuf,
    policy: PathPolicy,
}

impl StaticContent {
    pub fn new(root: impl Into<PathBuf>, policy: PathPolicy) -> Self {
        Self {
            root: root.into(),
            policy,
        }
    }

    pub fn from_config(cfg: &StaticConfig) -> Self {
        Self::new(cfg.root.clone(), cfg.path_policy)
    }

    /// `<root><sub_path>`, concatenated as text.
    ///
    /// `Path::join` is not used because an absolute sub-path would replace
    /// the root.
    pub fn resolve(&self, sub_path: &str) -> PathBuf {
        let mut full = OsString::from(self.root.as_os_str());
        full.push(sub_path);
        PathBuf::from(full)
    }

    /// Opens and fully reads the file behind `sub_path`.
    ///
    /// The file handle is dropped on every return path.
    pub async fn read(&self, sub_path: &str) -> io::Result<Bytes> {
        if self.policy == PathPolicy::Contained && !is_contained(sub_path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "path escapes content root",
            ));
        }

        let mut file = tokio::fs::File::open(self.resolve(sub_path)).await?;
        let meta = file.metadata().await?;

        if !meta.is_file() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "not a regular file"));
        }

        let mut contents = Vec::with_capacity(meta.len() as usize);
        file.read_to_end(&mut contents).await?;

        Ok(Bytes::from(contents))
    }

    pub async fn serve(&self, sub_path: &str) -> Response {
        match self.read(sub_path).await {
            Ok(contents) => Response::file(contents),
            Err(e) => {
                tracing::debug!(path = %sub_path, error = %e, "Static file unavailable");
                Response::file_not_found()
            }
        }
    }
}
