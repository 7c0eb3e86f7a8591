// crates/shared-kernel/src/value_objects/changed_file.rs
use std::{borrow::Borrow, fmt, ops::Deref};

use serde::{Deserialize, Serialize};

/// A repository-relative path reported as changed by a diff or an API.
///
/// The value is kept as an opaque string: it is never normalised, resolved
/// against the filesystem or interpreted as a glob. Empty strings and paths
/// containing `*`, `?` or `[` are legal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct ChangedFile(String);

impl ChangedFile {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for ChangedFile {
    fn from(path: String) -> Self {
        Self(path)
    }
}

impl From<&str> for ChangedFile {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl From<ChangedFile> for String {
    fn from(file: ChangedFile) -> Self {
        file.0
    }
}

impl AsRef<str> for ChangedFile {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ChangedFile {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Deref for ChangedFile {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for ChangedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for ChangedFile {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ChangedFile {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
