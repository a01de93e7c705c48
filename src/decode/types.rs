//! Decoder input types

use std::fmt;
use std::path::{Path, PathBuf};

/// Where the response document is read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    /// Read standard input until end of stream
    #[default]
    Stdin,
    /// Read the named file
    File(PathBuf),
}

impl InputSource {
    /// Create a file source
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Resolve an optional command-line path; `-` means standard input
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p.as_os_str() != "-" => Self::File(p.to_path_buf()),
            _ => Self::Stdin,
        }
    }

    /// Path of the file source, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::File(p) => Some(p),
        }
    }

    pub fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin)
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::File(p) => write!(f, "{}", p.display()),
        }
    }
}
