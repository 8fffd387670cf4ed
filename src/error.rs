use crate::node::NodePath;
use std::error;
use std::fmt;
use std::result;

/// Errors raised by node-targeted tree operations.
///
/// Removing or finding a value that is absent is not an error; those operations report it
/// through their return value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The path does not lead to a node in the tree. Nothing was modified.
    InvalidPath(NodePath),
}

impl error::Error for Error {
    fn description(&self) -> &str {
        match self {
            Error::InvalidPath(_) => "path does not name a node",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidPath(path) => write!(f, "path `{}` does not name a node", path),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
