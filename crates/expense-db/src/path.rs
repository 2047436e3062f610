//! Database paths
//!
//! A path addresses a node in the JSON tree, e.g. `expenses/-Nx3k...`.
//! Segments follow the Firebase key rules: non-empty, free of
//! `.`, `#`, `$`, `[`, `]` and `/`, and without ASCII control characters.

use crate::error::DatabaseError;
use std::fmt;

const FORBIDDEN_CHARS: [char; 6] = ['.', '#', '$', '[', ']', '/'];

/// Validated path into the database tree
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DbPath {
    segments: Vec<String>,
}

impl DbPath {
    /// Parse a slash-separated path. Leading/trailing slashes are ignored.
    pub fn parse(path: &str) -> Result<Self, DatabaseError> {
        let trimmed = path.trim_matches('/');
        if trimmed.is_empty() {
            return Err(invalid(path, "path is empty"));
        }

        let mut segments = Vec::new();
        for segment in trimmed.split('/') {
            validate_segment(path, segment)?;
            segments.push(segment.to_string());
        }

        Ok(Self { segments })
    }

    /// Path of a child node
    pub fn child(&self, segment: &str) -> Result<Self, DatabaseError> {
        validate_segment(&format!("{}/{}", self, segment), segment)?;
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for DbPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

fn validate_segment(path: &str, segment: &str) -> Result<(), DatabaseError> {
    if segment.is_empty() {
        return Err(invalid(path, "empty segment"));
    }
    if segment.contains(FORBIDDEN_CHARS) {
        return Err(invalid(path, "segment contains a forbidden character"));
    }
    if segment.chars().any(|c| c.is_ascii_control()) {
        return Err(invalid(path, "segment contains a control character"));
    }
    Ok(())
}

fn invalid(path: &str, reason: &'static str) -> DatabaseError {
    DatabaseError::InvalidPath {
        path: path.to_string(),
        reason,
    }
}
