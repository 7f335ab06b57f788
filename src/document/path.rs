//! Absolute element paths used to select subtrees.

use super::DocumentError;

/// A namespace-free absolute path like `/isc/bind/statistics/memory`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementPath {
    steps: Vec<String>,
}

impl ElementPath {
    /// Parses a path. It must start with `/` and have no empty steps;
    /// a single trailing `/` is tolerated.
    pub fn parse(path: &str) -> Result<Self, DocumentError> {
        let rest = path
            .strip_prefix('/')
            .ok_or_else(|| DocumentError::InvalidPath(path.to_string()))?;
        let rest = rest.strip_suffix('/').unwrap_or(rest);

        if rest.is_empty() {
            return Err(DocumentError::InvalidPath(path.to_string()));
        }

        let steps: Vec<String> = rest.split('/').map(str::to_string).collect();
        if steps.iter().any(|s| s.is_empty() || s.contains(char::is_whitespace)) {
            return Err(DocumentError::InvalidPath(path.to_string()));
        }

        Ok(Self { steps })
    }

    /// Element names from the root downwards.
    pub fn steps(&self) -> &[String] {
        &self.steps
    }
}

impl std::fmt::Display for ElementPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            write!(f, "/{}", step)?;
        }
        Ok(())
    }
}
