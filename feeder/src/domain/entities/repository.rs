//! Tracked repository entity

use serde::{Deserialize, Serialize};

/// An upstream repository whose tags are turned into a feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySpec {
    /// Stable slug used for output naming (`<id>.xml`)
    pub id: String,
    /// Human label used in feed titles
    pub display_language: String,
    pub owner: String,
    pub name: String,
}

impl RepositorySpec {
    pub fn new(id: &str, display_language: &str, owner: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            display_language: display_language.to_string(),
            owner: owner.to_string(),
            name: name.to_string(),
        }
    }

    /// `owner/name` as shown on GitHub
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// The fixed list of language runtimes tracked by default
pub fn default_repositories() -> Vec<RepositorySpec> {
    vec![
        RepositorySpec::new("nodejs", "Node.js", "nodejs", "node"),
        RepositorySpec::new("python", "Python", "python", "cpython"),
        RepositorySpec::new("rust", "Rust", "rust-lang", "rust"),
        RepositorySpec::new("php", "PHP", "php", "php-src"),
        RepositorySpec::new("go", "Go", "golang", "go"),
        RepositorySpec::new("ruby", "Ruby", "ruby", "ruby"),
        RepositorySpec::new("typescript", "TypeScript", "microsoft", "TypeScript"),
    ]
}
