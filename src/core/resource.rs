//! Parsing of dotted resource identifiers
//!
//! `"blogs.posts"` nests `posts` under `blogs`: every generated path starts with
//! `blogs/{blog_id}/` and every route name with `Blog`.

use super::error::{RestfulError, RestfulResult};
use super::singularize::{Singularizer, capitalize};

/// A resource identifier split into its parents and its leaf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSpec {
    parents: Vec<String>,
    name: String,
}

impl ResourceSpec {
    /// Parse a resource identifier such as `"posts"` or `"blogs.posts"`
    pub fn parse(resource: &str) -> RestfulResult<Self> {
        let invalid = |message: &str| RestfulError::InvalidResource {
            resource: resource.to_string(),
            message: message.to_string(),
        };

        if resource.is_empty() {
            return Err(invalid("resource name is empty"));
        }
        if resource.starts_with('/') || resource.ends_with('/') {
            return Err(invalid("resource name must not start or end with '/'"));
        }

        let mut segments: Vec<String> = resource.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(invalid("nested resource contains an empty segment"));
        }

        let name = segments.pop().unwrap_or_default();
        Ok(Self {
            parents: segments,
            name,
        })
    }

    /// The leaf resource name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parent segments, outermost first
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn is_nested(&self) -> bool {
        !self.parents.is_empty()
    }

    /// Path prefix contributed by the parents, e.g. `blogs/{blog_id}/`
    pub fn path_prefix(&self) -> String {
        self.parents
            .iter()
            .map(|parent| format!("{}/{{{}_id}}/", parent, Singularizer::singularize(parent)))
            .collect()
    }

    /// Route name prefix contributed by the parents, e.g. `Blog`
    pub fn name_prefix(&self) -> String {
        self.parents
            .iter()
            .map(|parent| capitalize(&Singularizer::singularize(parent)))
            .collect()
    }
}
