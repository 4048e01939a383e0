//! RestfulBuilder for declaring many resources at once

use super::registrar::RouteRegistrar;
use crate::config::RoutesConfig;
use crate::core::error::RestfulResult;
use crate::core::expander::RouteExpander;
use crate::core::route::{RouteHandle, RouteRegistration};
use crate::core::template::Template;

/// A resource waiting to be expanded
#[derive(Debug, Clone)]
struct ResourceEntry {
    resource: String,
    controller: String,
    template: Option<Template>,
}

impl ResourceEntry {
    fn expander(&self) -> RestfulResult<RouteExpander> {
        let expander = RouteExpander::new(&self.resource, &self.controller)?;
        Ok(match &self.template {
            Some(template) => expander.with_template(template.clone()),
            None => expander,
        })
    }
}

/// Builder collecting resources and expanding them in declaration order
///
/// # Example
///
/// ```
/// use restful::prelude::*;
///
/// let mut table = RouteTable::new();
/// RestfulBuilder::new()
///     .resource("posts", "Posts")
///     .resource("posts.comments", "Comments")
///     .register(&mut table)
///     .unwrap();
///
/// assert_eq!(table.len(), 14);
/// assert_eq!(table.path_for("PostComments"), Some("posts/{post_id}/comments"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RestfulBuilder {
    resources: Vec<ResourceEntry>,
}

impl RestfulBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource that uses the default template
    pub fn resource(mut self, resource: impl Into<String>, controller: impl Into<String>) -> Self {
        self.resources.push(ResourceEntry {
            resource: resource.into(),
            controller: controller.into(),
            template: None,
        });
        self
    }

    /// Add a resource with its own template
    pub fn resource_with_template(
        mut self,
        resource: impl Into<String>,
        controller: impl Into<String>,
        template: Template,
    ) -> Self {
        self.resources.push(ResourceEntry {
            resource: resource.into(),
            controller: controller.into(),
            template: Some(template),
        });
        self
    }

    /// Add every resource declared in a configuration
    ///
    /// Template references are resolved here, so an unknown template name
    /// fails before anything is registered.
    pub fn with_config(mut self, config: &RoutesConfig) -> RestfulResult<Self> {
        for entry in &config.resources {
            let template = entry
                .template
                .as_ref()
                .map(|reference| config.resolve_template(reference))
                .transpose()?;

            self.resources.push(ResourceEntry {
                resource: entry.resource.clone(),
                controller: entry.controller.clone(),
                template,
            });
        }
        Ok(self)
    }

    /// Number of declared resources
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Resolve every route without registering anything
    pub fn plan(&self) -> RestfulResult<Vec<RouteRegistration>> {
        let mut routes = Vec::new();
        for entry in &self.resources {
            routes.extend(entry.expander()?.plan()?);
        }
        Ok(routes)
    }

    /// Expand every resource into the registrar
    ///
    /// Stops at the first error. Routes registered before it are kept.
    pub fn register<R>(&self, registrar: &mut R) -> RestfulResult<Vec<RouteHandle>>
    where
        R: RouteRegistrar + ?Sized,
    {
        let mut handles = Vec::new();
        for entry in &self.resources {
            handles.extend(entry.expander()?.expand(registrar)?);
        }

        tracing::info!(
            resources = self.resources.len(),
            routes = handles.len(),
            "Registered all resources"
        );

        Ok(handles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RestfulError;
    use crate::core::template::RouteBlueprint;
    use crate::server::registrar::RouteTable;

    #[test]
    fn test_empty_builder() {
        let builder = RestfulBuilder::new();
        assert!(builder.is_empty());

        let mut table = RouteTable::new();
        assert!(builder.register(&mut table).unwrap().is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_resources_are_expanded_in_order() {
        let read_only = Template::new(vec![
            RouteBlueprint::new("get", "", ":resource", ":resource@index"),
            RouteBlueprint::new("get", "/{id}", ":singular", ":resource@show"),
        ]);

        let routes = RestfulBuilder::new()
            .resource_with_template("tags", "Tags", read_only)
            .resource("posts", "Posts")
            .plan()
            .unwrap();

        assert_eq!(routes.len(), 9);
        assert_eq!(routes[0].path, "tags");
        assert_eq!(routes[1].name.as_deref(), Some("Tag"));
        assert_eq!(routes[2].path, "posts/{id}/edit");
    }

    #[test]
    fn test_register_stops_at_invalid_resource() {
        let mut table = RouteTable::new();
        let result = RestfulBuilder::new()
            .resource("posts", "Posts")
            .resource("blog..posts", "Posts")
            .register(&mut table);

        assert!(matches!(result, Err(RestfulError::InvalidResource { .. })));
        assert_eq!(table.len(), 7);
    }
}
