//! Expansion of a resource and a template into concrete routes
//!
//! Tags resolved in each blueprint:
//! - `:resource` → the capitalized resource in names, the capitalized **controller** in handlers
//! - `:singular` → the capitalized singular form of the resource

use super::error::{RestfulError, RestfulResult};
use super::method::HttpMethod;
use super::resource::ResourceSpec;
use super::route::{RouteHandle, RouteRegistration};
use super::singularize::{Singularizer, capitalize};
use super::template::{RouteBlueprint, Template};
use crate::server::registrar::RouteRegistrar;

const RESOURCE_TAG: &str = ":resource";
const SINGULAR_TAG: &str = ":singular";

/// Replace both tags in a small template string
fn replace_tags(template: &str, resource: &str, singular: &str) -> String {
    template
        .replace(RESOURCE_TAG, &capitalize(resource))
        .replace(SINGULAR_TAG, &capitalize(singular))
}

/// Turns one resource/controller pair into the routes of a template
///
/// # Example
///
/// ```
/// use restful::prelude::*;
///
/// let expander = RouteExpander::new("blog.posts", "Posts").unwrap();
/// let routes = expander.plan().unwrap();
///
/// assert_eq!(routes.len(), 7);
/// assert_eq!(routes[3].path, "blog/{blog_id}/posts");
/// assert_eq!(routes[3].name.as_deref(), Some("BlogPosts"));
/// assert_eq!(routes[3].handler.as_deref(), Some("Posts@index"));
/// ```
#[derive(Debug, Clone)]
pub struct RouteExpander {
    resource: ResourceSpec,
    controller: String,
    singular: String,
    path_prefix: String,
    name_prefix: String,
    template: Template,
}

impl RouteExpander {
    /// Prepare an expansion with the default template
    pub fn new(resource: &str, controller: &str) -> RestfulResult<Self> {
        if controller.is_empty() || controller.starts_with('/') || controller.ends_with('/') {
            return Err(RestfulError::InvalidController {
                controller: controller.to_string(),
            });
        }

        let resource = ResourceSpec::parse(resource)?;
        let singular = Singularizer::singularize(resource.name());

        Ok(Self {
            path_prefix: resource.path_prefix(),
            name_prefix: resource.name_prefix(),
            singular,
            controller: controller.to_string(),
            resource,
            template: Template::restful(),
        })
    }

    /// Replace the default template
    ///
    /// An empty template is ignored and the default one stays in place.
    pub fn with_template(mut self, template: Template) -> Self {
        if template.is_empty() {
            tracing::warn!(
                resource = %self.resource.name(),
                "Empty custom template, keeping the default RESTful template"
            );
        } else {
            self.template = template;
        }
        self
    }

    pub fn resource(&self) -> &ResourceSpec {
        &self.resource
    }

    pub fn singular(&self) -> &str {
        &self.singular
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Resolve a single blueprint without registering it
    pub fn resolve(&self, blueprint: &RouteBlueprint) -> RestfulResult<RouteRegistration> {
        let method = HttpMethod::parse(&blueprint.method)?;
        let resource = self.resource.name();

        let path = format!("{}{}{}", self.path_prefix, resource, blueprint.path);

        let name = (!blueprint.name.is_empty()).then(|| {
            format!(
                "{}{}",
                self.name_prefix,
                replace_tags(&blueprint.name, resource, &self.singular)
            )
        });

        let handler = (!blueprint.handler.is_empty())
            .then(|| replace_tags(&blueprint.handler, &self.controller, &self.singular));

        Ok(RouteRegistration {
            method,
            path,
            name,
            handler,
        })
    }

    /// Resolve every blueprint in template order, registering nothing
    ///
    /// Fails as a whole on the first unsupported method.
    pub fn plan(&self) -> RestfulResult<Vec<RouteRegistration>> {
        self.template
            .blueprints()
            .iter()
            .map(|blueprint| self.resolve(blueprint))
            .collect()
    }

    /// Resolve and register each blueprint in template order
    ///
    /// Each blueprint is registered as soon as it is resolved. An unsupported
    /// method or a registrar error stops the expansion, and the routes already
    /// registered by this call stay registered.
    pub fn expand<R>(&self, registrar: &mut R) -> RestfulResult<Vec<RouteHandle>>
    where
        R: RouteRegistrar + ?Sized,
    {
        let mut handles = Vec::with_capacity(self.template.len());

        for blueprint in self.template.blueprints() {
            let route = self.resolve(blueprint)?;

            tracing::debug!(
                method = %route.method,
                path = %route.path,
                name = route.name.as_deref().unwrap_or(""),
                handler = route.handler.as_deref().unwrap_or(""),
                "Registering route"
            );

            handles.push(registrar.register(&route)?);
        }

        tracing::info!(
            resource = %self.resource.name(),
            controller = %self.controller,
            routes = handles.len(),
            "Registered resource routes"
        );

        Ok(handles)
    }
}

/// Register the routes of `template` (or the default template) for a resource
///
/// # Example
///
/// ```
/// use restful::prelude::*;
///
/// let mut table = RouteTable::new();
/// resource_routes("posts", "Posts", None, &mut table).unwrap();
///
/// assert_eq!(table.path_for("PostDelete"), Some("posts/{id}"));
/// ```
pub fn resource_routes<R>(
    resource: &str,
    controller: &str,
    template: Option<Template>,
    registrar: &mut R,
) -> RestfulResult<Vec<RouteHandle>>
where
    R: RouteRegistrar + ?Sized,
{
    let mut expander = RouteExpander::new(resource, controller)?;
    if let Some(template) = template {
        expander = expander.with_template(template);
    }
    expander.expand(registrar)
}
