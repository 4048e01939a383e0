//! Configuration loading and management

use crate::core::error::{ConfigError, RestfulResult};
use crate::core::template::Template;
use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name under which the conventional template is always available
pub const RESTFUL_TEMPLATE: &str = "restful";

/// How a resource picks its template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateRef {
    /// Name of a template declared under `templates`
    Named(String),

    /// A template written out in place
    Inline(Template),
}

/// Configuration for one resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Resource identifier, dotted for nesting (e.g. "blogs.posts")
    pub resource: String,

    /// Controller name substituted for `:resource` in handlers
    pub controller: String,

    /// Template to use instead of the default one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<TemplateRef>,
}

/// Complete route configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Named templates, in declaration order
    #[serde(default)]
    pub templates: IndexMap<String, Template>,

    /// Resources, in registration order
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}

impl RoutesConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Turn a template reference into a template
    ///
    /// Declared templates shadow the built-in `restful` one.
    pub fn resolve_template(&self, reference: &TemplateRef) -> RestfulResult<Template> {
        match reference {
            TemplateRef::Inline(template) => Ok(template.clone()),
            TemplateRef::Named(name) => match self.templates.get(name) {
                Some(template) => Ok(template.clone()),
                None if name == RESTFUL_TEMPLATE => Ok(Template::restful()),
                None => Err(ConfigError::UnknownTemplate { name: name.clone() }.into()),
            },
        }
    }

    /// Merge multiple configurations into one
    ///
    /// Resources are concatenated in order. A template declared again replaces
    /// the earlier one with the same name.
    pub fn merge(configs: Vec<RoutesConfig>) -> Self {
        let mut merged = RoutesConfig::default();

        for config in configs {
            for (name, template) in config.templates {
                if merged.templates.insert(name.clone(), template).is_some() {
                    tracing::warn!(template = %name, "Template redefined while merging configs");
                }
            }
            merged.resources.extend(config.resources);
        }

        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RestfulError;
    use crate::core::template::RouteBlueprint;

    const YAML: &str = r#"
templates:
  readonly:
    - method: get
      path: ""
      name: ":resource"
      handler: ":resource@index"
    - method: get
      path: "/{id}"
      name: ":singular"
      handler: ":resource@show"

resources:
  - resource: posts
    controller: Posts
  - resource: blogs.tags
    controller: Tags
    template: readonly
  - resource: feeds
    controller: Feeds
    template:
      - method: get
        path: "/latest"
        name: ":resourceLatest"
        handler: ":resource@latest"
"#;

    #[test]
    fn test_parse_yaml() {
        let config = RoutesConfig::from_yaml_str(YAML).unwrap();

        assert_eq!(config.templates.len(), 1);
        assert_eq!(config.templates["readonly"].len(), 2);
        assert_eq!(config.resources.len(), 3);
        assert!(config.resources[0].template.is_none());
        assert_eq!(
            config.resources[1].template,
            Some(TemplateRef::Named("readonly".to_string()))
        );
        assert!(matches!(
            config.resources[2].template,
            Some(TemplateRef::Inline(_))
        ));
    }

    #[test]
    fn test_resolve_template() {
        let config = RoutesConfig::from_yaml_str(YAML).unwrap();

        let readonly = config
            .resolve_template(&TemplateRef::Named("readonly".to_string()))
            .unwrap();
        assert_eq!(readonly.len(), 2);

        let restful = config
            .resolve_template(&TemplateRef::Named(RESTFUL_TEMPLATE.to_string()))
            .unwrap();
        assert_eq!(restful, Template::restful());

        let inline = Template::new(vec![RouteBlueprint::new("get", "", "", "")]);
        assert_eq!(
            config
                .resolve_template(&TemplateRef::Inline(inline.clone()))
                .unwrap(),
            inline
        );
    }

    #[test]
    fn test_resolve_unknown_template() {
        let config = RoutesConfig::default();
        match config.resolve_template(&TemplateRef::Named("missing".to_string())) {
            Err(RestfulError::Config(ConfigError::UnknownTemplate { name })) => {
                assert_eq!(name, "missing")
            }
            other => panic!("expected UnknownTemplate, got {:?}", other),
        }
    }

    #[test]
    fn test_yaml_serialization() {
        let config = RoutesConfig::from_yaml_str(YAML).unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = RoutesConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.templates, config.templates);
        assert_eq!(parsed.resources.len(), config.resources.len());
    }
}
