//! HTTP methods accepted by route templates

use super::error::{RestfulError, RestfulResult};
use axum::http::Method;
use axum::routing::MethodFilter;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The four methods a RESTful template may use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Parse a method name, ignoring case
    ///
    /// Anything other than get/post/put/delete is an
    /// [`RestfulError::InvalidMethod`] carrying the lower-cased name.
    pub fn parse(method: &str) -> RestfulResult<Self> {
        match method.to_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            other => Err(RestfulError::InvalidMethod {
                method: other.to_string(),
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
        }
    }

    /// The axum filter that routes only this method
    pub fn method_filter(&self) -> MethodFilter {
        match self {
            HttpMethod::Get => MethodFilter::GET,
            HttpMethod::Post => MethodFilter::POST,
            HttpMethod::Put => MethodFilter::PUT,
            HttpMethod::Delete => MethodFilter::DELETE,
        }
    }
}

impl FromStr for HttpMethod {
    type Err = RestfulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(HttpMethod::parse("GET").unwrap(), HttpMethod::Get);
        assert_eq!(HttpMethod::parse("Post").unwrap(), HttpMethod::Post);
        assert_eq!(HttpMethod::parse("put").unwrap(), HttpMethod::Put);
        assert_eq!("DeLeTe".parse::<HttpMethod>().unwrap(), HttpMethod::Delete);
    }

    #[test]
    fn test_parse_rejects_unsupported_methods() {
        for method in ["PATCH", "head", "options", ""] {
            match HttpMethod::parse(method) {
                Err(RestfulError::InvalidMethod { method: m }) => {
                    assert_eq!(m, method.to_lowercase())
                }
                other => panic!("expected InvalidMethod for {:?}, got {:?}", method, other),
            }
        }
    }

    #[test]
    fn test_display_and_conversion() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(Method::from(HttpMethod::Put), Method::PUT);
    }
}
