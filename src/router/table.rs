//! The fixed route table.
//!
//! Routes are tried top to bottom and the first match wins. Prefix routes
//! hand the remainder of the path (possibly empty) to their handler.

use crate::http::request::Method;

/// How a route matches the request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathPattern {
    /// The path must equal the literal.
    Exact(&'static str),
    /// The path must start with the literal; the rest is the parameter.
    Prefix(&'static str),
}

impl PathPattern {
    /// Returns the route parameter if `path` matches.
    ///
    /// Exact patterns yield an empty parameter.
    pub fn matches<'a>(&self, path: &'a str) -> Option<&'a str> {
        match self {
            PathPattern::Exact(literal) => (path == *literal).then_some(""),
            PathPattern::Prefix(literal) => path.strip_prefix(literal),
        }
    }
}

/// Which handler a route dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Root,
    Echo,
    UserAgent,
    ReadFile,
    WriteFile,
}

#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub method: Method,
    pub pattern: PathPattern,
    pub handler: Handler,
}

/// All routes, in priority order. Anything not listed is a 404.
pub static ROUTES: &[Route] = &[
    Route {
        method: Method::GET,
        pattern: PathPattern::Exact("/"),
        handler: Handler::Root,
    },
    Route {
        method: Method::GET,
        pattern: PathPattern::Prefix("/echo/"),
        handler: Handler::Echo,
    },
    Route {
        method: Method::GET,
        pattern: PathPattern::Exact("/user-agent"),
        handler: Handler::UserAgent,
    },
    Route {
        method: Method::GET,
        pattern: PathPattern::Prefix("/files/"),
        handler: Handler::ReadFile,
    },
    Route {
        method: Method::POST,
        pattern: PathPattern::Prefix("/files/"),
        handler: Handler::WriteFile,
    },
];

/// Finds the first route for `method` and `path`, returning its handler and
/// the path parameter.
pub fn resolve<'a>(method: &Method, path: &'a str) -> Option<(Handler, &'a str)> {
    ROUTES
        .iter()
        .filter(|route| route.method == *method)
        .find_map(|route| route.pattern.matches(path).map(|param| (route.handler, param)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_consumes_exactly_the_literal() {
        let echo = PathPattern::Prefix("/echo/");

        assert_eq!(echo.matches("/echo/abc"), Some("abc"));
        assert_eq!(echo.matches("/echo/"), Some(""));
        assert_eq!(echo.matches("/echo/a/b"), Some("a/b"));
        assert_eq!(echo.matches("/echo"), None);
        assert_eq!(echo.matches("/echoes/x"), None);
    }

    #[test]
    fn exact_does_not_match_extensions() {
        let root = PathPattern::Exact("/");

        assert_eq!(root.matches("/"), Some(""));
        assert_eq!(root.matches("//"), None);
        assert_eq!(root.matches(""), None);
    }
}
