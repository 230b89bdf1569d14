use crate::constants::ALL_POSSIBLE_HTTP_METHODS;
use crate::registry::HandlerRegistry;
use crate::segment::{parse_template, PathSegment};
use crate::Error;
use http::Method;
use std::fmt::{self, Debug, Display, Formatter};

/// Identifies a handler as a `(target, action)` pair, e.g. a controller and one of its methods.
///
/// The router only hands this back to the caller; it never calls anything through it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerRef {
    target: String,
    action: String,
}

impl HandlerRef {
    pub fn new<T: Into<String>, A: Into<String>>(target: T, action: A) -> HandlerRef {
        HandlerRef {
            target: target.into(),
            action: action.into(),
        }
    }

    pub fn target(&self) -> &str {
        self.target.as_str()
    }

    pub fn action(&self) -> &str {
        self.action.as_str()
    }
}

impl Display for HandlerRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.target, self.action)
    }
}

/// Represents a single route.
///
/// A route consists of an http method, a path template and a handler reference. It is validated on
/// construction and never changes afterwards: the parameters bound by a match are returned in a
/// [`ResolvedMatch`](./struct.ResolvedMatch.html) rather than stored here, so one route can be
/// matched by many threads at once.
///
/// # Examples
///
/// ```
/// use segroute::{HandlerTable, Route};
///
/// let handlers = HandlerTable::new().with("PostController", &["show"]);
/// let route = Route::new("GET", "/post/{int|id}", "PostController", "show", &handlers).unwrap();
///
/// assert_eq!(route.method(), "GET");
/// assert_eq!(route.param_names().collect::<Vec<_>>(), vec!["id"]);
///
/// // Methods are matched case-sensitively against the canonical verbs.
/// assert!(Route::new("get", "/", "PostController", "show", &handlers).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Route {
    method: Method,
    path: String,
    segments: Vec<PathSegment>,
    handler: HandlerRef,
}

impl Route {
    /// Creates a route, checking the method and asking `registry` whether the handler exists.
    pub fn new<P, T, A, R>(method: &str, path: P, target: T, action: A, registry: &R) -> crate::Result<Route>
    where
        P: Into<String>,
        T: Into<String>,
        A: Into<String>,
        R: HandlerRegistry + ?Sized,
    {
        let method = parse_method(method)?;
        let handler = HandlerRef::new(target, action);

        if !registry.exists(handler.target(), handler.action()) {
            return Err(Error::HandlerNotFound {
                target: handler.target,
                action: handler.action,
            });
        }

        let path = path.into();
        // Trailing slashes are kept here; the router normalises them according to its options.
        let segments = parse_template(path.as_str(), true)?;

        Ok(Route {
            method,
            path,
            segments,
            handler,
        })
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The path template as it was written.
    pub fn path(&self) -> &str {
        self.path.as_str()
    }

    pub fn segments(&self) -> &[PathSegment] {
        self.segments.as_slice()
    }

    pub fn handler(&self) -> &HandlerRef {
        &self.handler
    }

    pub fn target(&self) -> &str {
        self.handler.target()
    }

    pub fn action(&self) -> &str {
        self.handler.action()
    }

    /// Names of the parameters this route binds, in path order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            PathSegment::Param(p) => Some(p.name()),
            PathSegment::Literal(_) => None,
        })
    }
}

impl Debug for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ method: {}, path: {:?}, handler: {} }}",
            self.method, self.path, self.handler
        )
    }
}

fn parse_method(method: &str) -> crate::Result<Method> {
    ALL_POSSIBLE_HTTP_METHODS
        .iter()
        .find(|m| m.as_str() == method)
        .cloned()
        .ok_or_else(|| {
            Error::invalid_route(format!(
                "Invalid http verb '{}', must be one of: GET, POST, PUT, PATCH, OPTIONS, HEAD, DELETE, CONNECT, TRACE",
                method
            ))
        })
}
