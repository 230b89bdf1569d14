use thiserror::Error as ThisError;

/// The error type returned by route registration and resolution.
///
/// None of these are fatal: registration errors abort only the offending route, and
/// [`RouteNotFound`](Error::RouteNotFound) is the ordinary outcome for an unmatched request.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The route definition itself is unusable, e.g. the method is not one of the nine
    /// standard verbs or a parameter segment has no name.
    #[error("Invalid route definition: {0}")]
    InvalidRouteDefinition(String),

    /// The handler registry does not know the `action` on `target`.
    #[error("Handler '{action}' not found on target '{target}'")]
    HandlerNotFound { target: String, action: String },

    /// No registered route matches the method and path.
    #[error("Route path '{path}' with http verb '{method}' not found")]
    RouteNotFound { method: String, path: String },
}

/// A fieldless mirror of [`Error`] for cheap matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidRouteDefinition,
    HandlerNotFound,
    RouteNotFound,
}

impl Error {
    pub(crate) fn invalid_route<M: Into<String>>(msg: M) -> Error {
        Error::InvalidRouteDefinition(msg.into())
    }

    pub(crate) fn route_not_found(method: &str, path: &str) -> Error {
        Error::RouteNotFound {
            method: method.to_owned(),
            path: path.to_owned(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidRouteDefinition(_) => ErrorKind::InvalidRouteDefinition,
            Error::HandlerNotFound { .. } => ErrorKind::HandlerNotFound,
            Error::RouteNotFound { .. } => ErrorKind::RouteNotFound,
        }
    }

    /// Returns `true` if no route matched.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::RouteNotFound
    }
}
