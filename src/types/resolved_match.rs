use crate::coerce::CoercedValue;
use crate::route::{HandlerRef, Route};
use crate::types::RouteParams;
use std::sync::Arc;

/// The outcome of a successful resolution.
///
/// Each call to [`Router::resolve`](./struct.Router.html#method.resolve) builds a fresh value owned by
/// the caller; the matched route is shared read-only between all matches.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMatch {
    route: Arc<Route>,
    params: RouteParams,
}

impl ResolvedMatch {
    pub(crate) fn new(route: Arc<Route>, params: RouteParams) -> ResolvedMatch {
        ResolvedMatch { route, params }
    }

    /// The handler of the matched route.
    pub fn handler(&self) -> &HandlerRef {
        self.route.handler()
    }

    pub fn route(&self) -> &Route {
        self.route.as_ref()
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    /// Shorthand for `self.params().get(name)`.
    pub fn param<N: AsRef<str>>(&self, name: N) -> Option<&CoercedValue> {
        self.params.get(name)
    }

    /// Splits the match into its handler and parameters.
    pub fn into_parts(self) -> (HandlerRef, RouteParams) {
        (self.route.handler().clone(), self.params)
    }
}
