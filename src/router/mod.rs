use crate::constants::ALL_POSSIBLE_HTTP_METHODS;
use crate::helpers;
use crate::registry::HandlerRegistry;
use crate::route::{HandlerRef, Route};
use crate::trie::RouteTrie;
use crate::types::ResolvedMatch;
use crate::Error;
use http::{Method, Request};
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

pub use self::builder::RouterBuilder;

mod builder;

pub(crate) type SharedRegistry = Arc<dyn HandlerRegistry + Send + Sync>;

/// Path handling switches, set through [`RouterBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RouterOptions {
    pub(crate) strict_slash: bool,
    pub(crate) percent_decode: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        RouterOptions {
            strict_slash: false,
            percent_decode: true,
        }
    }
}

/// Represents a modular, lightweight route registry.
///
/// Routes are registered first, usually through [`Router::builder`], and the router is then shared
/// (e.g. in an `Arc`) and queried concurrently with [`Router::resolve`]. Resolution only reads the
/// router; every call gets its own [`ResolvedMatch`].
///
/// # Examples
///
/// ```
/// use segroute::{CoercedValue, HandlerTable, Router};
///
/// let handlers = HandlerTable::new()
///     .with("HomeController", &["index"])
///     .with("PostController", &["show"]);
///
/// let router = Router::builder()
///     .registry(handlers)
///     .get("/", "HomeController", "index")
///     .get("/post/{int|id}", "PostController", "show")
///     .build()
///     .unwrap();
///
/// let matched = router.resolve("GET", "/post/123").unwrap();
/// assert_eq!(matched.handler().target(), "PostController");
/// assert_eq!(matched.param("id"), Some(&CoercedValue::Int(123)));
///
/// assert!(router.resolve("POST", "/").unwrap_err().is_not_found());
/// ```
pub struct Router {
    trie: RouteTrie,
    routes: Vec<Arc<Route>>,
    registry: SharedRegistry,
    options: RouterOptions,
}

impl Router {
    /// Creates an empty router which validates handlers against `registry`.
    pub fn new<R>(registry: R) -> Router
    where
        R: HandlerRegistry + Send + Sync + 'static,
    {
        Router::with_options(Arc::new(registry), RouterOptions::default())
    }

    pub(crate) fn with_options(registry: SharedRegistry, options: RouterOptions) -> Router {
        Router {
            trie: RouteTrie::new(),
            routes: Vec::new(),
            registry,
            options,
        }
    }

    /// Return a [RouterBuilder](./struct.RouterBuilder.html) instance to build a `Router`.
    pub fn builder() -> RouterBuilder {
        RouterBuilder::new()
    }

    /// Validates and registers a route.
    ///
    /// Fails with [`Error::InvalidRouteDefinition`] for a non-standard method and with
    /// [`Error::HandlerNotFound`] if the router's registry doesn't know the handler.
    pub fn add<P, T, A>(&mut self, method: &str, path: P, target: T, action: A) -> crate::Result<()>
    where
        P: Into<String>,
        T: Into<String>,
        A: Into<String>,
    {
        let route = Route::new(method, path, target, action, self.registry.as_ref())?;
        self.add_route(route);
        Ok(())
    }

    /// Registers an already validated route.
    ///
    /// Registering the same method and path template twice is last-write-wins: the later route
    /// replaces the earlier one in the trie, though both stay listed in [`Router::routes`].
    pub fn add_route(&mut self, route: Route) {
        let route = Arc::new(route);

        if let Some(prev) = self.trie.insert(route.clone(), self.options) {
            tracing::warn!(
                method = %route.method(),
                path = route.path(),
                previous = %prev.handler(),
                handler = %route.handler(),
                "route re-registered, replacing previous handler"
            );
        } else {
            tracing::debug!(
                method = %route.method(),
                path = route.path(),
                handler = %route.handler(),
                "registered route"
            );
        }

        self.routes.push(route);
    }

    /// Resolves `method` and `path` to a registered route, binding and coercing its parameters.
    ///
    /// `path` is the path component of the request target only. Fails with
    /// [`Error::RouteNotFound`] when nothing matches, including for unknown methods.
    pub fn resolve(&self, method: &str, path: &str) -> crate::Result<ResolvedMatch> {
        let segments = helpers::request_segments(path, self.options.strict_slash, self.options.percent_decode);

        match self.trie.lookup(method, &segments) {
            Some((route, params)) => {
                tracing::trace!(method, path, handler = %route.handler(), "route matched");
                Ok(ResolvedMatch::new(route, params))
            }
            None => {
                tracing::trace!(method, path, "no route matched");
                Err(Error::route_not_found(method, path))
            }
        }
    }

    /// Resolves using the method and the URI path of `req`.
    pub fn resolve_request<B>(&self, req: &Request<B>) -> crate::Result<ResolvedMatch> {
        self.resolve(req.method().as_str(), req.uri().path())
    }

    /// Resolves `req` and stores the [`ResolvedMatch`] in its extensions, where it can be read back
    /// with [`RequestExt`](./ext/trait.RequestExt.html).
    pub fn attach<B>(&self, req: &mut Request<B>) -> crate::Result<HandlerRef> {
        let matched = self.resolve_request(req)?;
        let handler = matched.handler().clone();
        req.extensions_mut().insert(matched);
        Ok(handler)
    }

    /// Returns the methods under which `path` resolves, in canonical order.
    ///
    /// An empty result means no method matches the path at all; otherwise a caller can answer
    /// with `405 Method Not Allowed` and this list.
    pub fn allowed_methods(&self, path: &str) -> Vec<Method> {
        let segments = helpers::request_segments(path, self.options.strict_slash, self.options.percent_decode);

        ALL_POSSIBLE_HTTP_METHODS
            .iter()
            .filter(|m| self.trie.has_method(m))
            .filter(|m| self.trie.lookup(m.as_str(), &segments).is_some())
            .cloned()
            .collect()
    }

    /// All registered routes in registration order.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().map(|r| r.as_ref())
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl Debug for Router {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ routes: {:?}, strict_slash: {}, percent_decode: {} }}",
            self.routes, self.options.strict_slash, self.options.percent_decode
        )
    }
}
