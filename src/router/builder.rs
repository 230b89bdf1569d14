use crate::registry::{HandlerRegistry, HandlerTable};
use crate::route::Route;
use crate::router::{Router, RouterOptions, SharedRegistry};
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

enum Entry {
    Definition {
        method: String,
        path: String,
        target: String,
        action: String,
    },
    Built(Route),
}

/// Builder for the [Router](./struct.Router.html) type.
///
/// Routes given as `(method, path, target, action)` are validated on [`build`](#method.build)
/// against the registry set with [`registry`](#method.registry), so the registry may be supplied
/// at any point in the chain. Without one, no handler is known and every such route fails.
///
/// # Examples
///
/// ```
/// use segroute::{HandlerTable, Router};
///
/// let router = Router::builder()
///     .get("/", "HomeController", "index")
///     .post("/post", "PostController", "store")
///     .registry(
///         HandlerTable::new()
///             .with("HomeController", &["index"])
///             .with("PostController", &["store"]),
///     )
///     .strict_slash(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(router.len(), 2);
/// ```
pub struct RouterBuilder {
    entries: Vec<Entry>,
    registry: Option<SharedRegistry>,
    options: RouterOptions,
}

impl RouterBuilder {
    /// Creates a new RouterBuilder instance with default options.
    pub fn new() -> RouterBuilder {
        RouterBuilder {
            entries: Vec::new(),
            registry: None,
            options: RouterOptions::default(),
        }
    }

    /// Creates a new [Router](./struct.Router.html) instance from the added configuration.
    ///
    /// Routes are registered in the order they were added; the first invalid one aborts the build.
    pub fn build(self) -> crate::Result<Router> {
        let registry = self
            .registry
            .unwrap_or_else(|| Arc::new(HandlerTable::new()) as SharedRegistry);
        let mut router = Router::with_options(registry, self.options);

        for entry in self.entries {
            match entry {
                Entry::Definition {
                    method,
                    path,
                    target,
                    action,
                } => router.add(method.as_str(), path, target, action)?,
                Entry::Built(route) => router.add_route(route),
            }
        }

        Ok(router)
    }

    /// Sets the registry used to check that handlers exist.
    pub fn registry<R>(mut self, registry: R) -> Self
    where
        R: HandlerRegistry + Send + Sync + 'static,
    {
        self.registry = Some(Arc::new(registry));
        self
    }

    /// When `true`, a trailing slash is significant: `/about/` and `/about` are different paths.
    /// Defaults to `false`.
    pub fn strict_slash(mut self, strict: bool) -> Self {
        self.options.strict_slash = strict;
        self
    }

    /// When `true` (the default), request path segments are percent-decoded before matching.
    pub fn percent_decode(mut self, decode: bool) -> Self {
        self.options.percent_decode = decode;
        self
    }

    /// Adds a new route with `GET` method and the handler at the specified path.
    pub fn get<P: Into<String>, T: Into<String>, A: Into<String>>(self, path: P, target: T, action: A) -> Self {
        self.add("GET", path, target, action)
    }

    /// Adds a new route with `POST` method and the handler at the specified path.
    pub fn post<P: Into<String>, T: Into<String>, A: Into<String>>(self, path: P, target: T, action: A) -> Self {
        self.add("POST", path, target, action)
    }

    /// Adds a new route with `PUT` method and the handler at the specified path.
    pub fn put<P: Into<String>, T: Into<String>, A: Into<String>>(self, path: P, target: T, action: A) -> Self {
        self.add("PUT", path, target, action)
    }

    /// Adds a new route with `PATCH` method and the handler at the specified path.
    pub fn patch<P: Into<String>, T: Into<String>, A: Into<String>>(self, path: P, target: T, action: A) -> Self {
        self.add("PATCH", path, target, action)
    }

    /// Adds a new route with `DELETE` method and the handler at the specified path.
    pub fn delete<P: Into<String>, T: Into<String>, A: Into<String>>(self, path: P, target: T, action: A) -> Self {
        self.add("DELETE", path, target, action)
    }

    /// Adds a new route with `HEAD` method and the handler at the specified path.
    pub fn head<P: Into<String>, T: Into<String>, A: Into<String>>(self, path: P, target: T, action: A) -> Self {
        self.add("HEAD", path, target, action)
    }

    /// Adds a new route with `OPTIONS` method and the handler at the specified path.
    pub fn options<P: Into<String>, T: Into<String>, A: Into<String>>(self, path: P, target: T, action: A) -> Self {
        self.add("OPTIONS", path, target, action)
    }

    /// Adds a new route with `CONNECT` method and the handler at the specified path.
    pub fn connect<P: Into<String>, T: Into<String>, A: Into<String>>(self, path: P, target: T, action: A) -> Self {
        self.add("CONNECT", path, target, action)
    }

    /// Adds a new route with `TRACE` method and the handler at the specified path.
    pub fn trace<P: Into<String>, T: Into<String>, A: Into<String>>(self, path: P, target: T, action: A) -> Self {
        self.add("TRACE", path, target, action)
    }

    /// Adds a new route with the specified method and handler at the specified path.
    ///
    /// The method must be one of the nine standard verbs, written in upper case.
    pub fn add<P: Into<String>, T: Into<String>, A: Into<String>>(
        mut self,
        method: &str,
        path: P,
        target: T,
        action: A,
    ) -> Self {
        self.entries.push(Entry::Definition {
            method: method.to_owned(),
            path: path.into(),
            target: target.into(),
            action: action.into(),
        });
        self
    }

    /// Adds a route that was already constructed with [`Route::new`](./struct.Route.html#method.new).
    pub fn route(mut self, route: Route) -> Self {
        self.entries.push(Entry::Built(route));
        self
    }
}

impl Default for RouterBuilder {
    fn default() -> RouterBuilder {
        RouterBuilder::new()
    }
}

impl Debug for RouterBuilder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ entries: {}, has_registry: {}, options: {:?} }}",
            self.entries.len(),
            self.registry.is_some(),
            self.options
        )
    }
}
