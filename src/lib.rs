//! `segroute` resolves an incoming `(method, path)` pair to exactly one registered handler, binding and
//! type-coercing the path parameters on the way.
//!
//! Its core features:
//!
//! - Routes are stored in a trie keyed by HTTP method and then by path segment, so literal matches don't
//!   depend on registration order.
//!
//! - Path parameters may carry a type tag (`{int|id}`) and come back as a typed [`CoercedValue`].
//!
//! - Handlers are plain `(target, action)` references checked against a [`HandlerRegistry`] when routes are
//!   registered; the router never calls them.
//!
//! - A built [`Router`] is read-only and can be shared across threads. Each resolution returns its own
//!   [`ResolvedMatch`].
//!
//! ## Basic Example
//!
//! ```
//! use segroute::{CoercedValue, HandlerTable, Router};
//!
//! // Tell the router which handlers exist.
//! let handlers = HandlerTable::new()
//!     .with("HomeController", &["index"])
//!     .with("PostController", &["index", "show"]);
//!
//! let router = Router::builder()
//!     .registry(handlers)
//!     .get("/", "HomeController", "index")
//!     .get("/post", "PostController", "index")
//!     .get("/post/{int|id}", "PostController", "show")
//!     .build()
//!     .unwrap();
//!
//! let matched = router.resolve("GET", "/post/123").unwrap();
//! assert_eq!(matched.handler().target(), "PostController");
//! assert_eq!(matched.handler().action(), "show");
//! assert_eq!(matched.param("id"), Some(&CoercedValue::Int(123)));
//! ```
//!
//! ## Routing
//!
//! ### Route Paths
//!
//! A route path is split on `/`. Each segment is either a literal, matched by exact string equality, or a
//! parameter written `{name}` or `{type|name}`.
//!
//! ```txt
//! Route path: /users/{userName}/books/{int|bookId}
//! Request path: /users/alice/books/42
//! params: { "userName": Str("alice"), "bookId": Int(42) }
//! ```
//!
//! The recognised type tags are listed in the [`coerce`](./fn.coerce.html) docs. An unknown tag is not an
//! error, the raw string is passed through.
//!
//! ### Matching Rules
//!
//! - A literal segment always wins over a parameter at the same position, whichever was registered first.
//! - If several parameter templates share a position (say `{int|id}` and `{slug}`), the first one
//!   registered binds the segment.
//! - There is no backtracking. Once a segment has picked a branch, a dead end further down means no match,
//!   even if a sibling branch would have matched.
//! - Registering the same method and path twice replaces the earlier handler.
//! - A single trailing slash is ignored unless [`RouterBuilder::strict_slash`] is set, and request
//!   segments are percent-decoded unless [`RouterBuilder::percent_decode`] is turned off.
//!
//! ```
//! use segroute::Router;
//!
//! let router = Router::builder()
//!     .registry(|_: &str, _: &str| true)
//!     .get("/users/{id}", "UserController", "show")
//!     .get("/users/active", "UserController", "active")
//!     .build()
//!     .unwrap();
//!
//! let matched = router.resolve("GET", "/users/active").unwrap();
//! assert_eq!(matched.handler().action(), "active");
//! assert!(matched.params().is_empty());
//! ```
//!
//! ### Handle 404 Pages
//!
//! An unmatched request yields [`Error::RouteNotFound`]. It is cheap to produce, so it can be mapped
//! straight to a 404 response. [`Router::allowed_methods`] tells a 404 apart from a 405.
//!
//! ```
//! use http::Method;
//! use segroute::Router;
//!
//! let router = Router::builder()
//!     .registry(|_: &str, _: &str| true)
//!     .get("/about", "PageController", "about")
//!     .build()
//!     .unwrap();
//!
//! let err = router.resolve("POST", "/about").unwrap_err();
//! assert!(err.is_not_found());
//! assert_eq!(router.allowed_methods("/about"), vec![Method::GET]);
//! ```
//!
//! ## Working with `http::Request`
//!
//! [`Router::attach`] resolves a request by its method and URI path and stores the match in the request
//! extensions. The [`prelude`] brings [`RequestExt`](./ext/trait.RequestExt.html) into scope to read it back.
//!
//! ```
//! use http::Request;
//! use segroute::prelude::*;
//! use segroute::Router;
//!
//! let router = Router::builder()
//!     .registry(|_: &str, _: &str| true)
//!     .get("/post/{int|id}", "PostController", "show")
//!     .build()
//!     .unwrap();
//!
//! let mut req = Request::get("/post/9").body(()).unwrap();
//! let handler = router.attach(&mut req).unwrap();
//!
//! assert_eq!(handler.action(), "show");
//! assert_eq!(req.param("id").and_then(|v| v.as_int()), Some(9));
//! ```
//!
//! ## Error Handling
//!
//! Registration fails with [`Error::InvalidRouteDefinition`] for a method outside `GET`, `POST`, `PUT`,
//! `PATCH`, `OPTIONS`, `HEAD`, `DELETE`, `CONNECT`, `TRACE` (matched case-sensitively), and with
//! [`Error::HandlerNotFound`] if the registry doesn't know the handler. [`RouterBuilder::build`] returns
//! the first such error.
//!
//! ## Logging
//!
//! Registration and resolution emit [`tracing`](https://docs.rs/tracing) events (`debug` per registered
//! route, `warn` when a route is replaced, `trace` per resolution). Installing a subscriber is up to the
//! application.

pub use self::coerce::{coerce, CoercedValue, TypeTag};
pub use self::error::{Error, ErrorKind};
pub use self::registry::{HandlerRegistry, HandlerTable};
pub use self::route::{HandlerRef, Route};
pub use self::router::{Router, RouterBuilder};
pub use self::segment::{ParamSegment, PathSegment};
pub use self::types::{ResolvedMatch, RouteParams};

mod coerce;
mod constants;
mod error;
pub mod ext;
mod helpers;
pub mod prelude;
mod registry;
mod route;
mod router;
mod segment;
mod trie;
mod types;

/// A Result type often returned from methods that can have segroute errors.
pub type Result<T> = std::result::Result<T, Error>;
