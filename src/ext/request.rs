use crate::coerce::CoercedValue;
use crate::types::{ResolvedMatch, RouteParams};
use http::Request;
use lazy_static::lazy_static;

/// An extension trait which extends the [`http::Request`](https://docs.rs/http/latest/http/request/struct.Request.html) type with some helpful methods.
///
/// The values are only present after the request went through
/// [`Router::attach`](../struct.Router.html#method.attach).
pub trait RequestExt {
    /// The match stored on this request, if any.
    fn resolved(&self) -> Option<&ResolvedMatch>;

    /// It returns the route parameters as [RouteParams](../struct.RouteParams.html) type with the name of the parameter specified in the path as their respective keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use http::Request;
    /// use segroute::prelude::*;
    /// use segroute::{CoercedValue, Router};
    ///
    /// let router = Router::builder()
    ///     .registry(|_: &str, _: &str| true)
    ///     .get("/users/{userName}/books/{bookName}", "BookController", "show")
    ///     .build()
    ///     .unwrap();
    ///
    /// let mut req = Request::get("/users/alice/books/HarryPotter").body(()).unwrap();
    /// router.attach(&mut req).unwrap();
    ///
    /// let params = req.params();
    /// assert_eq!(params.get("userName"), Some(&CoercedValue::Str("alice".into())));
    /// assert_eq!(params.get("bookName"), Some(&CoercedValue::Str("HarryPotter".into())));
    /// ```
    fn params(&self) -> &RouteParams;

    /// It returns the route parameter value by the name of the parameter specified in the path.
    fn param<P: AsRef<str>>(&self, param_name: P) -> Option<&CoercedValue>;
}

lazy_static! {
    static ref EMPTY_PARAMS: RouteParams = RouteParams::new();
}

impl<B> RequestExt for Request<B> {
    fn resolved(&self) -> Option<&ResolvedMatch> {
        self.extensions().get::<ResolvedMatch>()
    }

    fn params(&self) -> &RouteParams {
        self.resolved().map(|m| m.params()).unwrap_or(&EMPTY_PARAMS)
    }

    fn param<P: AsRef<str>>(&self, param_name: P) -> Option<&CoercedValue> {
        self.params().get(param_name)
    }
}
