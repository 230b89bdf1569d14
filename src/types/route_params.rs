use crate::coerce::CoercedValue;
use std::collections::hash_map::Iter;
use std::collections::HashMap;

/// Represents a map of the route parameters using the name of the parameter specified in the path as their respective keys.
///
/// Please refer to the [Route Paths](./index.html#route-paths) section for more info.
///
/// **Note:** This type shouldn't be created directly. It will be returned by
/// [`Router::resolve`](./struct.Router.html#method.resolve) inside a
/// [`ResolvedMatch`](./struct.ResolvedMatch.html).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams(HashMap<String, CoercedValue>);

impl RouteParams {
    /// Creates an empty route parameters map.
    pub fn new() -> RouteParams {
        RouteParams(HashMap::new())
    }

    /// Sets a new parameter entry with the specified key and the value.
    pub fn set<N: Into<String>>(&mut self, param_name: N, param_val: CoercedValue) {
        self.0.insert(param_name.into(), param_val);
    }

    /// Returns the route parameter value mapped with the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use segroute::{CoercedValue, HandlerTable, Router};
    ///
    /// let router = Router::builder()
    ///     .registry(HandlerTable::new().with("BookController", &["show"]))
    ///     .get("/users/{userName}/books/{int|bookId}", "BookController", "show")
    ///     .build()
    ///     .unwrap();
    ///
    /// let matched = router.resolve("GET", "/users/alice/books/42").unwrap();
    /// let params = matched.params();
    ///
    /// assert_eq!(params.get("userName"), Some(&CoercedValue::Str("alice".into())));
    /// assert_eq!(params.get("bookId").and_then(|v| v.as_int()), Some(42));
    /// ```
    pub fn get<N: AsRef<str>>(&self, param_name: N) -> Option<&CoercedValue> {
        self.0.get(param_name.as_ref())
    }

    /// Checks if a route parameter exists.
    pub fn has<N: AsRef<str>>(&self, param_name: N) -> bool {
        self.0.contains_key(param_name.as_ref())
    }

    /// Returns the length of the route parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an [`Iterator`](https://doc.rust-lang.org/std/iter/trait.Iterator.html) over the parameter names.
    pub fn params_names(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Returns an [`Iterator`](https://doc.rust-lang.org/std/iter/trait.Iterator.html) over the parameter entries
    /// as `(parameter_name: &String, parameter_value: &CoercedValue)`.
    pub fn iter(&self) -> Iter<'_, String, CoercedValue> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a RouteParams {
    type Item = (&'a String, &'a CoercedValue);
    type IntoIter = Iter<'a, String, CoercedValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
