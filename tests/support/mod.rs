#![allow(dead_code)]

use segroute::{HandlerTable, Router, RouterBuilder};

/// Handlers known to every test router.
pub fn handlers() -> HandlerTable {
    HandlerTable::new()
        .with("HomeController", &["index"])
        .with("AboutController", &["index"])
        .with("PostController", &["index", "show", "store", "update", "by_slug"])
        .with("UserController", &["show", "active", "posts"])
}

/// A builder with the shared handler table already set.
pub fn builder() -> RouterBuilder {
    Router::builder().registry(handlers())
}

/// Resolves and returns `target::action`, or `None` on a miss.
pub fn resolved_handler(router: &Router, method: &str, path: &str) -> Option<String> {
    router.resolve(method, path).ok().map(|m| m.handler().to_string())
}
