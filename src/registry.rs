use std::collections::{HashMap, HashSet};

/// Answers whether a handler action exists on a target.
///
/// The router never invokes handlers. It only asks the registry, once per route at construction
/// time, whether the `(target, action)` pair it is about to store refers to something real.
///
/// Any `Fn(&str, &str) -> bool` closure is a registry:
///
/// ```
/// use segroute::{HandlerRegistry, Route};
///
/// let registry = |target: &str, action: &str| target == "HomeController" && action == "index";
///
/// assert!(registry.exists("HomeController", "index"));
/// assert!(Route::new("GET", "/", "HomeController", "index", &registry).is_ok());
/// assert!(Route::new("GET", "/", "HomeController", "show", &registry).is_err());
/// ```
pub trait HandlerRegistry {
    fn exists(&self, target: &str, action: &str) -> bool;
}

impl<F> HandlerRegistry for F
where
    F: Fn(&str, &str) -> bool,
{
    fn exists(&self, target: &str, action: &str) -> bool {
        self(target, action)
    }
}

/// A table of known targets and their actions.
///
/// # Examples
///
/// ```
/// use segroute::{HandlerRegistry, HandlerTable};
///
/// let table = HandlerTable::new()
///     .with("PostController", &["index", "show"])
///     .with("HomeController", &["index"]);
///
/// assert!(table.exists("PostController", "show"));
/// assert!(!table.exists("HomeController", "show"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct HandlerTable {
    targets: HashMap<String, HashSet<String>>,
}

impl HandlerTable {
    pub fn new() -> HandlerTable {
        HandlerTable::default()
    }

    /// Registers `actions` on `target`, keeping any actions already known for it.
    pub fn with<T: Into<String>>(mut self, target: T, actions: &[&str]) -> HandlerTable {
        self.insert(target, actions);
        self
    }

    pub fn insert<T: Into<String>>(&mut self, target: T, actions: &[&str]) {
        self.targets
            .entry(target.into())
            .or_default()
            .extend(actions.iter().map(|a| (*a).to_owned()));
    }
}

impl HandlerRegistry for HandlerTable {
    fn exists(&self, target: &str, action: &str) -> bool {
        self.targets
            .get(target)
            .map(|actions| actions.contains(action))
            .unwrap_or(false)
    }
}
