use crate::helpers;
use crate::route::Route;
use crate::router::RouterOptions;
use crate::segment::{ParamSegment, PathSegment};
use crate::types::RouteParams;
use http::Method;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

/// A method-keyed segment trie.
///
/// The root has one subtree per method. Every node keeps its literal children in a map and its
/// parameter children in a list ordered by first registration, so the first-registered parameter
/// template at a node is the one that binds.
#[derive(Debug, Default)]
pub(crate) struct RouteTrie {
    roots: HashMap<Method, Node>,
}

#[derive(Debug, Default)]
struct Node {
    literals: HashMap<String, Node>,
    params: Vec<ParamChild>,
    route: Option<Arc<Route>>,
}

#[derive(Debug)]
struct ParamChild {
    segment: ParamSegment,
    node: Node,
}

impl Node {
    fn literal_child_mut(&mut self, key: Cow<'_, str>) -> &mut Node {
        self.literals.entry(key.into_owned()).or_default()
    }

    // A raw `{...}` seen before keeps the position of its first registration.
    fn param_child_mut(&mut self, param: &ParamSegment) -> &mut Node {
        let idx = match self.params.iter().position(|c| c.segment.raw() == param.raw()) {
            Some(idx) => idx,
            None => {
                self.params.push(ParamChild {
                    segment: param.clone(),
                    node: Node::default(),
                });
                self.params.len() - 1
            }
        };
        &mut self.params[idx].node
    }
}

impl RouteTrie {
    pub(crate) fn new() -> RouteTrie {
        RouteTrie::default()
    }

    /// Attaches `route` at the node its segments lead to, returning the route it displaced.
    ///
    /// Template literals are normalised the way request segments are: a trailing empty segment is
    /// dropped unless `strict_slash` is set, and literals are percent-decoded when `percent_decode` is.
    pub(crate) fn insert(&mut self, route: Arc<Route>, options: RouterOptions) -> Option<Arc<Route>> {
        let mut segments = route.segments();
        if !options.strict_slash {
            if let Some((PathSegment::Literal(last), rest)) = segments.split_last() {
                if last.is_empty() {
                    segments = rest;
                }
            }
        }

        let mut node = self.roots.entry(route.method().clone()).or_default();
        for segment in segments {
            node = match segment {
                PathSegment::Literal(lit) if options.percent_decode => {
                    node.literal_child_mut(helpers::decode_segment(lit))
                }
                PathSegment::Literal(lit) => node.literal_child_mut(Cow::Borrowed(lit.as_str())),
                PathSegment::Param(param) => node.param_child_mut(param),
            };
        }

        node.route.replace(route)
    }

    /// Walks the subtree for `method` along `segments`.
    ///
    /// At each level an exact literal child wins; otherwise the first-registered parameter child
    /// binds the segment. There is no backtracking: once a child is chosen, a dead end further down
    /// is a miss even if a sibling branch would have matched.
    pub(crate) fn lookup<S: AsRef<str>>(&self, method: &str, segments: &[S]) -> Option<(Arc<Route>, RouteParams)> {
        let method = Method::from_bytes(method.as_bytes()).ok()?;
        let mut node = self.roots.get(&method)?;
        let mut params = RouteParams::new();

        for segment in segments {
            let segment = segment.as_ref();
            node = match node.literals.get(segment) {
                Some(child) => child,
                None => {
                    let child = node.params.first()?;
                    params.set(child.segment.name(), child.segment.coerce(segment));
                    &child.node
                }
            };
        }

        node.route.clone().map(|route| (route, params))
    }

    /// Returns `true` if any route is registered under `method`.
    pub(crate) fn has_method(&self, method: &Method) -> bool {
        self.roots.contains_key(method)
    }
}
