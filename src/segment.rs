use crate::coerce::{coerce, CoercedValue};
use crate::constants::PARAM_TYPE_SEPARATOR;
use crate::Error;
use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

/// One `/`-delimited component of a route path template.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    /// Matched by exact string equality.
    Literal(String),
    /// Binds the request segment at this position to a named, optionally typed, parameter.
    Param(ParamSegment),
}

/// A parameter segment: `{name}` or `{type|name}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamSegment {
    raw: String,
    name: String,
    type_tag: Option<String>,
}

impl ParamSegment {
    /// The segment exactly as written in the template, braces included.
    pub fn raw(&self) -> &str {
        self.raw.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The type tag as written, if any. It may not be a recognised tag.
    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }

    pub(crate) fn coerce(&self, raw: &str) -> CoercedValue {
        coerce(self.type_tag(), raw)
    }
}

impl PathSegment {
    /// Parses a single template segment.
    pub fn parse(segment: &str) -> crate::Result<PathSegment> {
        let inner = match segment.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
            Some(inner) => inner,
            None => return Ok(PathSegment::Literal(segment.to_owned())),
        };

        let mut parts = inner.split(PARAM_TYPE_SEPARATOR);
        let (type_tag, name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(tag), Some(name), None) => (Some(tag.to_owned()), name),
            _ => (None, inner),
        };

        if name.is_empty() {
            return Err(Error::invalid_route(format!(
                "Parameter segment '{}' has no name",
                segment
            )));
        }

        Ok(PathSegment::Param(ParamSegment {
            raw: segment.to_owned(),
            name: name.to_owned(),
            type_tag,
        }))
    }

    /// The key this segment occupies in the trie: the literal text, or the raw `{...}` text.
    pub fn key(&self) -> &str {
        match self {
            PathSegment::Literal(s) => s.as_str(),
            PathSegment::Param(p) => p.raw(),
        }
    }

    pub fn is_param(&self) -> bool {
        matches!(self, PathSegment::Param(_))
    }
}

impl Display for PathSegment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Splits a path into its segments.
///
/// A single leading `/` is discarded, so `/` is one empty segment. Unless `strict_slash` is set, a
/// single trailing empty segment is dropped as well: `/` yields nothing and `//` yields one empty
/// segment. Route templates and request paths both go through this.
pub(crate) fn split_path(path: &str, strict_slash: bool) -> Vec<&str> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let mut segments: Vec<&str> = path.split('/').collect();

    if !strict_slash && segments.last() == Some(&"") {
        segments.pop();
    }

    segments
}

/// Parses a whole route path template into segments.
///
/// A parameter name may only appear once per template.
pub(crate) fn parse_template(path: &str, strict_slash: bool) -> crate::Result<Vec<PathSegment>> {
    let segments = split_path(path, strict_slash)
        .into_iter()
        .map(PathSegment::parse)
        .collect::<crate::Result<Vec<_>>>()?;

    let mut seen = HashSet::new();
    for segment in &segments {
        if let PathSegment::Param(p) = segment {
            if !seen.insert(p.name()) {
                return Err(Error::invalid_route(format!(
                    "Parameter '{}' appears more than once in '{}'",
                    p.name(),
                    path
                )));
            }
        }
    }

    Ok(segments)
}
