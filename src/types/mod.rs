pub use self::resolved_match::ResolvedMatch;
pub use self::route_params::RouteParams;

mod resolved_match;
mod route_params;
