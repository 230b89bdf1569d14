use http::Method;

/// Every method a route may be registered under, in canonical order.
pub(crate) static ALL_POSSIBLE_HTTP_METHODS: [Method; 9] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::OPTIONS,
    Method::HEAD,
    Method::DELETE,
    Method::CONNECT,
    Method::TRACE,
];

pub(crate) const PARAM_TYPE_SEPARATOR: char = '|';
