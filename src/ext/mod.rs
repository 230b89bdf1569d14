//! Extension traits for the types of the [`http`](https://docs.rs/http) crate.

pub use self::request::RequestExt;

mod request;
