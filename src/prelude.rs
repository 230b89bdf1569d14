//! The prelude of this crate.
//!
//! ```
//! use segroute::prelude::*;
//! ```

pub use crate::ext::RequestExt;
