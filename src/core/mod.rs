//! Core application primitives (poll loop, liveness server, alert text)

pub mod http;
pub mod message;
pub mod runtime;

pub use http::*;
pub use message::*;
pub use runtime::*;
