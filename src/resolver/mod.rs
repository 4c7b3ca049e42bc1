//! Local response resolver.
//!
//! Maps free-text chat input to exactly one canned reply by evaluating an
//! ordered rule list, first match wins.

mod clock;
mod engine;
mod replies;
mod rules;

pub use clock::*;
pub use engine::*;
pub use replies::*;
pub use rules::*;
