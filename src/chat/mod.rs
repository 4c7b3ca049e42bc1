//! Chat orchestration: transcript, mode selection and reply dispatch.

mod message;
mod session;

pub use message::*;
pub use session::*;
