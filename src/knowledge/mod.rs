//! Local knowledge base of pre-generated question/answer pairs.
//!
//! Entries are generated procedurally from six families of templates
//! (learning advice, efficiency tips, mood encouragement, health reminders,
//! trivia and programming tips), each producing a numbered run of entries.

mod base;
mod family;

pub use base::*;
pub use family::*;
