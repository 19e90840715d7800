//! Console output for bot replies.

mod terminal;

pub use terminal::render_reply;
