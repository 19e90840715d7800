//! Terminal output utilities.

use crate::bot::Reply;
use colored::Colorize;

/// Format a reply for the terminal, errors in red.
pub fn render_reply(reply: &Reply) -> String {
    match reply {
        Reply::Text(text) => text.clone(),
        Reply::Error(text) => text.red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_reply_text() {
        let reply = Reply::Text("pong".to_string());
        assert_eq!(render_reply(&reply), "pong");
    }

    #[test]
    fn test_render_reply_error_keeps_message() {
        let reply = Reply::Error("ERROR: bad".to_string());
        assert!(render_reply(&reply).contains("ERROR: bad"));
    }
}
