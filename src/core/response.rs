//! Outbound message formatting and Discord length handling
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0
//!
//! ## Changelog
//! - 1.0.0: Mention prefixing and line-aware splitting for long task lists

/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Prefix a message body with a user mention, the way every bot message is addressed
pub fn addressed(mention: &str, body: &str) -> String {
    format!("{mention} {body}")
}

/// Render tasks as a dash list, one per line
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split a body into mention-prefixed messages that each fit Discord's limit
///
/// Every piece carries the mention. Splits prefer newline boundaries, so a
/// long task list breaks between tasks; a single line longer than the room
/// left after the mention is split on UTF-8 character boundaries.
pub fn split_addressed(mention: &str, body: &str) -> Vec<String> {
    let room = MESSAGE_LIMIT.saturating_sub(mention.len() + 1).max(1);
    split_text(body, room)
        .iter()
        .map(|piece| addressed(mention, piece))
        .collect()
}

pub(crate) fn split_text(text: &str, max_size: usize) -> Vec<String> {
    if text.len() <= max_size {
        return vec![text.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        // +1 for the newline joining it to the next line
        if !current.is_empty() && current.len() + line.len() + 1 > max_size {
            pieces.push(std::mem::take(&mut current));
        }

        if line.len() > max_size {
            pieces.extend(split_long_line(line, max_size));
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

fn split_long_line(line: &str, max_size: usize) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();

    for ch in line.chars() {
        if current.len() + ch.len_utf8() > max_size && !current.is_empty() {
            result.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }

    if !current.is_empty() {
        result.push(current);
    }
    result
}
