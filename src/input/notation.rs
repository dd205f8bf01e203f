//! Vim-style key notation (`5dd`, `<Esc>`, `<C-o>`) to raw key events

use super::event::RawKeyEvent;
use crate::error::ModalKeysError;

/// Parse a key sequence such as `3j<C-o>dd<Esc>` into events.
///
/// Plain characters stand for themselves. Bracketed tokens name special keys
/// and may carry `C-`, `A-`, `M-`/`D-` and `S-` modifier prefixes.
/// `<lt>` is a literal `<`.
pub fn parse_key_notation(input: &str) -> Result<Vec<RawKeyEvent>, ModalKeysError> {
    let mut events = Vec::new();
    let mut rest = input.char_indices();

    while let Some((position, ch)) = rest.next() {
        if ch != '<' {
            events.push(RawKeyEvent::char(ch));
            continue;
        }

        let token_start = position + 1;
        let Some(len) = input[token_start..].find('>') else {
            return Err(invalid(position, "unterminated '<'"));
        };
        let token = &input[token_start..token_start + len];
        events.push(parse_token(token, position)?);

        // skip past the closing '>'
        for _ in 0..token.chars().count() + 1 {
            rest.next();
        }
    }

    Ok(events)
}

fn parse_token(token: &str, position: usize) -> Result<RawKeyEvent, ModalKeysError> {
    let mut name = token;
    let (mut ctrl, mut alt, mut meta, mut shift) = (false, false, false, false);

    while name.len() > 2 && name.as_bytes()[1] == b'-' {
        match name.as_bytes()[0].to_ascii_uppercase() {
            b'C' => ctrl = true,
            b'A' => alt = true,
            b'M' | b'D' => meta = true,
            b'S' => shift = true,
            _ => break,
        }
        name = &name[2..];
    }

    let key = key_for_name(name)
        .ok_or_else(|| invalid(position, &format!("unknown key name '{}'", token)))?;

    let mut event = RawKeyEvent::new(key);
    event.ctrl = ctrl;
    event.alt = alt;
    event.meta = meta;
    event.shift |= shift;
    Ok(event)
}

fn key_for_name(name: &str) -> Option<String> {
    let mut chars = name.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Some(ch.to_string());
    }

    let key = match name.to_ascii_lowercase().as_str() {
        "esc" | "escape" => "Escape",
        "cr" | "enter" | "return" => "Enter",
        "bs" | "backspace" => "Backspace",
        "del" | "delete" => "Delete",
        "tab" => "Tab",
        "space" => " ",
        "lt" => "<",
        "left" => "ArrowLeft",
        "right" => "ArrowRight",
        "up" => "ArrowUp",
        "down" => "ArrowDown",
        "home" => "Home",
        "end" => "End",
        _ => return None,
    };
    Some(key.to_string())
}

fn invalid(position: usize, reason: &str) -> ModalKeysError {
    ModalKeysError::InvalidKeyNotation {
        position,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
