//! Parser for headless command scripts.
//!
//! One command per line. Motions may carry a `shift+` prefix to extend the
//! selection; `type <text>` inserts each char of `<text>`; `#` starts a
//! comment.

use anyhow::{bail, Context, Result};
use rowpad_core::{Command, Motion};

const SHIFT_PREFIX: &str = "shift+";

/// Parses a whole script into the commands it runs, in order.
///
/// # Errors
///
/// Returns an error naming the first line that is not a known command.
pub fn parse_script(script: &str) -> Result<Vec<Command>> {
    let mut commands = Vec::new();
    for (index, line) in script.lines().enumerate() {
        let parsed = parse_line(line).with_context(|| format!("script line {}", index + 1))?;
        commands.extend(parsed);
    }
    Ok(commands)
}

/// Parses one script line. Blank lines and comments yield no commands.
///
/// # Errors
///
/// Returns an error if the line is not a known command.
pub fn parse_line(line: &str) -> Result<Vec<Command>> {
    let line = line.trim_start();
    if let Some(text) = line.strip_prefix("type ") {
        return Ok(text.chars().map(Command::InsertChar).collect());
    }

    let word = line.split('#').next().unwrap_or_default().trim();
    if word.is_empty() {
        return Ok(Vec::new());
    }
    let word = word.to_ascii_lowercase();

    let (name, extend) = match word.strip_prefix(SHIFT_PREFIX) {
        Some(rest) => (rest, true),
        None => (word.as_str(), false),
    };

    if let Some(motion) = parse_motion(name) {
        return Ok(vec![Command::Move { motion, extend }]);
    }
    if extend {
        bail!("`{SHIFT_PREFIX}` only applies to motions, got `{word}`");
    }

    let command = match name {
        "backspace" => Command::Backspace,
        "delete" => Command::Delete,
        "enter" => Command::Enter,
        "tab" => Command::Tab,
        "undo" => Command::Undo,
        other => bail!("unknown command `{other}`"),
    };
    Ok(vec![command])
}

fn parse_motion(name: &str) -> Option<Motion> {
    let motion = match name {
        "up" => Motion::Up,
        "down" => Motion::Down,
        "left" => Motion::Left,
        "right" => Motion::Right,
        "word-left" => Motion::WordLeft,
        "word-right" => Motion::WordRight,
        "home" => Motion::Home,
        "end" => Motion::End,
        "page-up" => Motion::PageUp,
        "page-down" => Motion::PageDown,
        _ => return None,
    };
    Some(motion)
}
