//! Directory prompt state machine (pure state transitions).
//!
//! The prompt stands in for a native folder picker: the user types or edits a
//! path, then submits or cancels. Cursor positions are counted in chars so
//! multi-byte paths edit correctly.

use std::path::PathBuf;

/// Directory prompt state.
/// Sum type enforces exactly one state at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DirInputState {
    /// Prompt closed.
    #[default]
    Inactive,
    /// User is editing a path.
    Typing {
        /// Current text.
        input: String,
        /// Cursor position in chars, `0..=input.chars().count()`.
        cursor: usize,
    },
}

impl DirInputState {
    /// Whether the prompt is open.
    pub fn is_active(&self) -> bool {
        matches!(self, DirInputState::Typing { .. })
    }
}

/// Byte index of the `char_idx`-th char (or the end of the string).
fn byte_index(input: &str, char_idx: usize) -> usize {
    input
        .char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(input.len())
}

/// Open the prompt pre-filled with `initial`, cursor at the end.
///
/// No-op if already open.
pub fn activate(state: DirInputState, initial: &str) -> DirInputState {
    match state {
        DirInputState::Inactive => DirInputState::Typing {
            input: initial.to_string(),
            cursor: initial.chars().count(),
        },
        other => other,
    }
}

/// Insert a character at the cursor and advance it.
pub fn handle_char_input(state: DirInputState, ch: char) -> DirInputState {
    match state {
        DirInputState::Typing { mut input, cursor } => {
            let at = byte_index(&input, cursor);
            input.insert(at, ch);
            DirInputState::Typing {
                input,
                cursor: cursor + 1,
            }
        }
        other => other,
    }
}

/// Delete the character before the cursor, if any.
pub fn handle_backspace(state: DirInputState) -> DirInputState {
    match state {
        DirInputState::Typing { mut input, cursor } if cursor > 0 => {
            let at = byte_index(&input, cursor - 1);
            input.remove(at);
            DirInputState::Typing {
                input,
                cursor: cursor - 1,
            }
        }
        other => other,
    }
}

/// Move the cursor left, saturating at 0.
pub fn handle_cursor_left(state: DirInputState) -> DirInputState {
    match state {
        DirInputState::Typing { input, cursor } => DirInputState::Typing {
            input,
            cursor: cursor.saturating_sub(1),
        },
        other => other,
    }
}

/// Move the cursor right, saturating at the end of the input.
pub fn handle_cursor_right(state: DirInputState) -> DirInputState {
    match state {
        DirInputState::Typing { input, cursor } => {
            let max_cursor = input.chars().count();
            DirInputState::Typing {
                input,
                cursor: (cursor + 1).min(max_cursor),
            }
        }
        other => other,
    }
}

/// Close the prompt without choosing a directory.
pub fn cancel(_state: DirInputState) -> DirInputState {
    DirInputState::Inactive
}

/// Close the prompt and return the chosen directory.
///
/// Blank input is treated like a cancel. A leading `~` expands to the home
/// directory when one is known.
pub fn submit(state: DirInputState) -> (DirInputState, Option<PathBuf>) {
    match state {
        DirInputState::Typing { input, .. } => {
            let trimmed = input.trim();
            let chosen = (!trimmed.is_empty()).then(|| expand_home(trimmed));
            (DirInputState::Inactive, chosen)
        }
        DirInputState::Inactive => (DirInputState::Inactive, None),
    }
}

fn expand_home(raw: &str) -> PathBuf {
    let rest = if raw == "~" {
        Some("")
    } else {
        raw.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) if rest.is_empty() => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}
