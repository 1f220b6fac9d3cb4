//! Keyboard event mapping and input event types.

use anyhow::{anyhow, Result};
use termion::event::{Event, Key};

/// High-level input events abstracted from raw keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Step back through scroll history
    CycleBackward,
    /// Step forward through scroll history
    CycleForward,
    /// Scroll one line up
    ScrollUp,
    /// Scroll one line down
    ScrollDown,
    /// Scroll one column left
    ScrollLeft,
    /// Scroll one column right
    ScrollRight,
    /// Scroll a page up (b, PageUp)
    PageUp,
    /// Scroll a page down (space, PageDown)
    PageDown,
    /// Jump to the top of the document (g, Home)
    Top,
    /// Jump to the bottom of the document (G, End)
    Bottom,
    /// Show or hide the history bar
    ToggleBar,
    /// Clear the message area
    ClearMessage,
    /// Quit the pager
    Quit,
    /// Unknown or unmapped key
    Unknown,
}

/// The keys bound to history navigation.
///
/// Defaults to the left and right arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMap {
    pub backward: Key,
    pub forward: Key,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            backward: Key::Left,
            forward: Key::Right,
        }
    }
}

impl KeyMap {
    /// Builds a key map from key names as written in the config file.
    ///
    /// # Errors
    ///
    /// Returns an error if either name is not a recognized key, or if both
    /// names refer to the same key.
    pub fn from_names(backward: &str, forward: &str) -> Result<Self> {
        let backward_key =
            parse_key(backward).ok_or_else(|| anyhow!("Unknown backward key '{}'", backward))?;
        let forward_key =
            parse_key(forward).ok_or_else(|| anyhow!("Unknown forward key '{}'", forward))?;

        if backward_key == forward_key {
            return Err(anyhow!(
                "Backward and forward keys must differ (both are '{}')",
                backward
            ));
        }

        Ok(Self {
            backward: backward_key,
            forward: forward_key,
        })
    }
}

/// Parses a key name such as `"left"`, `"ctrl-o"`, `"f5"` or `"["`.
///
/// Names are case-insensitive except for single characters.
///
/// # Example
///
/// ```
/// use scrollquill::input::keys::parse_key;
/// use termion::event::Key;
///
/// assert_eq!(parse_key("Left"), Some(Key::Left));
/// assert_eq!(parse_key("ctrl-o"), Some(Key::Ctrl('o')));
/// assert_eq!(parse_key("B"), Some(Key::Char('B')));
/// assert_eq!(parse_key("hyper-x"), None);
/// ```
pub fn parse_key(name: &str) -> Option<Key> {
    let name = name.trim();
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(Key::Char(c));
    }

    let lower = name.to_ascii_lowercase();
    let key = match lower.as_str() {
        "left" => Key::Left,
        "right" => Key::Right,
        "up" => Key::Up,
        "down" => Key::Down,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" => Key::PageUp,
        "pagedown" => Key::PageDown,
        "backspace" => Key::Backspace,
        "delete" => Key::Delete,
        "insert" => Key::Insert,
        "backtab" => Key::BackTab,
        "esc" | "escape" => Key::Esc,
        "tab" => Key::Char('\t'),
        "enter" | "return" => Key::Char('\n'),
        "space" => Key::Char(' '),
        _ => {
            if let Some(rest) = lower.strip_prefix("ctrl-") {
                return single_char(rest).map(Key::Ctrl);
            }
            if let Some(rest) = name.get(4..).filter(|_| lower.starts_with("alt-")) {
                return single_char(rest).map(Key::Alt);
            }
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(Key::F(n));
            }
            return None;
        }
    };
    Some(key)
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Returns a display name for a key, the inverse of [`parse_key`].
pub fn key_name(key: &Key) -> String {
    match key {
        Key::Left => "left".to_string(),
        Key::Right => "right".to_string(),
        Key::Up => "up".to_string(),
        Key::Down => "down".to_string(),
        Key::Home => "home".to_string(),
        Key::End => "end".to_string(),
        Key::PageUp => "pageup".to_string(),
        Key::PageDown => "pagedown".to_string(),
        Key::Backspace => "backspace".to_string(),
        Key::Delete => "delete".to_string(),
        Key::Insert => "insert".to_string(),
        Key::BackTab => "backtab".to_string(),
        Key::Esc => "esc".to_string(),
        Key::Char('\t') => "tab".to_string(),
        Key::Char('\n') => "enter".to_string(),
        Key::Char(' ') => "space".to_string(),
        Key::Char(c) => c.to_string(),
        Key::Ctrl(c) => format!("ctrl-{}", c),
        Key::Alt(c) => format!("alt-{}", c),
        Key::F(n) => format!("f{}", n),
        _ => "?".to_string(),
    }
}

/// Maps a termion Event to an InputEvent.
///
/// The history keys from `keymap` take precedence over the built-in
/// scrolling keys, so binding history to `h` or `l` shadows horizontal
/// scrolling on that key only.
///
/// # Example
///
/// ```
/// use termion::event::{Event, Key};
/// use scrollquill::input::keys::{map_key_event, InputEvent, KeyMap};
///
/// let keymap = KeyMap::default();
/// assert_eq!(map_key_event(Event::Key(Key::Left), &keymap), InputEvent::CycleBackward);
/// assert_eq!(map_key_event(Event::Key(Key::Char('j')), &keymap), InputEvent::ScrollDown);
/// ```
pub fn map_key_event(event: Event, keymap: &KeyMap) -> InputEvent {
    let key = match event {
        Event::Key(k) => k,
        _ => return InputEvent::Unknown,
    };

    if key == keymap.backward {
        return InputEvent::CycleBackward;
    }
    if key == keymap.forward {
        return InputEvent::CycleForward;
    }

    match key {
        Key::Char('q') | Key::Ctrl('c') => InputEvent::Quit,
        Key::Char('k') | Key::Up => InputEvent::ScrollUp,
        Key::Char('j') | Key::Down | Key::Char('\n') => InputEvent::ScrollDown,
        Key::Char('h') | Key::Left => InputEvent::ScrollLeft,
        Key::Char('l') | Key::Right => InputEvent::ScrollRight,
        Key::Char('b') | Key::PageUp | Key::Ctrl('b') => InputEvent::PageUp,
        Key::Char(' ') | Key::PageDown | Key::Ctrl('f') => InputEvent::PageDown,
        Key::Char('g') | Key::Home => InputEvent::Top,
        Key::Char('G') | Key::End => InputEvent::Bottom,
        Key::Char('t') => InputEvent::ToggleBar,
        Key::Char('c') | Key::Esc => InputEvent::ClearMessage,
        _ => InputEvent::Unknown,
    }
}
