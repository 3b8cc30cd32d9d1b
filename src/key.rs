//! Type-safe key bindings for components.
//!
//! A [`Binding`] couples one or more key presses with the help text shown for
//! them. Components build their key maps from bindings using the option-style
//! constructors ([`new_binding`], [`with_keys_str`], [`with_help`]) and match
//! incoming [`KeyMsg`] values against them with [`matches_binding`].
//!
//! # Examples
//!
//! ```rust
//! use multtable::key::{matches_binding, new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let submit = new_binding(vec![
//!     with_keys_str(&["enter"]),
//!     with_help("enter", "generate table"),
//! ]);
//!
//! let msg = KeyMsg {
//!     key: KeyCode::Enter,
//!     modifiers: KeyModifiers::NONE,
//! };
//! assert!(matches_binding(&msg, &submit));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code of the press.
    pub code: KeyCode,
    /// The modifier keys held during the press.
    pub mods: KeyModifiers,
}

impl KeyPress {
    fn matches(&self, msg: &KeyMsg) -> bool {
        self.code == msg.key && self.mods == msg.modifiers
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the key(s), e.g. `"tab"` or `"↑/↓"`.
    pub key: String,
    /// Description of the action, e.g. `"next field"`.
    pub desc: String,
}

/// A key binding: the key presses that trigger it, its help text, and
/// whether it is currently enabled.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Returns the key presses this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Reports whether the binding is enabled. Disabled bindings never match
    /// and are omitted from help views.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// A configuration option for [`new_binding`].
pub enum BindingOpt {
    /// Sets the key presses the binding responds to.
    Keys(Vec<KeyPress>),
    /// Sets the help text.
    WithHelp(Help),
    /// Marks the binding disabled.
    Disabled,
}

/// Creates a new [`Binding`] from a list of options.
///
/// Mirrors the functional-options construction used throughout the
/// bubbles family of components.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        match opt {
            BindingOpt::Keys(keys) => binding.keys = keys,
            BindingOpt::WithHelp(help) => binding.help = help,
            BindingOpt::Disabled => binding.disabled = true,
        }
    }
    binding
}

/// Creates a keys option from human-readable key names.
///
/// Recognized names include single characters, `"enter"`, `"esc"`, `"tab"`,
/// `"backspace"`, `"delete"`, `"home"`, `"end"`, the arrow keys, and any of
/// those prefixed with `ctrl+`, `alt+`, or `shift+` (so `"shift+tab"` maps to
/// the back-tab key). Unrecognized names are ignored.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    BindingOpt::Keys(keys.iter().filter_map(|s| parse_keypress(s)).collect())
}

/// Creates a help option with the given key label and description.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    BindingOpt::WithHelp(Help {
        key: key.to_string(),
        desc: desc.to_string(),
    })
}

/// Creates an option that marks the binding disabled.
pub fn with_disabled() -> BindingOpt {
    BindingOpt::Disabled
}

fn parse_keypress(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut name = s;

    loop {
        if let Some(rest) = name.strip_prefix("ctrl+") {
            mods |= KeyModifiers::CONTROL;
            name = rest;
        } else if let Some(rest) = name.strip_prefix("alt+") {
            mods |= KeyModifiers::ALT;
            name = rest;
        } else if let Some(rest) = name.strip_prefix("shift+") {
            mods |= KeyModifiers::SHIFT;
            name = rest;
        } else {
            break;
        }
    }

    let code = match name {
        "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        // Terminals report shift+tab as a distinct back-tab key.
        "tab" if mods.contains(KeyModifiers::SHIFT) => KeyCode::BackTab,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        _ => {
            let mut chars = name.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            KeyCode::Char(ch)
        }
    };

    Some(KeyPress { code, mods })
}

/// Reports whether the key message triggers the given binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.enabled() && binding.keys.iter().any(|k| k.matches(msg))
}

/// Reports whether the key message triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| matches_binding(msg, b))
}

/// Trait for key maps that can describe their bindings for help views.
pub trait KeyMap {
    /// Bindings to show in the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings to show in the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
