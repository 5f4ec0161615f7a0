//! Keyboard shortcut bindings
//!
//! Combos are written the way menus show them: `Ctrl+T`, `Ctrl+Shift+M`.
//! Parsing is case-insensitive; `Display` always produces the canonical form
//! (modifiers in Ctrl, Shift, Alt, Meta order, key capitalized).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NavigationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
        meta: false,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    modifiers: Modifiers,
    key: String,
}

impl KeyCombo {
    pub fn new(modifiers: Modifiers, key: &str) -> Self {
        Self {
            modifiers,
            key: canonical_key(key),
        }
    }

    pub fn ctrl(key: &str) -> Self {
        Self::new(Modifiers::CTRL, key)
    }

    /// Parse a combo such as `ctrl+shift+m`
    pub fn parse(input: &str) -> crate::Result<Self> {
        let input = input.trim();
        let mut parts: Vec<&str> = input.split('+').map(str::trim).collect();

        let key = parts.pop().filter(|k| !k.is_empty()).ok_or_else(|| {
            NavigationError::InvalidKeyCombo(input.to_string())
        })?;

        let mut modifiers = Modifiers::default();
        for part in parts {
            let flag = match part.to_lowercase().as_str() {
                "ctrl" | "control" => &mut modifiers.ctrl,
                "shift" => &mut modifiers.shift,
                "alt" => &mut modifiers.alt,
                "meta" | "cmd" | "super" => &mut modifiers.meta,
                "" => return Err(NavigationError::InvalidKeyCombo(input.to_string())),
                _ => return Err(NavigationError::UnknownModifier(part.to_string())),
            };
            *flag = true;
        }

        Ok(Self::new(modifiers, key))
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl FromStr for KeyCombo {
    type Err = NavigationError;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (self.modifiers.ctrl, "Ctrl"),
            (self.modifiers.shift, "Shift"),
            (self.modifiers.alt, "Alt"),
            (self.modifiers.meta, "Meta"),
        ];
        for (_, name) in names.iter().filter(|(held, _)| *held) {
            write!(f, "{}+", name)?;
        }
        write!(f, "{}", self.key)
    }
}

/// `t` -> `T`, `tab` -> `Tab`, `f5` -> `F5`
fn canonical_key(key: &str) -> String {
    let key = key.trim();
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Something the shell does in response to a shortcut or toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    NewTab,
    Reload,
    CloseTab,
    NextTab,
    GoHome,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::NewTab => "new_tab",
            Action::Reload => "reload",
            Action::CloseTab => "close_tab",
            Action::NextTab => "next_tab",
            Action::GoHome => "go_home",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ShortcutMap {
    bindings: Vec<(KeyCombo, Action)>,
}

impl Default for ShortcutMap {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCombo::ctrl("T"), Action::NewTab),
                (KeyCombo::ctrl("R"), Action::Reload),
                (KeyCombo::ctrl("W"), Action::CloseTab),
                (KeyCombo::ctrl("Tab"), Action::NextTab),
            ],
        }
    }
}

impl ShortcutMap {
    pub fn empty() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Bind a combo, replacing whatever it was bound to before.
    pub fn bind(&mut self, combo: KeyCombo, action: Action) {
        match self.bindings.iter_mut().find(|(c, _)| *c == combo) {
            Some(binding) => binding.1 = action,
            None => self.bindings.push((combo, action)),
        }
    }

    pub fn resolve(&self, combo: &KeyCombo) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(c, _)| c == combo)
            .map(|(_, action)| *action)
    }

    /// All bindings in registration order, for the settings dialog.
    pub fn bindings(&self) -> &[(KeyCombo, Action)] {
        &self.bindings
    }
}
