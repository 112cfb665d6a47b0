use serde::Serialize;
use std::collections::BTreeMap;
use strum::{Display, EnumIter};

#[derive(
    Serialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
/// Logical actions an emulator can bind frontend hotkeys for
pub enum HotkeyAction {
    Exit,
    Menu,
    Pause,
    SaveState,
    RestoreState,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
/// Static hotkey bindings for one emulator
///
/// Physical identifiers are evdev `KEY_*` names, a chord is more than one
pub struct HotkeysContext {
    pub name: &'static str,
    pub keys: BTreeMap<HotkeyAction, Vec<&'static str>>,
}

impl HotkeysContext {
    /// The binding every adapter shares, alt-f4 to leave
    pub fn with_exit_only(name: &'static str) -> Self {
        Self {
            name,
            keys: [(HotkeyAction::Exit, vec!["KEY_LEFTALT", "KEY_F4"])].into(),
        }
    }
}
