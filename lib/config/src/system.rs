use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt::Display};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
/// A single per-system option value
///
/// Emulator config formats want these as bare strings, so [Display] renders
/// booleans as `1`/`0` like the native config files expect
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    String(String),
}

impl SettingValue {
    /// Interpret this value as a switch
    pub fn as_bool(&self) -> bool {
        match self {
            SettingValue::Bool(value) => *value,
            SettingValue::Int(value) => *value == 1,
            SettingValue::String(value) => ["1", "true", "on", "enabled"]
                .iter()
                .any(|candidate| value.eq_ignore_ascii_case(candidate)),
        }
    }
}

impl Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::Bool(value) => write!(f, "{}", if *value { "1" } else { "0" }),
            SettingValue::Int(value) => write!(f, "{value}"),
            SettingValue::String(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        SettingValue::Int(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::String(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::String(value)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
/// Option name to value map for the system being launched
///
/// Frozen for the duration of a generate call
pub struct SystemConfig(BTreeMap<String, SettingValue>);

impl SystemConfig {
    pub fn is_set(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.0.get(name)
    }

    /// Fetch an option rendered to its config-file string form
    pub fn get_str(&self, name: &str) -> Option<String> {
        self.0.get(name).map(ToString::to_string)
    }

    /// Fetch a switch option, unset means off
    pub fn get_bool(&self, name: &str) -> bool {
        self.0.get(name).is_some_and(SettingValue::as_bool)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<SettingValue>) {
        self.0.insert(name.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<SettingValue>> FromIterator<(K, V)> for SystemConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
