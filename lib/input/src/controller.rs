use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
/// Logical inputs the frontend assigns on every pad
pub enum InputName {
    A,
    B,
    X,
    Y,
    Up,
    Down,
    Left,
    Right,
    Start,
    Select,
    PageUp,
    PageDown,
    Hotkey,
    L2,
    R2,
    L3,
    R3,
    Joystick1Up,
    Joystick1Left,
    Joystick2Up,
    Joystick2Left,
}

#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter,
)]
#[serde(rename_all = "lowercase")]
/// What kind of physical input a descriptor points at
pub enum InputKind {
    Button,
    Axis,
    Hat,
    Key,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// One physical input on a pad, identifiers are kept as the raw strings the
/// controller database hands us since some of them are symbolic
pub struct InputDescriptor {
    pub kind: InputKind,
    pub id: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
/// A physical controller assigned to a player slot for this launch
pub struct Controller {
    /// Player slot, "1" and up
    pub player_slot: String,
    /// Stable device identifier used as the sort key across a roster
    pub identifier: String,
    /// Human readable device name
    pub name: String,
    /// SDL device guid
    pub guid: String,
    /// Logical input to physical input, in database order
    pub inputs: IndexMap<InputName, InputDescriptor>,
}

impl Controller {
    pub fn input(&self, name: InputName) -> Option<&InputDescriptor> {
        self.inputs.get(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_names_use_frontend_spelling() {
        assert_eq!(InputName::PageUp.to_string(), "pageup");
        assert_eq!(InputName::Joystick1Up.to_string(), "joystick1up");
        assert_eq!("pagedown".parse::<InputName>().unwrap(), InputName::PageDown);
    }

    #[test]
    fn roster_deserializes_from_ron() {
        let roster: Vec<Controller> = ron::from_str(
            r#"[
                (
                    player_slot: "1",
                    identifier: "030000005e0400008e02000014010000-0",
                    name: "Xbox Controller",
                    guid: "030000005e0400008e02000014010000",
                    inputs: {
                        a: (kind: button, id: "0"),
                        up: (kind: hat, id: "0", value: "1"),
                    },
                ),
            ]"#,
        )
        .unwrap();

        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].input(InputName::A).unwrap().id, "0");
        assert_eq!(roster[0].input(InputName::Up).unwrap().kind, InputKind::Hat);
        assert!(roster[0].input(InputName::Y).is_none());
    }
}
