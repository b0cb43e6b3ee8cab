use from_variants::FromVariants;
use serde::{Deserialize, Serialize};

use crate::DeviceClass;

/// A padmote configuration record binds one button to one action.
///
/// Records are stateless: each one describes a complete binding, is valid
/// for exactly one request, and replaces whatever binding the driver
/// previously held for the same button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigRecord {
    /// The device class the binding belongs to.
    #[serde(rename = "type")]
    pub device: DeviceClass,
    /// The identifier of the button being bound.
    ///
    /// Not validated client-side; the driver is the authority on rejecting
    /// identifiers it does not recognize.
    pub button: String,
    /// The behavior bound to the button.
    #[serde(flatten)]
    pub action: Action,
}

impl ConfigRecord {
    /// Create a record binding `button` to `action` on `device`.
    pub fn new(device: DeviceClass, button: impl Into<String>, action: impl Into<Action>) -> Self {
        Self {
            device,
            button: button.into(),
            action: action.into(),
        }
    }
}

/// The behavior bound to a button.
///
/// The wire form carries the discriminant in `action_type` and the
/// variant's fields beside it, so a record holds exactly the parameter
/// field its action type requires; `change_volume` carries none.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromVariants)]
#[serde(tag = "action_type", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Action {
    /// Emit a key press.
    PressKey(KeyPress),
    /// Type literal text.
    TypeText(TypeText),
    /// Execute a shell command.
    RunCommand(RunCommand),
    /// Invoke a custom handler registered driver-side.
    RunCustomFunction(CustomFunction),
    /// Turn the button into a volume control.
    #[from_variants(skip)]
    ChangeVolume,
}

impl Action {
    /// The action's discriminant, as carried in the `action_type` field.
    pub fn kind(&self) -> ActionType {
        self.into()
    }

    /// The action's single parameter, if its type takes one.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Action::PressKey(KeyPress { key }) => Some(key),
            Action::TypeText(TypeText { text }) => Some(text),
            Action::RunCommand(RunCommand { command }) => Some(command),
            Action::RunCustomFunction(CustomFunction { function_name }) => Some(function_name),
            Action::ChangeVolume => None,
        }
    }
}

/// Emit a single key press.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyPress {
    /// Name of the key, as understood by the driver's input backend.
    pub key: String,
}

impl KeyPress {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Type literal text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeText {
    /// The text to type, verbatim.
    pub text: String,
}

impl TypeText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Execute a shell command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunCommand {
    /// The command line, passed to the driver's shell as-is.
    pub command: String,
}

impl RunCommand {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

/// Invoke a custom handler registered driver-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomFunction {
    /// Name the handler was registered under.
    pub function_name: String,
}

impl CustomFunction {
    pub fn new(function_name: impl Into<String>) -> Self {
        Self {
            function_name: function_name.into(),
        }
    }
}

/// The kind of behavior bound to a button, without its parameters.
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum ActionType {
    PressKey,
    TypeText,
    RunCommand,
    RunCustomFunction,
    ChangeVolume,
}

impl From<&Action> for ActionType {
    fn from(value: &Action) -> Self {
        match value {
            Action::PressKey(_) => ActionType::PressKey,
            Action::TypeText(_) => ActionType::TypeText,
            Action::RunCommand(_) => ActionType::RunCommand,
            Action::RunCustomFunction(_) => ActionType::RunCustomFunction,
            Action::ChangeVolume => ActionType::ChangeVolume,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, from_value, json, to_value};

    use crate::DeviceClass;

    use super::{Action, ConfigRecord, CustomFunction, KeyPress, RunCommand, TypeText};

    fn record(action: impl Into<Action>) -> Value {
        to_value(ConfigRecord::new(
            DeviceClass::XboxOneGamepad,
            "BTN_A",
            action,
        ))
        .unwrap()
    }

    #[test]
    fn press_key_wire_form() {
        assert_eq!(
            record(KeyPress::new("F5")),
            json!({
                "type": "xbox_one_gamepad",
                "button": "BTN_A",
                "action_type": "press_key",
                "key": "F5",
            })
        );
    }

    #[test]
    fn type_text_wire_form() {
        assert_eq!(
            record(TypeText::new("hello")),
            json!({
                "type": "xbox_one_gamepad",
                "button": "BTN_A",
                "action_type": "type_text",
                "text": "hello",
            })
        );
    }

    #[test]
    fn run_command_wire_form() {
        assert_eq!(
            record(RunCommand::new("xdg-open .")),
            json!({
                "type": "xbox_one_gamepad",
                "button": "BTN_A",
                "action_type": "run_command",
                "command": "xdg-open .",
            })
        );
    }

    #[test]
    fn custom_function_wire_form() {
        assert_eq!(
            record(CustomFunction::new("toggle_overlay")),
            json!({
                "type": "xbox_one_gamepad",
                "button": "BTN_A",
                "action_type": "run_custom_function",
                "function_name": "toggle_overlay",
            })
        );
    }

    #[test]
    fn change_volume_carries_no_parameter() {
        assert_eq!(
            record(Action::ChangeVolume),
            json!({
                "type": "xbox_one_gamepad",
                "button": "BTN_A",
                "action_type": "change_volume",
            })
        );
        assert_eq!(Action::ChangeVolume.parameter(), None);
    }

    #[test]
    fn deserialize() {
        let example: ConfigRecord = from_value(json!({
            "type": "xbox_one_gamepad",
            "button": "BTN_RB",
            "action_type": "run_command",
            "command": "systemctl suspend",
        }))
        .unwrap();

        assert!(matches!(
            example,
            ConfigRecord {
                device: DeviceClass::XboxOneGamepad,
                action: Action::RunCommand(_),
                ..
            }
        ));
        assert_eq!(example.action.parameter(), Some("systemctl suspend"));
    }

    #[test]
    fn action_type_names() {
        for (action, name) in [
            (Action::from(KeyPress::new("a")), "press_key"),
            (Action::from(TypeText::new("a")), "type_text"),
            (Action::from(RunCommand::new("a")), "run_command"),
            (Action::from(CustomFunction::new("a")), "run_custom_function"),
            (Action::ChangeVolume, "change_volume"),
        ] {
            assert_eq!(action.kind().to_string(), name);
        }
    }
}
