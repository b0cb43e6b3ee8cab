use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Action, ConfigRecord, DeviceClass, Error};

/// An ordered set of button bindings for one device.
///
/// The driver keeps its applied configuration as an ordered list of
/// bindings keyed by input identifier; a layout is the client-side mirror
/// of that list, suitable for saving to a file and replaying binding by
/// binding. Binding a button that is already present replaces its action
/// and keeps its position.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct Layout {
    bindings: IndexMap<String, Action>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bind `button` to `action`, replacing any existing binding for it.
    pub fn bind(&mut self, button: impl Into<String>, action: impl Into<Action>) -> &mut Self {
        self.bindings.insert(button.into(), action.into());
        self
    }

    pub fn get(&self, button: &str) -> Option<&Action> {
        self.bindings.get(button)
    }

    /// The bindings in layout order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Action)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// One configuration record per binding, in layout order.
    pub fn records(&self, device: DeviceClass) -> impl Iterator<Item = ConfigRecord> + '_ {
        self.bindings
            .iter()
            .map(move |(button, action)| ConfigRecord::new(device, button, action.clone()))
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl FromIterator<(String, Action)> for Layout {
    fn from_iter<T: IntoIterator<Item = (String, Action)>>(iter: T) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Layout {
    type Item = (String, Action);
    type IntoIter = indexmap::map::IntoIter<String, Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{from_value, json};

    use crate::{DeviceClass, KeyPress, RunCommand};

    use super::Layout;

    #[test]
    fn records_preserve_layout_order() {
        let mut layout = Layout::new();
        layout
            .bind("BTN_B", KeyPress::new("Escape"))
            .bind("BTN_A", KeyPress::new("Return"));

        let buttons: Vec<_> = layout
            .records(DeviceClass::XboxOneGamepad)
            .map(|r| r.button)
            .collect();
        assert_eq!(buttons, ["BTN_B", "BTN_A"]);
    }

    #[test]
    fn rebinding_replaces_in_place() {
        let mut layout = Layout::new();
        layout
            .bind("BTN_A", KeyPress::new("F1"))
            .bind("BTN_B", KeyPress::new("F2"))
            .bind("BTN_A", RunCommand::new("true"));

        assert_eq!(layout.len(), 2);
        let buttons: Vec<_> = layout.iter().map(|(b, _)| b).collect();
        assert_eq!(buttons, ["BTN_A", "BTN_B"]);
        assert_eq!(layout.get("BTN_A").unwrap().parameter(), Some("true"));
    }

    #[test]
    fn empty_layout_yields_no_records() {
        assert_eq!(
            Layout::new().records(DeviceClass::XboxOneGamepad).count(),
            0
        );
    }

    #[test]
    fn layout_file_format() {
        let layout: Layout = from_value(json!({
            "BTN_A": { "action_type": "press_key", "key": "F5" },
            "BTN_LB": { "action_type": "change_volume" },
        }))
        .unwrap();

        assert_eq!(layout.len(), 2);
        assert_eq!(layout.get("BTN_A").unwrap().parameter(), Some("F5"));

        let reparsed = Layout::from_json(&layout.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, layout);
    }
}
