use serde_with::{DeserializeFromStr, SerializeDisplay};

/// The class of device a configuration record applies to.
///
/// The driver dispatches each record to the backend registered under this
/// name; the wire encoding is the backend's registered name in snake case.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum DeviceClass {
    XboxOneGamepad,
}

#[cfg(test)]
mod tests {
    use serde_json::{from_value, json, to_value};

    use super::DeviceClass;

    #[test]
    fn wire_name() {
        assert_eq!(
            to_value(DeviceClass::XboxOneGamepad).unwrap(),
            json!("xbox_one_gamepad")
        );

        let parsed: DeviceClass = from_value(json!("xbox_one_gamepad")).unwrap();
        assert_eq!(parsed, DeviceClass::XboxOneGamepad);
    }

    #[test]
    fn unknown_backend_rejected() {
        assert!(from_value::<DeviceClass>(json!("steering_wheel")).is_err());
    }
}
