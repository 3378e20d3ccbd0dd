use super::TextVisitor;
use crate::{Error, SortableBase64Ext, TimeUuid};
use ::serde::{Deserializer, Serializer};

/// The 22-char sortable Base64 text.
pub mod as_base64_time_uuid {
    use super::*;

    pub fn serialize<S>(id: &TimeUuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<TimeUuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(TextVisitor::new(
            "a 22-char sortable base64 string",
            |s| TimeUuid::decode(s),
        ))
    }
}

/// The standard 36-char hyphenated text.
pub mod as_hyphenated_time_uuid {
    use super::*;

    pub fn serialize<S>(id: &TimeUuid, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(id)
    }

    pub fn deserialize<'de, D>(d: D) -> Result<TimeUuid, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(TextVisitor::new("a hyphenated uuid string", |s| {
            if s.len() == TimeUuid::HYPHENATED_LEN {
                TimeUuid::parse(s)
            } else {
                Err(Error::invalid_format(s))
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
    struct Event {
        #[serde(with = "as_base64_time_uuid")]
        key: TimeUuid,
        #[serde(with = "as_hyphenated_time_uuid")]
        uuid: TimeUuid,
    }

    fn reference() -> TimeUuid {
        TimeUuid::parse("1e7aba60-26e6-11e3-b407-005056c00008").expect("parse")
    }

    #[test]
    fn event_roundtrip() {
        let event = Event {
            key: reference(),
            uuid: reference(),
        };
        let value = serde_json::to_value(&event).expect("serialize");
        assert_eq!(
            value,
            json!({
                "key": "3TBatWtuia1o0k0FKg--1-",
                "uuid": "1e7aba60-26e6-11e3-b407-005056c00008",
            })
        );
        let back: Event = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, event);
    }

    #[test]
    fn rejects_the_other_form() {
        let swapped = r#"{"key":"1e7aba60-26e6-11e3-b407-005056c00008","uuid":"3TBatWtuia1o0k0FKg--1-"}"#;
        assert!(serde_json::from_str::<Event>(swapped).is_err());

        let plain_hex = r#"{"key":"3TBatWtuia1o0k0FKg--1-","uuid":"1e7aba6026e611e3b407005056c00008"}"#;
        assert!(serde_json::from_str::<Event>(plain_hex).is_err());
    }
}
