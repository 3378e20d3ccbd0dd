use super::TextVisitor;
use crate::{Error, ShardableId, SortableBase64Ext};
use ::serde::{Deserializer, Serializer};

/// The 12-byte binary layout.
pub mod as_bytes_shardable {
    use super::*;
    use core::fmt;

    pub fn serialize<S>(id: &ShardableId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_bytes(&id.to_bytes())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<ShardableId, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BytesVisitor;

        impl<'de> ::serde::de::Visitor<'de> for BytesVisitor {
            type Value = ShardableId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("12 id bytes")
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: ::serde::de::Error,
            {
                ShardableId::from_slice(v).map_err(E::custom)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: ::serde::de::SeqAccess<'de>,
            {
                let mut bytes = [0u8; ShardableId::BYTE_LEN];
                for (i, slot) in bytes.iter_mut().enumerate() {
                    *slot = seq.next_element()?.ok_or_else(|| {
                        ::serde::de::Error::custom(Error::invalid_length(ShardableId::BYTE_LEN, i))
                    })?;
                }
                if seq.next_element::<u8>()?.is_some() {
                    return Err(::serde::de::Error::custom(Error::invalid_length(
                        ShardableId::BYTE_LEN,
                        ShardableId::BYTE_LEN + 1,
                    )));
                }
                Ok(ShardableId::from_bytes(bytes))
            }
        }

        d.deserialize_bytes(BytesVisitor)
    }
}

/// The 16-char sortable Base64 text.
pub mod as_base64_shardable {
    use super::*;

    pub fn serialize<S>(id: &ShardableId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(id.encode().as_str())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<ShardableId, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(TextVisitor::new(
            "a 16-char sortable base64 string",
            |s| ShardableId::decode(s),
        ))
    }
}

/// The 24-char lowercase hex text. Either case is accepted on input.
pub mod as_hex_shardable {
    use super::*;

    pub fn serialize<S>(id: &ShardableId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&id.to_hex())
    }

    pub fn deserialize<'de, D>(d: D) -> Result<ShardableId, D::Error>
    where
        D: Deserializer<'de>,
    {
        d.deserialize_str(TextVisitor::new("a 24-char hex string", |s| {
            if s.len() == ShardableId::HEX_LEN {
                ShardableId::parse(s)
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
    struct Row {
        #[serde(with = "as_base64_shardable")]
        id: ShardableId,
        #[serde(with = "as_hex_shardable")]
        parent: ShardableId,
        #[serde(with = "as_bytes_shardable")]
        raw: ShardableId,
    }

    fn row() -> Row {
        Row {
            id: ShardableId::from_parts(0, 0, 1),
            parent: ShardableId::from_parts(0x0102_0304, 0xA0B0_C0D0, 0xFF),
            raw: ShardableId::from_parts(0, 0, 2),
        }
    }

    #[test]
    fn row_roundtrip() {
        let row = row();
        let value = serde_json::to_value(&row).expect("serialize");
        assert_eq!(
            value,
            json!({
                "id": "---------------0",
                "parent": "a0b0c0d001020304000000ff",
                "raw": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2],
            })
        );
        let back: Row = serde_json::from_value(value).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn hex_accepts_uppercase() {
        let json = r#"{"id":"---------------0","parent":"A0B0C0D001020304000000FF","raw":[0,0,0,0,0,0,0,0,0,0,0,2]}"#;
        let back: Row = serde_json::from_str(json).expect("deserialize");
        assert_eq!(back, row());
    }

    #[test]
    fn rejects_wrong_shapes() {
        let base64_as_hex = r#"{"id":"---------------0","parent":"---------------0","raw":[0,0,0,0,0,0,0,0,0,0,0,2]}"#;
        assert!(serde_json::from_str::<Row>(base64_as_hex).is_err());

        let short_bytes = r#"{"id":"---------------0","parent":"a0b0c0d001020304000000ff","raw":[0,0,2]}"#;
        let err = serde_json::from_str::<Row>(short_bytes).unwrap_err();
        assert!(err.to_string().contains("expected 12 bytes, got 3"), "{err}");

        let long_bytes = r#"{"id":"---------------0","parent":"a0b0c0d001020304000000ff","raw":[0,0,0,0,0,0,0,0,0,0,0,0,2]}"#;
        assert!(serde_json::from_str::<Row>(long_bytes).is_err());

        let bad_base64 = r#"{"id":"---------------!","parent":"a0b0c0d001020304000000ff","raw":[0,0,0,0,0,0,0,0,0,0,0,2]}"#;
        let err = serde_json::from_str::<Row>(bad_base64).unwrap_err();
        assert!(err.to_string().contains("invalid id format"), "{err}");
    }
}
