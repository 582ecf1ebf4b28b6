use serde::{
    de::{Error, Unexpected, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

/// Call data and return data as they travel over JSON-RPC: a plain byte
/// vector in memory, a `0x`-prefixed hex string on the wire.
#[derive(Clone, PartialEq, Eq)]
pub struct Bytes(pub Vec<u8>);

impl Serialize for Bytes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("0x{}", hex::encode(&self.0)))
    }
}

impl<'a> Deserialize<'a> for Bytes {
    fn deserialize<D>(deserializer: D) -> Result<Bytes, D::Error>
    where
        D: Deserializer<'a>,
    {
        struct HexVisitor;

        impl<'a> Visitor<'a> for HexVisitor {
            type Value = Bytes;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a 0x-prefixed hex-encoded string of bytes")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                let hex = value
                    .strip_prefix("0x")
                    .ok_or_else(|| Error::invalid_value(Unexpected::Str(value), &"0x prefix"))?;

                hex::decode(hex)
                    .map(Bytes)
                    .map_err(|e| Error::custom(format!("Invalid hex: {}", e)))
            }
        }

        deserializer.deserialize_str(HexVisitor)
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes(0x{})", hex::encode(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::Bytes;

    #[test]
    fn serialize() {
        assert_eq!(serde_json::to_string(&Bytes(vec![])).unwrap(), r#""0x""#);
        assert_eq!(
            serde_json::to_string(&Bytes(vec![0x01, 0x23, 0xff])).unwrap(),
            r#""0x0123ff""#
        );
    }

    #[test]
    fn deserialize() {
        assert_eq!(serde_json::from_str::<Bytes>(r#""0x00""#).unwrap(), Bytes(vec![0x00]));
        assert_eq!(
            serde_json::from_str::<Bytes>(r#""0x0123456789AaBbCcDdEeFf""#).unwrap(),
            Bytes(vec![0x01, 0x23, 0x45, 0x67, 0x89, 0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF])
        );
        assert_eq!(serde_json::from_str::<Bytes>(r#""0x""#).unwrap(), Bytes(vec![]));

        assert!(serde_json::from_str::<Bytes>("0").is_err(), "Not a string");
        assert!(serde_json::from_str::<Bytes>(r#""""#).is_err(), "Empty string");
        assert!(serde_json::from_str::<Bytes>(r#""0xZZ""#).is_err(), "Invalid hex");
        assert!(
            serde_json::from_str::<Bytes>(r#""deadbeef""#).is_err(),
            "Missing 0x prefix"
        );
        assert!(serde_json::from_str::<Bytes>(r#""数字""#).is_err(), "Non-ASCII");
        assert!(serde_json::from_str::<Bytes>(r#""0x数字""#).is_err(), "Non-ASCII hex digits");
    }
}
