use crate::types::U64;
use serde::{Serialize, Serializer};

/// Block identifier used by `eth_call`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BlockNumber {
    /// Latest block
    Latest,
    /// Earliest block (genesis)
    Earliest,
    /// Pending block (not yet part of the blockchain)
    Pending,
    /// Block by number from canon chain
    Number(U64),
}

impl Serialize for BlockNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            BlockNumber::Number(ref x) => serializer.serialize_str(&format!("0x{:x}", x)),
            BlockNumber::Latest => serializer.serialize_str("latest"),
            BlockNumber::Earliest => serializer.serialize_str("earliest"),
            BlockNumber::Pending => serializer.serialize_str("pending"),
        }
    }
}

impl<T: Into<U64>> From<T> for BlockNumber {
    fn from(num: T) -> Self {
        BlockNumber::Number(num.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_to_rpc_form() {
        assert_eq!(serde_json::to_string(&BlockNumber::Latest).unwrap(), r#""latest""#);
        assert_eq!(serde_json::to_string(&BlockNumber::Pending).unwrap(), r#""pending""#);
        assert_eq!(
            serde_json::to_string(&BlockNumber::from(0x10u64)).unwrap(),
            r#""0x10""#
        );
    }
}
