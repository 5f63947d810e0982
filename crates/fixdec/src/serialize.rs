use crate::{decimal::Decimal, repr::Repr};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// Serde:
// - Human-readable formats (e.g. JSON) use the decimal string.
// - Non-human-readable formats (e.g. CBOR) use the raw scaled integer.
impl<const DIGITS: u32, T: Repr, const BASE: u32> Serialize for Decimal<DIGITS, T, BASE> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            return serializer.collect_str(self);
        }

        self.scaled().serialize(serializer)
    }
}

impl<'de, const DIGITS: u32, T: Repr, const BASE: u32> Deserialize<'de>
    for Decimal<DIGITS, T, BASE>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            return s.parse::<Self>().map_err(de::Error::custom);
        }

        T::deserialize(deserializer).map(Self::from_scaled)
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    type D2 = Decimal<2>;

    #[derive(Debug, Deserialize, PartialEq, Serialize)]
    struct Price {
        amount: D2,
    }

    #[test]
    fn json_uses_decimal_text() {
        let price = Price {
            amount: D2::from_scaled(-345),
        };

        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, r#"{"amount":"-3.45"}"#);

        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, price);
    }

    #[test]
    fn json_rejects_excess_precision() {
        let err = serde_json::from_str::<Price>(r#"{"amount":"1.234"}"#).unwrap_err();

        assert!(err.to_string().contains("too many fractional digits"));
    }

    #[test]
    fn cbor_uses_scaled_integer() {
        let value = D2::from_scaled(406);

        let bytes = serde_cbor::to_vec(&value).unwrap();
        assert_eq!(bytes, serde_cbor::to_vec(&406i32).unwrap());

        let back: D2 = serde_cbor::from_slice(&bytes).unwrap();
        assert_eq!(back, value);
    }
}
