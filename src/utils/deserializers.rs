use serde::Deserialize;
use serde_json::Value;

// frontends built on form state send ids as strings ("3") as often as numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Value")]
pub struct LenientId(pub i32);

impl TryFrom<Value> for LenientId {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let parsed = match &value {
            Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            Value::String(s) => s.trim().parse::<i32>().ok(),
            _ => None,
        };
        parsed
            .map(LenientId)
            .ok_or_else(|| format!("Wrong value {value}, can not parse to an id"))
    }
}
