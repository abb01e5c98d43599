//! 嚴格型別檢查的加法
//!
//! 運算元為 [`serde_json::Value`]，只有 `Value::Number` 參與運算；
//! 其他型別（包含 `"2"` 這類看似數字的字串）一律回傳 `None`，不做轉型

use serde_json::Value;
use std::fmt;

/// [`add`] 所見的運算元型別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Number,
    Other(&'static str),
}

impl Operand {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Number(_) => Operand::Number,
            Value::String(_) => Operand::Other("string"),
            Value::Bool(_) => Operand::Other("boolean"),
            Value::Null => Operand::Other("null"),
            Value::Array(_) => Operand::Other("array"),
            Value::Object(_) => Operand::Other("object"),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Number => f.write_str("number"),
            Operand::Other(kind) => f.write_str(kind),
        }
    }
}

/// 兩者皆為數字時回傳總和，否則回傳 `None`
pub fn add(a: &Value, b: &Value) -> Option<f64> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Some(x.as_f64()? + y.as_f64()?),
        _ => {
            tracing::debug!(
                "add rejected operands ({}, {})",
                Operand::of(a),
                Operand::of(b)
            );
            None
        }
    }
}
