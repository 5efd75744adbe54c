//! Sink-native value encodings.
//!
//! The relational sink stores booleans as tri-state integers (-1 true,
//! 0 false); the workbook sink stores native booleans. Each sink picks
//! a [`BoolEncoding`] once instead of branching per field.

use chrono::NaiveDate;

/// Clamp an integer into the schema's byte domain.
pub fn clamp_byte(value: i64) -> u8 {
    value.clamp(0, 255) as u8
}

/// Truncate text to a character budget. Budgets come from
/// `schema::widths` and are applied immediately before a write.
pub fn fit(text: &str, budget: usize) -> String {
    text.chars().take(budget).collect()
}

/// A cell value as written to a sink.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Text(String),
    Date(NaiveDate),
}

impl Value {
    pub fn to_csv(&self) -> String {
        match self {
            Value::Int(value) => value.to_string(),
            Value::Bool(value) => value.to_string(),
            Value::Text(value) => value.clone(),
            Value::Date(value) => value.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Boolean representation used by a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoolEncoding {
    /// -1 for true, 0 for false.
    TriState,
    /// Native boolean cells.
    Native,
}

impl BoolEncoding {
    pub fn encode(self, value: bool) -> Value {
        match self {
            BoolEncoding::TriState => Value::Int(if value { -1 } else { 0 }),
            BoolEncoding::Native => Value::Bool(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_byte_pins_both_ends() {
        assert_eq!(clamp_byte(-7), 0);
        assert_eq!(clamp_byte(0), 0);
        assert_eq!(clamp_byte(140), 140);
        assert_eq!(clamp_byte(1000), 255);
    }

    #[test]
    fn tri_state_encodes_negative_one_true() {
        assert_eq!(BoolEncoding::TriState.encode(true), Value::Int(-1));
        assert_eq!(BoolEncoding::TriState.encode(false), Value::Int(0));
        assert_eq!(BoolEncoding::Native.encode(true), Value::Bool(true));
    }

    #[test]
    fn fit_counts_characters_not_bytes() {
        assert_eq!(fit("El Técnico Magnífico", 10), "El Técnico");
        assert_eq!(fit("short", 30), "short");
    }
}
