//! Board field parsing.
//!
//! `games.field` is stored as free-form JSON. It is only trusted once it has
//! been parsed into a [`Field`]: an array whose cells are each a mark string
//! or `null` for an empty cell.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Field(Vec<Option<String>>);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("field must be an array, found {found}")]
    NotAnArray { found: &'static str },
    #[error("field cell {index} must be a string or null, found {found}")]
    InvalidCell { index: usize, found: &'static str },
}

impl Field {
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Self(cells)
    }

    /// Parse a persisted field value. A missing column value is rejected the
    /// same way as a JSON `null`.
    pub fn parse(value: Option<&Value>) -> Result<Self, FieldError> {
        match value {
            Some(value) => Self::try_from(value),
            None => Err(FieldError::NotAnArray { found: "null" }),
        }
    }

    pub fn cells(&self) -> &[Option<String>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_cells(self) -> Vec<Option<String>> {
        self.0
    }
}

impl TryFrom<&Value> for Field {
    type Error = FieldError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let items = value.as_array().ok_or(FieldError::NotAnArray {
            found: json_kind(value),
        })?;

        items
            .iter()
            .enumerate()
            .map(|(index, cell)| match cell {
                Value::Null => Ok(None),
                Value::String(mark) => Ok(Some(mark.clone())),
                other => Err(FieldError::InvalidCell {
                    index,
                    found: json_kind(other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_marks_and_empty_cells() {
        let value = json!(["X", null, "O", null, null, null, null, null, "X"]);
        let field = Field::parse(Some(&value)).unwrap();

        assert_eq!(field.len(), 9);
        assert_eq!(field.cells()[0].as_deref(), Some("X"));
        assert_eq!(field.cells()[1], None);
        assert_eq!(field.cells()[2].as_deref(), Some("O"));
    }

    #[test]
    fn empty_array_is_a_valid_field() {
        let field = Field::parse(Some(&json!([]))).unwrap();
        assert!(field.is_empty());
    }

    #[test]
    fn rejects_numbers() {
        let err = Field::parse(Some(&json!([1, 2, 3]))).unwrap_err();
        assert_eq!(
            err,
            FieldError::InvalidCell {
                index: 0,
                found: "number"
            }
        );
    }

    #[test]
    fn reports_first_bad_cell() {
        let err = Field::parse(Some(&json!(["X", null, {"mark": "O"}, 7]))).unwrap_err();
        assert_eq!(
            err,
            FieldError::InvalidCell {
                index: 2,
                found: "object"
            }
        );
    }

    #[test]
    fn rejects_non_arrays() {
        assert_eq!(
            Field::parse(Some(&json!("X"))).unwrap_err(),
            FieldError::NotAnArray { found: "string" }
        );
        assert_eq!(
            Field::parse(Some(&json!({"0": "X"}))).unwrap_err(),
            FieldError::NotAnArray { found: "object" }
        );
        assert_eq!(
            Field::parse(Some(&Value::Null)).unwrap_err(),
            FieldError::NotAnArray { found: "null" }
        );
    }

    #[test]
    fn missing_value_is_rejected() {
        assert_eq!(
            Field::parse(None).unwrap_err(),
            FieldError::NotAnArray { found: "null" }
        );
    }

    #[test]
    fn serialises_as_plain_array() {
        let field = Field::new(vec![Some("X".into()), None]);
        assert_eq!(serde_json::to_value(&field).unwrap(), json!(["X", null]));
    }

    fn cell() -> impl Strategy<Value = Option<String>> {
        prop_oneof![Just(None), "[XO]{0,2}".prop_map(Some)]
    }

    proptest! {
        #[test]
        fn parse_preserves_valid_cells(cells in prop::collection::vec(cell(), 0..16)) {
            let value = serde_json::to_value(&cells).unwrap();
            let field = Field::parse(Some(&value)).unwrap();
            prop_assert_eq!(field.into_cells(), cells);
        }

        #[test]
        fn any_number_cell_is_rejected(
            cells in prop::collection::vec(cell(), 0..16),
            pos in any::<prop::sample::Index>(),
            n in any::<i64>(),
        ) {
            let index = pos.index(cells.len() + 1);
            let mut values: Vec<Value> = cells.iter().map(|c| json!(c)).collect();
            values.insert(index, json!(n));

            let err = Field::parse(Some(&Value::Array(values))).unwrap_err();
            prop_assert_eq!(err, FieldError::InvalidCell { index, found: "number" });
        }
    }
}
