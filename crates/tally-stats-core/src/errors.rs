use thiserror::Error;

/// Errors that can occur while computing statistics over a sample
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A field could not be read from an item: the item is not a record,
    /// or the value is missing/non-numeric where one is required.
    #[error("Cannot access {} on item {index}: {reason}", describe_field(.field))]
    FieldAccess {
        field: Option<String>,
        index: usize,
        reason: &'static str,
    },

    #[error("Empty input: {operation} needs at least one value")]
    EmptyInput { operation: &'static str },

    #[error("Length mismatch: x has {x_len} elements, y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("Could not detect a numeric field on the first record; pass a field name explicitly")]
    FieldResolution,
}

impl StatsError {
    pub(crate) fn field_access(field: Option<&str>, index: usize, reason: &'static str) -> Self {
        StatsError::FieldAccess {
            field: field.map(str::to_owned),
            index,
            reason,
        }
    }
}

fn describe_field(field: &Option<String>) -> String {
    match field {
        Some(name) => format!("field '{name}'"),
        None => "item value".to_string(),
    }
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_access_message_names_field_and_index() {
        let err = StatsError::field_access(Some("price"), 3, "value is null");
        assert_eq!(
            err.to_string(),
            "Cannot access field 'price' on item 3: value is null"
        );
    }

    #[test]
    fn test_field_access_message_without_field() {
        let err = StatsError::field_access(None, 0, "item is not a scalar; pass a field name");
        assert_eq!(
            err.to_string(),
            "Cannot access item value on item 0: item is not a scalar; pass a field name"
        );
    }

    #[test]
    fn test_length_mismatch_message() {
        let err = StatsError::LengthMismatch { x_len: 4, y_len: 3 };
        assert_eq!(err.to_string(), "Length mismatch: x has 4 elements, y has 3");
    }
}
