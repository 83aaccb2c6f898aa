//! Plain aggregates over scalar samples
//!
//! These are what the record-aware aggregates fall back to when no field is
//! selected or the sample does not hold records.

use statrs::statistics::Statistics;

use crate::errors::{StatsError, StatsResult};
use crate::record::Observation;

/// Read every item as a scalar
pub fn scalars<T: Observation>(items: &[T]) -> StatsResult<Vec<f64>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_scalar().ok_or_else(|| {
                StatsError::field_access(None, index, "item is not a scalar; pass a field name")
            })
        })
        .collect()
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean, 0 for an empty slice
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

pub fn count(values: &[f64]) -> usize {
    values.len()
}

pub fn max(values: &[f64]) -> StatsResult<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput { operation: "max" });
    }
    Ok(Statistics::max(values))
}

pub fn min(values: &[f64]) -> StatsResult<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput { operation: "min" });
    }
    Ok(Statistics::min(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_aggregates() {
        let values = [4.0, 1.0, 7.0, 2.0];
        assert_eq!(sum(&values), 14.0);
        assert_eq!(mean(&values), 3.5);
        assert_eq!(count(&values), 4);
        assert_eq!(max(&values).unwrap(), 7.0);
        assert_eq!(min(&values).unwrap(), 1.0);
    }

    #[test]
    fn test_empty_fallbacks() {
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(count(&[]), 0);
        assert!(matches!(max(&[]), Err(StatsError::EmptyInput { operation: "max" })));
        assert!(matches!(min(&[]), Err(StatsError::EmptyInput { operation: "min" })));
    }

    #[test]
    fn test_scalars_rejects_records() {
        assert_eq!(scalars(&[1_i32, 2, 3]).unwrap(), vec![1.0, 2.0, 3.0]);

        let rows = vec![json!(1), json!({"a": 1})];
        let err = scalars(&rows).unwrap_err();
        assert!(matches!(err, StatsError::FieldAccess { field: None, index: 1, .. }));
    }
}
