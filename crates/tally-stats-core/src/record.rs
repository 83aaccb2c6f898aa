//! Field extraction capabilities
//!
//! An item of a sample is either a scalar (it can be read as a number) or a
//! record (it exposes named fields). Both are capabilities expressed through
//! [`Observation`]; the aggregator never inspects concrete types.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use serde_json::{Map, Value};

use crate::types::FieldValue;

/// Named-field lookup on a record-like item
pub trait Record {
    /// Current value of `field`, [`FieldValue::Null`] if the field is absent
    fn get_field(&self, field: &str) -> FieldValue;

    /// Overwrite (or insert) `field`
    fn set_field(&mut self, field: &str, value: FieldValue);

    /// All attributes in the record's natural order
    fn attributes(&self) -> Vec<(String, FieldValue)>;
}

/// An item of a sample
///
/// Implementors report which capability they have. The defaults describe an
/// item with neither, which every statistic rejects.
pub trait Observation {
    fn as_scalar(&self) -> Option<f64> {
        None
    }

    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }

    fn is_record(&self) -> bool {
        self.as_record().is_some()
    }
}

macro_rules! impl_scalar_observation {
    ($($t:ty),* $(,)?) => {
        $(
            impl Observation for $t {
                fn as_scalar(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_scalar_observation!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Observation for FieldValue {
    fn as_scalar(&self) -> Option<f64> {
        self.as_f64()
    }
}

impl<T: Observation + ?Sized> Observation for &T {
    fn as_scalar(&self) -> Option<f64> {
        (**self).as_scalar()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }
}

impl<T: Observation + ?Sized> Observation for &mut T {
    fn as_scalar(&self) -> Option<f64> {
        (**self).as_scalar()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        (**self).as_record_mut()
    }
}

impl<T: Observation + ?Sized> Observation for Box<T> {
    fn as_scalar(&self) -> Option<f64> {
        (**self).as_scalar()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        (**self).as_record()
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        (**self).as_record_mut()
    }
}

impl Record for BTreeMap<String, FieldValue> {
    fn get_field(&self, field: &str) -> FieldValue {
        self.get(field).cloned().unwrap_or_default()
    }

    fn set_field(&mut self, field: &str, value: FieldValue) {
        self.insert(field.to_owned(), value);
    }

    fn attributes(&self) -> Vec<(String, FieldValue)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl Observation for BTreeMap<String, FieldValue> {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self)
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        Some(self)
    }
}

/// Attribute order follows the map's iteration order, which is unspecified
impl<S: BuildHasher> Record for HashMap<String, FieldValue, S> {
    fn get_field(&self, field: &str) -> FieldValue {
        self.get(field).cloned().unwrap_or_default()
    }

    fn set_field(&mut self, field: &str, value: FieldValue) {
        self.insert(field.to_owned(), value);
    }

    fn attributes(&self) -> Vec<(String, FieldValue)> {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }
}

impl<S: BuildHasher> Observation for HashMap<String, FieldValue, S> {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self)
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        Some(self)
    }
}

impl Record for Map<String, Value> {
    fn get_field(&self, field: &str) -> FieldValue {
        self.get(field).map(FieldValue::from).unwrap_or_default()
    }

    fn set_field(&mut self, field: &str, value: FieldValue) {
        self.insert(field.to_owned(), value.into());
    }

    fn attributes(&self) -> Vec<(String, FieldValue)> {
        self.iter()
            .map(|(k, v)| (k.clone(), FieldValue::from(v)))
            .collect()
    }
}

impl Observation for Map<String, Value> {
    fn as_record(&self) -> Option<&dyn Record> {
        Some(self)
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        Some(self)
    }
}

/// JSON objects are records, JSON numbers are scalars
impl Observation for Value {
    fn as_scalar(&self) -> Option<f64> {
        self.as_f64()
    }

    fn as_record(&self) -> Option<&dyn Record> {
        self.as_object().map(|m| m as &dyn Record)
    }

    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        self.as_object_mut().map(|m| m as &mut dyn Record)
    }
}
