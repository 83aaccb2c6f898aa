//! Aggregates over samples of scalars or records
//!
//! `sum`, `mean`, `count`, `max` and `min` project the selected field when the
//! sample holds records, and otherwise fall back to the plain aggregates in
//! [`base`] over the items themselves. The moment statistics (`sample_variance`,
//! `standard_deviation`, `median`, `mode`) always run, either on the projected
//! field or on the raw scalars.

pub mod base;
mod coerce;
pub mod moments;
mod trend;

pub use coerce::{coerce_numeric, make_numeric};

use crate::errors::{StatsError, StatsResult};
use crate::record::Observation;
use crate::types::{MedianOptions, Mode, ModeOptions, NullPolicy};

/// Borrowed view over the items a statistic is computed on
#[derive(Debug)]
pub struct Sample<'a, T> {
    items: &'a [T],
}

impl<T> Clone for Sample<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Sample<'_, T> {}

impl<'a, T> From<&'a [T]> for Sample<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self { items }
    }
}

impl<'a, T> From<&'a Vec<T>> for Sample<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self { items }
    }
}

impl<'a, T: Observation> Sample<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &'a [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the first item exposes named fields
    pub fn is_record_set(&self) -> bool {
        self.items.first().is_some_and(|first| first.is_record())
    }

    /// The field to project, if the sample is a record set and one was given
    fn record_field<'f>(&self, field: Option<&'f str>) -> Option<&'f str> {
        field.filter(|_| self.is_record_set())
    }

    /// Numeric values of `field` across all items
    pub(crate) fn project(&self, field: &str, nulls: NullPolicy) -> StatsResult<Vec<f64>> {
        let mut values = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let record = item.as_record().ok_or_else(|| {
                StatsError::field_access(Some(field), index, "item is not a record")
            })?;
            let value = record.get_field(field);
            if value.is_null() {
                match nulls {
                    NullPolicy::DropNull => continue,
                    NullPolicy::ErrorOnNull => {
                        return Err(StatsError::field_access(Some(field), index, "value is null"))
                    }
                }
            }
            let number = value.as_f64().ok_or_else(|| {
                StatsError::field_access(Some(field), index, "value is not numeric")
            })?;
            values.push(number);
        }
        Ok(values)
    }

    /// Operands for the moment statistics: the projected field, or the items
    fn data(&self, field: Option<&str>) -> StatsResult<Vec<f64>> {
        match field {
            Some(field) => self.project(field, NullPolicy::DropNull),
            None => base::scalars(self.items),
        }
    }

    /// Sum of a field over a record set, or of the items themselves
    ///
    /// # Arguments
    /// * `field` - Field to project; ignored unless the sample holds records
    ///
    /// # Returns
    /// * Sum of the non-null values (0 for an empty sample)
    /// * `FieldAccess` if an item lacks the capability or a value is not numeric
    pub fn sum(&self, field: Option<&str>) -> StatsResult<f64> {
        match self.record_field(field) {
            Some(field) => Ok(base::sum(&self.project(field, NullPolicy::DropNull)?)),
            None => Ok(base::sum(&base::scalars(self.items)?)),
        }
    }

    /// Sum of `field` divided by the number of items (null rows included).
    ///
    /// # Returns
    /// * The mean, 0 for an empty sample
    /// * `FieldAccess` under the same conditions as [`Sample::sum`]
    pub fn mean(&self, field: Option<&str>) -> StatsResult<f64> {
        match self.record_field(field) {
            Some(field) => {
                if self.items.is_empty() {
                    return Ok(0.0);
                }
                Ok(self.sum(Some(field))? / self.items.len() as f64)
            }
            None => Ok(base::mean(&base::scalars(self.items)?)),
        }
    }

    pub fn average(&self, field: Option<&str>) -> StatsResult<f64> {
        self.mean(field)
    }

    pub fn avg(&self, field: Option<&str>) -> StatsResult<f64> {
        self.mean(field)
    }

    /// Number of items whose `field` is not null; number of items otherwise
    pub fn count(&self, field: Option<&str>) -> StatsResult<usize> {
        let Some(field) = self.record_field(field) else {
            return Ok(base::count(&base::scalars(self.items)?));
        };

        let mut present = 0;
        for (index, item) in self.items.iter().enumerate() {
            let record = item.as_record().ok_or_else(|| {
                StatsError::field_access(Some(field), index, "item is not a record")
            })?;
            if !record.get_field(field).is_null() {
                present += 1;
            }
        }
        Ok(present)
    }

    /// Largest value of `field`, or of the items
    ///
    /// # Returns
    /// * The maximum by numeric ordering
    /// * `EmptyInput` for an empty sample
    /// * `FieldAccess` if a record's value is null or not numeric
    pub fn max(&self, field: Option<&str>) -> StatsResult<f64> {
        match self.record_field(field) {
            Some(field) => base::max(&self.project(field, NullPolicy::ErrorOnNull)?),
            None => base::max(&base::scalars(self.items)?),
        }
    }

    pub fn maximum(&self, field: Option<&str>) -> StatsResult<f64> {
        self.max(field)
    }

    /// Smallest value of `field`, or of the items. Fails like [`Sample::max`].
    pub fn min(&self, field: Option<&str>) -> StatsResult<f64> {
        match self.record_field(field) {
            Some(field) => base::min(&self.project(field, NullPolicy::ErrorOnNull)?),
            None => base::min(&base::scalars(self.items)?),
        }
    }

    pub fn minimum(&self, field: Option<&str>) -> StatsResult<f64> {
        self.min(field)
    }

    /// Population variance, `(1/n) * sum((x - mean)^2)`
    ///
    /// # Arguments
    /// * `field` - Field to project; `None` reads the items as scalars
    ///
    /// # Returns
    /// * `None` when there is no data (nulls are dropped)
    /// * `FieldAccess` if a field is given for scalars, or none for records
    pub fn sample_variance(&self, field: Option<&str>) -> StatsResult<Option<f64>> {
        Ok(moments::variance(&self.data(field)?))
    }

    pub fn standard_deviation(&self, field: Option<&str>) -> StatsResult<Option<f64>> {
        Ok(moments::standard_deviation(&self.data(field)?))
    }

    /// Middle value of `field`, or of the items
    ///
    /// # Arguments
    /// * `field` - Field to project; `None` reads the items as scalars
    /// * `options` - `already_sorted` skips sorting the extracted data
    ///
    /// # Returns
    /// * Mean of the two central values for even lengths, `None` when empty
    pub fn median(&self, field: Option<&str>, options: &MedianOptions) -> StatsResult<Option<f64>> {
        let mut data = self.data(field)?;
        Ok(moments::median(&mut data, options.already_sorted))
    }

    /// Most frequent value(s) among those occurring more than once
    ///
    /// # Arguments
    /// * `field` - Field to project; `None` reads the items as scalars
    /// * `options` - `find_all` returns every value tied for the top count
    ///
    /// # Returns
    /// * `None` when no value repeats
    pub fn mode(&self, field: Option<&str>, options: &ModeOptions) -> StatsResult<Option<Mode>> {
        Ok(moments::mode(&self.data(field)?, options.find_all))
    }
}
