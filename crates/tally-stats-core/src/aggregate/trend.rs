//! Trend lines over a sample
//!
//! A sample of scalars is regressed as-is against its index. A record set is
//! regressed on the values of one field.

use super::{base, Sample};
use crate::errors::{StatsError, StatsResult};
use crate::models::LinearRegression;
use crate::record::Observation;
use crate::types::NullPolicy;

impl<'a, T: Observation> Sample<'a, T> {
    /// OLS line through the sample, `None` for an empty sample.
    ///
    /// Records need an explicit `field`.
    pub fn linear_model(&self, field: Option<&str>) -> StatsResult<Option<LinearRegression>> {
        let Some(first) = self.items.first() else {
            return Ok(None);
        };

        let series = if first.as_scalar().is_some() {
            base::scalars(self.items)?
        } else {
            let field = field.filter(|_| first.is_record()).ok_or_else(|| {
                StatsError::field_access(field, 0, "regression needs records and a field name")
            })?;
            self.project(field, NullPolicy::ErrorOnNull)?
        };

        LinearRegression::new(&series).map(Some)
    }

    /// Fitted values of the OLS line at every index
    ///
    /// # Returns
    /// * `None` for an empty sample
    /// * `FieldAccess` for a record set without `field`, or on null values
    pub fn regression(&self, field: Option<&str>) -> StatsResult<Option<Vec<f64>>> {
        Ok(self.linear_model(field)?.map(|model| model.fit()))
    }

    /// Slope of the OLS line through the sample against its index
    ///
    /// # Arguments
    /// * `field` - Field to regress on a record set. When absent, the first
    ///   numeric field of the first record is used.
    ///
    /// # Returns
    /// * `None` for an empty sample
    /// * `FieldResolution` if no field was given and none is numeric
    /// * `FieldAccess` if a value is null or not numeric
    pub fn slope(&self, field: Option<&str>) -> StatsResult<Option<f64>> {
        let Some(first) = self.items.first() else {
            return Ok(None);
        };

        let series = if first.as_scalar().is_some() {
            base::scalars(self.items)?
        } else {
            let field = match field {
                Some(field) => field.to_owned(),
                None => self.first_numeric_field()?,
            };
            self.project(&field, NullPolicy::ErrorOnNull)?
        };

        Ok(Some(LinearRegression::new(&series)?.slope()))
    }

    pub fn trend(&self, field: Option<&str>) -> StatsResult<Option<f64>> {
        self.slope(field)
    }

    /// Name of the first attribute of the first record holding a number
    pub fn first_numeric_field(&self) -> StatsResult<String> {
        let record = self
            .items
            .first()
            .and_then(|first| first.as_record())
            .ok_or_else(|| StatsError::field_access(None, 0, "slope needs a record set"))?;

        record
            .attributes()
            .into_iter()
            .find(|(_, value)| value.is_numeric())
            .map(|(name, _)| name)
            .ok_or(StatsError::FieldResolution)
    }
}
