// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! A date-indexed series of observations.

use std::ops::Range;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SeriesError;

/// An ordered sequence of `(date, value)` observations with a strictly increasing index.
///
/// Used for price/value series, return series, drawdown series and drawdown durations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries<T = f64> {
    index: Vec<NaiveDate>,
    values: Vec<T>,
}

impl<T: Copy> TimeSeries<T> {
    /// Creates a new [`TimeSeries`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `index` and `values` differ in length.
    /// - `index` is not strictly increasing.
    pub fn new(index: Vec<NaiveDate>, values: Vec<T>) -> Result<Self, SeriesError> {
        if index.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                index: index.len(),
                values: values.len(),
            });
        }

        if let Some(pair) = index.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(SeriesError::NonIncreasingIndex(pair[1]));
        }

        Ok(Self { index, values })
    }

    /// Creates a series sharing `index` without re-validating it.
    ///
    /// Callers guarantee `index` is already a validated series index.
    pub(crate) fn from_parts(index: Vec<NaiveDate>, values: Vec<T>) -> Self {
        debug_assert_eq!(index.len(), values.len());
        Self { index, values }
    }

    /// Returns a new series over the same index with `values` replaced.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not match the length of the index.
    #[must_use]
    pub fn with_values<U: Copy>(&self, values: Vec<U>) -> TimeSeries<U> {
        assert_eq!(
            self.index.len(),
            values.len(),
            "replacement values must match the index length"
        );
        TimeSeries::from_parts(self.index.clone(), values)
    }

    /// Returns a new series with `f` applied to every value.
    #[must_use]
    pub fn map<U: Copy>(&self, f: impl FnMut(T) -> U) -> TimeSeries<U> {
        TimeSeries::from_parts(
            self.index.clone(),
            self.values.iter().copied().map(f).collect(),
        )
    }

    /// Returns the sub-series covering the positional `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Self {
        Self::from_parts(
            self.index[range.clone()].to_vec(),
            self.values[range].to_vec(),
        )
    }

    /// Returns the number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns whether the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the date index.
    #[must_use]
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// Returns the values.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Returns the first observation, if any.
    #[must_use]
    pub fn first(&self) -> Option<(NaiveDate, T)> {
        Some((*self.index.first()?, *self.values.first()?))
    }

    /// Returns the last observation, if any.
    #[must_use]
    pub fn last(&self) -> Option<(NaiveDate, T)> {
        Some((*self.index.last()?, *self.values.last()?))
    }

    /// Returns the value observed on `date`, if any.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<T> {
        self.index
            .binary_search(&date)
            .ok()
            .map(|pos| self.values[pos])
    }

    /// Returns an iterator over the `(date, value)` observations.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, T)> + '_ {
        self.index.iter().copied().zip(self.values.iter().copied())
    }
}

impl TimeSeries<f64> {
    /// Checks that every value is a positive finite number, as required of prices.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending observation.
    pub fn check_positive(&self) -> Result<(), SeriesError> {
        match self.iter().find(|(_, value)| !(value.is_finite() && *value > 0.0)) {
            Some((date, value)) => Err(SeriesError::NonPositiveValue { date, value }),
            None => Ok(()),
        }
    }
}

impl<T> Default for TimeSeries<T> {
    fn default() -> Self {
        Self {
            index: Vec::new(),
            values: Vec::new(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
