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

//! Date-indexed tables holding one column per asset.

use std::{collections::BTreeMap, ops::Range};

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{AssetId, error::SeriesError, series::TimeSeries};

/// A date-indexed table with one `f64` column per asset, every row complete.
///
/// Column order is the insertion order of the assets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetTable {
    index: Vec<NaiveDate>,
    columns: IndexMap<AssetId, Vec<f64>>,
}

/// A table of asset prices, one row per trading date.
pub type PriceTable = AssetTable;

/// A table of per-asset dollar values inside a portfolio.
pub type ValuationTable = AssetTable;

impl AssetTable {
    /// Creates a new [`AssetTable`] instance.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `index` is not strictly increasing.
    /// - Any column length differs from the index length.
    pub fn new(
        index: Vec<NaiveDate>,
        columns: IndexMap<AssetId, Vec<f64>>,
    ) -> Result<Self, SeriesError> {
        if let Some(pair) = index.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(SeriesError::NonIncreasingIndex(pair[1]));
        }

        if let Some(column) = columns.values().find(|column| column.len() != index.len()) {
            return Err(SeriesError::LengthMismatch {
                index: index.len(),
                values: column.len(),
            });
        }

        Ok(Self { index, columns })
    }

    /// Builds a table from per-asset series.
    ///
    /// The series are outer-joined on their dates, then every row missing a value for any
    /// asset is dropped, so the resulting table holds a value for every asset on every row.
    #[must_use]
    pub fn from_series(series: IndexMap<AssetId, TimeSeries>) -> Self {
        let mut rows: BTreeMap<NaiveDate, Vec<Option<f64>>> = BTreeMap::new();
        let width = series.len();

        for (col, s) in series.values().enumerate() {
            for (date, value) in s.iter() {
                rows.entry(date).or_insert_with(|| vec![None; width])[col] = Some(value);
            }
        }

        let mut index = Vec::with_capacity(rows.len());
        let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(rows.len()); width];

        for (date, row) in rows {
            if row.iter().any(Option::is_none) {
                continue;
            }
            index.push(date);
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value.unwrap_or(f64::NAN));
            }
        }

        Self {
            index,
            columns: series.into_keys().zip(columns).collect(),
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the number of asset columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Returns the date index.
    #[must_use]
    pub fn index(&self) -> &[NaiveDate] {
        &self.index
    }

    /// Returns the asset identifiers in column order.
    pub fn assets(&self) -> impl Iterator<Item = &AssetId> {
        self.columns.keys()
    }

    /// Returns whether the table holds a column for `asset`.
    #[must_use]
    pub fn contains_asset(&self, asset: &AssetId) -> bool {
        self.columns.contains_key(asset)
    }

    /// Returns the column for `asset`, if present.
    #[must_use]
    pub fn column(&self, asset: &AssetId) -> Option<&[f64]> {
        self.columns.get(asset).map(Vec::as_slice)
    }

    /// Returns the columns in order.
    #[must_use]
    pub fn columns(&self) -> &IndexMap<AssetId, Vec<f64>> {
        &self.columns
    }

    /// Returns the column for `asset` as a [`TimeSeries`].
    ///
    /// # Errors
    ///
    /// Returns an error if the table holds no such column.
    pub fn series(&self, asset: &AssetId) -> Result<TimeSeries, SeriesError> {
        let column = self
            .column(asset)
            .ok_or(SeriesError::UnknownAsset(*asset))?;
        Ok(TimeSeries::from_parts(self.index.clone(), column.to_vec()))
    }

    /// Returns the row position of `date`, if the table holds that row.
    #[must_use]
    pub fn position(&self, date: NaiveDate) -> Option<usize> {
        self.index.binary_search(&date).ok()
    }

    /// Returns the values of row `pos` in column order.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    #[must_use]
    pub fn row(&self, pos: usize) -> Vec<f64> {
        self.columns.values().map(|column| column[pos]).collect()
    }

    /// Returns the row-wise sum across assets as a series.
    #[must_use]
    pub fn row_sums(&self) -> TimeSeries {
        let mut sums = vec![0.0; self.index.len()];
        for column in self.columns.values() {
            for (sum, value) in sums.iter_mut().zip(column) {
                *sum += value;
            }
        }
        TimeSeries::from_parts(self.index.clone(), sums)
    }

    /// Returns the rows covering the positional `range`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds.
    #[must_use]
    pub fn slice_rows(&self, range: Range<usize>) -> Self {
        Self {
            index: self.index[range.clone()].to_vec(),
            columns: self
                .columns
                .iter()
                .map(|(asset, column)| (*asset, column[range.clone()].to_vec()))
                .collect(),
        }
    }

    /// Returns the rows observed on `dates`, in the order given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The table holds no row for one of `dates`.
    /// - `dates` is not strictly increasing.
    pub fn select_rows(&self, dates: &[NaiveDate]) -> Result<Self, SeriesError> {
        let mut positions = Vec::with_capacity(dates.len());
        for date in dates {
            positions.push(self.position(*date).ok_or(SeriesError::MissingRow(*date))?);
        }

        if let Some(pair) = dates.windows(2).find(|pair| pair[1] <= pair[0]) {
            return Err(SeriesError::NonIncreasingIndex(pair[1]));
        }

        Ok(Self {
            index: dates.to_vec(),
            columns: self
                .columns
                .iter()
                .map(|(asset, column)| (*asset, positions.iter().map(|&p| column[p]).collect()))
                .collect(),
        })
    }

    /// Returns a copy of the table with `values` appended as the `asset` column.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The table already holds a column for `asset`.
    /// - `values` does not match the row count.
    pub fn with_column(&self, asset: AssetId, values: Vec<f64>) -> Result<Self, SeriesError> {
        if self.columns.contains_key(&asset) {
            return Err(SeriesError::DuplicateAsset(asset));
        }

        if values.len() != self.index.len() {
            return Err(SeriesError::LengthMismatch {
                index: self.index.len(),
                values: values.len(),
            });
        }

        let mut table = self.clone();
        table.columns.insert(asset, values);
        Ok(table)
    }

    /// Appends the rows of `other`, which must hold the same asset columns and start
    /// strictly after the last row of `self`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The first row of `other` does not follow the last row of `self`.
    /// - `other` is missing one of the asset columns.
    pub fn extend(&mut self, other: &Self) -> Result<(), SeriesError> {
        if let (Some(last), Some(first)) = (self.index.last(), other.index.first())
            && first <= last
        {
            return Err(SeriesError::NonIncreasingIndex(*first));
        }

        for (asset, column) in &mut self.columns {
            let values = other
                .columns
                .get(asset)
                .ok_or(SeriesError::UnknownAsset(*asset))?;
            column.extend_from_slice(values);
        }
        self.index.extend_from_slice(&other.index);
        Ok(())
    }

    /// Checks that every value is a positive finite number, as required of prices.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending observation.
    pub fn check_positive(&self) -> Result<(), SeriesError> {
        for column in self.columns.values() {
            if let Some((pos, value)) = column
                .iter()
                .enumerate()
                .find(|(_, value)| !(value.is_finite() && **value > 0.0))
            {
                return Err(SeriesError::NonPositiveValue {
                    date: self.index[pos],
                    value: *value,
                });
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
