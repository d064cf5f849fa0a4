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

//! Target weights keyed by rebalancing date.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use indexmap::IndexMap;
use portmetrics_core::{AssetId, AssetTable};
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Target weights per asset, one row per rebalancing date.
///
/// Weights need not sum to 1; the remainder is implicitly unallocated. An asset missing
/// from a row carries weight 0 on that date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightSchedule {
    rows: BTreeMap<NaiveDate, IndexMap<AssetId, f64>>,
}

impl WeightSchedule {
    /// Creates a new [`WeightSchedule`] instance.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InsufficientSchedule`] if fewer than 2 dates are given.
    pub fn new(rows: BTreeMap<NaiveDate, IndexMap<AssetId, f64>>) -> Result<Self, PortfolioError> {
        if rows.len() < 2 {
            return Err(PortfolioError::InsufficientSchedule(rows.len()));
        }
        Ok(Self { rows })
    }

    /// Creates a schedule holding the same `weights` on every one of `dates`.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InsufficientSchedule`] if fewer than 2 distinct dates are given.
    pub fn constant(
        dates: &[NaiveDate],
        weights: &IndexMap<AssetId, f64>,
    ) -> Result<Self, PortfolioError> {
        Self::new(dates.iter().map(|date| (*date, weights.clone())).collect())
    }

    /// Creates a schedule from a table with one weight column per asset.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InsufficientSchedule`] if the table has fewer than 2 rows.
    pub fn from_table(table: &AssetTable) -> Result<Self, PortfolioError> {
        let rows = table
            .index()
            .iter()
            .enumerate()
            .map(|(pos, date)| {
                let weights = table
                    .columns()
                    .iter()
                    .map(|(asset, column)| (*asset, column[pos]))
                    .collect();
                (*date, weights)
            })
            .collect();
        Self::new(rows)
    }

    /// Returns the number of rebalancing dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the schedule holds no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the rebalancing dates in increasing order.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.rows.keys().copied().collect()
    }

    /// Returns the weights in force on `date`, if it is a rebalancing date.
    #[must_use]
    pub fn weights(&self, date: NaiveDate) -> Option<&IndexMap<AssetId, f64>> {
        self.rows.get(&date)
    }

    /// Returns the weight of `asset` on rebalancing `date`, 0 when absent.
    #[must_use]
    pub fn weight(&self, date: NaiveDate, asset: &AssetId) -> f64 {
        self.weights(date)
            .and_then(|weights| weights.get(asset))
            .copied()
            .unwrap_or(0.0)
    }

    /// Returns every asset carrying a non-zero weight on some date.
    pub fn weighted_assets(&self) -> impl Iterator<Item = &AssetId> {
        self.rows
            .values()
            .flat_map(|weights| weights.iter())
            .filter(|(_, weight)| **weight != 0.0)
            .map(|(asset, _)| asset)
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
