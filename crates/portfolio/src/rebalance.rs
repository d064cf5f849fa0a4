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

//! Rebalancing-date selection by calendar period.

use chrono::{Datelike, NaiveDate};
use portmetrics_core::{
    PriceTable, SeriesError,
    datetime::{half_year, quarter},
};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::PortfolioError;

/// The calendar period between two rebalancing dates.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum RebalancePeriod {
    Month,
    Quarter,
    HalfYear,
    Year,
}

impl RebalancePeriod {
    /// Parses a rebalancing period from its label.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::InvalidPeriod`] if `label` is not a known period.
    pub fn from_label(label: &str) -> Result<Self, PortfolioError> {
        label
            .parse()
            .map_err(|_| PortfolioError::InvalidPeriod(label.to_string()))
    }

    fn group(self, date: NaiveDate) -> (i32, u32) {
        let group = match self {
            Self::Month => date.month(),
            Self::Quarter => quarter(date),
            Self::HalfYear => half_year(date),
            Self::Year => 0,
        };
        (date.year(), group)
    }
}

/// Returns the last date of each calendar group of `index` under `period`.
///
/// `index` is expected in increasing order, as held by a price table.
#[must_use]
pub fn rebalance_dates(index: &[NaiveDate], period: RebalancePeriod) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = Vec::new();
    let mut current = None;

    for date in index {
        let group = period.group(*date);
        if current == Some(group) {
            if let Some(last) = dates.last_mut() {
                *last = *date;
            }
        } else {
            dates.push(*date);
            current = Some(group);
        }
    }
    dates
}

/// Returns the rows of `prices` observed on `dates`.
///
/// # Errors
///
/// Returns an error if:
/// - `prices` holds no row for one of `dates` ([`PortfolioError::MissingPriceRow`]).
/// - `dates` is not strictly increasing.
pub fn prices_on(prices: &PriceTable, dates: &[NaiveDate]) -> Result<PriceTable, PortfolioError> {
    prices.select_rows(dates).map_err(|e| match e {
        SeriesError::MissingRow(date) => PortfolioError::MissingPriceRow(date),
        other => PortfolioError::Series(other),
    })
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
