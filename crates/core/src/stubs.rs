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

//! Type stubs to facilitate testing.

use chrono::{Duration, NaiveDate};
use indexmap::IndexMap;
use rstest::fixture;
use ustr::Ustr;

use crate::{series::TimeSeries, table::AssetTable};

/// Returns the calendar date `year-month-day`.
///
/// # Panics
///
/// Panics if the date is invalid.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid stub date")
}

/// Returns `len` consecutive calendar days starting at `start`.
#[must_use]
pub fn daily_index(start: NaiveDate, len: usize) -> Vec<NaiveDate> {
    (0..len as i64).map(|i| start + Duration::days(i)).collect()
}

/// Returns a series over consecutive days starting 2024-01-01.
///
/// # Panics
///
/// Panics if the values cannot form a series.
#[must_use]
pub fn series(values: &[f64]) -> TimeSeries {
    TimeSeries::new(daily_index(date(2024, 1, 1), values.len()), values.to_vec())
        .expect("valid stub series")
}

/// Returns a series on the given `dates`.
///
/// # Panics
///
/// Panics if the dates and values cannot form a series.
#[must_use]
pub fn series_on(dates: &[NaiveDate], values: &[f64]) -> TimeSeries {
    TimeSeries::new(dates.to_vec(), values.to_vec()).expect("valid stub series")
}

/// Returns a table over consecutive days starting 2024-01-01 with the given columns.
///
/// # Panics
///
/// Panics if the columns differ in length.
#[must_use]
pub fn table(columns: &[(&str, &[f64])]) -> AssetTable {
    let len = columns.first().map_or(0, |(_, values)| values.len());
    let columns: IndexMap<Ustr, Vec<f64>> = columns
        .iter()
        .map(|(asset, values)| (Ustr::from(*asset), values.to_vec()))
        .collect();
    AssetTable::new(daily_index(date(2024, 1, 1), len), columns).expect("valid stub table")
}

/// A four-day price path used throughout the test suites.
#[fixture]
pub fn price_path() -> TimeSeries {
    series(&[100.0, 110.0, 99.0, 121.0])
}

/// A two-asset price table whose second asset moves in lockstep with the first at half the price.
#[fixture]
pub fn price_table() -> AssetTable {
    table(&[
        ("SPY", &[100.0, 110.0, 99.0, 121.0]),
        ("TLT", &[50.0, 55.0, 49.5, 60.5]),
    ])
}
