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

//! Common date functions.

use chrono::{Datelike, NaiveDate};

/// Number of trading days in a year, the base of all annualization scales.
pub const TRADING_DAYS_IN_YEAR: u32 = 252;

/// Returns the number of calendar days from `start` to `end` (negative if `end` is earlier).
#[must_use]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Returns the calendar quarter (1 to 4) of `date`.
#[must_use]
pub fn quarter(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

/// Returns the calendar half-year (0 for January to June, 1 for July to December) of `date`.
#[must_use]
pub fn half_year(date: NaiveDate) -> u32 {
    date.month() / 7
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
