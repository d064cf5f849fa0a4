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

//! Synthetic cash asset.

use portmetrics_core::PriceTable;
use ustr::Ustr;

use crate::error::PortfolioError;

/// Column name of the synthetic cash asset.
pub const CASH: &str = "CASH";

/// Returns `prices` with a `CASH` column compounding `yearly_rfr / days_in_year` per row.
///
/// The first row already holds one period of interest, so the column starts at
/// `1 + yearly_rfr / days_in_year`.
///
/// # Errors
///
/// Returns an error if `prices` already holds a `CASH` column.
pub fn add_cash(
    prices: &PriceTable,
    days_in_year: u32,
    yearly_rfr: f64,
) -> Result<PriceTable, PortfolioError> {
    let rate = yearly_rfr / f64::from(days_in_year);
    let values: Vec<f64> = (1..=prices.len())
        .scan(1.0, |acc, _| {
            *acc *= 1.0 + rate;
            Some(*acc)
        })
        .collect();

    Ok(prices.with_column(Ustr::from(CASH), values)?)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
