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

//! Simple and cumulative return construction from value series.

use portmetrics_core::{AssetTable, TimeSeries};

/// Returns the simple percentage returns of `values`.
///
/// The first return is 0 (no prior observation), every later return is
/// `value[i] / value[i - 1] - 1`. Undefined changes are reported as 0.
#[must_use]
pub fn simple_returns(values: &TimeSeries) -> TimeSeries {
    let v = values.values();
    let returns = (0..v.len())
        .map(|i| {
            if i == 0 {
                return 0.0;
            }
            let r = v[i] / v[i - 1] - 1.0;
            if r.is_nan() { 0.0 } else { r }
        })
        .collect();
    values.with_values(returns)
}

/// Returns the cumulative growth path `Π(1 + r)` of `returns`.
#[must_use]
pub fn cumulative_returns(returns: &TimeSeries) -> TimeSeries {
    let mut acc = 1.0;
    returns.map(|r| {
        acc *= 1.0 + r;
        acc
    })
}

/// Returns the portfolio value series of `table`, the row-wise sum of its asset values.
#[must_use]
pub fn portfolio_value(table: &AssetTable) -> TimeSeries {
    table.row_sums()
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////
