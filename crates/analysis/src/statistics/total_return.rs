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

use std::fmt::{self, Display};

use portmetrics_core::math::compounded_growth;

use crate::statistic::ReturnStatistic;

/// Calculates the total growth factor `Π(1 + r)` of returns (1 for an empty series).
///
/// The result is a multiple of the starting value, not a net return.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct TotalReturn {}

impl Display for TotalReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total Return")
    }
}

impl ReturnStatistic for TotalReturn {
    type Item = f64;

    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(&self, returns: &[f64]) -> Option<Self::Item> {
        Some(compounded_growth(returns))
    }
}
