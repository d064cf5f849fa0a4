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

use portmetrics_core::math::std;

use crate::{statistic::ReturnStatistic, statistics::annualized_return::AnnualizedReturn};

/// Calculates the Sortino ratio of returns as `annualized return - rfr / downside deviation`.
///
/// Only the risk-free rate is divided by the downside deviation, not the excess return.
/// This departs from the textbook `(return - rfr) / downside` and is kept so results match
/// existing reports. The yearly risk-free rate defaults to 3%.
#[repr(C)]
#[derive(Debug, Clone)]
pub struct SortinoRatio {
    scale: u32,
    risk_free_rate: f64,
}

impl SortinoRatio {
    /// Creates a new [`SortinoRatio`] instance.
    #[must_use]
    pub fn new(scale: Option<u32>, risk_free_rate: Option<f64>) -> Self {
        Self {
            scale: scale.unwrap_or(252),
            risk_free_rate: risk_free_rate.unwrap_or(0.03),
        }
    }

    /// Returns the annualized standard deviation of `returns` with every non-negative
    /// return replaced by 0.
    #[must_use]
    pub fn downside_deviation(&self, returns: &[f64]) -> f64 {
        let downside: Vec<f64> = returns.iter().map(|r| r.min(0.0)).collect();
        std(&downside) * f64::from(self.scale).sqrt()
    }
}

impl Display for SortinoRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sortino Ratio")
    }
}

impl ReturnStatistic for SortinoRatio {
    type Item = f64;

    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(&self, returns: &[f64]) -> Option<Self::Item> {
        if !self.check_valid_returns(returns) {
            return Some(f64::NAN);
        }

        let annual_return = AnnualizedReturn::new(Some(self.scale)).calculate_from_returns(returns)?;
        Some(annual_return - self.risk_free_rate / self.downside_deviation(returns))
    }
}
