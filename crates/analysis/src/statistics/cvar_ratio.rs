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

use portmetrics_core::math::mean;

use crate::{statistic::ReturnStatistic, statistics::value_at_risk::ConditionalValueAtRisk};

/// Calculates the CVaR ratio: `-mean(r) / CVaR(r, delta)`.
#[repr(C)]
#[derive(Debug, Clone)]
pub struct CvarRatio {
    delta: f64,
}

impl CvarRatio {
    /// Creates a new [`CvarRatio`] instance (`delta` defaults to 0.01).
    #[must_use]
    pub fn new(delta: Option<f64>) -> Self {
        Self {
            delta: delta.unwrap_or(0.01),
        }
    }
}

impl Display for CvarRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CVaR Ratio")
    }
}

impl ReturnStatistic for CvarRatio {
    type Item = f64;

    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(&self, returns: &[f64]) -> Option<Self::Item> {
        let cvar = ConditionalValueAtRisk::new(Some(self.delta)).calculate_from_returns(returns)?;
        Some(-mean(returns) / cvar)
    }
}
