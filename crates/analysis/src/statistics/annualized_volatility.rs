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

use crate::statistic::ReturnStatistic;

/// Calculates the annualized volatility of returns: `std(r) × sqrt(scale)`.
#[repr(C)]
#[derive(Debug, Clone)]
pub struct AnnualizedVolatility {
    scale: u32,
}

impl AnnualizedVolatility {
    /// Creates a new [`AnnualizedVolatility`] instance (252 periods per year by default).
    #[must_use]
    pub fn new(scale: Option<u32>) -> Self {
        Self {
            scale: scale.unwrap_or(252),
        }
    }
}

impl Display for AnnualizedVolatility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Annualized Volatility")
    }
}

impl ReturnStatistic for AnnualizedVolatility {
    type Item = f64;

    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(&self, returns: &[f64]) -> Option<Self::Item> {
        Some(std(returns) * f64::from(self.scale).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use portmetrics_core::approx_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_single_return_is_nan() {
        let stat = AnnualizedVolatility::new(None);
        assert!(stat.calculate_from_returns(&[0.01]).unwrap().is_nan());
    }

    #[rstest]
    fn test_constant_returns_have_zero_volatility() {
        let stat = AnnualizedVolatility::new(None);
        assert_eq!(stat.calculate_from_returns(&[0.0; 5]), Some(0.0));
    }

    #[rstest]
    fn test_scales_by_root_of_periods() {
        // Sample std of [0.01, -0.01] = sqrt(0.0002)
        let stat = AnnualizedVolatility::new(Some(4));
        let result = stat.calculate_from_returns(&[0.01, -0.01]).unwrap();
        assert!(approx_eq!(f64, result, 0.0002_f64.sqrt() * 2.0, epsilon = 1e-12));
    }
}
