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

/// Calculates the compound annual growth rate implied by a return series.
///
/// `(Π(1 + r))^(scale / n) - 1`, where `n` is the number of observations and `scale`
/// the number of periods per year.
#[repr(C)]
#[derive(Debug, Clone)]
pub struct AnnualizedReturn {
    scale: u32,
}

impl AnnualizedReturn {
    /// Creates a new [`AnnualizedReturn`] instance (252 periods per year by default).
    #[must_use]
    pub fn new(scale: Option<u32>) -> Self {
        Self {
            scale: scale.unwrap_or(252),
        }
    }
}

impl Display for AnnualizedReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Annualized Return")
    }
}

impl ReturnStatistic for AnnualizedReturn {
    type Item = f64;

    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(&self, returns: &[f64]) -> Option<Self::Item> {
        if !self.check_valid_returns(returns) {
            return Some(f64::NAN);
        }

        let exponent = f64::from(self.scale) / returns.len() as f64;
        Some(compounded_growth(returns).powf(exponent) - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use portmetrics_core::approx_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_empty_returns() {
        let stat = AnnualizedReturn::new(None);
        assert!(stat.calculate_from_returns(&[]).unwrap().is_nan());
    }

    #[rstest]
    fn test_zero_returns() {
        let stat = AnnualizedReturn::new(None);
        assert_eq!(stat.calculate_from_returns(&[0.0; 10]), Some(0.0));
    }

    #[rstest]
    fn test_one_year_of_monthly_returns() {
        // Twelve months of 1% compound to 1.01^12 - 1
        let stat = AnnualizedReturn::new(Some(12));
        let result = stat.calculate_from_returns(&[0.01; 12]).unwrap();
        assert!(approx_eq!(f64, result, 1.01_f64.powi(12) - 1.0, epsilon = 1e-12));
    }

    #[rstest]
    fn test_half_year_is_squared() {
        let stat = AnnualizedReturn::new(Some(2));
        let result = stat.calculate_from_returns(&[0.1]).unwrap();
        assert!(approx_eq!(f64, result, 0.21, epsilon = 1e-12));
    }

    #[rstest]
    fn test_name() {
        assert_eq!(AnnualizedReturn::new(None).name(), "Annualized Return");
    }
}
