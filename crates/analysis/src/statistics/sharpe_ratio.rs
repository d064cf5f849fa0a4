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

use crate::{
    statistic::ReturnStatistic,
    statistics::{annualized_return::AnnualizedReturn, annualized_volatility::AnnualizedVolatility},
};

/// Calculates the annualized Sharpe ratio of returns.
///
/// `(annualized return - risk-free rate) / annualized volatility`, with a yearly
/// risk-free rate of 4% by default. A zero volatility yields an infinite ratio, or NaN
/// when the excess return is also zero.
///
/// # References
///
/// - Sharpe, W. F. (1994). The Sharpe Ratio. *Journal of Portfolio Management*, 21(1), 49-58.
#[repr(C)]
#[derive(Debug, Clone)]
pub struct SharpeRatio {
    scale: u32,
    risk_free_rate: f64,
}

impl SharpeRatio {
    /// Creates a new [`SharpeRatio`] instance.
    #[must_use]
    pub fn new(scale: Option<u32>, risk_free_rate: Option<f64>) -> Self {
        Self {
            scale: scale.unwrap_or(252),
            risk_free_rate: risk_free_rate.unwrap_or(0.04),
        }
    }
}

impl Display for SharpeRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sharpe Ratio")
    }
}

impl ReturnStatistic for SharpeRatio {
    type Item = f64;

    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(&self, returns: &[f64]) -> Option<Self::Item> {
        if !self.check_valid_returns(returns) {
            return Some(f64::NAN);
        }

        let annual_return = AnnualizedReturn::new(Some(self.scale)).calculate_from_returns(returns)?;
        let volatility = AnnualizedVolatility::new(Some(self.scale)).calculate_from_returns(returns)?;

        Some((annual_return - self.risk_free_rate) / volatility)
    }
}

#[cfg(test)]
mod tests {
    use portmetrics_core::{approx_eq, math::compounded_growth};
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_empty_returns() {
        let ratio = SharpeRatio::new(None, None);
        assert!(ratio.calculate_from_returns(&[]).unwrap().is_nan());
    }

    #[rstest]
    fn test_zero_std_dev_is_infinite() {
        let ratio = SharpeRatio::new(None, Some(0.0));
        let result = ratio.calculate_from_returns(&[0.25; 10]).unwrap();
        assert!(result.is_infinite() && result > 0.0);
    }

    #[rstest]
    fn test_zero_excess_and_zero_std_dev_is_nan() {
        let ratio = SharpeRatio::new(None, Some(0.0));
        assert!(ratio.calculate_from_returns(&[0.0; 10]).unwrap().is_nan());
    }

    #[rstest]
    fn test_valid_sharpe_ratio() {
        let returns = [0.01, -0.02, 0.015, -0.005, 0.025];
        let ratio = SharpeRatio::new(Some(12), Some(0.02));

        let annual_return = compounded_growth(&returns).powf(12.0 / 5.0) - 1.0;
        let volatility = portmetrics_core::math::std(&returns) * 12.0_f64.sqrt();
        let expected = (annual_return - 0.02) / volatility;

        let result = ratio.calculate_from_returns(&returns).unwrap();
        assert!(approx_eq!(f64, result, expected, epsilon = 1e-12));
    }

    #[rstest]
    fn test_name() {
        assert_eq!(SharpeRatio::new(None, None).name(), "Sharpe Ratio");
    }
}
