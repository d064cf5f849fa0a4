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
    drawdown::max_drawdown_path, statistic::ReturnStatistic,
    statistics::annualized_return::AnnualizedReturn,
};

/// Calculates the Calmar ratio of returns: `-annualized return / max drawdown`.
///
/// The maximum drawdown is the minimum of the drawdown path implied by the same returns.
/// A series that never draws down yields an infinite ratio (or NaN with a zero return).
#[repr(C)]
#[derive(Debug, Clone)]
pub struct CalmarRatio {
    scale: u32,
}

impl CalmarRatio {
    /// Creates a new [`CalmarRatio`] instance.
    #[must_use]
    pub fn new(scale: Option<u32>) -> Self {
        Self {
            scale: scale.unwrap_or(252),
        }
    }

    /// Returns `-annual_return / max_drawdown`.
    #[must_use]
    pub fn from_parts(annual_return: f64, max_drawdown: f64) -> f64 {
        -annual_return / max_drawdown
    }
}

impl Display for CalmarRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Calmar Ratio")
    }
}

impl ReturnStatistic for CalmarRatio {
    type Item = f64;

    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(&self, returns: &[f64]) -> Option<Self::Item> {
        if !self.check_valid_returns(returns) {
            return Some(f64::NAN);
        }

        let annual_return = AnnualizedReturn::new(Some(self.scale)).calculate_from_returns(returns)?;
        Some(Self::from_parts(annual_return, max_drawdown_path(returns)))
    }
}

#[cfg(test)]
mod tests {
    use portmetrics_core::{approx_eq, stubs::series};
    use rstest::rstest;

    use super::*;
    use crate::drawdown;

    #[rstest]
    fn test_calmar_ratio() {
        // Path 1.0, 1.1, 0.99: max drawdown -10%
        let returns = [0.0, 0.1, -0.1];
        let ratio = CalmarRatio::new(Some(3));

        let result = ratio.calculate_from_returns(&returns).unwrap();
        let expected = -(0.99_f64 - 1.0) / -0.1;
        assert!(approx_eq!(f64, result, expected, epsilon = 1e-9));
    }

    #[rstest]
    fn test_uses_drawdown_series_minimum() {
        let returns = series(&[0.0, 0.05, -0.2, 0.1, -0.15, 0.3]);
        let ratio = CalmarRatio::new(Some(6));

        let annual = AnnualizedReturn::new(Some(6))
            .calculate_from_returns(returns.values())
            .unwrap();
        let expected = -annual / drawdown::max_drawdown(&returns);

        let result = ratio.calculate_from_returns(returns.values()).unwrap();
        assert!(approx_eq!(f64, result, expected, epsilon = 1e-12));
    }

    #[rstest]
    fn test_no_drawdown_is_infinite() {
        let ratio = CalmarRatio::new(None);
        let result = ratio.calculate_from_returns(&[0.0, 0.01, 0.01]).unwrap();
        assert_eq!(result, f64::NEG_INFINITY);
    }

    #[rstest]
    fn test_empty_returns() {
        assert!(CalmarRatio::new(None).calculate_from_returns(&[]).unwrap().is_nan());
    }
}
