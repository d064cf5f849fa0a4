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

use portmetrics_core::math::{mean, quantile};

use crate::statistic::ReturnStatistic;

/// Calculates the historical Value-at-Risk: the `delta`-quantile of returns.
///
/// The quantile interpolates linearly between the closest ranks. `delta` defaults to 0.01.
#[repr(C)]
#[derive(Debug, Clone)]
pub struct ValueAtRisk {
    delta: f64,
}

impl ValueAtRisk {
    /// Creates a new [`ValueAtRisk`] instance.
    #[must_use]
    pub fn new(delta: Option<f64>) -> Self {
        Self {
            delta: delta.unwrap_or(0.01),
        }
    }
}

impl Display for ValueAtRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VaR")
    }
}

impl ReturnStatistic for ValueAtRisk {
    type Item = f64;

    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(&self, returns: &[f64]) -> Option<Self::Item> {
        Some(quantile(returns, self.delta))
    }
}

/// Calculates the Conditional Value-at-Risk: the mean of returns at or below the
/// [`ValueAtRisk`] cutoff.
#[repr(C)]
#[derive(Debug, Clone)]
pub struct ConditionalValueAtRisk {
    delta: f64,
}

impl ConditionalValueAtRisk {
    /// Creates a new [`ConditionalValueAtRisk`] instance.
    #[must_use]
    pub fn new(delta: Option<f64>) -> Self {
        Self {
            delta: delta.unwrap_or(0.01),
        }
    }
}

impl Display for ConditionalValueAtRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CVaR")
    }
}

impl ReturnStatistic for ConditionalValueAtRisk {
    type Item = f64;

    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(&self, returns: &[f64]) -> Option<Self::Item> {
        let cutoff = ValueAtRisk::new(Some(self.delta)).calculate_from_returns(returns)?;
        let tail: Vec<f64> = returns.iter().copied().filter(|r| *r <= cutoff).collect();
        Some(mean(&tail))
    }
}

#[cfg(test)]
mod tests {
    use portmetrics_core::approx_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_median_of_symmetric_returns_is_zero() {
        let var = ValueAtRisk::new(Some(0.5));
        let result = var
            .calculate_from_returns(&[-0.02, -0.01, 0.0, 0.01, 0.02])
            .unwrap();
        assert!(approx_eq!(f64, result, 0.0, epsilon = 1e-12));
    }

    #[rstest]
    fn test_var_interpolates_lower_tail() {
        // Rank 0.01 * 4 = 0.04 between -0.05 and -0.01
        let var = ValueAtRisk::new(None);
        let result = var
            .calculate_from_returns(&[0.02, -0.05, 0.01, -0.01, 0.03])
            .unwrap();
        assert!(approx_eq!(f64, result, -0.05 + 0.04 * 0.04, epsilon = 1e-12));
    }

    #[rstest]
    fn test_cvar_is_mean_of_tail() {
        let cvar = ConditionalValueAtRisk::new(Some(0.5));
        let result = cvar
            .calculate_from_returns(&[-0.04, -0.02, 0.0, 0.02, 0.04])
            .unwrap();
        assert!(approx_eq!(f64, result, -0.02, epsilon = 1e-12));
    }

    #[rstest]
    fn test_cvar_includes_exact_cutoff() {
        let cvar = ConditionalValueAtRisk::new(Some(0.0));
        assert_eq!(cvar.calculate_from_returns(&[0.1, -0.3, 0.2]), Some(-0.3));
    }

    #[rstest]
    fn test_empty_returns_are_nan() {
        assert!(ValueAtRisk::new(None).calculate_from_returns(&[]).unwrap().is_nan());
        assert!(
            ConditionalValueAtRisk::new(None)
                .calculate_from_returns(&[])
                .unwrap()
                .is_nan()
        );
    }
}
