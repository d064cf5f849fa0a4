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

use crate::statistic::ReturnStatistic;

/// Calculates the gain-to-pain ratio: `mean(positive r) / -mean(negative r)`.
///
/// NaN when the series has no gains or no losses.
///
/// # References
///
/// - Schwager, J. D. (2012). *Hedge Fund Market Wizards*. Wiley.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct GainToPain {}

impl Display for GainToPain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GtP Ratio")
    }
}

impl ReturnStatistic for GainToPain {
    type Item = f64;

    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(&self, returns: &[f64]) -> Option<Self::Item> {
        let gains: Vec<f64> = returns.iter().copied().filter(|r| *r > 0.0).collect();
        let losses: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();
        Some(mean(&gains) / -mean(&losses))
    }
}

#[cfg(test)]
mod tests {
    use portmetrics_core::approx_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_gain_to_pain() {
        let result = GainToPain::default()
            .calculate_from_returns(&[0.02, -0.01, 0.04, -0.03, 0.0])
            .unwrap();
        // mean gain 0.03, mean loss -0.02
        assert!(approx_eq!(f64, result, 1.5, epsilon = 1e-12));
    }

    #[rstest]
    fn test_no_losses_is_nan() {
        let result = GainToPain::default()
            .calculate_from_returns(&[0.01, 0.02])
            .unwrap();
        assert!(result.is_nan());
    }
}
