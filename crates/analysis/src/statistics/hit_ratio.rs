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

use crate::statistic::ReturnStatistic;

/// Calculates the hit ratio: the share of strictly positive returns among the non-zero ones.
///
/// Zero returns count neither as hits nor as misses. A series with no non-zero return
/// yields NaN.
#[repr(C)]
#[derive(Debug, Clone, Default)]
pub struct HitRatio {}

impl Display for HitRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hit Ratio")
    }
}

impl ReturnStatistic for HitRatio {
    type Item = f64;

    fn name(&self) -> String {
        self.to_string()
    }

    fn calculate_from_returns(&self, returns: &[f64]) -> Option<Self::Item> {
        let hits = returns.iter().filter(|r| **r > 0.0).count();
        let nonzero = returns.iter().filter(|r| **r != 0.0).count();
        Some(hits as f64 / nonzero as f64)
    }
}

#[cfg(test)]
mod tests {
    use portmetrics_core::approx_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_hit_ratio_ignores_flat_periods() {
        let result = HitRatio::default()
            .calculate_from_returns(&[0.01, -0.02, 0.0, 0.03])
            .unwrap();
        assert!(approx_eq!(f64, result, 2.0 / 3.0, epsilon = 1e-12));
    }

    #[rstest]
    #[case(&[], true)]
    #[case(&[0.0, 0.0], true)]
    #[case(&[-0.01], false)]
    fn test_degenerate_inputs(#[case] returns: &[f64], #[case] is_nan: bool) {
        let result = HitRatio::default().calculate_from_returns(returns).unwrap();
        assert_eq!(result.is_nan(), is_nan);
    }
}
