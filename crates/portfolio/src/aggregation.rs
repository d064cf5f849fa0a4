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

//! Aggregation of a valuation table into portfolio returns.

use portmetrics_core::{TimeSeries, ValuationTable};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::PortfolioError;

/// The return convention used when aggregating a valuation table.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReturnMode {
    /// `v[i] / v[i - N] - 1`, compounded by product.
    #[default]
    Simple,
    /// `ln(v[i] / v[i - N])`, compounded by exponentiated sum.
    Log,
}

/// Returns the `periods`-period returns of the total portfolio value in `valuation`.
///
/// The first `periods - 1` observations are dropped and returns without a prior observation
/// are reported as 0.
///
/// # Errors
///
/// Returns [`PortfolioError::InvalidPeriods`] if `periods` is 0.
pub fn daily_returns(
    valuation: &ValuationTable,
    periods: usize,
    mode: ReturnMode,
) -> Result<TimeSeries, PortfolioError> {
    if periods == 0 {
        return Err(PortfolioError::InvalidPeriods);
    }

    let total = valuation.row_sums();
    let values = total.values();
    let returns: Vec<f64> = (0..values.len())
        .map(|i| {
            if i < periods {
                return 0.0;
            }
            let ratio = values[i] / values[i - periods];
            let r = match mode {
                ReturnMode::Simple => ratio - 1.0,
                ReturnMode::Log => ratio.ln(),
            };
            if r.is_nan() { 0.0 } else { r }
        })
        .collect();

    let skip = (periods - 1).min(returns.len());
    Ok(total.with_values(returns).slice(skip..total.len()))
}

/// Returns the cumulative growth path of `returns` under `mode`.
///
/// `Π(1 + r)` for simple returns and `exp(Σ r)` for log returns.
#[must_use]
pub fn cumulative_returns(returns: &TimeSeries, mode: ReturnMode) -> TimeSeries {
    match mode {
        ReturnMode::Simple => {
            let mut acc = 1.0;
            returns.map(|r| {
                acc *= 1.0 + r;
                acc
            })
        }
        ReturnMode::Log => {
            let mut sum = 0.0;
            returns.map(|r| {
                sum += r;
                f64::exp(sum)
            })
        }
    }
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use portmetrics_core::{
        approx_eq,
        stubs::{date, table},
    };
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn valuation() -> ValuationTable {
        table(&[("SPY", &[0.5, 0.55, 0.495, 0.605]), ("TLT", &[0.5, 0.55, 0.495, 0.605])])
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(approx_eq!(f64, *a, *e, epsilon = 1e-12), "{actual:?} != {expected:?}");
        }
    }

    #[rstest]
    fn test_simple_daily_returns(valuation: ValuationTable) {
        let returns = daily_returns(&valuation, 1, ReturnMode::Simple).unwrap();
        assert_eq!(returns.len(), 4);
        assert_close(returns.values(), &[0.0, 0.1, -0.1, 1.21 / 0.99 - 1.0]);
    }

    #[rstest]
    fn test_multi_period_returns_trim_leading_rows(valuation: ValuationTable) {
        let returns = daily_returns(&valuation, 2, ReturnMode::Simple).unwrap();

        assert_eq!(returns.index().first(), Some(&date(2024, 1, 2)));
        assert_close(returns.values(), &[0.0, -0.01, 0.1]);
    }

    #[rstest]
    fn test_log_returns(valuation: ValuationTable) {
        let returns = daily_returns(&valuation, 1, ReturnMode::Log).unwrap();
        assert_close(returns.values(), &[0.0, 1.1_f64.ln(), 0.9_f64.ln(), (1.21_f64 / 0.99).ln()]);
    }

    #[rstest]
    fn test_zero_periods_is_error(valuation: ValuationTable) {
        assert_eq!(
            daily_returns(&valuation, 0, ReturnMode::Simple),
            Err(PortfolioError::InvalidPeriods)
        );
    }

    #[rstest]
    fn test_periods_longer_than_table(valuation: ValuationTable) {
        let returns = daily_returns(&valuation, 10, ReturnMode::Simple).unwrap();
        assert!(returns.is_empty());
    }

    #[rstest]
    #[case(ReturnMode::Simple)]
    #[case(ReturnMode::Log)]
    fn test_cumulative_returns_reproduce_value(valuation: ValuationTable, #[case] mode: ReturnMode) {
        let returns = daily_returns(&valuation, 1, mode).unwrap();
        let cumulative = cumulative_returns(&returns, mode);
        assert_close(cumulative.values(), &[1.0, 1.1, 0.99, 1.21]);
    }

    #[rstest]
    #[case("simple", ReturnMode::Simple)]
    #[case("log", ReturnMode::Log)]
    fn test_mode_labels(#[case] label: &str, #[case] mode: ReturnMode) {
        assert_eq!(label.parse::<ReturnMode>().unwrap(), mode);
        assert_eq!(mode.to_string(), label);
    }
}
