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

//! Drawdown and drawdown duration analytics.

use portmetrics_core::{TimeSeries, datetime::days_between};

/// Returns the drawdown path of `returns`: the cumulative return path divided by its
/// running maximum, minus 1. Every entry is at most 0.
#[must_use]
pub fn drawdown_path(returns: &[f64]) -> Vec<f64> {
    let mut cumulative = 1.0;
    let mut peak = f64::NEG_INFINITY;
    returns
        .iter()
        .map(|r| {
            cumulative *= 1.0 + r;
            peak = peak.max(cumulative);
            cumulative / peak - 1.0
        })
        .collect()
}

/// Returns the minimum of the drawdown path of `returns`, or NaN when empty.
#[must_use]
pub fn max_drawdown_path(returns: &[f64]) -> f64 {
    if returns.is_empty() {
        return f64::NAN;
    }
    drawdown_path(returns)
        .into_iter()
        .fold(f64::INFINITY, f64::min)
}

/// Returns the drawdown series of `returns`.
#[must_use]
pub fn drawdown(returns: &TimeSeries) -> TimeSeries {
    returns.with_values(drawdown_path(returns.values()))
}

/// Returns the maximum drawdown of `returns`, the minimum of its drawdown series.
///
/// Returns NaN for an empty series.
#[must_use]
pub fn max_drawdown(returns: &TimeSeries) -> f64 {
    max_drawdown_path(returns.values())
}

/// Returns how many calendar days the series has been continuously under water at each
/// observation.
///
/// The count is measured from the last observation whose drawdown was 0 (or from the first
/// observation when none was), and is exactly 0 whenever drawdown is 0.
#[must_use]
pub fn drawdown_duration(returns: &TimeSeries) -> TimeSeries<i64> {
    let dd = drawdown(returns);
    let mut durations = Vec::with_capacity(dd.len());
    let mut run_start = dd.first().map(|(date, _)| date);

    for (date, value) in dd.iter() {
        if value == 0.0 {
            run_start = Some(date);
            durations.push(0);
        } else {
            durations.push(run_start.map_or(0, |start| days_between(start, date)));
        }
    }

    dd.with_values(durations)
}

/// Returns the longest drawdown duration of `returns` in calendar days (0 when empty).
#[must_use]
pub fn max_drawdown_duration(returns: &TimeSeries) -> i64 {
    drawdown_duration(returns)
        .values()
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use portmetrics_core::{
        approx_eq,
        stubs::{date, series, series_on},
    };
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_drawdown_of_rising_series_is_zero() {
        let dd = drawdown(&series(&[0.0, 0.01, 0.02, 0.03]));
        assert!(dd.values().iter().all(|v| *v == 0.0));
        assert_eq!(max_drawdown(&series(&[0.0, 0.01, 0.02])), 0.0);
    }

    #[rstest]
    fn test_drawdown_recovers() {
        // Path 1.0, 1.1, 0.99, 1.21
        let returns = series(&[0.0, 0.1, -0.1, 121.0 / 99.0 - 1.0]);
        let dd = drawdown(&returns);

        assert_eq!(dd.values()[0], 0.0);
        assert_eq!(dd.values()[1], 0.0);
        assert!(approx_eq!(f64, dd.values()[2], -0.1, epsilon = 1e-12));
        assert_eq!(dd.values()[3], 0.0);
        assert!(approx_eq!(f64, max_drawdown(&returns), -0.1, epsilon = 1e-12));
    }

    #[rstest]
    fn test_drawdown_path_matches_series() {
        let returns = series(&[0.0, 0.05, -0.2, 0.1, -0.15, 0.3]);

        assert_eq!(drawdown(&returns).values(), drawdown_path(returns.values()).as_slice());
        assert_eq!(max_drawdown(&returns), max_drawdown_path(returns.values()));
        assert!(max_drawdown_path(&[]).is_nan());
    }

    #[rstest]
    fn test_max_drawdown_empty_is_nan() {
        assert!(max_drawdown(&TimeSeries::default()).is_nan());
        assert_eq!(max_drawdown_duration(&TimeSeries::default()), 0);
    }

    #[rstest]
    fn test_duration_counts_calendar_days_on_gapped_index() {
        let dates = [
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 5),
            date(2024, 1, 8),
            date(2024, 1, 9),
            date(2024, 1, 15),
        ];
        // Peak on Jan 2, under water Jan 5 and Jan 8, new peak Jan 9, under water Jan 15
        let returns = series_on(&dates, &[0.0, 0.1, -0.05, 0.01, 0.2, -0.1]);
        let durations = drawdown_duration(&returns);

        assert_eq!(durations.values(), &[0, 0, 3, 6, 0, 6]);
        assert_eq!(max_drawdown_duration(&returns), 6);
    }

    #[rstest]
    fn test_duration_resets_when_drawdown_returns_to_zero() {
        // Path 1.0, 0.5, 0.5, 1.0, 0.5
        let returns = series(&[0.0, -0.5, 0.0, 1.0, -0.5]);
        let durations = drawdown_duration(&returns);

        assert_eq!(durations.values(), &[0, 1, 2, 0, 1]);
    }

    #[rstest]
    fn test_duration_of_constant_series_is_zero() {
        let durations = drawdown_duration(&series(&[0.0; 5]));
        assert!(durations.values().iter().all(|d| *d == 0));
    }
}
