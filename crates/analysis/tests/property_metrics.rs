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

//! Property-based tests for the metrics engine.
//!
//! These tests verify invariants that hold for any positive price path:
//! - Drawdown never exceeds 0 and is 0 at every running peak.
//! - Drawdown duration is 0 exactly where drawdown is 0.
//! - Rolling series match the stored return length and are masked before the window fills.

use portmetrics_analysis::{Frequency, Metrics};
use portmetrics_core::{TimeSeries, stubs::series};
use proptest::prelude::*;
use rstest::rstest;

/// Generate positive price paths of 2 to 60 observations.
fn price_path_strategy() -> impl Strategy<Value = TimeSeries> {
    prop::collection::vec(1.0f64..=1000.0f64, 2..=60).prop_map(|prices| series(&prices))
}

proptest! {
    /// Property: Drawdown is never positive and its minimum is the max drawdown.
    #[rstest]
    fn drawdown_is_never_positive(prices in price_path_strategy()) {
        let metrics = Metrics::new(prices, Frequency::Day).unwrap();
        let dd = metrics.drawdown(None);

        prop_assert!(dd.values().iter().all(|d| *d <= 0.0));
        let min = dd.values().iter().copied().fold(f64::INFINITY, f64::min);
        prop_assert_eq!(metrics.max_drawdown(None), min);
    }

    /// Property: Duration is zero exactly on observations with zero drawdown.
    #[rstest]
    fn duration_is_zero_only_at_peaks(prices in price_path_strategy()) {
        let metrics = Metrics::new(prices, Frequency::Day).unwrap();
        let dd = metrics.drawdown(None);
        let durations = metrics.drawdown_duration(None);

        for (d, duration) in dd.values().iter().zip(durations.values()) {
            prop_assert_eq!(*d == 0.0, *duration == 0);
        }
        let max = durations.values().iter().copied().max().unwrap_or(0);
        prop_assert_eq!(metrics.max_drawdown_duration(None), max);
    }

    /// Property: Rolling outputs keep the stored length and mask leading entries with 0.
    #[rstest]
    fn rolling_series_are_masked(
        prices in price_path_strategy(),
        lookback in 1usize..=12,
    ) {
        let metrics = Metrics::new(prices, Frequency::Year).unwrap();
        let years = lookback as f64;
        let n = metrics.returns().len();

        let rolling = [
            metrics.sharpe_ratio_rolling(None, Some(years), None),
            metrics.sortino_ratio_rolling(None, Some(years), None),
            metrics.var_ratio_rolling(None, Some(years), None),
            metrics.cvar_ratio_rolling(None, Some(years), None),
            metrics.hit_ratio_rolling(None, Some(years)),
            metrics.gain_to_pain_ratio_rolling(None, Some(years)),
        ];

        for series in &rolling {
            prop_assert_eq!(series.len(), n);
            prop_assert!(series.values().iter().all(|v| !v.is_nan()));
            let masked = (lookback - 1).min(n);
            prop_assert!(series.values()[..masked].iter().all(|v| *v == 0.0));
        }
    }

    /// Property: Cumulative returns reproduce the price path normalized to its first value.
    #[rstest]
    fn cumulative_returns_track_prices(prices in price_path_strategy()) {
        let first = prices.values()[0];
        let metrics = Metrics::new(prices.clone(), Frequency::Day).unwrap();

        for (cum, price) in metrics.cum_returns().values().iter().zip(prices.values()) {
            prop_assert!((cum - price / first).abs() <= 1e-9 * (price / first).max(1.0));
        }
    }
}
