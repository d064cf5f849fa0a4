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

//! Property-based tests for the roll-forward valuation.
//!
//! These tests verify invariants that hold for any positive price table and any
//! non-negative weights:
//! - Compounding the aggregated returns reproduces the total valuation.
//! - Fully invested weights reproduce a single asset's normalized price path.

use indexmap::IndexMap;
use portmetrics_core::{
    AssetTable, approx_eq,
    stubs::{daily_index, date},
};
use portmetrics_portfolio::{
    ReturnMode, WeightSchedule, calculate_portvals, cumulative_returns, daily_returns,
};
use proptest::prelude::*;
use rstest::rstest;
use ustr::Ustr;

/// Generate a two-asset price table of 3 to 40 rows with a weight pair and a rebalance step.
fn scenario_strategy() -> impl Strategy<Value = (AssetTable, (f64, f64), usize)> {
    (3usize..=40)
        .prop_flat_map(|len| {
            (
                prop::collection::vec(1.0f64..=500.0f64, len),
                prop::collection::vec(1.0f64..=500.0f64, len),
                (0.0f64..=1.0f64, 0.0f64..=1.0f64),
                1usize..len,
            )
        })
        .prop_map(|(a, b, weights, step)| {
            let index = daily_index(date(2024, 1, 1), a.len());
            let columns = IndexMap::from([(Ustr::from("A"), a), (Ustr::from("B"), b)]);
            (AssetTable::new(index, columns).unwrap(), weights, step)
        })
}

fn schedule_for(prices: &AssetTable, (wa, wb): (f64, f64), step: usize) -> WeightSchedule {
    let dates: Vec<_> = prices.index().iter().step_by(step).copied().collect();
    let weights = IndexMap::from([(Ustr::from("A"), wa), (Ustr::from("B"), wb)]);
    WeightSchedule::constant(&dates, &weights).unwrap()
}

proptest! {
    /// Property: Cumulative returns of the aggregated valuation track the total value.
    #[rstest]
    fn cumulative_returns_track_total_value((prices, weights, step) in scenario_strategy()) {
        let total = weights.0 + weights.1;
        prop_assume!(total > 0.1);

        let schedule = schedule_for(&prices, (weights.0 / total, weights.1 / total), step);
        let valuation = calculate_portvals(&prices, &schedule).unwrap();
        let totals = valuation.row_sums();
        let first = totals.values()[0];

        for mode in [ReturnMode::Simple, ReturnMode::Log] {
            let daily = daily_returns(&valuation, 1, mode).unwrap();
            let cumulative = cumulative_returns(&daily, mode);
            prop_assert_eq!(cumulative.len(), totals.len());
            for (c, t) in cumulative.values().iter().zip(totals.values()) {
                let expected = t / first;
                prop_assert!((c - expected).abs() <= 1e-9 * expected.max(1.0));
            }
        }
    }

    /// Property: Valuation spans from the first rebalancing date to the last price row.
    #[rstest]
    fn valuation_spans_to_last_price((prices, weights, step) in scenario_strategy()) {
        let schedule = schedule_for(&prices, weights, step);
        let valuation = calculate_portvals(&prices, &schedule).unwrap();

        let dates = schedule.dates();
        prop_assert_eq!(valuation.index().first(), dates.first());
        prop_assert_eq!(valuation.index().last(), prices.index().last());
    }

    /// Property: A fully invested single asset reproduces its normalized price path.
    #[rstest]
    fn full_weight_reproduces_price_path((prices, _weights, step) in scenario_strategy()) {
        let schedule = schedule_for(&prices, (1.0, 0.0), step);
        let valuation = calculate_portvals(&prices, &schedule).unwrap();
        let column = prices.column(&Ustr::from("A")).unwrap();

        for (v, p) in valuation.row_sums().values().iter().zip(column) {
            prop_assert!(approx_eq!(f64, *v, p / column[0], epsilon = 1e-9));
        }
    }
}
