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

//! Roll-forward valuation of a weighted portfolio.

use chrono::NaiveDate;
use indexmap::IndexMap;
use portmetrics_core::{AssetId, PriceTable, ValuationTable};

use crate::{error::PortfolioError, schedule::WeightSchedule};

/// Rolls `prices` forward under `schedule`, returning the dollar value held in each asset.
///
/// For each interval between consecutive rebalancing dates, prices are rebased to the
/// interval's first row, multiplied by the weights in force at its start and by the
/// portfolio value carried over from the previous interval (1 at the first date). The last
/// row's sum is carried into the next interval, whose boundary row is not repeated.
///
/// Rows after the last rebalancing date are rolled forward with the last weights, so the
/// table spans from the first rebalancing date to the end of `prices`. Assets without a
/// weight carry value 0.
///
/// # Errors
///
/// Returns an error if:
/// - A rebalancing date has no price row ([`PortfolioError::MissingPriceRow`]).
/// - A weighted asset has no price column ([`PortfolioError::UnknownAsset`]).
pub fn calculate_portvals(
    prices: &PriceTable,
    schedule: &WeightSchedule,
) -> Result<ValuationTable, PortfolioError> {
    if schedule.len() < 2 {
        return Err(PortfolioError::InsufficientSchedule(schedule.len()));
    }

    if let Some(asset) = schedule
        .weighted_assets()
        .find(|asset| !prices.contains_asset(asset))
    {
        return Err(PortfolioError::UnknownAsset(*asset));
    }

    let dates = schedule.dates();
    let mut boundaries: Vec<(NaiveDate, usize)> = Vec::with_capacity(dates.len() + 1);
    for date in &dates {
        let pos = prices
            .position(*date)
            .ok_or(PortfolioError::MissingPriceRow(*date))?;
        boundaries.push((*date, pos));
    }

    // Trailing interval up to the last price row
    if let Some(&(last_date, last_pos)) = boundaries.last()
        && last_pos + 1 < prices.len()
    {
        boundaries.push((last_date, prices.len() - 1));
    }

    let mut value = 1.0;
    let mut valuation: Option<ValuationTable> = None;

    for pair in boundaries.windows(2) {
        let (rebalance_date, start) = pair[0];
        let (_, end) = pair[1];

        let interval = roll_interval(prices, schedule, rebalance_date, start, end, value)?;
        value = interval.row(interval.len() - 1).iter().sum();

        log::debug!(
            "Rolled {} rows from {} with weights of {rebalance_date}, value={value}",
            interval.len(),
            prices.index()[start],
        );

        match valuation.as_mut() {
            None => valuation = Some(interval),
            Some(table) => table.extend(&interval.slice_rows(1..interval.len()))?,
        }
    }

    Ok(valuation.unwrap_or_default())
}

fn roll_interval(
    prices: &PriceTable,
    schedule: &WeightSchedule,
    rebalance_date: NaiveDate,
    start: usize,
    end: usize,
    value: f64,
) -> Result<ValuationTable, PortfolioError> {
    let total_weight: f64 = prices
        .assets()
        .map(|asset| schedule.weight(rebalance_date, asset))
        .sum();
    if total_weight == 0.0 {
        log::warn!("Weights of {rebalance_date} allocate nothing to priced assets");
    }

    let columns: IndexMap<AssetId, Vec<f64>> = prices
        .columns()
        .iter()
        .map(|(asset, column)| {
            let weight = schedule.weight(rebalance_date, asset);
            let base = column[start];
            let values = column[start..=end]
                .iter()
                .map(|price| price / base * weight * value)
                .collect();
            (*asset, values)
        })
        .collect();

    Ok(ValuationTable::new(
        prices.index()[start..=end].to_vec(),
        columns,
    )?)
}

////////////////////////////////////////////////////////////////////////////////
// Tests
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use portmetrics_core::{
        AssetTable, approx_eq,
        stubs::{date, price_table, table},
    };
    use rstest::rstest;
    use ustr::Ustr;

    use super::*;

    fn weights(pairs: &[(&str, f64)]) -> IndexMap<AssetId, f64> {
        pairs
            .iter()
            .map(|(asset, weight)| (Ustr::from(*asset), *weight))
            .collect()
    }

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(approx_eq!(f64, *a, *e, epsilon = 1e-12), "{actual:?} != {expected:?}");
        }
    }

    #[rstest]
    fn test_single_asset_reproduces_normalized_path() {
        let prices = table(&[("SPY", &[100.0, 110.0, 99.0, 121.0])]);
        let schedule =
            WeightSchedule::constant(&[date(2024, 1, 1), date(2024, 1, 3)], &weights(&[("SPY", 1.0)]))
                .unwrap();

        let valuation = calculate_portvals(&prices, &schedule).unwrap();

        assert_eq!(valuation.index(), prices.index());
        assert_close(valuation.column(&Ustr::from("SPY")).unwrap(), &[1.0, 1.1, 0.99, 1.21]);
    }

    #[rstest]
    fn test_schedule_ending_on_last_row_has_no_trailing_interval() {
        let prices = table(&[("SPY", &[100.0, 110.0, 99.0, 121.0])]);
        let schedule =
            WeightSchedule::constant(&[date(2024, 1, 1), date(2024, 1, 4)], &weights(&[("SPY", 1.0)]))
                .unwrap();

        let valuation = calculate_portvals(&prices, &schedule).unwrap();
        assert_eq!(valuation.len(), 4);
        assert_close(valuation.row_sums().values(), &[1.0, 1.1, 0.99, 1.21]);
    }

    #[rstest]
    fn test_rebalance_resets_weights(price_table: AssetTable) {
        // 50/50 on day 0, all TLT from day 2
        let mut rows = std::collections::BTreeMap::new();
        rows.insert(date(2024, 1, 1), weights(&[("SPY", 0.5), ("TLT", 0.5)]));
        rows.insert(date(2024, 1, 3), weights(&[("TLT", 1.0)]));
        let schedule = WeightSchedule::new(rows).unwrap();

        let valuation = calculate_portvals(&price_table, &schedule).unwrap();

        // Both assets follow the same path, so the total tracks it through the rebalance
        assert_close(valuation.row_sums().values(), &[1.0, 1.1, 0.99, 1.21]);
        assert_close(valuation.column(&Ustr::from("SPY")).unwrap(), &[0.5, 0.55, 0.495, 0.0]);
        assert_close(valuation.column(&Ustr::from("TLT")).unwrap(), &[0.5, 0.55, 0.495, 1.21]);
    }

    #[rstest]
    fn test_unallocated_weight_is_not_invested(price_table: AssetTable) {
        let schedule = WeightSchedule::constant(
            &[date(2024, 1, 1), date(2024, 1, 2)],
            &weights(&[("SPY", 0.5)]),
        )
        .unwrap();

        let valuation = calculate_portvals(&price_table, &schedule).unwrap();

        // Each interval invests half of the value carried into it
        assert_close(valuation.row_sums().values(), &[0.5, 0.55, 0.2475, 0.15125]);
    }

    #[rstest]
    fn test_missing_price_row(price_table: AssetTable) {
        let schedule = WeightSchedule::constant(
            &[date(2024, 1, 1), date(2024, 2, 1)],
            &weights(&[("SPY", 1.0)]),
        )
        .unwrap();

        assert_eq!(
            calculate_portvals(&price_table, &schedule),
            Err(PortfolioError::MissingPriceRow(date(2024, 2, 1)))
        );
    }

    #[rstest]
    fn test_unknown_asset(price_table: AssetTable) {
        let schedule = WeightSchedule::constant(
            &[date(2024, 1, 1), date(2024, 1, 2)],
            &weights(&[("QQQ", 1.0)]),
        )
        .unwrap();

        assert_eq!(
            calculate_portvals(&price_table, &schedule),
            Err(PortfolioError::UnknownAsset(Ustr::from("QQQ")))
        );
    }

    #[rstest]
    fn test_starts_at_first_rebalancing_date(price_table: AssetTable) {
        let schedule = WeightSchedule::constant(
            &[date(2024, 1, 2), date(2024, 1, 3)],
            &weights(&[("SPY", 1.0)]),
        )
        .unwrap();

        let valuation = calculate_portvals(&price_table, &schedule).unwrap();
        assert_eq!(valuation.index().first(), Some(&date(2024, 1, 2)));
        assert_close(valuation.row_sums().values(), &[1.0, 0.9, 1.1]);
    }
}
