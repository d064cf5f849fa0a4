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

use portmetrics_portfolio::{RebalancePeriod, prices_on, rebalance_dates};

use crate::{loader::read_table, opt::RebalanceOpt};

pub fn run_rebalance(opt: &RebalanceOpt) -> anyhow::Result<()> {
    let period = RebalancePeriod::from_label(&opt.period)?;
    let prices = read_table(&opt.prices, None)?;
    let dates = rebalance_dates(prices.index(), period);
    log::info!("Selected {} {period} rebalancing dates", dates.len());

    if !opt.with_prices {
        for date in &dates {
            println!("{date}");
        }
        return Ok(());
    }

    let selected = prices_on(&prices, &dates)?;
    let assets: Vec<&str> = selected.assets().map(|asset| asset.as_str()).collect();
    println!("date,{}", assets.join(","));
    for (pos, date) in selected.index().iter().enumerate() {
        let row: Vec<String> = selected.row(pos).iter().map(f64::to_string).collect();
        println!("{date},{}", row.join(","));
    }
    Ok(())
}
