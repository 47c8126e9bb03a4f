/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use std::{io::Write, path::PathBuf};
use anyhow::{anyhow,Result};
use tracing::{info,warn};
use tracing_subscriber::EnvFilter;
use sky_common::{define_cli, check_cli, datetime::{parse_datetime, utc_now}};
use sky_orbital::{CatalogConfig, Sgp4Propagator, load_catalog, load_config, propagate_all, write_states_json};

define_cli! { ARGS [about="propagate a three-line element catalog and print satellite states as JSON"] =
    config: Option<String> [help="pathname of RON config file", long],
    catalog: Option<String> [help="pathname of 3le catalog file (overrides config)", long],
    date: Option<String> [help="propagation epoch as RFC 3339 date spec (default is now)", long],
    workers: Option<usize> [help="number of propagation threads (overrides config)", long]
}

fn main ()->Result<()> {
    check_cli!(ARGS);

    // log to stderr so that stdout only contains the JSON output
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::from_default_env())
        .with_writer( std::io::stderr)
        .init();

    let mut config = match &ARGS.config {
        Some(path) => load_config( path)?,
        None => CatalogConfig::default()
    };
    if let Some(catalog) = &ARGS.catalog { config.catalog = PathBuf::from(catalog) }
    if ARGS.workers.is_some() { config.num_workers = ARGS.workers }

    let epoch = match &ARGS.date {
        Some(ds) => parse_datetime( ds).ok_or_else(|| anyhow!("invalid date spec {ds}"))?,
        None => utc_now()
    };

    let catalog = load_catalog( &config.catalog)?;
    info!("loaded {} records from {:?}", catalog.len(), config.catalog);
    if let Some(rem) = &catalog.remainder {
        warn!("potentially incomplete catalog {:?}: {}", config.catalog, rem);
    }

    let report = propagate_all( &catalog.records, &epoch, &Sgp4Propagator::new(), config.num_workers)?;

    let mut stdout = std::io::stdout().lock();
    write_states_json( &mut stdout, &report.states, &config.indent)?;
    writeln!( stdout)?;

    Ok(())
}
