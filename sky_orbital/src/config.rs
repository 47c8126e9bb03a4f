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

use std::path::{Path,PathBuf};
use serde::{Serialize,Deserialize};
use sky_common::fs::filepath_contents_as_string;
use crate::errors::Result;

/// configuration for catalog propagation runs, normally read from a RON file such as
/// ```text
/// CatalogConfig(
///     catalog: "data/3le",
///     num_workers: Some(8),
///     indent: "\t",
/// )
/// ```
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub catalog: PathBuf,            // path of the three-line element catalog
    pub num_workers: Option<usize>,  // propagation threads (None: available cores)
    pub indent: String               // indentation of JSON output
}

impl Default for CatalogConfig {
    fn default ()->Self {
        CatalogConfig {
            catalog: PathBuf::from("data/3le"),
            num_workers: None,
            indent: "\t".to_string()
        }
    }
}

pub fn parse_config (input: &str) -> Result<CatalogConfig> {
    Ok( ron::from_str( input)? )
}

pub fn load_config <P: AsRef<Path>> (path: &P) -> Result<CatalogConfig> {
    let input = filepath_contents_as_string( path)?;
    parse_config( &input)
}
