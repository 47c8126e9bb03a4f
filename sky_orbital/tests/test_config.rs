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
#![allow(unused)]

use std::path::PathBuf;
use sky_orbital::{config::{parse_config, load_config, CatalogConfig}, SkyOrbitalError};

#[test]
fn test_example_config () {
    let config = parse_config( include_str!("../configs/catalog.ron")).unwrap();
    println!("{config:?}");
    assert_eq!( config, CatalogConfig::default());
}

#[test]
fn test_partial_config () {
    let config = parse_config( r#"CatalogConfig( catalog: "/tmp/active.3le", num_workers: Some(3) )"#).unwrap();
    assert_eq!( config.catalog, PathBuf::from("/tmp/active.3le"));
    assert_eq!( config.num_workers, Some(3));
    assert_eq!( config.indent, "\t"); // default

    let config = parse_config( "( indent: \"  \" )").unwrap();
    assert_eq!( config.catalog, PathBuf::from("data/3le"));
    assert_eq!( config.indent, "  ");
}

#[test]
fn test_invalid_config () {
    match parse_config( "CatalogConfig( num_workers: \"many\" )") {
        Err(SkyOrbitalError::ConfigError(e)) => println!("expected error: {e}"),
        other => panic!("expected config error, got {:?}", other)
    }

    let path = PathBuf::from( env!("CARGO_MANIFEST_DIR")).join("configs/catalog.ron");
    assert!( load_config( &path).is_ok());
    assert!( matches!( load_config( &path.with_extension("missing")), Err(SkyOrbitalError::IOError(_))));
}
