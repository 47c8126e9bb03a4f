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
#![allow(unused,uncommon_codepoints)]

use sky_common::{cartesian3::Cartesian3, geo_constants::{EQUATORIAL_EARTH_RADIUS_KM, POLAR_EARTH_RADIUS_KM, E2_EARTH}};
use sky_orbital::altitude::{geodetic_altitude, is_polar_axis_position};

const EPS: f64 = 1e-6; // km

/// ECI position for geodetic latitude (deg), longitude (deg) and height (km) - this is the inverse of what we test
fn from_geodetic (lat_deg: f64, lon_deg: f64, h: f64) -> Cartesian3 {
    let φ = lat_deg.to_radians();
    let λ = lon_deg.to_radians();
    let n = EQUATORIAL_EARTH_RADIUS_KM / (1.0 - E2_EARTH * φ.sin() * φ.sin()).sqrt();

    Cartesian3::new( (n + h) * φ.cos() * λ.cos(), (n + h) * φ.cos() * λ.sin(), (n * (1.0 - E2_EARTH) + h) * φ.sin())
}

#[test]
fn test_equator () {
    let alt = geodetic_altitude( &Cartesian3::new( EQUATORIAL_EARTH_RADIUS_KM, 0.0, 0.0));
    println!("altitude on equator: {alt}");
    assert!( alt.abs() < EPS);

    let alt = geodetic_altitude( &Cartesian3::new( 0.0, -(EQUATORIAL_EARTH_RADIUS_KM + 400.0), 0.0));
    println!("altitude 400km above equator: {alt}");
    assert!( (alt - 400.0).abs() < EPS);
}

#[test]
fn test_geodetic_heights () {
    let cases: Vec<(f64,f64,f64)> = vec![
        ( 45.0, 0.0, 400.0),
        ( -30.0, 120.0, 825.0),
        ( 80.0, -75.0, 1000.0),
        ( 60.0, 57.3, 0.0),
        ( -89.0, 10.0, 550.0),
        ( 12.5, 200.0, 35786.0),
    ];

    for (lat, lon, h) in cases {
        let p = from_geodetic( lat, lon, h);
        let alt = geodetic_altitude( &p);
        println!("  lat={lat:6.1}, lon={lon:6.1}, h={h:8.1} -> {alt:.9}");
        assert!( (alt - h).abs() < EPS);
    }
}

#[test]
fn test_determinism () {
    let p = Cartesian3::new( -4400.594, 1932.870, 4760.712);
    let alt = geodetic_altitude( &p);
    for _ in 0..10 {
        assert_eq!( geodetic_altitude( &p).to_bits(), alt.to_bits());
    }
}

#[test]
fn test_polar_axis () {
    // documented degenerate case: result is returned as computed, not the height above the pole
    let p = Cartesian3::new( 0.0, 0.0, POLAR_EARTH_RADIUS_KM + 500.0);
    assert!( is_polar_axis_position( &p));

    let alt = geodetic_altitude( &p);
    let expected = -(EQUATORIAL_EARTH_RADIUS_KM * EQUATORIAL_EARTH_RADIUS_KM / POLAR_EARTH_RADIUS_KM);
    println!("polar axis altitude: {alt} (expected degenerate value {expected})");
    assert!( (alt - expected).abs() < EPS);

    assert!( !is_polar_axis_position( &Cartesian3::new( 1e-9, 0.0, 7000.0)));
}
