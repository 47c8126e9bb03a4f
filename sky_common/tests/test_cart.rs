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

use sky_common::{cartesian3::Cartesian3, HALF_PI, PI};

/// unit tests for cartesian3
/// run with "cargo test -p sky_common --test test_cart -- --nocapture"

const EPS: f64 = 1e-12;

fn assert_close (a: &Cartesian3, b: &Cartesian3) {
    println!("  {a} ≈ {b}");
    assert!( (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS && (a.z - b.z).abs() < EPS);
}

#[test]
fn test_cross () {
    let x = Cartesian3::new( 1.0, 0.0, 0.0);
    let y = Cartesian3::new( 0.0, 1.0, 0.0);
    let z = Cartesian3::new( 0.0, 0.0, 1.0);

    assert_eq!( x.cross(&y), z);
    assert_eq!( y.cross(&z), x);
    assert_eq!( z.cross(&x), y);
    assert_eq!( y.cross(&x), -z);

    let a = Cartesian3::new( 1.0, 2.0, 3.0);
    let b = Cartesian3::new( -4.0, 5.0, 0.5);
    let c = a.cross(&b);
    assert!( c.dot(&a).abs() < EPS);
    assert!( c.dot(&b).abs() < EPS);
    assert_eq!( c, Cartesian3::new( 2.0*0.5 - 3.0*5.0, 3.0*(-4.0) - 1.0*0.5, 1.0*5.0 - 2.0*(-4.0)));
}

#[test]
fn test_length () {
    let mut p = Cartesian3::new( 3.0, 4.0, 12.0);
    assert_eq!( p.length_squared(), 169.0);
    assert_eq!( p.length(), 13.0);

    p.scale_down( 13.0);
    assert!( (p.length() - 1.0).abs() < EPS);

    let u = Cartesian3::new( 0.0, 0.0, -7.0).scaled_to_unit_length();
    assert_eq!( u, Cartesian3::new( 0.0, 0.0, -1.0));

    assert!( Cartesian3::zero().is_zero());
    assert!( !Cartesian3::new( f64::NAN, 0.0, 0.0).is_finite());
}

#[test]
fn test_rotation () {
    let z_axis = Cartesian3::new( 0.0, 0.0, 1.0);
    let p = Cartesian3::new( 7000.0, 0.0, 0.0);

    println!("-- quarter turn about z");
    assert_close( &(p.rotated_about( &z_axis, HALF_PI) * (1.0/7000.0)), &Cartesian3::new( 0.0, 1.0, 0.0));

    println!("-- half turn about z");
    assert_close( &(p.rotated_about( &z_axis, PI) * (1.0/7000.0)), &Cartesian3::new( -1.0, 0.0, 0.0));

    println!("-- rotation preserves length and axis component");
    let q = Cartesian3::new( 1.0, 2.0, 3.0);
    let r = q.rotated_about( &z_axis, 0.7);
    assert!( (r.length() - q.length()).abs() < EPS);
    assert!( (r.z - q.z).abs() < EPS);
}

#[test]
fn test_serde_names () {
    let p = Cartesian3::new( 1.5, -2.0, 0.25);
    let json = serde_json::to_string(&p).unwrap();
    println!("{json}");
    assert_eq!( json, r#"{"X":1.5,"Y":-2.0,"Z":0.25}"#);

    let q: Cartesian3 = serde_json::from_str(&json).unwrap();
    assert_eq!( p, q);
}
