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

use sky_common::{
    cartesian3::Cartesian3,
    geo_constants::{EQUATORIAL_EARTH_RADIUS_KM, E2_EARTH},
    atan2, sin, sin2, cos, sqrt, pow2
};

/// fixed number of geodetic latitude refinements. This is not convergence checked so that results are
/// bit-identical with reference computations
pub const ALTITUDE_ITERATIONS: usize = 20;

/// compute altitude in km above the WGS84 ellipsoid for an ECI position in km.
///
/// Since we only need the altitude we can skip the sidereal time (GMST) rotation that a full ECI to
/// lat/lon/alt conversion requires. The geodetic latitude is obtained by fixed-point iteration starting
/// from the geocentric latitude, and the altitude follows from the last latitude estimate:
/// ```text
///   C   = 1 / √(1 - e²·sin²(φ))
///   φ'  = atan2( z + a·C·e²·sin(φ), ρ)
///   alt = ρ / cos(φ) - a·C
/// ```
/// Positions on (or very close to) the polar axis (ρ = 0) are a known degenerate case of this formulation: the
/// result is returned as computed (it is no longer the distance to the ellipsoid and can be non-finite) and has
/// to be flagged by the caller, see [`is_polar_axis_position`]
pub fn geodetic_altitude (pos: &Cartesian3) -> f64 {
    let a = EQUATORIAL_EARTH_RADIUS_KM;
    let e2 = E2_EARTH;

    let rho = sqrt( pow2(pos.x) + pow2(pos.y)); // distance from polar axis
    let mut lat = atan2( pos.z, rho);

    let mut c = 0.0;
    for _ in 0..ALTITUDE_ITERATIONS {
        c = 1.0 / sqrt( 1.0 - e2 * sin2(lat));
        lat = atan2( pos.z + (a * c * e2 * sin(lat)), rho);
    }

    (rho / cos(lat)) - (a * c)
}

/// is pos on the polar axis, i.e. a position for which [`geodetic_altitude`] is degenerate
pub fn is_polar_axis_position (pos: &Cartesian3) -> bool {
    pos.x == 0.0 && pos.y == 0.0
}
