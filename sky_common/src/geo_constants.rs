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

/// common geodetic constants that should be consistent throughout all sky crates.
/// Note these are kilometer based since SGP4 output and all derived quantities use km and km/s

/// semi major axis in km
pub const EQUATORIAL_EARTH_RADIUS_KM: f64 = 6378.137;

/// semi minor axis in km
pub const POLAR_EARTH_RADIUS_KM: f64 = 6356.7523142;

/// flattening f = (a - b) / a
pub const F_EARTH: f64 = (EQUATORIAL_EARTH_RADIUS_KM - POLAR_EARTH_RADIUS_KM) / EQUATORIAL_EARTH_RADIUS_KM;

/// first eccentricity squared e² = 2f - f²
pub const E2_EARTH: f64 = (2.0 * F_EARTH) - (F_EARTH * F_EARTH);
