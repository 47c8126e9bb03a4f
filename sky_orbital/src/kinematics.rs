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

use serde::{Serialize,Deserialize};
use sky_common::cartesian3::Cartesian3;

/// instantaneous rotation of a satellite position vector about the orbit normal.
/// This is what clients use to dead-reckon positions between SGP4 runs
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct AngularKinematics {
    pub direction: Cartesian3, // unit orbit normal (r × v), zero vector if degenerate
    pub speed: f64             // rad/s, never negative
}

impl AngularKinematics {
    /// the fallback for collinear r,v or zero |r|: no rotation, zero direction vector
    pub const DEGENERATE: AngularKinematics = AngularKinematics { direction: Cartesian3{ x: 0.0, y: 0.0, z: 0.0 }, speed: 0.0 };

    pub fn is_degenerate (&self)->bool {
        self.speed == 0.0
    }

    /// the (non-normalized) angular velocity vector in rad/s
    pub fn angular_velocity (&self)->Cartesian3 {
        self.direction * self.speed
    }
}

/// compute angular velocity direction and angular speed of position `r` (km) with velocity `v` (km/s), both of
/// which have to be in the same frame.
/// ```text
///   w     = (r × v) / |r|²
///   speed = |w|
///   dir   = w / speed
/// ```
/// If r and v are collinear, r is zero or the result is not finite we return [`AngularKinematics::DEGENERATE`]
pub fn angular_kinematics (r: &Cartesian3, v: &Cartesian3) -> AngularKinematics {
    let r2 = r.length_squared();
    if !(r2 > 0.0 && r2.is_finite()) {
        return AngularKinematics::DEGENERATE
    }

    let mut w = r.cross(v);
    w.scale_down( r2);

    let speed = w.length();
    if speed > 0.0 && speed.is_finite() {
        w.scale_down( speed);
        AngularKinematics { direction: w, speed }
    } else {
        AngularKinematics::DEGENERATE
    }
}

/// approximate position `dt` seconds after `pos` was obtained by rotating it about the angular velocity axis.
/// Negative `dt` reckons backwards. Degenerate kinematics leave the position unchanged
pub fn dead_reckon (pos: &Cartesian3, kinematics: &AngularKinematics, dt: f64) -> Cartesian3 {
    if kinematics.is_degenerate() {
        *pos
    } else {
        pos.rotated_about( &kinematics.direction, kinematics.speed * dt)
    }
}
