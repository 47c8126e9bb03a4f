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

use chrono::{DateTime,Utc};
use sgp4::{Constants,Elements};
use sky_common::cartesian3::Cartesian3;
use crate::errors::{sgp4_error, SkyOrbitalError, Result};

/// the narrow interface to an orbit propagator: element lines and epoch in, ECI position (km) and
/// velocity (km/s) out. Implementations must not share mutable state between calls since we call
/// them concurrently from worker threads
pub trait Propagator: Sync {
    fn propagate (&self, line1: &str, line2: &str, epoch: &DateTime<Utc>) -> Result<(Cartesian3,Cartesian3)>;
}

/// Propagator implementation based on the `sgp4` crate (WGS84 geopotential). Returns TEME coordinates.
/// Each call parses its own Elements and Constants, i.e. there is no state at all
#[derive(Debug,Clone,Copy,Default)]
pub struct Sgp4Propagator;

impl Sgp4Propagator {
    pub fn new ()->Self { Sgp4Propagator }
}

impl Propagator for Sgp4Propagator {
    fn propagate (&self, line1: &str, line2: &str, epoch: &DateTime<Utc>) -> Result<(Cartesian3,Cartesian3)> {
        let elements = Elements::from_tle( None, line1.as_bytes(), line2.as_bytes())?;
        let constants = Constants::from_elements( &elements)?;
        let minutes = elements.datetime_to_minutes_since_epoch( &epoch.naive_utc())?;
        let prediction = constants.propagate( minutes)?;

        let [x,y,z] = prediction.position;
        let [vx,vy,vz] = prediction.velocity;
        let pos = Cartesian3::new( x, y, z);
        let vel = Cartesian3::new( vx, vy, vz);

        if pos.is_finite() && vel.is_finite() {
            Ok( (pos,vel) )
        } else {
            Err( sgp4_error!("non-finite state at {epoch}"))
        }
    }
}
