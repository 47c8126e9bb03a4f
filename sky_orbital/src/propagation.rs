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

use std::{fmt, io::Write};
use chrono::{DateTime,Utc};
use rayon::{prelude::*, ThreadPoolBuilder};
use serde::{Serialize,Deserialize};
use serde_json::ser::{PrettyFormatter,Serializer};
use tracing::{debug,info,warn};
use sky_common::cartesian3::Cartesian3;
use crate::{
    altitude::{geodetic_altitude, is_polar_axis_position},
    catalog::ElementRecord,
    errors::{op_failed, SkyOrbitalError, Result},
    kinematics::{angular_kinematics, dead_reckon, AngularKinematics},
    propagator::Propagator
};

/// the propagated state of one satellite at the epoch of its PropagationReport.
/// Serialized field names ("name","satnum","r","v","altitude","w","speed") are what clients expect
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct SatelliteState {
    pub name: String,

    #[serde(rename="satnum")]
    pub catalog_number: String, // 5 chars, zero padded

    #[serde(rename="r")]
    pub position: Cartesian3,   // ECI km

    #[serde(rename="v")]
    pub velocity: Cartesian3,   // ECI km/s

    pub altitude: f64,          // km above ellipsoid

    #[serde(rename="w")]
    pub angular_velocity_direction: Cartesian3, // unit vector, zero if angular_speed is 0

    #[serde(rename="speed")]
    pub angular_speed: f64      // rad/s
}

impl SatelliteState {
    pub fn kinematics (&self)->AngularKinematics {
        AngularKinematics { direction: self.angular_velocity_direction, speed: self.angular_speed }
    }

    /// approximate ECI position `dt` seconds after epoch without re-running the propagator
    pub fn dead_reckoned_position (&self, dt: f64)->Cartesian3 {
        dead_reckon( &self.position, &self.kinematics(), dt)
    }
}

/// a per-satellite problem, identified by catalog index and name
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct SatelliteDiagnostic {
    pub index: usize,
    pub name: String,
    pub reason: String
}

impl fmt::Display for SatelliteDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] '{}': {}", self.index, self.name, self.reason)
    }
}

/// the result of propagating one satellite: its state plus data quality notes (degenerate geometry)
#[derive(Debug,Clone)]
pub struct PropagatedSatellite {
    pub state: SatelliteState,
    pub notes: Vec<String>
}

/// the outcome of one propagation pass over a catalog.
/// `states` are in catalog order and exclude `failures`. `notes` refer to satellites that are included in
/// `states` but have degenerate geometry
#[derive(Debug,Clone)]
pub struct PropagationReport {
    pub epoch: DateTime<Utc>,
    pub states: Vec<SatelliteState>,
    pub failures: Vec<SatelliteDiagnostic>,
    pub notes: Vec<SatelliteDiagnostic>
}

impl PropagationReport {
    pub fn n_processed (&self)->usize {
        self.states.len() + self.failures.len()
    }

    pub fn is_complete (&self)->bool {
        self.failures.is_empty()
    }
}

/// propagate a single ElementRecord to `epoch` and derive altitude and angular kinematics from the result
pub fn propagate_one<P> (record: &ElementRecord, epoch: &DateTime<Utc>, propagator: &P) -> Result<PropagatedSatellite>
    where P: Propagator + ?Sized
{
    let (position, velocity) = propagator.propagate( &record.line1, &record.line2, epoch)?;
    let altitude = geodetic_altitude( &position);
    let kinematics = angular_kinematics( &position, &velocity);

    let mut notes: Vec<String> = Vec::new();
    if is_polar_axis_position( &position) {
        notes.push( format!("position on polar axis, altitude {altitude} is degenerate"));
    } else if !altitude.is_finite() {
        notes.push( format!("non-finite altitude for position {position}"));
    }
    if kinematics.is_degenerate() {
        notes.push( "degenerate orbit state (zero angular speed), using zero angular velocity direction".to_string());
    }

    let state = SatelliteState {
        name: record.name.clone(),
        catalog_number: record.catalog_number(),
        position,
        velocity,
        altitude,
        angular_velocity_direction: kinematics.direction,
        angular_speed: kinematics.speed
    };

    Ok( PropagatedSatellite { state, notes } )
}

/// propagate all `records` to `epoch` on a pool of `num_workers` threads (None: number of available cores).
/// Failures are satellite scoped - they are reported in the returned PropagationReport and do not abort
/// the pass. The only error returned from here is a failure to create the worker pool
pub fn propagate_all<P> (records: &[ElementRecord], epoch: &DateTime<Utc>, propagator: &P, num_workers: Option<usize>) -> Result<PropagationReport>
    where P: Propagator + ?Sized
{
    let pool = ThreadPoolBuilder::new()
        .num_threads( num_workers.unwrap_or(0)) // 0 means rayon default (available cores)
        .build()
        .map_err(|e| op_failed!("failed to create propagation worker pool: {e}"))?;

    // indexed parallel map - results are collected in catalog order regardless of completion order
    let outcomes: Vec<Result<PropagatedSatellite>> = pool.install(|| {
        records.par_iter().map( |record| propagate_one( record, epoch, propagator)).collect()
    });

    let mut states: Vec<SatelliteState> = Vec::with_capacity( records.len());
    let mut failures: Vec<SatelliteDiagnostic> = Vec::new();
    let mut notes: Vec<SatelliteDiagnostic> = Vec::new();

    for (index, (record, outcome)) in records.iter().zip( outcomes).enumerate() {
        match outcome {
            Ok(sat) => {
                debug!("propagated {} '{}': alt={:.3} km, speed={:e} rad/s", sat.state.catalog_number, record.name, sat.state.altitude, sat.state.angular_speed);
                for reason in sat.notes {
                    warn!("data quality note for '{}': {}", record.name, reason);
                    notes.push( SatelliteDiagnostic { index, name: record.name.clone(), reason });
                }
                states.push( sat.state);
            }
            Err(e) => {
                warn!("propagation of '{}' failed: {}", record.name, e);
                failures.push( SatelliteDiagnostic { index, name: record.name.clone(), reason: e.to_string() });
            }
        }
    }

    info!("propagated {} of {} satellites to {} ({} failed, {} notes)", states.len(), records.len(), epoch, failures.len(), notes.len());
    Ok( PropagationReport { epoch: *epoch, states, failures, notes } )
}

/// write states as a JSON array, pretty printed with the provided indentation
pub fn write_states_json<W: Write> (writer: W, states: &[SatelliteState], indent: &str) -> Result<()> {
    let formatter = PrettyFormatter::with_indent( indent.as_bytes());
    let mut ser = Serializer::with_formatter( writer, formatter);
    states.serialize( &mut ser)?;
    Ok(())
}

pub fn states_to_json_string (states: &[SatelliteState], indent: &str) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_states_json( &mut buf, states, indent)?;
    String::from_utf8( buf).map_err(|e| op_failed!("invalid JSON output: {e}"))
}
