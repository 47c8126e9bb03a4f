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

//! propagation of three-line element catalogs into per-satellite states (ECI position/velocity, altitude
//! above the WGS84 ellipsoid and angular kinematics that allow clients to dead-reckon positions between runs)

pub mod errors;
pub mod catalog;
pub mod altitude;
pub mod kinematics;
pub mod propagator;
pub mod propagation;
pub mod config;

pub use errors::{SkyOrbitalError,Result};
pub use catalog::{ElementRecord, IncompleteRecord, ParsedCatalog, parse_catalog, parse_catalog_text, load_catalog, catalog_number};
pub use altitude::geodetic_altitude;
pub use kinematics::{AngularKinematics, angular_kinematics, dead_reckon};
pub use propagator::{Propagator, Sgp4Propagator};
pub use propagation::{SatelliteState, SatelliteDiagnostic, PropagationReport, propagate_one, propagate_all, write_states_json};
pub use config::{CatalogConfig, load_config};
