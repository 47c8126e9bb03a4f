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

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SkyOrbitalError>;
 
#[derive(Error,Debug)]
pub enum SkyOrbitalError {

   #[error("catalog error {0}")]
   CatalogError( String ),

   #[error("IO error {0}")]
   IOError( #[from] std::io::Error),

   #[error("config error {0}")]
   ConfigError( #[from] ron::error::SpannedError),

   #[error("JSON error {0}")]
   JsonError( #[from] serde_json::Error),
   
   #[error("Propagation error {0}")]
   Sgp4Error( String ),

   #[error("SGP4 element lines error {0}")]
   TleError( #[from] sgp4::TleError),

   #[error("SGP4 elements error {0}")]
   ElementsError( #[from] sgp4::ElementsError),

   #[error("SGP4 date time error {0}")]
   DatetimeError( #[from] sgp4::DatetimeToMinutesSinceEpochError),

   #[error("SGP4 propagation error {0}")]
   PropagationError( #[from] sgp4::Error),

   #[error("operation failed {0}")]
   OpFailedError(String),
}

macro_rules! catalog_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        SkyOrbitalError::CatalogError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use catalog_error;

macro_rules! sgp4_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        SkyOrbitalError::Sgp4Error( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use sgp4_error;

macro_rules! op_failed {
    ($fmt:literal $(, $arg:expr )* ) => {
        SkyOrbitalError::OpFailedError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use op_failed;
