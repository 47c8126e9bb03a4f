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

use std::ops::{Add, Mul, Neg};
use serde::{Serialize,Deserialize};

/// an ordered (x,y,z) triple of f64 values that is used for cartesian ECI coordinates (km, km/s) and for
/// abstract directions such as angular velocity axes. Arithmetic never implies any frame conversion - callers
/// have to make sure operands are in the same frame.
/// Note that we do not use uom here since the same type is also used for unitless direction vectors.
/// The serialized component names are upper case ("X","Y","Z") as expected by our clients.
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
pub struct Cartesian3 {
    #[serde(rename="X")] pub x: f64,
    #[serde(rename="Y")] pub y: f64,
    #[serde(rename="Z")] pub z: f64
}

impl Cartesian3 {
    pub fn new (x: f64, y: f64, z: f64)->Cartesian3 {
        Cartesian3{x,y,z}
    }

    pub fn zero ()->Cartesian3 {
        Cartesian3{x: 0.0, y: 0.0, z: 0.0}
    }

    pub fn is_zero (&self)->bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    pub fn is_finite (&self)->bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// right handed cross product self × p
    pub fn cross (&self, p: &Cartesian3)->Self {
        Cartesian3 {
            x: (self.y * p.z) - (self.z * p.y),
            y: (self.z * p.x) - (self.x * p.z),
            z: (self.x * p.y) - (self.y * p.x)
        }
    }

    pub fn dot(&self, p: &Cartesian3) -> f64 {
        (self.x * p.x) + (self.y * p.y) + (self.z * p.z)
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        (self.x * self.x) + (self.y * self.y) + (self.z * self.z)
    }

    /// divide all components by k. This does not check for k == 0
    pub fn scale_down (&mut self, k: f64) {
        self.x /= k;
        self.y /= k;
        self.z /= k;
    }

    pub fn scale_to_unit_length(&mut self) {
        let length = self.length();
        self.scale_down( length);
    }

    pub fn scaled_to_unit_length(&self)->Self {
        let mut p = *self;
        p.scale_to_unit_length();
        p
    }

    /// rotate around a unit length axis by angle (in radians, right hand rule) using Rodrigues' formula
    pub fn rotated_about (&self, axis: &Cartesian3, angle: f64)->Self {
        let cos_a = angle.cos();
        let sin_a = angle.sin();

        (self * cos_a) + (axis.cross(self) * sin_a) + (axis * (axis.dot(self) * (1.0 - cos_a)))
    }
}

impl std::fmt::Display for Cartesian3 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

impl Add for Cartesian3 {
    type Output = Self;

     fn add (self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z
        }
    }
}

impl Neg for Cartesian3 {
    type Output = Self;

    fn neg (self) -> Self {
        Self { x: -self.x, y: -self.y, z: -self.z }
    }
}

impl Mul<f64> for Cartesian3 {
    type Output = Self;

     fn mul (self, rhs: f64) -> Self {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs
        }
    }
}

impl Mul<f64> for &Cartesian3 {
    type Output = Cartesian3;

     fn mul (self, rhs: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs
        }
    }
}
