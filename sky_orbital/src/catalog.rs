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

use std::{fmt, path::Path};
use serde::{Serialize,Deserialize};
use sky_common::{char_range, fs::filepath_lines};
use crate::errors::{catalog_error, SkyOrbitalError, Result};

/// number of consecutive text lines that make up one catalog entry (name line + two element lines)
pub const LINES_PER_RECORD: usize = 3;

/// width of the (zero padded) catalog number
pub const CATALOG_NUMBER_WIDTH: usize = 5;

/// one satellite of a three-line element catalog as we read it from the input.
/// Element lines are opaque at this level - they are validated by the propagator
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub struct ElementRecord {
    pub name: String,  // name line without its two char index prefix
    pub line1: String,
    pub line2: String,
}

impl ElementRecord {
    /// build record from the three raw catalog lines
    pub fn from_lines (line0: &str, line1: &str, line2: &str) -> Self {
        ElementRecord {
            name: char_range( line0, 2, usize::MAX).to_string(), // each name line starts with its index - ignore it
            line1: line1.to_string(),
            line2: line2.to_string()
        }
    }

    pub fn catalog_number (&self) -> String {
        catalog_number( &self.line1)
    }
}

/// the 1 or 2 trailing lines of a catalog whose line count is not a multiple of 3
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct IncompleteRecord {
    pub lines: Vec<String>
}

impl fmt::Display for IncompleteRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "incomplete 3le record, remainder: {:?}", self.lines)
    }
}

/// parser output: all complete records in catalog order plus an optional leftover
#[derive(Debug,Clone,Default)]
pub struct ParsedCatalog {
    pub records: Vec<ElementRecord>,
    pub remainder: Option<IncompleteRecord>
}

impl ParsedCatalog {
    pub fn is_complete (&self)->bool {
        self.remainder.is_none()
    }

    pub fn len (&self)->usize {
        self.records.len()
    }

    pub fn is_empty (&self)->bool {
        self.records.is_empty()
    }

    /// strict view of the catalog: a leftover turns into a CatalogError that names the leftover lines.
    /// Use the fields directly if complete records should be processed regardless
    pub fn into_result (self) -> Result<Vec<ElementRecord>> {
        match self.remainder {
            Some(rem) => Err( catalog_error!("{}", rem)),
            None => Ok( self.records )
        }
    }
}

/// turn a sequence of text lines into ElementRecords, each consuming exactly three consecutive lines.
/// If the number of lines is not a multiple of three the 1 or 2 trailing lines are returned verbatim as the
/// remainder - complete records parsed before are never discarded.
/// No validation of the element lines is performed here
pub fn parse_catalog<I,S> (lines: I) -> ParsedCatalog where I: IntoIterator<Item=S>, S: AsRef<str> {
    let mut records: Vec<ElementRecord> = Vec::new();
    let mut pending: Vec<String> = Vec::with_capacity(LINES_PER_RECORD);

    for line in lines {
        pending.push( line.as_ref().to_string());

        if pending.len() == LINES_PER_RECORD {
            records.push( ElementRecord::from_lines( &pending[0], &pending[1], &pending[2]));
            pending.clear();
        }
    }

    let remainder = if pending.is_empty() { None } else { Some( IncompleteRecord{ lines: pending }) };
    ParsedCatalog { records, remainder }
}

pub fn parse_catalog_text (text: &str) -> ParsedCatalog {
    parse_catalog( text.lines())
}

/// read and parse a 3le catalog file
pub fn load_catalog <P: AsRef<Path>> (path: &P) -> Result<ParsedCatalog> {
    let lines = filepath_lines( path)?;
    Ok( parse_catalog( lines) )
}

/// extract the catalog number from columns 3-7 of the first element line, trimmed and left padded with '0'
/// to five chars. We do not rely on any id the propagator might derive from the same field
pub fn catalog_number (line1: &str) -> String {
    format!("{:0>width$}", char_range( line1, 2, 7).trim(), width = CATALOG_NUMBER_WIDTH)
}
