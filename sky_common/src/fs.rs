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

use std::fs::{self,File};
use std::io::{Read,BufRead,BufReader};
use std::path::Path;

type Result<T> = std::result::Result<T,std::io::Error>;

pub fn file_contents_as_string (file: &mut fs::File) -> Result<String> {
    let len = file.metadata()?.len();
    let mut contents = String::with_capacity(len as usize);
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn filepath_contents_as_string <P: AsRef<Path>> (path: &P) -> Result<String> {
    let mut file = File::open(path)?;
    file_contents_as_string( &mut file)
}

/// read all lines of a text file (without "\n" or "\r\n" terminators). Invalid UTF-8 sequences do not fail
/// the whole file, they are replaced with U+FFFD in the line they occur
pub fn filepath_lines <P: AsRef<Path>> (path: &P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    BufReader::new(file).split(b'\n').map( |res| res.map( |bytes| lossy_line( &bytes))).collect()
}

fn lossy_line (bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix( b"\r").unwrap_or( bytes);
    String::from_utf8_lossy( bytes).into_owned()
}
