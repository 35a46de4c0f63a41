// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::parser::Parser;
use std::env;
use std::process;

/// The integer which is returned from main() if the program exits with any
/// error.
pub(crate) const EXIT_FAILURE: i32 = 1;

/// Returns the current program's parameters (accessed essentialy via
/// `std::env::args`) collected into a Vec. The 0'th parameter (the executable)
/// is omitted.
pub fn get_program_parameters() -> Vec<String> {
    env::args()
        .skip(1) // Skip the first argument, which is our executable.
        .collect()
}

/// Parses the given command-line parameters, treating any parse failure as
/// fatal: the error is printed to standard error and the process exits with a
/// failure code, before any of the caller's logic runs against a partially
/// resolved parser.
///
/// Like `std::process::exit`, because the failure path terminates the
/// process, no destructors on the current stack or any other thread's stack
/// will be run. Callers who want to handle the failure themselves should use
/// Parser::parse, which surfaces it as an Error instead.
pub fn parse_or_exit(parser: &mut Parser, parameters: &[String]) {
    if let Err(e) = parser.parse(parameters) {
        eprintln!("{}", e);
        process::exit(EXIT_FAILURE);
    }
}
