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

#![deny(
    anonymous_parameters,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![warn(bare_trait_objects, unreachable_pub, unused_qualifications)]

//! cmdargs is a small library for parsing command-line arguments. A program
//! declares the flags, key/value arguments, and named positional arguments it
//! accepts, hands the parser its raw argv tokens, and then reads the resolved
//! values back through typed accessors. The parser can also render a help
//! listing describing every declared argument.

/// argument defines the declaration model: the kinds of argument a parser can
/// accept, and the structure describing a single declared argument.
pub mod argument;
/// error defines error types specific to cmdargs.
pub mod error;
/// help renders human-readable descriptions of a parser's declared arguments.
pub mod help;
/// io controls where cmdargs writes its help and diagnostic output.
pub mod io;
/// main_impl provides conveniences for writing a typical main() on top of
/// this library.
pub mod main_impl;
/// parser defines the argument parser itself, along with its declaration API
/// and value accessors.
pub mod parser;

#[cfg(test)]
mod tests;

// Re-export most commonly used symbols, to allow using this library with just
// one "use".

pub use crate::argument::{Argument, Kind, Value};
pub use crate::error::{Error, Result};
pub use crate::main_impl::{get_program_parameters, parse_or_exit};
pub use crate::parser::Parser;
