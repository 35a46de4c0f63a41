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

use crate::argument::{Argument, Kind};
use crate::error::Result;
use crate::parser::Parser;
use std::fmt::Write;

fn write_names<W: Write>(f: &mut W, argument: &Argument) -> Result<()> {
    write!(f, "\t--{}", argument.get_name())?;
    if let Some(short_name) = argument.get_short_name() {
        write!(f, ", -{}", short_name)?;
    }
    Ok(())
}

fn write_annotations<W: Write>(f: &mut W, argument: &Argument) -> Result<()> {
    if argument.is_required() {
        write!(f, " [Required]")?;
    }
    if let Some(default_value) = argument.get_default_value() {
        write!(f, " [Default: {}]", default_value)?;
    }
    Ok(())
}

fn write_flag_help<W: Write>(f: &mut W, argument: &Argument) -> Result<()> {
    write_names(f, argument)?;
    if let Some(help) = argument.get_help() {
        write!(f, " - {}", help)?;
    }
    write!(f, "\n")?;
    Ok(())
}

fn write_kwarg_help<W: Write>(f: &mut W, argument: &Argument) -> Result<()> {
    write_names(f, argument)?;
    if let Some(help) = argument.get_help() {
        write!(f, " - {}", help)?;
    }
    write_annotations(f, argument)?;
    write!(f, "\n")?;
    Ok(())
}

fn write_positional_help<W: Write>(f: &mut W, argument: &Argument) -> Result<()> {
    write_names(f, argument)?;
    write_annotations(f, argument)?;
    if let Some(help) = argument.get_help() {
        write!(f, " - {}", help)?;
    }
    write!(f, "\n")?;
    Ok(())
}

/// Renders the given parser's full help listing into the given writer: the
/// optional usage / description / epilog sections, and one line for each
/// declared argument, in declaration order.
pub fn print_help<W: Write>(
    f: &mut W,
    parser: &Parser,
    description: bool,
    usage: bool,
    epilog: bool,
) -> Result<()> {
    let mut s = String::new();

    if usage && !parser.get_usage().is_empty() {
        write!(s, "{}\n", parser.get_usage())?;
    }
    if description && !parser.get_description().is_empty() {
        write!(s, "{}\n", parser.get_description())?;
    }

    for argument in parser.arguments() {
        match argument.get_kind() {
            Kind::Flag => write_flag_help(&mut s, argument)?,
            Kind::KeyValue => write_kwarg_help(&mut s, argument)?,
            Kind::Positional => write_positional_help(&mut s, argument)?,
        }
    }

    if epilog && !parser.get_epilog().is_empty() {
        write!(s, "{}\n", parser.get_epilog())?;
    }

    write!(f, "{}", s)?;
    Ok(())
}
