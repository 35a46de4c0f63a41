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

use crate::argument::{find_argument, Argument, Kind, Value};
use crate::error::*;
use crate::help;
use crate::io::get_writer_impl;
use log::debug;

/// Splits a parameter token (with any leading hyphens already stripped) into
/// its name and optional inline value, on the first '=' character.
fn split_name_and_value(token: &str) -> (&str, Option<&str>) {
    let equals_idx = token.find('=');
    let name = equals_idx.map_or(token, |ei| &token[..ei]);
    let value = equals_idx.map(|ei| &token[ei + 1..]);
    (name, value)
}

/// A Parser owns an ordered set of argument declarations, and resolves raw
/// command-line parameters against them.
///
/// The expected usage is: construct a Parser, declare arguments via the add_*
/// functions, call parse (or parse_or_exit) exactly once, and then read the
/// resolved values back out via the get_* accessors. Parsing the same Parser
/// twice is unspecified.
///
/// Argument names must be unique within a Parser; this is not validated, and
/// if it is violated the earliest declaration wins every lookup. Short names
/// should likewise be unique, and likewise are not checked.
pub struct Parser {
    program: String,
    usage: String,
    description: String,
    epilog: String,
    arguments: Vec<Argument>,
}

impl Parser {
    /// Constructs a new Parser with the given program metadata. If add_help
    /// is true, a "help" flag with short name 'h' is declared up front, so
    /// callers can test for it and call print_help themselves.
    pub fn new(
        program: &str,
        usage: &str,
        description: &str,
        epilog: &str,
        add_help: bool,
    ) -> Parser {
        let mut parser = Parser {
            program: program.to_owned(),
            usage: usage.to_owned(),
            description: description.to_owned(),
            epilog: epilog.to_owned(),
            arguments: vec![],
        };
        if add_help {
            parser
                .arguments
                .push(Argument::flag(Some('h'), "help", Some("Show this help message.")));
        }
        parser
    }

    /// Returns the program name this Parser was constructed with.
    pub fn get_program(&self) -> &str {
        self.program.as_str()
    }

    /// Returns the usage line this Parser was constructed with.
    pub fn get_usage(&self) -> &str {
        self.usage.as_str()
    }

    /// Returns the program description this Parser was constructed with.
    pub fn get_description(&self) -> &str {
        self.description.as_str()
    }

    /// Returns the epilog this Parser was constructed with.
    pub fn get_epilog(&self) -> &str {
        self.epilog.as_str()
    }

    /// Returns an Iterator over this Parser's declared arguments, in
    /// declaration order.
    pub fn arguments(&self) -> impl Iterator<Item = &Argument> {
        self.arguments.iter()
    }

    fn add_argument(&mut self, argument: Argument) -> Result<()> {
        if argument.get_name().is_empty() {
            return Err(Error::InvalidArgument(
                "Argument names must be non-empty".to_owned(),
            ));
        }
        self.arguments.push(argument);
        Ok(())
    }

    /// Declares a named positional argument. count is the number of values
    /// the argument accepts; only single-value arguments are supported, so
    /// any other count is rejected up front rather than being accepted and
    /// then never populated.
    pub fn add_positional(
        &mut self,
        short_name: Option<char>,
        name: &str,
        required: bool,
        count: usize,
        default_value: Option<&str>,
        help: Option<&str>,
    ) -> Result<()> {
        if count != 1 {
            return Err(Error::InvalidArgument(format!(
                "Arguments taking {} values are not supported",
                count
            )));
        }
        self.add_argument(Argument::positional(
            short_name,
            name,
            required,
            default_value,
            help,
        ))
    }

    /// Declares a keyword argument, which takes a single value passed inline
    /// as "--name=value".
    pub fn add_kwarg(
        &mut self,
        short_name: Option<char>,
        name: &str,
        required: bool,
        default_value: Option<&str>,
        help: Option<&str>,
    ) -> Result<()> {
        self.add_argument(Argument::kwarg(
            short_name,
            name,
            required,
            default_value,
            help,
        ))
    }

    /// Declares a boolean flag. Flags are never required and have no default
    /// value.
    pub fn add_flag(
        &mut self,
        short_name: Option<char>,
        name: &str,
        help: Option<&str>,
    ) -> Result<()> {
        self.add_argument(Argument::flag(short_name, name, help))
    }

    /// Resolve a token against the declared arguments by exact name match.
    /// Unrecognized names are ignored; our contract is that stray parameters
    /// are not an error.
    fn resolve_named(&mut self, name: &str, inline_value: Option<&str>) {
        match self.arguments.iter_mut().find(|a| a.get_name() == name) {
            Some(argument) => argument.resolve(inline_value),
            None => debug!("Ignoring unrecognized parameter '{}'", name),
        }
    }

    /// Resolve a single clustered character against the declared arguments'
    /// short names. Positional arguments are not matched by short name.
    fn resolve_short(&mut self, symbol: char, inline_value: Option<&str>) {
        let found = self.arguments.iter_mut().find(|a| {
            a.get_kind() != Kind::Positional && a.get_short_name() == Some(symbol)
        });
        match found {
            Some(argument) => argument.resolve(inline_value),
            None => debug!("Ignoring unrecognized short parameter '{}'", symbol),
        }
    }

    /// Parses the given command-line parameters (the program's argv, minus
    /// the leading executable name) against the declared arguments.
    ///
    /// Each parameter resolves in one of three ways. A "--name" or
    /// "--name=value" parameter matches a declaration by exact name. A
    /// "-abc" or "-abc=value" parameter is a cluster: each character matches
    /// a declaration by short name, and every value-taking match in the
    /// cluster receives the same inline value. Any other parameter is
    /// matched by exact name, the same as the long form. Parameters (and
    /// cluster characters) which match nothing are silently ignored.
    ///
    /// Afterwards, each declared argument which is still unresolved either
    /// fails parsing (if it is required) or takes on its default value (if
    /// it has one).
    pub fn parse(&mut self, parameters: &[String]) -> Result<()> {
        for parameter in parameters {
            if let Some(trimmed) = parameter.strip_prefix("--") {
                let (name, value) = split_name_and_value(trimmed);
                self.resolve_named(name, value);
            } else if let Some(trimmed) = parameter.strip_prefix('-') {
                let (cluster, value) = split_name_and_value(trimmed);
                for symbol in cluster.chars() {
                    self.resolve_short(symbol, value);
                }
            } else {
                let (name, value) = split_name_and_value(parameter);
                self.resolve_named(name, value);
            }
        }

        for argument in self.arguments.iter_mut() {
            if argument.required && argument.value.is_none() {
                return Err(Error::MissingRequiredArgument(argument.get_name().to_owned()));
            }
            if argument.value.is_none() {
                if let Some(dv) = argument.default_value.as_ref() {
                    argument.value = Some(Value::Single(dv.clone()));
                }
            }
        }

        Ok(())
    }

    /// Returns the value of the named positional argument, falling back to
    /// its default. Returns None if no argument has the given name, or if
    /// the one which does is not a positional argument.
    pub fn get_positional(&self, name: &str) -> Option<&str> {
        match find_argument(self.arguments(), name) {
            Some(a) if a.get_kind() == Kind::Positional => a.value_or_default(),
            _ => None,
        }
    }

    /// Returns the value of the named keyword argument, falling back to its
    /// default. Returns None if no argument has the given name, or if the
    /// one which does is not a keyword argument.
    pub fn get_kwarg(&self, name: &str) -> Option<&str> {
        match find_argument(self.arguments(), name) {
            Some(a) if a.get_kind() == Kind::KeyValue => a.value_or_default(),
            _ => None,
        }
    }

    /// Returns whether the named flag was passed on the command line.
    /// Returns false if no argument has the given name, or if the one which
    /// does is not a flag.
    pub fn get_flag(&self, name: &str) -> bool {
        match find_argument(self.arguments(), name) {
            Some(a) if a.get_kind() == Kind::Flag => a.value.is_some(),
            _ => false,
        }
    }

    /// Renders this parser's help listing to the globally configured writer
    /// (stdout, by default). The three booleans control whether the usage
    /// line, the program description, and the epilog are included around the
    /// per-argument listing.
    pub fn print_help(&self, description: bool, usage: bool, epilog: bool) -> Result<()> {
        help::print_help(&mut get_writer_impl(), self, description, usage, epilog)
    }
}
