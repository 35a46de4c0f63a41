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

/// Kind denotes the particular kind of argument a declaration describes,
/// which determines how tokens resolve against it during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// A boolean switch. It takes no value; passing it by name (or short
    /// name) flips it on.
    Flag,
    /// A keyword argument, which takes exactly one value, passed inline as
    /// "--name=value" (or the short equivalent).
    KeyValue,
    /// A named positional argument, which takes exactly one value and may be
    /// required. Note that these are matched by name equality just like
    /// keyword arguments, *not* by their position in the parameter list.
    Positional,
}

/// A Value is the resolved value associated with an argument after parsing.
/// Only Single is ever produced by the current matching logic, since
/// multi-value arguments are rejected at declaration time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    /// A single string value.
    Single(String),
    /// Zero or more string values, for arguments which can be given more
    /// than once. Reserved; no current declaration produces this.
    Repeated(Vec<String>),
}

impl Value {
    /// Returns the value as a single string, taking the first entry in the
    /// Repeated case.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Value::Single(v) => Some(v.as_str()),
            Value::Repeated(vs) => vs.first().map(|v| v.as_str()),
        }
    }
}

/// An Argument is a single declared parameter of a program: its names, its
/// kind, and (after parsing) its resolved value.
///
/// Every string an Argument holds is owned by the Argument itself; the
/// declaration constructors copy the caller's strings rather than borrowing
/// them, so the caller's buffers can be transient.
#[derive(Clone, Debug)]
pub struct Argument {
    pub(crate) name: String,
    pub(crate) help: Option<String>,
    pub(crate) short_name: Option<char>,
    pub(crate) kind: Kind,
    pub(crate) required: bool,
    pub(crate) default_value: Option<String>,
    pub(crate) value: Option<Value>,
}

impl Argument {
    /// Constructs an Argument describing a boolean flag. Flags are never
    /// required and have no default value; an unresolved flag simply reads
    /// as false.
    pub fn flag(short_name: Option<char>, name: &str, help: Option<&str>) -> Argument {
        Argument {
            name: name.to_owned(),
            help: help.map(|h| h.to_owned()),
            short_name,
            kind: Kind::Flag,
            required: false,
            default_value: None,
            value: None,
        }
    }

    /// Constructs an Argument describing a keyword argument.
    pub fn kwarg(
        short_name: Option<char>,
        name: &str,
        required: bool,
        default_value: Option<&str>,
        help: Option<&str>,
    ) -> Argument {
        Argument {
            name: name.to_owned(),
            help: help.map(|h| h.to_owned()),
            short_name,
            kind: Kind::KeyValue,
            required,
            default_value: default_value.map(|dv| dv.to_owned()),
            value: None,
        }
    }

    /// Constructs an Argument describing a named positional argument.
    pub fn positional(
        short_name: Option<char>,
        name: &str,
        required: bool,
        default_value: Option<&str>,
        help: Option<&str>,
    ) -> Argument {
        Argument {
            name: name.to_owned(),
            help: help.map(|h| h.to_owned()),
            short_name,
            kind: Kind::Positional,
            required,
            default_value: default_value.map(|dv| dv.to_owned()),
            value: None,
        }
    }

    /// Returns this argument's full name (i.e., not the short name).
    pub fn get_name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the human-readable help text for this argument, if any.
    pub fn get_help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Returns this argument's single-character short name, if it has one.
    pub fn get_short_name(&self) -> Option<char> {
        self.short_name
    }

    /// Returns this argument's kind.
    pub fn get_kind(&self) -> Kind {
        self.kind
    }

    /// Returns whether this argument must have a value after parsing.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns this argument's declared default value, if any.
    pub fn get_default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Resolve this argument against a matching token. Flags resolve to a
    /// truthy marker no matter what inline value accompanied the token;
    /// value-taking arguments resolve to the inline value, or are left
    /// untouched if the token carried none.
    pub(crate) fn resolve(&mut self, inline_value: Option<&str>) {
        match self.kind {
            Kind::Flag => self.value = Some(Value::Single("true".to_owned())),
            Kind::KeyValue | Kind::Positional => {
                if let Some(v) = inline_value {
                    self.value = Some(Value::Single(v.to_owned()));
                }
            }
        }
    }

    /// Returns the value this argument resolved to during parsing, falling
    /// back to its declared default.
    pub(crate) fn value_or_default(&self) -> Option<&str> {
        match self.value.as_ref() {
            Some(v) => v.as_single(),
            None => self.default_value.as_deref(),
        }
    }
}

/// Given an iterator over a collection of Arguments, locate the first one
/// whose name matches the given name exactly. If a parser was (incorrectly)
/// given multiple arguments with the same name, the earliest declaration
/// wins.
pub fn find_argument<'a, I>(arguments: I, name: &str) -> Option<&'a Argument>
where
    I: Iterator<Item = &'a Argument>,
{
    for a in arguments {
        if a.name == name {
            return Some(a);
        }
    }
    None
}
