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

use crate::argument::{find_argument, Argument, Value};

fn find_argument_works(arguments: &[Argument], query: &str, expected_name: &str) -> bool {
    find_argument(arguments.iter(), query).map_or(false, |a| a.get_name() == expected_name)
}

#[test]
fn test_find_argument() {
    let arguments = vec![
        Argument::kwarg(Some('o'), "foo", false, None, None),
        Argument::kwarg(Some('r'), "bar", false, None, None),
        Argument::flag(Some('z'), "baz", None),
        Argument::flag(Some('Z'), "zab", None),
        Argument::positional(Some('R'), "rab", false, None, None),
    ];

    assert!(find_argument_works(&arguments, "foo", "foo"));
    assert!(find_argument_works(&arguments, "bar", "bar"));
    assert!(find_argument_works(&arguments, "baz", "baz"));
    assert!(find_argument_works(&arguments, "zab", "zab"));
    assert!(find_argument_works(&arguments, "rab", "rab"));

    assert!(!find_argument_works(&arguments, "foo", "bar"));
    assert!(!find_argument_works(&arguments, "syn", "syn"));
    // Accessor lookups match full names only, never short names.
    assert!(!find_argument_works(&arguments, "o", "foo"));
    assert!(!find_argument_works(&arguments, "Z", "zab"));
}

#[test]
fn test_find_argument_first_declaration_wins() {
    let arguments = vec![
        Argument::kwarg(None, "foo", false, Some("first"), None),
        Argument::kwarg(None, "foo", false, Some("second"), None),
    ];

    assert_eq!(
        Some("first"),
        find_argument(arguments.iter(), "foo").and_then(|a| a.get_default_value())
    );
}

#[test]
fn test_resolve_flag_ignores_inline_value() {
    let mut argument = Argument::flag(Some('v'), "verbose", None);
    assert!(argument.value.is_none());
    argument.resolve(Some("false"));
    assert_eq!(Some(Value::Single("true".to_owned())), argument.value);
}

#[test]
fn test_resolve_kwarg_without_value_leaves_argument_unresolved() {
    let mut argument = Argument::kwarg(Some('o'), "output", false, Some("out.txt"), None);
    argument.resolve(None);
    assert!(argument.value.is_none());
    // The default still applies on read.
    assert_eq!(Some("out.txt"), argument.value_or_default());
}

#[test]
fn test_value_as_single() {
    assert_eq!(Some("foo"), Value::Single("foo".to_owned()).as_single());
    assert_eq!(
        Some("foo"),
        Value::Repeated(vec!["foo".to_owned(), "bar".to_owned()]).as_single()
    );
    assert_eq!(None, Value::Repeated(vec![]).as_single());
}
