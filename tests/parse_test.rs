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

use cmdargs::{Error, Parser};

#[test]
fn test_parse_mixed_parameters() {
    let mut parser = Parser::new(
        "my_program",
        "Usage: my_program [options]",
        "This is a sample program.",
        "Epilog message",
        true,
    );
    parser
        .add_positional(Some('o'), "output", true, 1, Some("default_output.txt"), Some("Output file"))
        .unwrap();
    parser
        .add_kwarg(Some('V'), "verbose", false, Some("false"), Some("Enable verbose mode"))
        .unwrap();
    parser.add_flag(Some('f'), "force", Some("Overwrite files")).unwrap();

    let parameters: Vec<String> = vec![
        "output=result.txt".to_owned(),
        "--verbose=true".to_owned(),
        "-f".to_owned(),
        "--nonexistent=5".to_owned(),
    ];
    parser.parse(&parameters).unwrap();

    assert_eq!(Some("result.txt"), parser.get_positional("output"));
    assert_eq!(Some("true"), parser.get_kwarg("verbose"));
    assert!(parser.get_flag("force"));
    assert!(!parser.get_flag("help"));
}

#[test]
fn test_parse_defaults_and_missing_required() {
    let mut parser = Parser::new("my_program", "", "", "", false);
    parser
        .add_kwarg(Some('m'), "mode", false, Some("fast"), None)
        .unwrap();
    parser
        .add_positional(Some('i'), "input", true, 1, None, None)
        .unwrap();

    let e = parser.parse(&[]).unwrap_err();
    match e {
        Error::MissingRequiredArgument(name) => assert_eq!("input", name),
        e => panic!("Expected a missing required argument error, got {:?}", e),
    }
}

#[test]
fn test_parse_cluster_end_to_end() {
    let mut parser = Parser::new("my_program", "", "", "", false);
    parser.add_flag(Some('a'), "all", None).unwrap();
    parser.add_flag(Some('b'), "brief", None).unwrap();
    parser.add_kwarg(Some('s'), "suffix", false, None, None).unwrap();

    let parameters: Vec<String> = vec!["-abs=.bak".to_owned()];
    parser.parse(&parameters).unwrap();

    assert!(parser.get_flag("all"));
    assert!(parser.get_flag("brief"));
    assert_eq!(Some(".bak"), parser.get_kwarg("suffix"));
}
