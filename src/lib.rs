// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Simple option registry and parser for command-line arguments.
//!
//! If you want lots of extra features, you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Details](#details)
//! * [Terminology](#terminology)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! Options are declared up front in a [Registry]. A [Parser] then scans the
//! command-line against the registry and returns either everything it
//! found ([ParseResult::Success]) or _every_ problem it found
//! ([ParseResult::Failure]). The same parser can also generate a help
//! listing of the registered options.
//!
//! # Quickstart
//!
//! 1. Create a [Registry] and add an [OptSpec] for each option you wish
//!    to support.
//!
//!    As a minimum, you must specify a long name (at least 3 characters)
//!    and a description. By default, options are flags.
//!
//!    ```rust
//!    # use argreg::{OptSpec, Registry, Result};
//!    #
//!    # fn main() -> Result<()> {
//!    let mut registry = Registry::new();
//!
//!    // Support "-h" / "--help" flag option.
//!    registry.add_option(OptSpec::new("help", "Show this help").short('h'))?;
//!
//!    // Support "-o <value>" / "--output <value>" / "--output=<value>" option.
//!    registry.add_option(OptSpec::new("output", "File to write").short('o').takes_value())?;
//!    #
//!    # Ok(())
//!    # }
//!    ```
//!
//! 1. Create a [Parser] for the registry and call `parse()` (or
//!    `parse_env()` to parse the programs own arguments):
//!
//!    ```rust
//!    use argreg::{HelpOptions, OptSpec, ParseResult, Parser, Registry, Result};
//!
//!    fn main() -> Result<()> {
//!        let mut registry = Registry::new();
//!
//!        registry.add_option(OptSpec::new("help", "Show this help").short('h'))?;
//!        registry.add_option(OptSpec::new("output", "File to write").short('o').takes_value())?;
//!
//!        let parser = Parser::new(&registry);
//!
//!        let args = vec!["-h", "in.txt", "--output=out.txt", "--", "-x"];
//!
//!        match parser.parse(args) {
//!            ParseResult::Success(parsed) => {
//!                assert!(parsed.is_present("help"));
//!                assert_eq!(parsed.value("output"), Some("out.txt"));
//!                assert_eq!(parsed.positionals().to_vec(), vec!["in.txt"]);
//!                assert_eq!(parsed.remainder().map(|r| r.to_vec()), Some(vec!["-x".to_string()]));
//!            }
//!            ParseResult::Failure(errors) => {
//!                for e in errors {
//!                    eprintln!("ERROR: {}", e);
//!                }
//!            }
//!        }
//!
//!        assert_eq!(
//!            parser.help(&HelpOptions::default()),
//!            "-h, --help   Show this help\n-o, --output File to write"
//!        );
//!
//!        Ok(())
//!    }
//!    ```
//!
//! For a complete program, see `demos/simple.rs`:
//!
//! ```bash
//! $ cargo run --example simple -- -v --name "hello world" one two -- --not-an-option
//! ```
//!
//! # Details
//!
//! ## Terminology
//!
//! - A "long option" is an argument of the form `--name` or `--name=value`.
//!
//! - A "short option" is an argument of the form `-x`. Short options can be
//!   bundled: `-xyz` is the same as `-x -y -z`.
//!
//! - Options which accept a value are "value options"; those that do not
//!   are "flags".
//!
//! - A value option takes its value from the argument that immediately
//!   follows it, or from the text after the `=` of a long option.
//!
//! - A "positional argument" is an argument that is not an option, not an
//!   option value, and does not follow `--`.
//!
//! - The special argument `--` means "end of all options". Everything
//!   after it is returned unparsed in [Parsed::remainder()].
//!
//! # Summary of features and behaviour
//!
//! - Options are registered by long name with an optional short name.
//!   Registering a duplicate name or short name is an error and leaves the
//!   registry unchanged.
//! - Arguments are parsed in a single pass, in order, and are never
//!   permuted.
//! - Option values are always returned as strings.
//! - Positional arguments and options can be intermingled.
//! - Parsing does not stop at the first error: all errors are returned
//!   so the user can fix them all at once.
//! - Options can be specified multiple times; the last one wins.
//! - Help output lists options sorted by name, optionally word-wrapped
//!   (see [HelpOptions]).
//! - Diagnostics are emitted through the [`log`](https://crates.io/crates/log)
//!   crate.
//!
//! # Limitations
//!
//! - Option values cannot start with a dash when given as a separate
//!   argument.
//!
//!   **Example:** `--output -` is an error, but `--output=-` is valid.
//!
//! - Short options cannot be given an attached value.
//!
//!   **Example:** `-o out.txt` is valid, but `-oout.txt` is parsed as
//!   the bundle `-o -o -u -t -. -t -x -t`.
//!
//! - If a bundle contains more than one value option, only the last one
//!   can receive a value; the others are reported as missing a value.
//!
//! - Options with optional values are not supported.
//! - No default values, typed values, option groups or sub-commands.

mod error;
mod help;
mod parser;
mod registry;

pub use error::{Error, ParseError, Result};

pub use help::HelpOptions;
pub use parser::{get_args, ParseResult, Parsed, Parser, Value};
pub use registry::{OptSpec, Registry, MIN_NAME_LEN};
