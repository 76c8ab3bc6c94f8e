// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::BTreeMap;
use std::env;

use crate::error::ParseError;
use crate::help::{self, HelpOptions};
use crate::registry::{OptSpec, Registry};

const OPT_PREFIX: char = '-';
const VALUE_SEPARATOR: char = '=';

/// Special argument used to denote the end of all options; all arguments
/// that follow are returned verbatim in [Parsed::remainder()] (even if
/// they start with `-`!)
///
/// See: `getopt(3)`.
const END_OF_OPTIONS: &str = "--";
const LONG_OPT_PREFIX: &str = END_OF_OPTIONS;

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
///
/// # Note
///
/// Used by [Parser::parse_env()].
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// The value recorded for an option found on the command-line.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Value {
    /// A flag option was specified.
    Flag,
    /// The value given to a value-taking option.
    Text(String),
}

impl Value {
    /// Returns the option value, or `None` for a flag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Flag => None,
            Value::Text(s) => Some(s),
        }
    }
}

/// The outcome of a successful parse.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Parsed {
    positionals: Vec<String>,
    remainder: Option<Vec<String>>,
    values: BTreeMap<String, Value>,
}

impl Parsed {
    /// Arguments that were neither options, option values nor part
    /// of the remainder, in the order they were specified.
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Every argument after `--`, or `None` if `--` was not specified.
    pub fn remainder(&self) -> Option<&[String]> {
        self.remainder.as_deref()
    }

    /// All options specified, keyed by long name.
    ///
    /// If an option is specified more than once, the last one wins.
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    /// Returns `true` if the option with the specified long name was
    /// found on the command-line.
    pub fn is_present(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Returns the value of the value-taking option with the specified
    /// long name.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(Value::as_str)
    }
}

/// The result of parsing a set of command-line arguments.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseResult {
    /// All arguments were valid.
    Success(Parsed),
    /// One entry for every invalid argument, in the order found.
    Failure(Vec<ParseError>),
}

impl ParseResult {
    /// Returns `true` for [ParseResult::Success].
    pub fn is_success(&self) -> bool {
        matches!(self, ParseResult::Success(_))
    }

    /// Returns the errors found, which will be empty on success.
    pub fn errors(&self) -> &[ParseError] {
        match self {
            ParseResult::Success(_) => &[],
            ParseResult::Failure(errors) => errors,
        }
    }

    /// Convert into a standard [std::result::Result].
    pub fn into_result(self) -> std::result::Result<Parsed, Vec<ParseError>> {
        match self {
            ParseResult::Success(parsed) => Ok(parsed),
            ParseResult::Failure(errors) => Err(errors),
        }
    }
}

/// A value-taking option waiting for the next argument.
#[derive(Debug)]
struct Pending<'r> {
    spec: &'r OptSpec,
    /// The option as the user wrote it, for error messages.
    display: String,
}

/// State accumulated while scanning the arguments.
#[derive(Debug, Default)]
struct State<'r> {
    parsed: Parsed,
    errors: Vec<ParseError>,
    pending: Option<Pending<'r>>,
}

impl<'r> State<'r> {
    fn flag(&mut self, spec: &OptSpec) {
        self.parsed.values.insert(spec.name.clone(), Value::Flag);
    }

    fn text(&mut self, spec: &OptSpec, value: &str) {
        self.parsed
            .values
            .insert(spec.name.clone(), Value::Text(value.into()));
    }

    fn await_value(&mut self, spec: &'r OptSpec, display: String) {
        // Only possible within a bundle (`-ab` where both need a value):
        // the earlier option can never receive one.
        if let Some(prev) = self.pending.replace(Pending { spec, display }) {
            self.errors.push(ParseError::MissingValue(prev.display));
        }
    }
}

/// Returns `true` if the argument would be treated as an option.
fn looks_like_option(arg: &str) -> bool {
    arg.starts_with(OPT_PREFIX)
}

/// Parses command-line arguments against the options in a [Registry].
///
/// The registry is borrowed for the lifetime of the parser, so no
/// options can be added once parsing is possible.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'r> {
    registry: &'r Registry,
}

impl<'r> Parser<'r> {
    /// Create a new parser for the specified registry.
    pub fn new(registry: &'r Registry) -> Self {
        Parser { registry }
    }

    /// Parse the programs own command-line arguments.
    pub fn parse_env(&self) -> ParseResult {
        self.parse(get_args())
    }

    /// Parse a set of command line arguments (without the program name).
    ///
    /// # Notes
    ///
    /// - Parsing does not stop at the first invalid argument: all problems
    ///   are returned in [ParseResult::Failure].
    /// - An option value cannot start with a dash. If a value-taking
    ///   option is followed by something that looks like an option, an
    ///   error is recorded and that argument is parsed as an option.
    ///   Use `--name=value` to specify such a value.
    pub fn parse<I, S>(&self, args: I) -> ParseResult
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        let mut state = State::default();
        let mut i = 0;

        while i < args.len() {
            let arg = args[i].as_str();

            if let Some(pending) = state.pending.take() {
                if looks_like_option(arg) {
                    state.errors.push(ParseError::MissingValue(pending.display));

                    // Look at the same argument again, this time as an option.
                    continue;
                }

                log::trace!("arg[{}]: value for {:?}: {:?}", i, pending.display, arg);

                state.text(pending.spec, arg);
                i += 1;
                continue;
            }

            if arg == END_OF_OPTIONS {
                log::trace!("arg[{}]: end of options", i);

                state.parsed.remainder = Some(args[i + 1..].to_vec());
                break;
            } else if let Some(opt) = arg.strip_prefix(LONG_OPT_PREFIX) {
                self.long_option(&mut state, opt);
            } else if let Some(opts) = arg.strip_prefix(OPT_PREFIX) {
                self.short_options(&mut state, opts);
            } else {
                log::trace!("arg[{}]: positional: {:?}", i, arg);

                state.parsed.positionals.push(arg.into());
            }

            i += 1;
        }

        if let Some(pending) = state.pending.take() {
            state.errors.push(ParseError::MissingValue(pending.display));
        }

        log::debug!(
            "parsed {} args: {} positional, {} options, {} errors",
            args.len(),
            state.parsed.positionals.len(),
            state.parsed.values.len(),
            state.errors.len()
        );

        if state.errors.is_empty() {
            ParseResult::Success(state.parsed)
        } else {
            ParseResult::Failure(state.errors)
        }
    }

    /// Handle `--name` or `--name=value` (`opt` has the dashes removed).
    fn long_option(&self, state: &mut State<'r>, opt: &str) {
        let (name, value) = match opt.split_once(VALUE_SEPARATOR) {
            Some((name, value)) => (name, Some(value)),
            None => (opt, None),
        };

        let spec = match self.registry.get_long(name) {
            Some(spec) => spec,
            None => {
                log::trace!("unknown long option: {:?}", name);
                state.errors.push(ParseError::UnknownLong(name.into()));
                return;
            }
        };

        log::trace!("long option: {:?}, value: {:?}", name, value);

        match (spec.takes_value, value) {
            (true, Some(value)) => state.text(spec, value),
            (true, None) => state.await_value(spec, format!("{}{}", LONG_OPT_PREFIX, name)),
            (false, value) => {
                if value.is_some() {
                    log::debug!("ignoring value given to flag option {:?}", name);
                }

                state.flag(spec);
            }
        }
    }

    /// Handle a bundle of one or more short options (`opts` has the dash
    /// removed).
    fn short_options(&self, state: &mut State<'r>, opts: &str) {
        for c in opts.chars() {
            let spec = match self.registry.get_short(c) {
                Some(spec) => spec,
                None => {
                    log::trace!("unknown short option: {:?}", c);
                    state.errors.push(ParseError::UnknownShort(c));
                    continue;
                }
            };

            log::trace!("short option: {:?}", c);

            if spec.takes_value {
                state.await_value(spec, format!("{}{}", OPT_PREFIX, c));
            } else {
                state.flag(spec);
            }
        }
    }

    /// Generate a help statement listing all registered options,
    /// sorted by long name.
    pub fn help(&self, options: &HelpOptions) -> String {
        help::render(&self.registry.list_all(), options)
    }
}
