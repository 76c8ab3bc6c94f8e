// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, Result};

/// Minimum number of characters in a long option name.
pub const MIN_NAME_LEN: usize = 3;

const OPT_PREFIX: char = '-';
const VALUE_SEPARATOR: char = '=';

/// A declared option.
///
/// Options are always addressable by their long name (`--name`) and
/// optionally by a single character short name (`-n`).
///
/// # Note
///
/// - Once added to a [Registry] an option can no longer be changed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
pub struct OptSpec {
    /// Long option name (required, at least [MIN_NAME_LEN] characters).
    pub name: String,
    /// Single character short option name.
    pub short: Option<char>,
    /// Set if the option consumes a value.
    pub takes_value: bool,
    /// Description of the option, shown in the help output.
    pub description: String,
    /// Usage lines.
    ///
    /// Stored for callers that want to produce their own usage text;
    /// the help renderer does not use them.
    pub usage: Vec<String>,
}

impl OptSpec {
    /// Create a new flag option.
    pub fn new(name: &str, description: &str) -> Self {
        OptSpec {
            name: name.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Specify the short option character for the option.
    pub fn short(self, short: char) -> Self {
        OptSpec {
            short: Some(short),
            ..self
        }
    }

    /// Specify that the option requires a value.
    pub fn takes_value(self) -> Self {
        OptSpec {
            takes_value: true,
            ..self
        }
    }

    /// Append a usage line.
    pub fn usage(mut self, line: &str) -> Self {
        self.usage.push(line.into());
        self
    }

    /// Check the option can be registered.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason| Error::InvalidName {
            name: self.name.clone(),
            reason,
        };

        if self.name.chars().count() < MIN_NAME_LEN {
            return Err(invalid("must be at least 3 characters long"));
        }

        if self.name.starts_with(OPT_PREFIX) {
            return Err(invalid("must not start with a dash"));
        }

        if self.name.contains(VALUE_SEPARATOR) {
            return Err(invalid("must not contain '='"));
        }

        if self.name.chars().any(char::is_whitespace) {
            return Err(invalid("must not contain whitespace"));
        }

        if let Some(short) = self.short {
            let reason = match short {
                OPT_PREFIX => Some("must not be a dash"),
                VALUE_SEPARATOR => Some("must not be '='"),
                c if c.is_whitespace() => Some("must not be whitespace"),
                _ => None,
            };

            if let Some(reason) = reason {
                return Err(Error::InvalidShort { short, reason });
            }
        }

        Ok(())
    }
}

impl fmt::Display for OptSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(short) = self.short {
            write!(f, "{}{}, ", OPT_PREFIX, short)?;
        }

        write!(f, "--{}", self.name)?;

        if self.takes_value {
            write!(f, " <value>")?;
        }

        Ok(())
    }
}

/// The set of declared options.
///
/// Options are indexed both by long name and by short name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Registry {
    long: HashMap<String, Rc<OptSpec>>,
    short: HashMap<char, Rc<OptSpec>>,
}

impl Registry {
    /// Create a new, empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Returns the number of registered options.
    pub fn len(&self) -> usize {
        self.long.len()
    }

    /// Returns `true` if no options have been registered.
    pub fn is_empty(&self) -> bool {
        self.long.is_empty()
    }

    /// Register a single option.
    ///
    /// # Errors
    ///
    /// - [Error::InvalidName] or [Error::InvalidShort] if the option
    ///   fails [OptSpec::validate()].
    /// - [Error::DuplicateName] or [Error::DuplicateShort] if either name
    ///   is already taken.
    ///
    /// On error the registry is left unchanged.
    pub fn add_option(&mut self, spec: OptSpec) -> Result<()> {
        if let Err(e) = spec.validate() {
            log::debug!("rejected option {:?}: {}", spec.name, e);
            return Err(e);
        }

        // Both keys are checked before either index is touched.
        if self.long.contains_key(&spec.name) {
            return Err(Error::DuplicateName(spec.name));
        }

        if let Some(short) = spec.short {
            if self.short.contains_key(&short) {
                return Err(Error::DuplicateShort(short));
            }
        }

        log::debug!("registered option {}", spec);

        let spec = Rc::new(spec);

        if let Some(short) = spec.short {
            self.short.insert(short, spec.clone());
        }

        self.long.insert(spec.name.clone(), spec);

        Ok(())
    }

    /// Determine if an option with the specified long name is registered.
    pub fn exists(&self, name: &str) -> bool {
        self.long.contains_key(name)
    }

    /// Returns the option with the specified long name.
    pub fn get_long(&self, name: &str) -> Option<&OptSpec> {
        self.long.get(name).map(|s| s.as_ref())
    }

    /// Returns the option with the specified short name.
    pub fn get_short(&self, short: char) -> Option<&OptSpec> {
        self.short.get(&short).map(|s| s.as_ref())
    }

    /// Returns all options, sorted by long name.
    pub fn list_all(&self) -> Vec<&OptSpec> {
        let mut specs: Vec<&OptSpec> = self.long.values().map(|s| s.as_ref()).collect();

        specs.sort_unstable_by(|a, b| a.name.cmp(&b.name));

        specs
    }
}
