// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use crate::registry::OptSpec;

const DEFAULT_MIN_WIDTH: usize = 40;

/// Shown in place of `-x,` for options without a short name.
const NO_SHORT: &str = "   ";

/// Settings used to control the help output.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HelpOptions {
    /// Maximum line width. Zero means unlimited (no wrapping).
    width: usize,

    /// Lower bound applied to `width` when wrapping, so that a very small
    /// width still leaves some room for the description.
    min_width: usize,
}

impl Default for HelpOptions {
    fn default() -> Self {
        HelpOptions {
            width: 0,
            min_width: DEFAULT_MIN_WIDTH,
        }
    }
}

impl HelpOptions {
    /// Create a new help options object.
    pub fn new() -> Self {
        HelpOptions::default()
    }

    /// Specify the maximum line width (`0` disables wrapping).
    pub fn width(self, width: usize) -> Self {
        HelpOptions { width, ..self }
    }

    /// Specify the smallest width wrapping will ever use.
    pub fn min_width(self, min_width: usize) -> Self {
        HelpOptions { min_width, ..self }
    }

    /// The width descriptions are wrapped to, if wrapping is enabled.
    fn wrap_width(&self) -> Option<usize> {
        match self.width {
            0 => None,
            width => Some(width.max(self.min_width)),
        }
    }
}

/// Render one line per option (or several, if the description has to be
/// wrapped). `specs` are rendered in the order given.
pub(crate) fn render(specs: &[&OptSpec], options: &HelpOptions) -> String {
    let name_width = specs
        .iter()
        .map(|s| s.name.chars().count())
        .max()
        .unwrap_or_default();

    let mut lines = Vec::<String>::new();

    for spec in specs {
        let short = match spec.short {
            Some(c) => format!("-{},", c),
            None => NO_SHORT.into(),
        };

        let prefix = format!("{} --{:<width$} ", short, spec.name, width = name_width);
        let indent = prefix.chars().count();

        let fits = |width: usize| {
            spec.description.trim().is_empty()
                || indent + spec.description.chars().count() <= width
        };

        match options.wrap_width() {
            Some(width) if !fits(width) => {
                let room = width.saturating_sub(indent);

                for (i, part) in wrap(&spec.description, room).into_iter().enumerate() {
                    if i == 0 {
                        lines.push(format!("{}{}", prefix, part));
                    } else {
                        lines.push(format!("{:indent$}{}", "", part, indent = indent));
                    }
                }
            }
            _ => {
                let line = format!("{}{}", prefix, spec.description);
                lines.push(line.trim_end().into());
            }
        }
    }

    lines.join("\n")
}

/// Greedy word wrap. A word longer than `room` gets a line to itself.
fn wrap(text: &str, room: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if line_len > 0 && line_len + 1 + word_len > room {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }

        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }

        line.push_str(word);
        line_len += word_len;
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    use regex::Regex;

    const SUDO_DESC: &str = "Get out of jail card for the people who don't know their own power";

    fn common_specs() -> Vec<OptSpec> {
        vec![
            OptSpec::new("help", "Provides help").short('h'),
            OptSpec::new("install", "Install half of the requirements needed").short('i'),
            OptSpec::new("sudo", SUDO_DESC),
            OptSpec::new("test", "Test if assumptions are valid").short('t'),
        ]
    }

    #[test]
    fn test_help_options() {
        let new_options = HelpOptions::new();
        let def_options = HelpOptions::default();

        assert_eq!(new_options.width, 0);
        assert_eq!(new_options.min_width, 40);
        assert_eq!(new_options, def_options);

        let options = HelpOptions::new().width(80);

        assert_eq!(options.width, 80);
        assert_eq!(options.min_width, 40);

        let options = HelpOptions::new().min_width(10);

        assert_eq!(options.width, 0);
        assert_eq!(options.min_width, 10);
    }

    #[test]
    fn test_wrap_width() {
        #[derive(Debug)]
        struct TestData {
            options: HelpOptions,
            wrap_width: Option<usize>,
        }

        let tests = &[
            TestData {
                options: HelpOptions::new(),
                wrap_width: None,
            },
            TestData {
                options: HelpOptions::new().min_width(100),
                wrap_width: None,
            },
            TestData {
                options: HelpOptions::new().width(80),
                wrap_width: Some(80),
            },
            TestData {
                options: HelpOptions::new().width(20),
                wrap_width: Some(40),
            },
            TestData {
                options: HelpOptions::new().width(20).min_width(0),
                wrap_width: Some(20),
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            assert_eq!(d.options.wrap_width(), d.wrap_width, "{}", msg);
        }
    }

    #[test]
    fn test_wrap() {
        #[derive(Debug)]
        struct TestData<'a> {
            text: &'a str,
            room: usize,
            lines: Vec<&'a str>,
        }

        let tests = &[
            TestData {
                text: "",
                room: 10,
                lines: vec![],
            },
            TestData {
                text: "one two",
                room: 7,
                lines: vec!["one two"],
            },
            TestData {
                text: "one two",
                room: 6,
                lines: vec!["one", "two"],
            },
            TestData {
                text: "  one   two  ",
                room: 80,
                lines: vec!["one two"],
            },
            TestData {
                text: "a verylongword b",
                room: 4,
                lines: vec!["a", "verylongword", "b"],
            },
            TestData {
                text: "one two",
                room: 0,
                lines: vec!["one", "two"],
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let lines = wrap(d.text, d.room);

            let msg = format!("test[{}]: {:?}, lines: {:?}", i, d, lines);

            assert_eq!(lines, d.lines, "{}", msg);
        }
    }

    #[test]
    fn test_render() {
        let specs = common_specs();
        let refs: Vec<&OptSpec> = specs.iter().collect();

        let output = render(&refs, &HelpOptions::default());

        let expected = [
            "-h, --help    Provides help",
            "-i, --install Install half of the requirements needed",
            "    --sudo    Get out of jail card for the people who don't know their own power",
            "-t, --test    Test if assumptions are valid",
        ]
        .join("\n");

        assert_eq!(output, expected);

        let re = Regex::new(r"^(-[a-z],|   ) --[a-z]+ +\S").unwrap();

        for line in output.lines() {
            assert!(re.is_match(line), "line: {:?}", line);
        }
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&[], &HelpOptions::default()), "");
        assert_eq!(render(&[], &HelpOptions::new().width(10)), "");
    }

    #[test]
    fn test_render_no_description() {
        let spec = OptSpec::new("quiet", "").short('q');

        let output = render(&[&spec], &HelpOptions::default());

        assert_eq!(output, "-q, --quiet");

        let output = render(&[&spec], &HelpOptions::new().width(5).min_width(0));

        assert_eq!(output, "-q, --quiet");
    }

    #[test]
    fn test_render_wrapped() {
        let specs = common_specs();
        let refs: Vec<&OptSpec> = specs.iter().collect();

        let expected = [
            "-h, --help    Provides help",
            "-i, --install Install half of the",
            "              requirements needed",
            "    --sudo    Get out of jail card for",
            "              the people who don't know",
            "              their own power",
            "-t, --test    Test if assumptions are",
            "              valid",
        ]
        .join("\n");

        let output = render(&refs, &HelpOptions::new().width(40));
        assert_eq!(output, expected);

        // Width below the minimum is raised to it.
        let output = render(&refs, &HelpOptions::new().width(10));
        assert_eq!(output, expected);

        for line in output.lines() {
            assert!(line.chars().count() <= 40, "line: {:?}", line);
        }
    }

    #[test]
    fn test_render_wide_enough() {
        let specs = common_specs();
        let refs: Vec<&OptSpec> = specs.iter().collect();

        let unlimited = render(&refs, &HelpOptions::default());
        let wide = render(&refs, &HelpOptions::new().width(200));

        assert_eq!(unlimited, wide);
        assert_eq!(wide.lines().count(), specs.len());
    }
}
