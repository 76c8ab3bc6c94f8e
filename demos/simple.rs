// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing how to register options, parse the
/// command-line and display help or errors.
use argreg::{HelpOptions, OptSpec, ParseResult, Parser, Registry, Result};

fn main() -> Result<()> {
    // Set RUST_LOG=trace to see how each argument is handled.
    env_logger::init();

    let mut registry = Registry::new();

    registry.add_option(OptSpec::new("help", "Display this help and exit").short('h'))?;

    registry.add_option(OptSpec::new("verbose", "Show the parse result").short('v'))?;

    registry.add_option(
        OptSpec::new("name", "Name to greet; may also be given as --name=value")
            .short('n')
            .takes_value()
            .usage("--name <who>"),
    )?;

    let parser = Parser::new(&registry);

    let parsed = match parser.parse_env() {
        ParseResult::Success(parsed) => parsed,
        ParseResult::Failure(errors) => {
            for e in errors {
                eprintln!("ERROR: {}", e);
            }

            std::process::exit(1);
        }
    };

    if parsed.is_present("help") {
        println!("USAGE:\n    simple [OPTIONS] [ARGUMENT..] [-- ARGUMENT..]\n");
        println!("OPTIONS:");
        println!("{}", parser.help(&HelpOptions::new().width(60)));
        return Ok(());
    }

    if parsed.is_present("verbose") {
        println!("INFO: options: {:?}", parsed.values());
        println!("INFO: positional arguments: {:?}", parsed.positionals());
        println!("INFO: remainder: {:?}", parsed.remainder());
    }

    let name = parsed.value("name").unwrap_or("world");

    println!("hello, {}", name);

    Ok(())
}
