use std::env;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use t9search::prelude::*;

const NOT_FOUND_MESSAGE: &str = "Not found";
const FOUND_MESSAGE: &str = "Kontakt(y) nalezen(y)";

//------------------------------------------------------------------------------
fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    env_logger::builder().format_timestamp_nanos().init();

    let options = parse_args();
    let found = run(&options)?;

    match print_results(&found) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // downstream pipe is closed, exit silently
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(ExitCode::SUCCESS),
        Err(err) => Err(err).wrap_err("failed to write results"),
    }
}

fn parse_args() -> SearchOptions {
    let mut args = Vec::new();

    args.push(env::args().next().unwrap_or_else(|| String::from("t9search")));
    args.extend(
        env::var("T9SEARCH_DEFAULT_OPTIONS")
            .ok()
            .and_then(|val| shlex::split(&val))
            .unwrap_or_default(),
    );
    args.extend(env::args().skip(1));

    SearchOptions::parse_from(args)
}

fn run(options: &SearchOptions) -> Result<Vec<Contact>> {
    log::debug!("options: {options:?}");
    let searcher = Searcher::from_options(options).wrap_err("invalid pattern")?;
    let reader = ContactReader::new(ContactReaderOption::from_options(options));

    let contacts = reader
        .of_bufread(io::stdin().lock())
        .collect::<Result<Vec<_>, _>>()
        .wrap_err("invalid contact list on stdin")?;
    let found: Vec<Contact> = searcher.search(contacts).collect();
    log::debug!("{} contact(s) matched", found.len());
    Ok(found)
}

fn print_results(found: &[Contact]) -> io::Result<()> {
    let mut stdout = BufWriter::new(io::stdout().lock());

    if found.is_empty() {
        writeln!(stdout, "{NOT_FOUND_MESSAGE}")?;
    } else {
        writeln!(stdout, "{FOUND_MESSAGE}")?;
        for contact in found {
            writeln!(stdout, "{contact}")?;
        }
    }

    stdout.flush()
}
