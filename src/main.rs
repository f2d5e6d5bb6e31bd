use std::io;

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde_json::{Value, json};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use uncurl::{Uncurled, curl::is_curl, request, uncurl};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UncurlPart {
    BaseUrl,
    Params,
    Headers,
    Data,
}

fn cli() -> Command {
    let command_arg = Arg::new("command")
        .help("The curl command string, read from stdin when missing or '-'")
        .required(false)
        .index(1);

    Command::new("uncurl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turn a browser \"Copy as cURL\" command into a request and replay it")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            Command::new("parse")
                .about("Parses a curl command and prints it as JSON")
                .arg(command_arg.clone())
                .arg(
                    Arg::new("part")
                        .short('p')
                        .long("part")
                        .value_name("PART")
                        .help("Only print one part of the parsed command (base-url, params, headers, data)")
                        .required(false)
                        .value_parser(clap::value_parser!(UncurlPart)),
                )
                .arg(
                    Arg::new("compact")
                        .long("compact")
                        .help("Print the JSON on a single line")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("send")
                .about("Parses a curl command and sends it: POST with its --data-raw body, GET otherwise")
                .arg(command_arg)
                .arg(
                    Arg::new("include")
                        .short('i')
                        .long("include")
                        .help("Print the response headers too")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_command(matches: &ArgMatches) -> Result<String> {
    let command = match matches.get_one::<String>("command").map(String::as_str) {
        Some("-") | None => {
            debug!("reading curl command from stdin");
            io::read_to_string(io::stdin()).context("Failed to read the curl command from stdin")?
        }
        Some(command) => command.to_string(),
    };

    let command = command.trim().to_string();
    if !is_curl(&command) {
        warn!("input does not start with `curl`, parsing it anyway");
    }
    Ok(command)
}

fn select_part(uncurled: Uncurled, part: Option<UncurlPart>) -> Result<Value> {
    let value = match part {
        Some(UncurlPart::BaseUrl) => json!(uncurled.base_url),
        Some(UncurlPart::Params) => serde_json::to_value(uncurled.params)?,
        Some(UncurlPart::Headers) => serde_json::to_value(uncurled.headers)?,
        Some(UncurlPart::Data) => uncurled.data.unwrap_or(Value::Null),
        None => serde_json::to_value(uncurled)?,
    };
    Ok(value)
}

fn parse(matches: &ArgMatches) -> Result<()> {
    let command = read_command(matches)?;
    let uncurled = uncurl(&command).context("Error parsing curl command")?;

    let value = select_part(uncurled, matches.get_one::<UncurlPart>("part").copied())?;
    let output = if matches.get_flag("compact") {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    println!("{}", output);
    Ok(())
}

fn send(matches: &ArgMatches) -> Result<()> {
    let command = read_command(matches)?;
    let uncurled = uncurl(&command).context("Error parsing curl command")?;

    let response = request(&uncurled)
        .with_context(|| format!("Error sending {} {}", uncurled.method(), uncurled.base_url))?;

    println!("{:?} {}", response.version(), response.status());
    if matches.get_flag("include") {
        for (name, value) in response.headers() {
            println!("{}: {}", name, String::from_utf8_lossy(value.as_bytes()));
        }
        println!();
    }

    let body = response.text().context("Error reading the response body")?;
    println!("{}", body);
    Ok(())
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("parse", sub_matches)) => parse(sub_matches),
        Some(("send", sub_matches)) => send(sub_matches),
        _ => {
            cli().print_help()?;
            println!();
            Ok(())
        }
    }
}
