mod debug_report;

use nutrilabel::{RenderOptions, parse_verbose, render_panel};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "NUTRILABEL_LOG";

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let report = parse_verbose(&config.input);
    match config.output {
        Output::Report => debug_report::print_report(&report, config.color),
        Output::Json => match serde_json::to_string_pretty(&report.result) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: failed to serialize result: {err}");
                std::process::exit(1);
            }
        },
        Output::Html => {
            // an empty result renders nothing, like the storefront does
            if let Some(html) = render_panel(&report.result, &config.render) {
                println!("{html}");
            }
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Report,
    Json,
    Html,
}

struct CliConfig {
    input: String,
    output: Output,
    render: RenderOptions,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut output = Output::Report;
    let mut render = RenderOptions::default();
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("nutrilabel {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => output = Output::Json,
            "--html" => output = Output::Html,
            "--no-daily-values" => render.show_daily_values = false,
            "--precise-daily-values" => render.round_daily_values = false,
            "--heading" => {
                let value = args.next().ok_or_else(|| "error: --heading expects a value".to_string())?;
                render.heading = value;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--heading=") => {
                render.heading = arg.trim_start_matches("--heading=").to_string();
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    if render.heading.trim().is_empty() {
        return Err("error: --heading must not be empty".to_string());
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, output, render, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "nutrilabel {version}

Extract nutrient values from free-text nutrition labels.

Usage:
  nutrilabel [OPTIONS] [--] <label text...>
  nutrilabel [OPTIONS] --input <text>
  cat label.html | nutrilabel [OPTIONS]

Options:
  -i, --input <text>         Label text to parse. If omitted, reads remaining args
                             or stdin when no args are provided.
  --json                     Print the extracted values as a JSON object.
  --html                     Print the rendered nutrition panel markup.
  --heading <text>           Panel heading for --html. Default: Nutrition Facts
  --no-daily-values          Hide the Standard DV column in --html output.
  --precise-daily-values     Show %DV with two decimals in --html output.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {log_env}             Log filter (e.g. nutrilabel=trace). Default: warn

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        log_env = LOG_ENV
    )
}
