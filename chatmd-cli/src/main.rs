// Command-line interface for chatmd
//
// This binary provides commands for converting, formatting, editing and inspecting
// ChatMD chatbot scripts. The core capabilities use the chatmd-babel crate.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from the file extension, and an explicit --from flag overrides the detection.
// Usage:
//  chatmd <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  chatmd convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  chatmd format <input>                   - Re-serialize a ChatMD script to stdout
//  chatmd add <input> <title> [-o <file>]  - Append a response block seeded with the configured defaults
//  chatmd inspect <path> [<view>]          - Render a view of the script (defaults to "treeviz")
//  chatmd --list-formats                   - List available formats and views
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format/view.
// Example:
//  chatmd inspect bot.md --extra-max-width 12

mod inspect;

use chatmd_babel::formats::{ChatMdFormat, JsonFormat, TreevizFormat};
use chatmd_babel::{FormatRegistry, NewBlockDefaults, ParseOptions};
use chatmd_config::{ChatMdConfig, Loader, USER_CONFIG_FILE};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::collections::HashMap;
use std::fs;

const SUBCOMMANDS: &[&str] = &["convert", "format", "add", "inspect", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("chatmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting ChatMD chatbot scripts")
        .long_about(
            "chatmd is a command-line tool for working with ChatMD chatbot scripts.\n\n\
            Commands:\n  \
            - convert: Transform between formats (chatmd, json, treeviz)\n  \
            - format:  Re-serialize a script in canonical layout\n  \
            - add:     Append a new response block\n  \
            - inspect: View the outline, the JSON records or the link graph\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            chatmd inspect bot.md                   # Outline of the blocks\n  \
            chatmd inspect bot.md dangling          # Choices pointing nowhere\n  \
            chatmd bot.md --to json                 # Convert to JSON (outputs to stdout)\n  \
            chatmd bot.json --to chatmd -o bot.md   # Back to ChatMD",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect views")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a chatmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect a ChatMD script")
                .long_about(
                    "Render a view of a ChatMD script.\n\n\
                    Views:\n  \
                    - treeviz:  Blocks, triggers and choices as a tree (default)\n  \
                    - json:     Block records as JSON\n  \
                    - links:    Every choice as an edge of the dialogue graph\n  \
                    - dangling: Choices whose target matches no block title\n\n\
                    Examples:\n  \
                    chatmd inspect bot.md                        # Tree visualization (default)\n  \
                    chatmd inspect bot.md links                  # Link graph\n  \
                    chatmd inspect bot.md --extra-max-width 12   # Shorter labels",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the ChatMD file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .help("View to render. Defaults to 'treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            inspect::AVAILABLE_VIEWS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats (default command)")
                .long_about(
                    "Convert scripts between formats.\n\n\
                    Supported formats:\n  \
                    - chatmd:  ChatMD text (.md, .chatmd)\n  \
                    - json:    Block records (.json)\n  \
                    - treeviz: Tree outline (output only)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    chatmd convert bot.md --to json               # ChatMD to JSON (stdout)\n  \
                    chatmd convert bot.json --to chatmd -o bot.md # JSON to ChatMD file\n  \
                    chatmd bot.md --to json                       # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Format a ChatMD script")
                .long_about(
                    "Parse a ChatMD script and write it back in canonical layout:\n\
                    numbered choices, two blank lines between blocks, trimmed header.\n\n\
                    Output is always written to stdout.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("add")
                .about("Append a response block to a ChatMD script")
                .long_about(
                    "Append a response block with the given title.\n\n\
                    The block gets the configured default trigger and content\n\
                    (blocks.default_trigger / blocks.default_content).\n\
                    The input file is rewritten unless -o is given.",
                )
                .arg(
                    Arg::new("input")
                        .help("ChatMD file to edit")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("title")
                        .help("Title of the new block")
                        .required(true)
                        .index(2),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Write the result here instead of rewriting the input")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !SUBCOMMANDS.contains(&cleaned_args[1].as_str())
            {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_logging(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = required_arg(sub_matches, "path");
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or(inspect::DEFAULT_VIEW);
            handle_inspect_command(path, view, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let to = required_arg(sub_matches, "to");
            let registry = registry_from_config(&config);

            // Auto-detect --from if not provided
            let from = match sub_matches.get_one::<String>("from") {
                Some(f) => f.to_string(),
                None => match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                },
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(&registry, input, &from, to, output, &extra_params);
        }
        Some(("format", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let registry = registry_from_config(&config);
            handle_convert_command(&registry, input, "chatmd", "chatmd", None, &extra_params);
        }
        Some(("add", sub_matches)) => {
            let input = required_arg(sub_matches, "input");
            let title = required_arg(sub_matches, "title");
            let output = sub_matches
                .get_one::<String>("output")
                .map(|s| s.as_str())
                .unwrap_or(input);
            handle_add_command(input, title, output, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn required_arg<'a>(matches: &'a clap::ArgMatches, name: &str) -> &'a str {
    match matches.get_one::<String>(name) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: missing required argument <{name}>");
            std::process::exit(1);
        }
    }
}

/// Default filter is `warn` (overridable through `RUST_LOG`); `--verbose` forces `debug`.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    view: &str,
    extra_params: &HashMap<String, String>,
    config: &ChatMdConfig,
) {
    let source = read_input(path);
    let registry = registry_from_config(config);

    let blocks = registry.parse(&source, "chatmd").unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let output =
        inspect::execute_view(&registry, &blocks, view, extra_params).unwrap_or_else(|e| {
            eprintln!("Execution error: {e}");
            std::process::exit(1);
        });

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
) {
    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = read_input(input);

    let blocks = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    log::debug!("Read {} blocks from '{input}' as {from}", blocks.len());

    let result = registry
        .serialize_with_options(&blocks, to, extra_params)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    match output {
        Some(path) => write_output(path, &result),
        None => print!("{result}"),
    }
}

/// Handle the add command
fn handle_add_command(input: &str, title: &str, output: &str, config: &ChatMdConfig) {
    let source = read_input(input);
    let registry = registry_from_config(config);

    let mut blocks = registry.parse(&source, "chatmd").unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    let defaults = NewBlockDefaults::from(&config.blocks);
    let index = blocks.add_block(title, &defaults).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
    log::info!("Added block '{title}' at index {index}");

    let result = registry.serialize(&blocks, "chatmd").unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });
    write_output(output, &result);
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::default();

    println!("Conversion formats:");
    for format_name in registry.list_formats() {
        if let Ok(format) = registry.get(&format_name) {
            let direction = match (format.supports_parsing(), format.supports_serialization()) {
                (true, true) => "read/write",
                (true, false) => "read",
                (false, true) => "write",
                (false, false) => "-",
            };
            println!(
                "  {format_name:<10} {direction:<10} {}",
                format.description()
            );
        }
    }

    println!("\nInspect views:");
    for view in inspect::AVAILABLE_VIEWS {
        println!("  {view}");
    }
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_output(path: &str, data: &str) {
    fs::write(path, data).unwrap_or_else(|e| {
        eprintln!("Error writing file '{path}': {e}");
        std::process::exit(1);
    });
}

fn load_cli_config(explicit_path: Option<&str>) -> ChatMdConfig {
    let loader = Loader::new().with_optional_file(USER_CONFIG_FILE);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

/// Registry whose formats carry the configured defaults.
fn registry_from_config(config: &ChatMdConfig) -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    registry.register(ChatMdFormat::new(ParseOptions::from(&config.parse)));
    registry.register(JsonFormat::new(config.convert.json.pretty));
    registry.register(TreevizFormat::new(config.inspect.treeviz.max_label_width));
    registry
}

/// Move CLI-only settings out of the extra parameters and into the config.
fn apply_config_overrides(config: &mut ChatMdConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["default-title", "title"]) {
        config.parse.default_title = raw;
    }
    if let Some(raw) = take_override(extra_params, &["default-trigger", "trigger"]) {
        config.blocks.default_trigger = raw;
    }
    if let Some(raw) = take_override(extra_params, &["default-content", "content"]) {
        config.blocks.default_content = raw;
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}
