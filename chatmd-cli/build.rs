use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the views from src/inspect.rs
// We need to duplicate this here since build scripts can't access src/ modules
const AVAILABLE_VIEWS: &[&str] = &["treeviz", "json", "links", "dangling"];

fn path_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("chatmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and inspecting ChatMD chatbot scripts")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect views")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a chatmd.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect a ChatMD script")
                .arg(path_arg("path", "Path to the ChatMD file"))
                .arg(
                    Arg::new("view")
                        .help("View to render")
                        .value_parser(clap::builder::PossibleValuesParser::new(AVAILABLE_VIEWS))
                        .index(2),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between formats")
                .arg(path_arg("input", "Input file path"))
                .arg(
                    Arg::new("from")
                        .long("from")
                        .value_parser(["chatmd", "json"]),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .value_parser(["chatmd", "json", "treeviz"]),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Format a ChatMD script")
                .arg(path_arg("input", "Input file path")),
        )
        .subcommand(
            Command::new("add")
                .about("Append a response block to a ChatMD script")
                .arg(path_arg("input", "ChatMD file to edit"))
                .arg(Arg::new("title").help("Title of the new block").index(2))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "chatmd", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "chatmd", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "chatmd", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
