//! Command-line interface for obmenu
//! Converts an Openbox menu into a jgmenu CSV menu written to stdout.
//!
//! Usage:
//!   obmenu [--tag=<id>] [<file>]            - Convert a menu file (default: ~/.config/openbox/menu.xml)
//!   obmenu [--tag=<id>] --cmd=<command>     - Convert the output of a pipe-menu command
//!
//! Settings are read from ~/.config/obmenu/config.toml when present, then from --config.

mod error;
mod source;

use clap::{Arg, ArgMatches, Command};
use error::CliError;
use obmenu_config::{Loader, ObmenuConfig};
use source::MenuSource;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let matches = Command::new("obmenu")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Converts an Openbox menu into a jgmenu CSV menu")
        .arg(
            Arg::new("file")
                .help("Openbox menu file (default: ~/.config/openbox/menu.xml)")
                .index(1),
        )
        .arg(
            Arg::new("cmd")
                .long("cmd")
                .value_name("COMMAND")
                .help("Read the menu from the output of a pipe-menu command")
                .conflicts_with("file"),
        )
        .arg(
            Arg::new("tag")
                .long("tag")
                .value_name("ID")
                .help("Id of the root tag (default: root-menu)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file layered over the defaults and ~/.config/obmenu/config.toml"),
        )
        .get_matches();

    match run(&matches) {
        Ok(csv) => print!("{}", csv),
        Err(e) => {
            eprintln!("obmenu: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(matches: &ArgMatches) -> Result<String, CliError> {
    let config = load_config(matches)?;
    let source = menu_source(matches, &config)?;
    let xml = source.read()?;
    let csv = obmenu_babel::convert(&xml, &config.openbox_format(), &config.jgmenu_format())?;
    Ok(csv)
}

fn load_config(matches: &ArgMatches) -> Result<ObmenuConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(home) = std::env::var_os("HOME") {
        loader = loader.with_user_config(home);
    }
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(tag) = matches.get_one::<String>("tag") {
        loader = loader.with_root_tag(tag)?;
    }
    Ok(loader.build()?)
}

fn menu_source(matches: &ArgMatches, config: &ObmenuConfig) -> Result<MenuSource, CliError> {
    if let Some(command) = matches.get_one::<String>("cmd") {
        return Ok(MenuSource::Command(command.clone()));
    }
    if let Some(file) = matches.get_one::<String>("file") {
        return Ok(MenuSource::File(PathBuf::from(file)));
    }
    let home = std::env::var_os("HOME").ok_or(CliError::NoHome)?;
    Ok(MenuSource::File(config.default_menu_path(home)))
}
