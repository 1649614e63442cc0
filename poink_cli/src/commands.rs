//! PoinkCli Subcommands

mod apps;
mod card;
mod chains;
mod embed;
mod link;
mod token;

use self::{
    apps::AppsCmd, card::CardCmd, chains::ChainsCmd, embed::EmbedCmd, link::LinkCmd,
    token::TokenCmd,
};
use crate::config::PoinkCliConfig;
use abscissa_core::{config::Override, Command, Configurable, FrameworkError, Runnable};
use clap::Parser;
use std::path::PathBuf;

/// PoinkCli Subcommands
/// Subcommands need to be listed in an enum.
#[derive(Command, Debug, Parser, Runnable)]
pub enum PoinkCliCmd {
    /// Browse the chains in the catalog
    #[clap(subcommand)]
    Chains(ChainsCmd),
    /// Browse the apps of a chain
    #[clap(subcommand)]
    Apps(AppsCmd),
    /// Generate the destination and embed URLs for an app
    Link(LinkCmd),
    /// Wrap any destination URL in an embed URL
    Embed(EmbedCmd),
    /// Render the player card or viewer page for an embed URL
    Card(CardCmd),
    /// Look up token metadata by address or native symbol
    Token(TokenCmd),
}

/// Entry point for the application. It needs to be a struct to allow using subcommands!
#[derive(Command, Debug, Parser)]
#[clap(author, about, version)]
pub struct EntryPoint {
    #[clap(subcommand)]
    cmd: PoinkCliCmd,

    /// Enable verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Use the specified config file
    #[clap(short, long)]
    pub config: Option<String>,
}

impl Runnable for EntryPoint {
    fn run(&self) {
        self.cmd.run()
    }
}

/// This trait allows you to define how application configuration is loaded.
impl Configurable<PoinkCliConfig> for EntryPoint {
    /// Location of the configuration file
    fn config_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.config {
            return Some(PathBuf::from(path));
        }

        // Generate ~/.poink/config.toml on first run. Without a home directory
        // the default config is used.
        crate::config::init().ok()
    }

    /// Apply changes to the config after it's been loaded, e.g. overriding
    /// values in a config file using command-line options.
    fn process_config(&self, config: PoinkCliConfig) -> Result<PoinkCliConfig, FrameworkError> {
        match &self.cmd {
            PoinkCliCmd::Apps(cmd) => cmd.override_config(config),
            PoinkCliCmd::Link(cmd) => cmd.override_config(config),
            PoinkCliCmd::Token(cmd) => cmd.override_config(config),
            _ => Ok(config),
        }
    }
}

/// Loads the catalog named by the config, exiting when it can't be read.
fn load_catalog(config: &PoinkCliConfig) -> poink::catalog::ChainCatalog {
    config.load_catalog().unwrap_or_else(|err| {
        abscissa_core::status_err!("Can't load catalog: {}", err);
        std::process::exit(1);
    })
}

/// Prints `value` as JSON with four space indentation.
fn print_json<T: serde::Serialize>(value: &T) {
    let buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(buf, formatter);
    value.serialize(&mut serializer).unwrap_or_else(|err| {
        abscissa_core::status_err!("Can't convert to JSON: {}", err);
        std::process::exit(1);
    });

    match String::from_utf8(serializer.into_inner()) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            abscissa_core::status_err!("Can't convert to JSON: {}", err);
            std::process::exit(1);
        }
    }
}
