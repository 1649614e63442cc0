mod list;
mod show;

use crate::config::PoinkCliConfig;
use abscissa_core::{config, Command, FrameworkError, Runnable};
use clap::Parser;

use self::list::ListCmd;
use self::show::ShowCmd;

/// `apps` subcommand
#[derive(Command, Debug, Parser, Runnable)]
pub enum AppsCmd {
    /// List the apps of a chain
    List(ListCmd),
    /// Show an app descriptor
    Show(ShowCmd),
}

impl config::Override<PoinkCliConfig> for AppsCmd {
    // `--chain` replaces the default chain from the config file.
    fn override_config(&self, mut config: PoinkCliConfig) -> Result<PoinkCliConfig, FrameworkError> {
        let chain = match self {
            AppsCmd::List(cmd) => &cmd.chain,
            AppsCmd::Show(cmd) => &cmd.chain,
        };
        if let Some(chain) = chain {
            config.default_chain = chain.clone();
        }

        Ok(config)
    }
}
