mod list;
mod show;
mod show_default;

use abscissa_core::{Command, Runnable};
use clap::Parser;

use self::list::ListCmd;
use self::show::ShowCmd;
use self::show_default::ShowDefaultCmd;

/// `chains` subcommand
#[derive(Command, Debug, Parser, Runnable)]
pub enum ChainsCmd {
    /// List the chains in the catalog
    List(ListCmd),
    /// Show a chain and its apps
    Show(ShowCmd),
    /// Show the default chain
    ShowDefault(ShowDefaultCmd),
}
