use crate::{
    commands::{load_catalog, print_json},
    prelude::*,
};
use abscissa_core::{Command, Runnable};
use clap::Parser;

#[derive(Command, Debug, Parser)]
pub struct ShowCmd {
    /// Catalog key of the chain, e.g. `solana`
    pub name: String,
}

impl Runnable for ShowCmd {
    /// Print the chain descriptor.
    fn run(&self) {
        let config = APP.config();
        let catalog = load_catalog(&config);

        match catalog.chain(&self.name) {
            Ok(chain) => print_json(chain),
            Err(err) => {
                status_err!("{}, run `chains list` to see the available chains", err);
                std::process::exit(1);
            }
        }
    }
}
