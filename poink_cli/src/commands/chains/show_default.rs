use crate::{
    commands::{load_catalog, print_json},
    prelude::*,
};
use abscissa_core::{Command, Runnable};
use clap::Parser;
use std::collections::HashMap;

#[derive(Command, Debug, Parser)]
pub struct ShowDefaultCmd {}

impl Runnable for ShowDefaultCmd {
    /// Print the default chain keyed by its catalog key.
    fn run(&self) {
        let config = APP.config();
        let catalog = load_catalog(&config);

        let chain = catalog.chain(&config.default_chain).unwrap_or_else(|err| {
            status_err!("default chain is not in the catalog: {}", err);
            std::process::exit(1);
        });

        print_json(&HashMap::from([(config.default_chain.as_str(), chain)]));
    }
}
