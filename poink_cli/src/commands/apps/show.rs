use crate::{
    commands::{load_catalog, print_json},
    prelude::*,
};
use abscissa_core::{Command, Runnable};
use clap::Parser;

#[derive(Command, Debug, Parser)]
pub struct ShowCmd {
    /// App name as shown by `apps list`
    pub name: String,

    /// Chain the app belongs to instead of the default chain
    #[clap(short, long)]
    pub chain: Option<String>,
}

impl Runnable for ShowCmd {
    fn run(&self) {
        let config = APP.config();
        let catalog = load_catalog(&config);

        match catalog.app(&config.default_chain, &self.name) {
            Ok(app) => print_json(app),
            Err(err) => {
                status_err!("{}", err);
                std::process::exit(1);
            }
        }
    }
}
