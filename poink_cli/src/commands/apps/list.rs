use crate::{
    commands::{load_catalog, print_json},
    prelude::*,
};
use abscissa_core::{Command, Runnable};
use clap::Parser;
use serde::Serialize;

#[derive(Command, Debug, Parser)]
pub struct ListCmd {
    /// Chain to list apps for instead of the default chain
    #[clap(short, long)]
    pub chain: Option<String>,
}

#[derive(Serialize)]
struct AppSummary<'a> {
    name: &'a str,
    description: &'a str,
    /// Whether the app takes a token
    parameterized: bool,
}

impl Runnable for ListCmd {
    fn run(&self) {
        let config = APP.config();
        let catalog = load_catalog(&config);

        let chain = catalog.chain(&config.default_chain).unwrap_or_else(|err| {
            status_err!("{}", err);
            std::process::exit(1);
        });

        let apps: Vec<AppSummary<'_>> = chain
            .apps
            .iter()
            .map(|app| AppSummary {
                name: &app.name,
                description: &app.description,
                parameterized: !app.is_static(),
            })
            .collect();

        print_json(&apps);
    }
}
