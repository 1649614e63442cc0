use crate::{
    commands::{load_catalog, print_json},
    prelude::*,
};
use abscissa_core::{Command, Runnable};
use clap::Parser;
use serde::Serialize;

#[derive(Command, Debug, Parser)]
pub struct ListCmd {}

#[derive(Serialize)]
struct ChainSummary<'a> {
    key: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain_id: Option<u64>,
    route: String,
    apps: usize,
}

impl Runnable for ListCmd {
    /// List all chains
    fn run(&self) {
        let config = APP.config();
        let catalog = load_catalog(&config);

        let chains: Vec<ChainSummary<'_>> = catalog
            .iter()
            .map(|(key, chain)| ChainSummary {
                key,
                name: &chain.name,
                chain_id: chain.chain_id,
                route: chain.page_route(key),
                apps: chain.apps.len(),
            })
            .collect();

        print_json(&chains);
    }
}
