use crate::prelude::*;
use abscissa_core::{Command, Runnable};
use clap::Parser;
use poink::link::current_timestamp_millis;
use url::Url;

/// `embed` subcommand
///
/// Wraps an arbitrary destination URL, for apps that are not in the catalog.
#[derive(Command, Debug, Parser)]
pub struct EmbedCmd {
    /// Absolute destination URL
    pub url: String,

    /// Chain key sent along to the viewer
    #[clap(short, long)]
    pub chain: Option<String>,

    /// Route the viewer returns to
    #[clap(short, long)]
    pub back: Option<String>,

    /// Cache busting timestamp in milliseconds, defaults to now
    #[clap(short, long)]
    pub timestamp: Option<u64>,
}

impl Runnable for EmbedCmd {
    fn run(&self) {
        if let Err(err) = Url::parse(&self.url) {
            status_err!("{} is not an absolute URL: {}", self.url, err);
            std::process::exit(1);
        }

        let config = APP.config();
        let timestamp = self.timestamp.unwrap_or_else(current_timestamp_millis);
        let embed_url = config.link_builder().build_embed_url(
            &self.url,
            self.back.as_deref(),
            self.chain.as_deref(),
            timestamp,
        );

        println!("{}", embed_url);
    }
}
