use crate::prelude::*;
use abscissa_core::{Command, Runnable};
use clap::Parser;
use poink::{card::EmbedPage, link::current_timestamp_millis, LinkError};

/// `card` subcommand
///
/// Prints the `twitter:player` meta tags for an embed URL, or the whole viewer
/// page with `--page`.
#[derive(Command, Debug, Parser)]
pub struct CardCmd {
    /// Embed URL, absolute or relative such as `/embed?url=...`
    pub embed_url: String,

    /// Print the full viewer page instead of the meta tags
    #[clap(long)]
    pub page: bool,

    /// Cache busting timestamp for the player URL, defaults to now
    #[clap(short, long)]
    pub timestamp: Option<u64>,
}

impl Runnable for CardCmd {
    fn run(&self) {
        let config = APP.config();
        let builder = config.link_builder();
        let timestamp = self.timestamp.unwrap_or_else(current_timestamp_millis);

        match EmbedPage::from_embed_url(&builder, &self.embed_url, timestamp) {
            Ok(page) if self.page => print!("{}", page.to_html()),
            Ok(page) => println!("{}", page.card.to_html()),
            Err(LinkError::MissingUrl) => {
                status_err!("embed URL has no destination, the viewer would redirect home");
                std::process::exit(1);
            }
            Err(err) => {
                status_err!("Can't read embed URL: {}", err);
                std::process::exit(1);
            }
        }
    }
}
