use crate::{
    commands::{load_catalog, print_json},
    config::PoinkCliConfig,
    prelude::*,
};
use abscissa_core::{config, Command, FrameworkError, Runnable};
use clap::Parser;
use poink::link::{back_route, current_timestamp_millis, GeneratedLink, LinkContext};
use serde::Serialize;

/// `link` subcommand
///
/// Prints the destination URL, then the embed URL, one per line.
#[derive(Command, Debug, Parser)]
pub struct LinkCmd {
    /// App name as shown by `apps list`
    pub app: String,

    /// Token address or symbol to pre-fill; ignored by apps without parameters
    pub token: Option<String>,

    /// Chain the app belongs to instead of the default chain
    #[clap(short, long)]
    pub chain: Option<String>,

    /// Route the viewer returns to, defaults to the chain's page
    #[clap(short, long)]
    pub back: Option<String>,

    /// Leave the back route out of the embed URL
    #[clap(long, conflicts_with = "back")]
    pub no_back: bool,

    /// Cache busting timestamp in milliseconds, defaults to now
    #[clap(short, long)]
    pub timestamp: Option<u64>,

    /// Also print the human readable embed URL
    #[clap(long)]
    pub display: bool,

    /// Print the links as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct LinkOutput<'a> {
    app: &'a str,
    chain: &'a str,
    #[serde(flatten)]
    link: &'a GeneratedLink,
    #[serde(skip_serializing_if = "Option::is_none")]
    display_url: Option<String>,
}

impl config::Override<PoinkCliConfig> for LinkCmd {
    fn override_config(&self, mut config: PoinkCliConfig) -> Result<PoinkCliConfig, FrameworkError> {
        if let Some(chain) = &self.chain {
            config.default_chain = chain.clone();
        }

        Ok(config)
    }
}

impl Runnable for LinkCmd {
    fn run(&self) {
        let config = APP.config();
        let catalog = load_catalog(&config);
        let key = config.default_chain.as_str();

        let chain = catalog.chain(key).unwrap_or_else(|err| {
            status_err!("{}", err);
            std::process::exit(1);
        });
        let app = chain.app(&self.app).unwrap_or_else(|| {
            status_err!("{} is not an app on {}, run `apps list` to see them", self.app, key);
            std::process::exit(1);
        });

        let token = self.token.as_deref().unwrap_or_default().trim();
        if !app.is_static() && token.is_empty() {
            status_err!("{} needs a token address or symbol", app.name);
            std::process::exit(1);
        }

        let timestamp = self.timestamp.unwrap_or_else(current_timestamp_millis);
        let back = match &self.back {
            _ if self.no_back => None,
            Some(back) => Some(back.clone()),
            None => Some(back_route(&chain.page_route(key), timestamp)),
        };

        let mut context = LinkContext::for_chain(key, chain, timestamp);
        if let Some(back) = &back {
            context = context.with_back(back);
        }

        let builder = config.link_builder();
        let link = builder.generate(app, token, &context);
        debug!("generated link for {} on {}: {:?}", app.name, key, link);

        let display_url = self
            .display
            .then(|| builder.build_display_url(&link.destination_url, timestamp));

        if self.json {
            print_json(&LinkOutput {
                app: &app.name,
                chain: key,
                link: &link,
                display_url,
            });
        } else {
            println!("{}", link.destination_url);
            println!("{}", link.embed_url);
            if let Some(display_url) = display_url {
                println!("{}", display_url);
            }
        }
    }
}
