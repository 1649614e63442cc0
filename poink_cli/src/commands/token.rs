use crate::{
    commands::{load_catalog, print_json},
    config::PoinkCliConfig,
    prelude::*,
};
use abscissa_core::{config, Command, FrameworkError, Runnable};
use clap::Parser;
use poink::{
    token::{lookup_token, OneInchTokenList, ONE_INCH_API},
    TokenError,
};

/// `token` subcommand
#[derive(Command, Debug, Parser)]
pub struct TokenCmd {
    /// Token contract address, or a native symbol such as `ETH`
    pub address: String,

    /// Chain to look the token up on instead of the default chain
    #[clap(short, long)]
    pub chain: Option<String>,

    /// Token list API base URL
    #[clap(long, default_value = ONE_INCH_API)]
    pub api: String,
}

impl config::Override<PoinkCliConfig> for TokenCmd {
    fn override_config(&self, mut config: PoinkCliConfig) -> Result<PoinkCliConfig, FrameworkError> {
        if let Some(chain) = &self.chain {
            config.default_chain = chain.clone();
        }

        Ok(config)
    }
}

impl Runnable for TokenCmd {
    fn run(&self) {
        let config = APP.config();
        let catalog = load_catalog(&config);
        let key = config.default_chain.clone();

        let chain = catalog.chain(&key).unwrap_or_else(|err| {
            status_err!("{}", err);
            std::process::exit(1);
        });
        let chain_id = chain
            .chain_id
            .ok_or(TokenError::MissingChainId(key))
            .unwrap_or_else(|err| {
                status_err!("{}", err);
                std::process::exit(1);
            });

        abscissa_tokio::run(&APP, async {
            let list = OneInchTokenList::new(&self.api);
            match lookup_token(&list, chain_id, &self.address).await {
                Ok(Some(token)) => print_json(&token),
                Ok(None) => {
                    status_err!("{} is not on the token list of chain {}", self.address, chain_id);
                    std::process::exit(1);
                }
                Err(err) => {
                    status_err!("Can't look up token: {}", err);
                    std::process::exit(1);
                }
            }
        })
        .unwrap_or_else(|e| {
            status_err!("executor exited with error: {}", e);
            std::process::exit(1);
        });
    }
}
