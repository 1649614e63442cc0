/// Decoding of embed URLs back into the parts the viewer page works with
use crate::{error::LinkError, utils};
use serde::{Deserialize, Serialize};
use url::{ParseError, Url};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EmbedTarget {
    /// The decoded destination URL loaded by the viewer's frame.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

impl EmbedTarget {
    /// Extracts the destination and optional parts of an embed URL, decoding each value once.
    /// Relative URLs such as `/embed?url=...` are accepted. Unknown parameters are ignored and
    /// a non-numeric `t` is treated as absent.
    pub fn parse(embed_url: &str) -> Result<EmbedTarget, LinkError> {
        let parsed = match Url::parse(embed_url) {
            Err(ParseError::RelativeUrlWithoutBase) => {
                Url::parse("https://localhost/")?.join(embed_url)?
            }
            other => other?,
        };

        let mut target = EmbedTarget::default();
        let mut url = None;
        // split by hand: query_pairs() decodes lossily and could not report invalid UTF-8
        for pair in parsed.query().unwrap_or_default().split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let value = utils::decode_component(value)
                .map_err(|_| LinkError::Decode(key.to_string()))?
                .into_owned();

            match key {
                "url" => url = Some(value),
                "chain" => target.chain = Some(value),
                "back" => target.back = Some(value),
                "t" => target.timestamp = value.parse().ok(),
                _ => (),
            }
        }

        target.url = url.filter(|u| !u.is_empty()).ok_or(LinkError::MissingUrl)?;

        Ok(target)
    }
}
