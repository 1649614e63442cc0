//! Social "player" card metadata and the embed viewer page.
use crate::{
    config::PlayerCardConfig,
    link::{EmbedTarget, LinkBuilder},
    utils::escape_html,
    LinkError,
};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Permissions granted to the framed app.
pub const IFRAME_SANDBOX: &str =
    "allow-scripts allow-same-origin allow-forms allow-popups allow-modals";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct MetaTag {
    pub name: String,
    pub content: String,
}

impl MetaTag {
    fn new(name: &str, content: impl Into<String>) -> Self {
        MetaTag {
            name: name.to_string(),
            content: content.into(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            r#"<meta name="{}" content="{}" />"#,
            escape_html(&self.name),
            escape_html(&self.content)
        )
    }
}

/// The `twitter:player` card a social platform renders for a shared link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerCard {
    pub title: String,
    pub description: String,
    pub site: String,
    pub player_url: String,
    pub image: String,
    pub width: u32,
    pub height: u32,
}

impl PlayerCard {
    pub fn new(config: &PlayerCardConfig, player_url: impl Into<String>) -> Self {
        PlayerCard {
            title: config.title.clone(),
            description: config.description.clone(),
            site: config.site.clone(),
            player_url: player_url.into(),
            image: config.image.clone(),
            width: config.width,
            height: config.height,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn meta_tags(&self) -> Vec<MetaTag> {
        vec![
            MetaTag::new("twitter:card", "player"),
            MetaTag::new("twitter:site", self.site.as_str()),
            MetaTag::new("twitter:title", self.title.as_str()),
            MetaTag::new("twitter:description", self.description.as_str()),
            MetaTag::new("twitter:player", self.player_url.as_str()),
            MetaTag::new("twitter:player:width", self.width.to_string()),
            MetaTag::new("twitter:player:height", self.height.to_string()),
            MetaTag::new("twitter:image", self.image.as_str()),
        ]
    }

    pub fn to_html(&self) -> String {
        self.meta_tags()
            .iter()
            .map(MetaTag::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// The viewer page served at `/embed`: the target app in a sandboxed frame, with a player
/// card whose player URL is the page's own embed URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedPage {
    pub target: EmbedTarget,
    pub card: PlayerCard,
}

impl EmbedPage {
    /// Builds the viewer page for an incoming embed URL.
    ///
    /// # Arguments
    ///
    /// * `builder` - Supplies the host and card settings.
    /// * `embed_url` - The requested embed URL. Fails with [`LinkError::MissingUrl`] when it
    /// has no destination, in which case the caller should send the visitor home.
    /// * `timestamp` - Fresh cache busting value for the card's player URL.
    pub fn from_embed_url(
        builder: &LinkBuilder,
        embed_url: &str,
        timestamp: u64,
    ) -> Result<EmbedPage, LinkError> {
        let target = EmbedTarget::parse(embed_url)?;
        let player_url = builder.build_embed_url(
            &target.url,
            target.back.as_deref(),
            target.chain.as_deref(),
            timestamp,
        );
        let card = PlayerCard::new(&builder.config().player, player_url);

        Ok(EmbedPage { target, card })
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"utf-8\" />\n");
        html.push_str("<meta name=\"viewport\" content=\"width=device-width,initial-scale=1\" />\n");
        let _ = writeln!(html, "<title>{}</title>", escape_html(&self.card.title));
        html.push_str(&self.card.to_html());
        html.push_str("\n</head>\n<body>\n");
        let _ = writeln!(
            html,
            r#"<iframe src="{}" title="{}" sandbox="{}" loading="lazy" style="width:100%;height:100vh;border:0"></iframe>"#,
            escape_html(&self.target.url),
            escape_html(&self.card.title),
            IFRAME_SANDBOX
        );
        if let Some(back) = &self.target.back {
            let _ = writeln!(html, r#"<a href="{}">Back</a>"#, escape_html(back));
        }
        html.push_str("</body>\n</html>\n");

        html
    }
}
