use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "app.poink.xyz";
pub const DEFAULT_PLAYER_WIDTH: u32 = 360;
pub const DEFAULT_PLAYER_HEIGHT: u32 = 560;
pub const DEFAULT_PREVIEW_IMAGE: &str =
    "https://avatars.githubusercontent.com/u/194240984?s=200&v=4";

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct LinkBuilderConfig {
    /// Host serving the `/embed` viewer page, without scheme.
    pub host: String,
    pub player: PlayerCardConfig,
}

impl Default for LinkBuilderConfig {
    fn default() -> Self {
        LinkBuilderConfig {
            host: DEFAULT_HOST.to_string(),
            player: PlayerCardConfig::default(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct PlayerCardConfig {
    pub site: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PlayerCardConfig {
    fn default() -> Self {
        PlayerCardConfig {
            site: "https://x.com/ethereum".to_string(),
            title: "Embedded Content".to_string(),
            description: "Interactive embedded content".to_string(),
            image: DEFAULT_PREVIEW_IMAGE.to_string(),
            width: DEFAULT_PLAYER_WIDTH,
            height: DEFAULT_PLAYER_HEIGHT,
        }
    }
}
