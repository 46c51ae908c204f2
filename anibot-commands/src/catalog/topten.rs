use tracing::{error, info};
use twilight_model::application::interaction::{Interaction, application_command::CommandData};

use anibot_core::Context;
use anibot_mal::RankingType;
use anibot_utils::interaction::{
    defer_response, edit_original_response_content, edit_original_response_embed,
};
use anibot_utils::parse::option_str;

use super::embeds::top_ten_embed;
use super::respond_usage;
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "topten",
    desc: "The top ten anime from MyAnimeList for a category.",
    category: "anime",
    usage: "/topten <category>",
};

const TOP_N: usize = 10;

const NOT_FOUND_MESSAGE: &str = "No top ten anime found for that category.";
const FETCH_ERROR_MESSAGE: &str = "Error fetching top ten anime.";

/// Show the first ten ranked anime as a single embed without navigation.
pub async fn run(ctx: Context, interaction: &Interaction, data: &CommandData) -> anyhow::Result<()> {
    let Some(kind) = option_str(data, "category").and_then(RankingType::parse) else {
        return respond_usage(&ctx, interaction, &META).await;
    };

    info!(category = kind.as_str(), "fetching top ten anime");
    defer_response(&ctx.http, interaction).await?;

    let mut top = match ctx.mal.ranking(kind, TOP_N).await {
        Ok(top) => top,
        Err(source) if source.is_not_found() => Vec::new(),
        Err(source) => {
            error!(?source, category = kind.as_str(), "error fetching top ten anime");
            edit_original_response_content(&ctx.http, interaction, FETCH_ERROR_MESSAGE).await?;
            return Ok(());
        }
    };

    if top.is_empty() {
        edit_original_response_content(&ctx.http, interaction, NOT_FOUND_MESSAGE).await?;
        return Ok(());
    }

    top.truncate(TOP_N);
    let embed = top_ten_embed(kind, &top)?;
    edit_original_response_embed(&ctx.http, interaction, &embed).await
}
