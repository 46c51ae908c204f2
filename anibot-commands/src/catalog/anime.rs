use tracing::{error, info};
use twilight_model::application::interaction::{Interaction, application_command::CommandData};

use anibot_core::Context;
use anibot_utils::interaction::{
    defer_response, edit_original_response_content, edit_original_response_embed,
};
use anibot_utils::parse::option_str;

use super::embeds::anime_embed;
use super::respond_usage;
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "anime",
    desc: "Look up an anime on MyAnimeList.",
    category: "anime",
    usage: "/anime <title>",
};

const NOT_FOUND_MESSAGE: &str = "No anime found with that title.";
const FETCH_ERROR_MESSAGE: &str = "Error fetching anime data.";

/// Show the best match for a title as a single detail card.
///
/// A lookup yields at most one record, so it never goes through the
/// paginated viewer.
pub async fn run(ctx: Context, interaction: &Interaction, data: &CommandData) -> anyhow::Result<()> {
    let Some(title) = option_str(data, "title") else {
        return respond_usage(&ctx, interaction, &META).await;
    };

    info!(title, "fetching anime info");
    defer_response(&ctx.http, interaction).await?;

    let anime = match ctx.mal.search_anime(title).await {
        Ok(anime) => anime,
        Err(source) if source.is_not_found() => {
            edit_original_response_content(&ctx.http, interaction, NOT_FOUND_MESSAGE).await?;
            return Ok(());
        }
        Err(source) => {
            error!(?source, title, "error fetching anime data");
            edit_original_response_content(&ctx.http, interaction, FETCH_ERROR_MESSAGE).await?;
            return Ok(());
        }
    };

    let embed = anime_embed(&anime)?;
    edit_original_response_embed(&ctx.http, interaction, &embed).await
}
