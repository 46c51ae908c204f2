use tracing::{error, info};
use twilight_model::application::interaction::{Interaction, application_command::CommandData};

use anibot_core::Context;
use anibot_mal::RankingType;
use anibot_utils::interaction::{defer_response, edit_original_response_content};
use anibot_utils::pagination::PaginationError;
use anibot_utils::parse::option_str;

use super::embeds::{format_ranked, ranking_title};
use super::{paginate_capped, respond_usage, show_paginated};
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "ranking",
    desc: "Ranked anime from MyAnimeList for a category.",
    category: "anime",
    usage: "/ranking <category>",
};

const RESULTS_PER_PAGE: usize = 10;
const RESULT_LIMIT: usize = 100;

const NOT_FOUND_MESSAGE: &str = "No anime found for that category.";
const FETCH_ERROR_MESSAGE: &str = "Error fetching ranked anime.";

/// Show up to 100 ranked anime, ten per page.
///
/// Inputs:
/// - required category: one of `all`, `airing`, `upcoming`, `tv`, `ova`,
///   `movie`, `special`, `bypopularity`, `favorite`.
///
/// Error behavior:
/// - unknown or missing category returns usage text.
/// - an empty ranking returns a plain not-found message.
/// - upstream failures return a generic error message.
pub async fn run(ctx: Context, interaction: &Interaction, data: &CommandData) -> anyhow::Result<()> {
    let Some(kind) = option_str(data, "category").and_then(RankingType::parse) else {
        return respond_usage(&ctx, interaction, &META).await;
    };

    info!(category = kind.as_str(), "fetching anime ranking");
    defer_response(&ctx.http, interaction).await?;

    let ranked = match ctx.mal.ranking(kind, RESULT_LIMIT).await {
        Ok(ranked) => ranked,
        Err(source) if source.is_not_found() => Vec::new(),
        Err(source) => {
            error!(?source, category = kind.as_str(), "error fetching ranked anime");
            edit_original_response_content(&ctx.http, interaction, FETCH_ERROR_MESSAGE).await?;
            return Ok(());
        }
    };

    let title = ranking_title(kind);
    let pager = match paginate_capped(
        ranked,
        RESULT_LIMIT,
        RESULTS_PER_PAGE,
        &title,
        format_ranked,
    ) {
        Ok(pager) => pager,
        Err(PaginationError::EmptyResultSet) => {
            edit_original_response_content(&ctx.http, interaction, NOT_FOUND_MESSAGE).await?;
            return Ok(());
        }
    };

    show_paginated(&ctx, interaction, pager, FETCH_ERROR_MESSAGE).await
}
