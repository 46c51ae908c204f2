use tracing::{error, info};
use twilight_model::application::interaction::{Interaction, application_command::CommandData};

use anibot_core::Context;
use anibot_mal::Season;
use anibot_utils::interaction::{defer_response, edit_original_response_content};
use anibot_utils::pagination::PaginationError;
use anibot_utils::parse::{option_integer, option_str, parse_year};

use super::embeds::{format_seasonal, seasonal_title};
use super::{paginate_capped, respond_usage, show_paginated};
use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "seasonal",
    desc: "Anime airing in a given season and year.",
    category: "anime",
    usage: "/seasonal <winter|spring|summer|fall> <year>",
};

const RESULTS_PER_PAGE: usize = 5;
const RESULT_LIMIT: usize = 100;

const NOT_FOUND_MESSAGE: &str = "No seasonal anime found for that season and year.";
const FETCH_ERROR_MESSAGE: &str = "Error fetching seasonal anime.";

/// Show a season's anime, five per page.
///
/// Error behavior:
/// - unknown season or out-of-range year returns usage text.
/// - an empty season returns a plain not-found message.
/// - upstream failures return a generic error message.
pub async fn run(ctx: Context, interaction: &Interaction, data: &CommandData) -> anyhow::Result<()> {
    let season = option_str(data, "season").and_then(Season::parse);
    let year = option_integer(data, "year").and_then(parse_year);
    let (Some(season), Some(year)) = (season, year) else {
        return respond_usage(&ctx, interaction, &META).await;
    };

    info!(season = season.as_str(), year, "fetching seasonal anime");
    defer_response(&ctx.http, interaction).await?;

    let seasonal = match ctx.mal.seasonal(season, year, RESULT_LIMIT).await {
        Ok(seasonal) => seasonal,
        Err(source) if source.is_not_found() => Vec::new(),
        Err(source) => {
            error!(?source, season = season.as_str(), year, "error fetching seasonal anime");
            edit_original_response_content(&ctx.http, interaction, FETCH_ERROR_MESSAGE).await?;
            return Ok(());
        }
    };

    let title = seasonal_title(season, year);
    let pager = match paginate_capped(
        seasonal,
        RESULT_LIMIT,
        RESULTS_PER_PAGE,
        &title,
        format_seasonal,
    ) {
        Ok(pager) => pager,
        Err(PaginationError::EmptyResultSet) => {
            edit_original_response_content(&ctx.http, interaction, NOT_FOUND_MESSAGE).await?;
            return Ok(());
        }
    };

    show_paginated(&ctx, interaction, pager, FETCH_ERROR_MESSAGE).await
}
