pub mod anime;
pub mod embeds;
pub mod ranking;
pub mod seasonal;
pub mod topten;

use tracing::error;
use twilight_model::application::interaction::Interaction;

use anibot_core::Context;
use anibot_mal::Anime;
use anibot_utils::interaction::{edit_original_response_content, respond_ephemeral_message};
use anibot_utils::pagination::{FormattedItem, InteractionRef, Pager, PaginationError, paginate};

use crate::CommandMeta;
use embeds::{unknown_user_message, usage_message};

/// Reply with a command's usage line, visible only to the invoking user.
pub(crate) async fn respond_usage(
    ctx: &Context,
    interaction: &Interaction,
    meta: &CommandMeta,
) -> anyhow::Result<()> {
    respond_ephemeral_message(&ctx.http, interaction, &usage_message(meta.usage)).await
}

/// Cut `records` to at most `limit` entries and split them into pages.
pub(crate) fn paginate_capped<F>(
    mut records: Vec<Anime>,
    limit: usize,
    per_page: usize,
    title: &str,
    format_item: F,
) -> Result<Pager<Anime>, PaginationError>
where
    F: Fn(&Anime, usize) -> FormattedItem,
{
    records.truncate(limit);
    paginate(records, per_page, title, format_item)
}

/// Show a result set in the paginated viewer as the answer to a deferred command.
///
/// If the first page cannot be delivered, the deferred response is replaced
/// with `failure_message` so it never stays pending.
pub(crate) async fn show_paginated(
    ctx: &Context,
    interaction: &Interaction,
    pager: Pager<Anime>,
    failure_message: &str,
) -> anyhow::Result<()> {
    let Some(owner) = interaction.author_id() else {
        edit_original_response_content(&ctx.http, interaction, unknown_user_message()).await?;
        return Ok(());
    };

    if let Err(source) = ctx
        .sessions
        .start(&InteractionRef::from_interaction(interaction), owner, pager)
        .await
    {
        error!(?source, "failed to deliver paginated results");
        edit_original_response_content(&ctx.http, interaction, failure_message).await?;
    }

    Ok(())
}
