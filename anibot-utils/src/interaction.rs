use twilight_http::Client;
use twilight_model::{
    application::interaction::Interaction,
    channel::message::{MessageFlags, embed::Embed},
    http::interaction::{InteractionResponse, InteractionResponseType},
};
use twilight_util::builder::InteractionResponseDataBuilder;

/// Acknowledge a slash command now and answer it later by editing the original response.
pub async fn defer_response(http: &Client, interaction: &Interaction) -> anyhow::Result<()> {
    let response = InteractionResponse {
        kind: InteractionResponseType::DeferredChannelMessageWithSource,
        data: None,
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Reply to an interaction with a public text message.
pub async fn respond_message(
    http: &Client,
    interaction: &Interaction,
    content: &str,
) -> anyhow::Result<()> {
    let response = InteractionResponse {
        kind: InteractionResponseType::ChannelMessageWithSource,
        data: Some(InteractionResponseDataBuilder::new().content(content).build()),
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Reply to an interaction with a message only the invoking user can see.
pub async fn respond_ephemeral_message(
    http: &Client,
    interaction: &Interaction,
    content: &str,
) -> anyhow::Result<()> {
    let response = InteractionResponse {
        kind: InteractionResponseType::ChannelMessageWithSource,
        data: Some(
            InteractionResponseDataBuilder::new()
                .content(content)
                .flags(MessageFlags::EPHEMERAL)
                .build(),
        ),
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Reply to an interaction with a single embed.
pub async fn respond_embed(
    http: &Client,
    interaction: &Interaction,
    embed: Embed,
) -> anyhow::Result<()> {
    let response = InteractionResponse {
        kind: InteractionResponseType::ChannelMessageWithSource,
        data: Some(InteractionResponseDataBuilder::new().embeds([embed]).build()),
    };

    http.interaction(interaction.application_id)
        .create_response(interaction.id, &interaction.token, &response)
        .await?;

    Ok(())
}

/// Fill a deferred response with plain text.
pub async fn edit_original_response_content(
    http: &Client,
    interaction: &Interaction,
    content: &str,
) -> anyhow::Result<()> {
    http.interaction(interaction.application_id)
        .update_response(&interaction.token)
        .content(Some(content))
        .await?;

    Ok(())
}

/// Fill a deferred response with a single embed.
pub async fn edit_original_response_embed(
    http: &Client,
    interaction: &Interaction,
    embed: &Embed,
) -> anyhow::Result<()> {
    http.interaction(interaction.application_id)
        .update_response(&interaction.token)
        .content(None)
        .embeds(Some(std::slice::from_ref(embed)))
        .await?;

    Ok(())
}
