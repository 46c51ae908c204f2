//! Discord-backed delivery of paginated pages.

use std::sync::Arc;

use async_trait::async_trait;
use twilight_http::Client;
use twilight_model::{
    channel::message::component::Component,
    http::interaction::{InteractionResponse, InteractionResponseType},
};
use twilight_util::builder::InteractionResponseDataBuilder;

use crate::embed::build_page_embed;

use super::components::NavControls;
use super::event::{InteractionRef, MessageHandle, NavigationEvent};
use super::page::PageContent;
use super::session::PageSink;

/// [`PageSink`] that talks to Discord through the shared HTTP client.
///
/// The first page is delivered by editing the (deferred) original response of
/// the invoking command, navigation answers the button interaction with an
/// in-place message update, and expiry edits the message directly.
#[derive(Clone)]
pub struct DiscordPageSink {
    http: Arc<Client>,
}

impl DiscordPageSink {
    pub fn new(http: Arc<Client>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl PageSink for DiscordPageSink {
    async fn send_page(
        &self,
        origin: &InteractionRef,
        content: &PageContent,
        controls: Option<NavControls>,
    ) -> anyhow::Result<MessageHandle> {
        let embed = build_page_embed(content)?;
        let components = controls.map(NavControls::to_components).unwrap_or_default();

        let message = self
            .http
            .interaction(origin.application_id)
            .update_response(&origin.token)
            .embeds(Some(std::slice::from_ref(&embed)))
            .components(Some(components.as_slice()))
            .await?
            .model()
            .await?;

        Ok(MessageHandle {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }

    async fn update_page(
        &self,
        event: &NavigationEvent,
        content: &PageContent,
        controls: NavControls,
    ) -> anyhow::Result<()> {
        let embed = build_page_embed(content)?;
        let response = InteractionResponse {
            kind: InteractionResponseType::UpdateMessage,
            data: Some(
                InteractionResponseDataBuilder::new()
                    .embeds(vec![embed])
                    .components(controls.to_components())
                    .build(),
            ),
        };

        self.http
            .interaction(event.interaction.application_id)
            .create_response(
                event.interaction.interaction_id,
                &event.interaction.token,
                &response,
            )
            .await?;

        Ok(())
    }

    async fn detach_controls(&self, message: MessageHandle) -> anyhow::Result<()> {
        let no_components: &[Component] = &[];
        self.http
            .update_message(message.channel_id, message.message_id)
            .components(Some(no_components))
            .await?;

        Ok(())
    }
}
