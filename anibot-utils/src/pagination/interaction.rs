//! Extraction of navigation events from gateway interactions.

use twilight_model::application::interaction::{Interaction, InteractionData};

use super::event::{InteractionRef, MessageHandle, NavControl, NavigationEvent};

/// Turn a button press on a paginated message into a [`NavigationEvent`].
///
/// Returns `None` for anything that is not a `previous`/`next` component
/// interaction attached to a message with a known author.
pub fn navigation_event(interaction: &Interaction) -> Option<NavigationEvent> {
    let Some(InteractionData::MessageComponent(component)) = interaction.data.as_ref() else {
        return None;
    };

    let control = NavControl::from_custom_id(&component.custom_id)?;
    let user_id = interaction.author_id()?;
    let message = interaction.message.as_ref()?;

    Some(NavigationEvent {
        control,
        user_id,
        message: MessageHandle {
            channel_id: message.channel_id,
            message_id: message.id,
        },
        interaction: InteractionRef::from_interaction(interaction),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use twilight_model::{
        application::{
            command::CommandType,
            interaction::{
                InteractionType, application_command::CommandData,
                message_component::MessageComponentInteractionData,
            },
        },
        channel::message::{Message, MessageType, component::ComponentType},
        id::Id,
        oauth::ApplicationIntegrationMap,
        user::User,
        util::Timestamp,
    };

    use super::*;

    const CLICKER: u64 = 42;
    const CHANNEL: u64 = 300;
    const MESSAGE: u64 = 900;

    fn user(id: u64) -> User {
        User {
            accent_color: None,
            avatar: None,
            avatar_decoration: None,
            avatar_decoration_data: None,
            banner: None,
            bot: false,
            discriminator: 0,
            email: None,
            flags: None,
            global_name: None,
            id: Id::new(id),
            locale: None,
            mfa_enabled: None,
            name: format!("user{id}"),
            premium_type: None,
            primary_guild: None,
            public_flags: None,
            system: None,
            verified: None,
        }
    }

    #[allow(deprecated)]
    fn posted_message() -> Message {
        Message {
            activity: None,
            application: None,
            application_id: None,
            attachments: Vec::new(),
            author: user(1),
            call: None,
            channel_id: Id::new(CHANNEL),
            components: Vec::new(),
            content: String::new(),
            edited_timestamp: None,
            embeds: Vec::new(),
            flags: None,
            guild_id: None,
            id: Id::new(MESSAGE),
            interaction: None,
            interaction_metadata: None,
            kind: MessageType::Regular,
            member: None,
            mention_channels: Vec::new(),
            mention_everyone: false,
            mention_roles: Vec::new(),
            mentions: Vec::new(),
            message_snapshots: Vec::new(),
            pinned: false,
            poll: None,
            reactions: Vec::new(),
            reference: None,
            referenced_message: None,
            role_subscription_data: None,
            sticker_items: Vec::new(),
            timestamp: Timestamp::from_secs(1_700_000_000).expect("valid timestamp"),
            thread: None,
            tts: false,
            webhook_id: None,
        }
    }

    fn button_data(custom_id: &str) -> InteractionData {
        InteractionData::MessageComponent(Box::new(MessageComponentInteractionData {
            custom_id: custom_id.to_owned(),
            component_type: ComponentType::Button,
            resolved: None,
            values: Vec::new(),
        }))
    }

    #[allow(deprecated)]
    fn interaction(kind: InteractionType, data: Option<InteractionData>) -> Interaction {
        Interaction {
            app_permissions: None,
            application_id: Id::new(10),
            authorizing_integration_owners: ApplicationIntegrationMap {
                guild: None,
                user: None,
            },
            channel: None,
            channel_id: Some(Id::new(CHANNEL)),
            context: None,
            data,
            entitlements: Vec::new(),
            guild: None,
            guild_id: None,
            guild_locale: None,
            id: Id::new(11),
            kind,
            locale: None,
            member: None,
            message: Some(posted_message()),
            token: "interaction-token".to_owned(),
            user: Some(user(CLICKER)),
        }
    }

    fn click(custom_id: &str) -> Interaction {
        interaction(InteractionType::MessageComponent, Some(button_data(custom_id)))
    }

    #[test]
    fn button_presses_become_navigation_events() {
        for (custom_id, control) in [("previous", NavControl::Previous), ("next", NavControl::Next)] {
            let event = navigation_event(&click(custom_id)).expect("navigation button");

            assert_eq!(
                event,
                NavigationEvent {
                    control,
                    user_id: Id::new(CLICKER),
                    message: MessageHandle {
                        channel_id: Id::new(CHANNEL),
                        message_id: Id::new(MESSAGE),
                    },
                    interaction: InteractionRef {
                        application_id: Id::new(10),
                        interaction_id: Id::new(11),
                        token: "interaction-token".to_owned(),
                    },
                }
            );
        }
    }

    #[test]
    fn other_custom_ids_are_ignored() {
        for custom_id in ["close", "Next", "next:1", "pg:help", ""] {
            assert_eq!(navigation_event(&click(custom_id)), None, "{custom_id:?}");
        }
    }

    #[test]
    fn slash_commands_are_not_navigation() {
        let command = InteractionData::ApplicationCommand(Box::new(CommandData {
            guild_id: None,
            id: Id::new(5),
            name: "ranking".to_owned(),
            kind: CommandType::ChatInput,
            options: Vec::new(),
            resolved: None,
            target_id: None,
        }));

        let slash = interaction(InteractionType::ApplicationCommand, Some(command));
        assert_eq!(navigation_event(&slash), None);
    }

    #[test]
    fn clicks_without_a_message_or_author_are_dropped() {
        let mut detached = click("next");
        detached.message = None;
        assert_eq!(navigation_event(&detached), None);

        let mut anonymous = click("next");
        anonymous.user = None;
        anonymous.member = None;
        assert_eq!(navigation_event(&anonymous), None);
    }
}
