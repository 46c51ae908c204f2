//! Navigation events and the handles that scope them.

use twilight_model::{
    application::interaction::Interaction,
    id::{
        Id,
        marker::{ApplicationMarker, ChannelMarker, InteractionMarker, MessageMarker, UserMarker},
    },
};

/// The two navigation buttons a paginated message carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    Previous,
    Next,
}

impl NavControl {
    /// Component custom ID for this control.
    pub const fn custom_id(self) -> &'static str {
        match self {
            Self::Previous => "previous",
            Self::Next => "next",
        }
    }

    /// Parse a component custom ID; anything else is not a navigation control.
    pub fn from_custom_id(custom_id: &str) -> Option<Self> {
        match custom_id {
            "previous" => Some(Self::Previous),
            "next" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Reference to a message the bot posted and may edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHandle {
    pub channel_id: Id<ChannelMarker>,
    pub message_id: Id<MessageMarker>,
}

/// What is needed to answer an interaction after the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionRef {
    pub application_id: Id<ApplicationMarker>,
    pub interaction_id: Id<InteractionMarker>,
    pub token: String,
}

impl InteractionRef {
    pub fn from_interaction(interaction: &Interaction) -> Self {
        Self {
            application_id: interaction.application_id,
            interaction_id: interaction.id,
            token: interaction.token.clone(),
        }
    }
}

/// A user pressing previous/next on a paginated message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEvent {
    pub control: NavControl,
    pub user_id: Id<UserMarker>,
    pub message: MessageHandle,
    pub interaction: InteractionRef,
}
