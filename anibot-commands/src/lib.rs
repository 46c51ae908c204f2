pub mod catalog;
pub mod utility;

use tracing::{debug, error};
use twilight_model::{
    application::interaction::{Interaction, InteractionData, application_command::CommandData},
    gateway::payload::incoming::InteractionCreate,
};

use anibot_core::Context;
use anibot_utils::pagination::navigation_event;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CommandRoute {
    Anime,
    Ranking,
    Seasonal,
    TopTen,
    Ping,
    Help,
}

fn route_command(name: &str) -> Option<CommandRoute> {
    const ROUTES: [(&str, CommandRoute); 6] = [
        (catalog::anime::META.name, CommandRoute::Anime),
        (catalog::ranking::META.name, CommandRoute::Ranking),
        (catalog::seasonal::META.name, CommandRoute::Seasonal),
        (catalog::topten::META.name, CommandRoute::TopTen),
        (utility::ping::META.name, CommandRoute::Ping),
        (utility::help::META.name, CommandRoute::Help),
    ];

    ROUTES
        .into_iter()
        .find_map(|(command, route)| (command == name).then_some(route))
}

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    catalog::anime::META,
    catalog::ranking::META,
    catalog::seasonal::META,
    catalog::topten::META,
    utility::ping::META,
    utility::help::META,
];

/// Entry point for every gateway interaction.
///
/// Button presses are routed to their pagination session before this
/// returns, so clicks reach a session in the order the gateway delivered
/// them. Slash commands run on their own task.
pub async fn handle_interaction(
    ctx: Context,
    interaction: Box<InteractionCreate>,
) -> anyhow::Result<()> {
    if let Some(event) = navigation_event(&interaction) {
        ctx.sessions.dispatch(event).await;
        return Ok(());
    }

    if !matches!(
        interaction.data,
        Some(InteractionData::ApplicationCommand(_))
    ) {
        return Ok(());
    }

    tokio::spawn(async move {
        if let Err(source) = handle_command(ctx, &interaction).await {
            error!(?source, "command handler failed");
        }
    });

    Ok(())
}

async fn handle_command(ctx: Context, interaction: &Interaction) -> anyhow::Result<()> {
    let Some(InteractionData::ApplicationCommand(data)) = interaction.data.as_ref() else {
        return Ok(());
    };
    let data: &CommandData = data;

    let Some(route) = route_command(&data.name) else {
        debug!(command = data.name.as_str(), "unknown command ignored");
        return Ok(());
    };

    match route {
        CommandRoute::Anime => catalog::anime::run(ctx, interaction, data).await?,
        CommandRoute::Ranking => catalog::ranking::run(ctx, interaction, data).await?,
        CommandRoute::Seasonal => catalog::seasonal::run(ctx, interaction, data).await?,
        CommandRoute::TopTen => catalog::topten::run(ctx, interaction, data).await?,
        CommandRoute::Ping => utility::ping::run(ctx, interaction).await?,
        CommandRoute::Help => utility::help::run(ctx, interaction).await?,
    }

    Ok(())
}
