use twilight_model::application::interaction::Interaction;

use crate::CommandMeta;
use anibot_core::Context;
use anibot_utils::interaction::respond_message;

pub const META: CommandMeta = CommandMeta {
    name: "ping",
    desc: "Replies with Pong!",
    category: "utility",
    usage: "/ping",
};

/// Send a simple connectivity response.
pub async fn run(ctx: Context, interaction: &Interaction) -> anyhow::Result<()> {
    respond_message(&ctx.http, interaction, "Pong!").await
}
