use twilight_model::{application::interaction::Interaction, channel::message::embed::Embed};
use twilight_util::builder::embed::{EmbedBuilder, EmbedFooterBuilder};

use crate::{COMMANDS, CommandMeta};
use anibot_core::Context;
use anibot_utils::embed::{DEFAULT_EMBED_COLOR, DESCRIPTION_LIMIT, truncate_chars};
use anibot_utils::interaction::respond_embed;
use anibot_utils::parse::capitalize_first;

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Lists out all available commands.",
    category: "utility",
    usage: "/help",
};

/// Render the command catalog grouped by category.
pub async fn run(ctx: Context, interaction: &Interaction) -> anyhow::Result<()> {
    let embed = help_embed(&sorted_commands())?;
    respond_embed(&ctx.http, interaction, embed).await
}

fn help_embed(commands: &[&CommandMeta]) -> anyhow::Result<Embed> {
    let description = truncate_chars(&grouped_help_description(commands), DESCRIPTION_LIMIT);

    let embed = EmbedBuilder::new()
        .title("Available Commands")
        .color(DEFAULT_EMBED_COLOR)
        .description(description)
        .footer(EmbedFooterBuilder::new(format!("{} commands", commands.len())))
        .validate()?
        .build();

    Ok(embed)
}

fn sorted_commands() -> Vec<&'static CommandMeta> {
    let mut commands: Vec<&'static CommandMeta> = COMMANDS.iter().collect();

    commands.sort_unstable_by(|left, right| {
        left.category
            .cmp(right.category)
            .then_with(|| left.name.cmp(right.name))
    });

    commands
}

fn grouped_help_description(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category: Option<&str> = None;

    for command in commands {
        if current_category != Some(command.category) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("**{}**\n", capitalize_first(command.category)));
            current_category = Some(command.category);
        }

        out.push_str(&format!("• `{}` - {}\n", command.usage, command.desc));
    }

    if out.is_empty() {
        out.push_str("No commands available.");
    }

    out.trim_end().to_owned()
}
