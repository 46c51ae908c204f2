use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{
    EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder, ImageSource,
};

use anibot_mal::{Anime, RankingType, Season, anime_url};
use anibot_utils::embed::{DESCRIPTION_LIMIT, MAL_LOGO_URL, truncate_chars};
use anibot_utils::pagination::FormattedItem;
use anibot_utils::parse::capitalize_first;

/// Color for single-item and top-ten embeds.
pub const LOOKUP_EMBED_COLOR: u32 = 0x2C_2F_33;

const SOURCE_FOOTER: &str = "Data fetched from MyAnimeList";

pub fn usage_message(usage: &str) -> String {
    format!("Usage: `{usage}`")
}

pub fn unknown_user_message() -> &'static str {
    "Unable to determine interaction user."
}

pub fn ranking_title(kind: RankingType) -> String {
    format!("Top Anime - {}", capitalize_first(kind.as_str()))
}

pub fn seasonal_title(season: Season, year: u16) -> String {
    format!(
        "Seasonal Anime - {} {year}",
        capitalize_first(season.as_str())
    )
}

pub fn top_ten_title(kind: RankingType) -> String {
    format!("Top Ten Anime - {}", capitalize_first(kind.as_str()))
}

fn link_and_score(anime: &Anime) -> String {
    format!("{}\n**Score:** {}", anime_url(anime.id), anime.score_label())
}

/// Ranked entry: `{ordinal}. {title}` with link and score.
pub fn format_ranked(anime: &Anime, ordinal: usize) -> FormattedItem {
    FormattedItem::new(format!("{ordinal}. {}", anime.title), link_and_score(anime))
}

/// Seasonal entry: bare title with link and score.
pub fn format_seasonal(anime: &Anime, _ordinal: usize) -> FormattedItem {
    FormattedItem::new(anime.title.clone(), link_and_score(anime))
}

/// Detail card for a single anime.
pub fn anime_embed(anime: &Anime) -> anyhow::Result<Embed> {
    let synopsis = anime
        .synopsis
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .unwrap_or("No synopsis available");

    let thumbnail = anime
        .main_picture
        .as_ref()
        .and_then(|picture| picture.medium.clone())
        .unwrap_or_else(|| MAL_LOGO_URL.to_owned());

    let status = anime.status.as_deref().unwrap_or("Unknown");

    let embed = EmbedBuilder::new()
        .color(LOOKUP_EMBED_COLOR)
        .title(truncate_chars(&anime.title, 256))
        .url(anime_url(anime.id))
        .description(truncate_chars(synopsis, DESCRIPTION_LIMIT))
        .thumbnail(ImageSource::url(thumbnail)?)
        .field(EmbedFieldBuilder::new("Score", anime.score_label()).inline())
        .field(EmbedFieldBuilder::new("Status", status).inline())
        .field(EmbedFieldBuilder::new("Episodes", anime.episodes_label()).inline())
        .footer(EmbedFooterBuilder::new(SOURCE_FOOTER))
        .validate()?
        .build();

    Ok(embed)
}

/// Fixed, non-paginated top-ten list.
pub fn top_ten_embed(kind: RankingType, entries: &[Anime]) -> anyhow::Result<Embed> {
    let mut builder = EmbedBuilder::new()
        .color(LOOKUP_EMBED_COLOR)
        .title(top_ten_title(kind))
        .description(format!(
            "Here are the top ten anime for the \"{}\" category:",
            kind.as_str()
        ))
        .footer(EmbedFooterBuilder::new(SOURCE_FOOTER));

    for (index, anime) in entries.iter().enumerate() {
        let FormattedItem { label, text } = format_ranked(anime, index + 1);
        builder = builder.field(EmbedFieldBuilder::new(truncate_chars(&label, 256), text));
    }

    Ok(builder.validate()?.build())
}
