use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{
    EmbedBuilder, EmbedFieldBuilder, EmbedFooterBuilder, ImageSource,
};

use crate::pagination::PageContent;

/// Default embed color used for paginated result pages.
pub const DEFAULT_EMBED_COLOR: u32 = 0x2F_52_A2;
/// Thumbnail shown on every paginated page.
pub const MAL_LOGO_URL: &str = "https://myanimelist.net/images/mal-logo-xsmall.png";

const TITLE_LIMIT: usize = 256;
const FIELD_NAME_LIMIT: usize = 256;
const FIELD_VALUE_LIMIT: usize = 1024;
/// Discord's cap on an embed description.
pub const DESCRIPTION_LIMIT: usize = 4096;

/// Build the embed for one rendered page.
pub fn build_page_embed(content: &PageContent) -> anyhow::Result<Embed> {
    let mut builder = EmbedBuilder::new()
        .title(truncate_chars(&content.title, TITLE_LIMIT))
        .color(DEFAULT_EMBED_COLOR)
        .thumbnail(ImageSource::url(MAL_LOGO_URL)?)
        .footer(EmbedFooterBuilder::new(content.footer.as_str()).build());

    for field in &content.fields {
        let mut field_builder = EmbedFieldBuilder::new(
            truncate_chars(&field.label, FIELD_NAME_LIMIT),
            truncate_chars(&field.text, FIELD_VALUE_LIMIT),
        );
        if field.inline {
            field_builder = field_builder.inline();
        }
        builder = builder.field(field_builder.build());
    }

    Ok(builder.validate()?.build())
}

/// Cut `text` to at most `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }

    let mut cut = text
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect::<String>();
    cut.push('…');
    cut
}
