use twilight_model::application::interaction::application_command::{
    CommandData, CommandDataOption, CommandOptionValue,
};

fn find_option<'a>(data: &'a CommandData, name: &str) -> Option<&'a CommandDataOption> {
    data.options.iter().find(|option| option.name == name)
}

/// Read a string option, ignoring blank values.
pub fn option_str<'a>(data: &'a CommandData, name: &str) -> Option<&'a str> {
    match &find_option(data, name)?.value {
        CommandOptionValue::String(value) => Some(value.trim()).filter(|value| !value.is_empty()),
        _ => None,
    }
}

/// Read an integer option.
pub fn option_integer(data: &CommandData, name: &str) -> Option<i64> {
    match &find_option(data, name)?.value {
        CommandOptionValue::Integer(value) => Some(*value),
        _ => None,
    }
}

/// Parse a calendar year the catalog can plausibly know about.
pub fn parse_year(raw: i64) -> Option<u16> {
    u16::try_from(raw)
        .ok()
        .filter(|year| (1900..=2999).contains(year))
}

/// Upper-case the first character, as used in result titles (`airing` -> `Airing`).
pub fn capitalize_first(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
