/// Generic embed builders shared across commands.
pub mod embed;
/// Generic interaction response helpers.
pub mod interaction;
/// Paginated result viewer: rendering, paging, and interactive sessions.
pub mod pagination;
/// Slash-command option parsing helpers.
pub mod parse;
