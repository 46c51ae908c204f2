//! Stable facade for the paginated result viewer.

use std::time::Duration;

/// Idle window after which a pagination session drops its buttons.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

mod components;
pub mod event;
pub mod interaction;
mod page;
mod pager;
pub mod respond;
pub mod session;

pub use components::NavControls;
pub use event::{InteractionRef, MessageHandle, NavControl, NavigationEvent};
pub use interaction::navigation_event;
pub use page::{
    FormattedItem, Page, PageContent, PageField, page_footer, page_index_for_offset, paginate,
    render_page, total_pages,
};
pub use pager::{Navigated, Pager};
pub use respond::DiscordPageSink;
pub use session::{PageSink, Session, SessionManager, SessionState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// Nothing to paginate; reply with a plain not-found message instead.
    #[error("result set is empty")]
    EmptyResultSet,
}
