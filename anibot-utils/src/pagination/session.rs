//! Interactive pagination sessions.
//!
//! Each paginated message with more than one page gets its own session task.
//! The task exclusively owns the [`Pager`], consumes navigation events for
//! its message from a dedicated channel (so clicks are applied one at a time,
//! in arrival order), and races them against an idle timer. When the timer
//! wins, the navigation buttons are stripped and the session ends.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify, mpsc};
use tokio::time::Instant;
use tracing::{debug, warn};
use twilight_model::id::{
    Id,
    marker::{MessageMarker, UserMarker},
};

use super::IDLE_TIMEOUT;
use super::components::NavControls;
use super::event::{InteractionRef, MessageHandle, NavigationEvent};
use super::page::PageContent;
use super::pager::{Navigated, Pager};

/// Outbound side of the messaging host.
#[async_trait]
pub trait PageSink: Send + Sync {
    /// Deliver the first page as the reply to `origin` and return the posted message.
    async fn send_page(
        &self,
        origin: &InteractionRef,
        content: &PageContent,
        controls: Option<NavControls>,
    ) -> anyhow::Result<MessageHandle>;

    /// Replace the page shown on `event.message` in place.
    async fn update_page(
        &self,
        event: &NavigationEvent,
        content: &PageContent,
        controls: NavControls,
    ) -> anyhow::Result<()>;

    /// Remove the navigation buttons, leaving the page content as is.
    async fn detach_controls(&self, message: MessageHandle) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInitialSend,
    Active,
    Expired,
}

/// Binding between one pager, the user who invoked it, and the message showing it.
#[derive(Debug)]
pub struct Session<T> {
    pager: Pager<T>,
    owner: Id<UserMarker>,
    message: Option<MessageHandle>,
    last_activity: Instant,
    state: SessionState,
}

impl<T> Session<T> {
    pub fn new(pager: Pager<T>, owner: Id<UserMarker>) -> Self {
        Self {
            pager,
            owner,
            message: None,
            last_activity: Instant::now(),
            state: SessionState::AwaitingInitialSend,
        }
    }

    pub fn pager(&self) -> &Pager<T> {
        &self.pager
    }

    pub fn message(&self) -> Option<MessageHandle> {
        self.message
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Record the delivered message and start the idle clock.
    pub fn activate(&mut self, message: MessageHandle) {
        if self.state != SessionState::AwaitingInitialSend {
            return;
        }

        self.message = Some(message);
        self.last_activity = Instant::now();
        self.state = SessionState::Active;
    }

    /// Whether `event` may drive this session: it must target this session's
    /// message and come from the user who opened it.
    pub fn accepts(&self, event: &NavigationEvent) -> bool {
        self.state == SessionState::Active
            && self.message == Some(event.message)
            && event.user_id == self.owner
    }

    /// Apply an accepted event and restart the idle clock.
    ///
    /// Returns `None` without touching any state when the event is rejected.
    pub fn apply(&mut self, event: &NavigationEvent) -> Option<Navigated> {
        if !self.accepts(event) {
            return None;
        }

        let outcome = self.pager.navigate(event.control);
        self.last_activity = Instant::now();
        Some(outcome)
    }

    /// Instant at which the session expires unless another event is accepted.
    pub fn deadline(&self, idle_timeout: Duration) -> Instant {
        self.last_activity + idle_timeout
    }

    pub fn expire(&mut self) {
        self.state = SessionState::Expired;
    }
}

type SessionRoutes = HashMap<Id<MessageMarker>, mpsc::UnboundedSender<NavigationEvent>>;

/// Starts sessions and routes navigation events to them.
///
/// Cheap to clone; clones share the routing table. The table lock is held
/// only for insert/lookup/remove, never while a page is applied.
#[derive(Clone)]
pub struct SessionManager {
    sink: Arc<dyn PageSink>,
    idle_timeout: Duration,
    routes: Arc<Mutex<SessionRoutes>>,
    starts: Arc<PendingStarts>,
}

/// Sessions whose first page is still in flight.
///
/// A click can reach the gateway before the send that created its message
/// has returned; `dispatch` waits on these instead of dropping the click.
#[derive(Default)]
struct PendingStarts {
    in_flight: AtomicUsize,
    finished: Notify,
}

struct PendingStartGuard<'a>(&'a PendingStarts);

impl PendingStarts {
    fn begin(&self) -> PendingStartGuard<'_> {
        self.in_flight.fetch_add(1, Ordering::AcqRel);
        PendingStartGuard(self)
    }

    fn any(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) > 0
    }
}

impl Drop for PendingStartGuard<'_> {
    fn drop(&mut self) {
        self.0.in_flight.fetch_sub(1, Ordering::AcqRel);
        self.0.finished.notify_waiters();
    }
}

impl SessionManager {
    pub fn new(sink: Arc<dyn PageSink>) -> Self {
        Self::with_idle_timeout(sink, IDLE_TIMEOUT)
    }

    pub fn with_idle_timeout(sink: Arc<dyn PageSink>, idle_timeout: Duration) -> Self {
        Self {
            sink,
            idle_timeout,
            routes: Arc::new(Mutex::new(HashMap::new())),
            starts: Arc::new(PendingStarts::default()),
        }
    }

    /// Send the first page of `pager` as the reply to `origin`.
    ///
    /// Multi-page results get navigation buttons and a live session owned by
    /// `owner`; a single page is sent without buttons and no session is kept.
    pub async fn start<T>(
        &self,
        origin: &InteractionRef,
        owner: Id<UserMarker>,
        pager: Pager<T>,
    ) -> anyhow::Result<MessageHandle>
    where
        T: Send + Sync + 'static,
    {
        // Released after the route is registered, or on any early return.
        let _pending = self.starts.begin();

        let mut session = Session::new(pager, owner);
        let interactive = session.pager().has_multiple_pages();
        let controls = interactive.then(|| session.pager().controls());

        let message = self
            .sink
            .send_page(origin, session.pager().current().content(), controls)
            .await?;

        if !interactive {
            return Ok(message);
        }

        session.activate(message);

        let (events_tx, events_rx) = mpsc::unbounded_channel();
        self.routes.lock().await.insert(message.message_id, events_tx);

        debug!(
            message_id = message.message_id.get(),
            owner = owner.get(),
            pages = session.pager().len(),
            "pagination session started"
        );

        tokio::spawn(run_session(
            session,
            events_rx,
            Arc::clone(&self.sink),
            Arc::clone(&self.routes),
            self.idle_timeout,
        ));

        Ok(message)
    }

    /// Hand a navigation event to the session bound to its message.
    ///
    /// Returns `false` when no live session owns that message; the event is
    /// dropped without a response. While another session is still being
    /// started the lookup is retried once that start settles.
    pub async fn dispatch(&self, event: NavigationEvent) -> bool {
        loop {
            let finished = self.starts.finished.notified();
            tokio::pin!(finished);
            finished.as_mut().enable();

            let starting = self.starts.any();
            let route = self
                .routes
                .lock()
                .await
                .get(&event.message.message_id)
                .cloned();

            if let Some(events_tx) = route {
                return events_tx.send(event).is_ok();
            }

            if !starting {
                debug!(
                    message_id = event.message.message_id.get(),
                    "navigation event for unknown or expired session dropped"
                );
                return false;
            }

            finished.await;
        }
    }

    /// Number of sessions still accepting events.
    pub async fn active_sessions(&self) -> usize {
        self.routes.lock().await.len()
    }
}

async fn run_session<T>(
    mut session: Session<T>,
    mut events: mpsc::UnboundedReceiver<NavigationEvent>,
    sink: Arc<dyn PageSink>,
    routes: Arc<Mutex<SessionRoutes>>,
    idle_timeout: Duration,
) where
    T: Send + Sync + 'static,
{
    let Some(message) = session.message() else {
        return;
    };

    loop {
        let deadline = session.deadline(idle_timeout);

        tokio::select! {
            received = events.recv() => {
                let Some(event) = received else {
                    break;
                };

                let Some(outcome) = session.apply(&event) else {
                    debug!(
                        message_id = message.message_id.get(),
                        user_id = event.user_id.get(),
                        "navigation event from non-owner ignored"
                    );
                    continue;
                };

                debug!(
                    message_id = message.message_id.get(),
                    cursor = session.pager().cursor(),
                    ?outcome,
                    "navigation applied"
                );

                let pager = session.pager();
                if let Err(source) = sink
                    .update_page(&event, pager.current().content(), pager.controls())
                    .await
                {
                    warn!(?source, message_id = message.message_id.get(), "failed to update paginated message");
                }
            }
            () = tokio::time::sleep_until(deadline) => break,
        }
    }

    routes.lock().await.remove(&message.message_id);
    events.close();
    session.expire();

    debug!(
        message_id = message.message_id.get(),
        "pagination session expired"
    );

    if let Err(source) = sink.detach_controls(message).await {
        warn!(?source, message_id = message.message_id.get(), "failed to remove pagination controls");
    }
}
