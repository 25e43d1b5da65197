// ── View controllers ──
//
// Per-screen orchestration over a shared `AdminService`. A controller owns
// exactly one screen's state: it issues the screen's fetches on entry,
// applies completions as they arrive, and turns write outcomes into effects
// (alert, navigate, reload) for the caller to act on.
//
// Calls run as spawned tasks and report back over a channel. Reads are
// tagged with the fetch generation, which unmount and reload bump, so rows
// from a torn-down or superseded cycle are discarded. Writes are tagged with
// the mount epoch, which only unmount bumps: a reload never swallows the
// outcome of a write.

mod lightning_peers;
mod peers;
mod profiles;
mod squeaks;
mod wallet;

#[cfg(test)]
pub(crate) mod fake;

use std::future::Future;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::CoreError;
use crate::service::AdminService;

pub use lightning_peers::{LightningPeersCompletion, LightningPeersScreen};
pub use peers::{PeersCompletion, PeersScreen};
pub use profiles::{
    GREETING_NAME, ProfileList, ProfilesCompletion, ProfilesScreen, WAITING_MESSAGE,
};
pub use squeaks::{SqueaksCompletion, SqueaksScreen};
pub use wallet::{WalletCompletion, WalletScreen};

// ── Effects and state ────────────────────────────────────────────────

/// Side effect requested by a screen, carried out by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Blocking, user-visible message. Only raised for failed writes.
    Alert(String),
    /// Move to a detail page (`/app/<kind>/...`).
    Navigate(String),
    /// The screen's data path was re-issued after a successful write.
    Reload,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ScreenId {
    Profiles,
    Peers,
    LightningPeers,
    Wallet,
    Squeaks,
}

/// What applying one completion did to a screen.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Reaction {
    /// A read succeeded and its rows replaced the previous ones.
    pub loaded: bool,
    pub effects: Vec<Effect>,
}

impl Reaction {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn loaded() -> Self {
        Self {
            loaded: true,
            effects: Vec::new(),
        }
    }

    pub fn effect(effect: Effect) -> Self {
        Self {
            loaded: false,
            effects: vec![effect],
        }
    }
}

/// A failed read: log it and leave the screen as it was.
pub(crate) fn read_failed(screen: ScreenId, operation: &str, err: &CoreError) -> Reaction {
    warn!(%screen, operation, error = %err, "read failed; keeping previous rows");
    Reaction::none()
}

/// Outcome of a write: reload on success, alert on failure.
///
/// `action` reads as the gerund phrase in the alert, e.g. `"deleting peer"`
/// yields `Error deleting peer: <message>`.
pub(crate) fn write_outcome<T>(action: &str, result: Result<T, CoreError>) -> Reaction {
    match result {
        Ok(_) => Reaction::effect(Effect::Reload),
        Err(err) => Reaction::effect(Effect::Alert(format!("Error {action}: {err}"))),
    }
}

// ── Screen ───────────────────────────────────────────────────────────

/// One dashboard screen: its state, its initial fetches, and how each
/// completion changes it.
///
/// `Default` is the freshly mounted state; controllers reset to it on unmount.
pub trait Screen: Default {
    /// Result of one call issued by this screen.
    type Completion: Send + 'static;

    const ID: ScreenId;

    /// Issue every initial fetch, each exactly once.
    fn on_enter<A>(&self, calls: &mut Calls<'_, A, Self::Completion>)
    where
        A: AdminService + Sync + 'static;

    fn on_completion(&mut self, completion: Self::Completion) -> Reaction;
}

/// Reads belong to one fetch cycle; writes belong to the whole mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CallKind {
    Read,
    Write,
}

struct Tagged<C> {
    kind: CallKind,
    epoch: u64,
    generation: u64,
    completion: C,
}

/// Issues calls on behalf of a screen, tagged with the controller's current
/// mount epoch and fetch generation.
pub struct Calls<'a, A, C> {
    service: &'a Arc<A>,
    tx: &'a mpsc::UnboundedSender<Tagged<C>>,
    kind: CallKind,
    epoch: u64,
    generation: u64,
    issued: usize,
}

impl<A, C> Calls<'_, A, C>
where
    A: AdminService + Sync + 'static,
    C: Send + 'static,
{
    /// Run `call` against the service in the background. Its output is
    /// delivered to the screen exactly once, unless the screen has moved on.
    pub fn issue<F, Fut>(&mut self, call: F)
    where
        F: FnOnce(Arc<A>) -> Fut,
        Fut: Future<Output = C> + Send + 'static,
    {
        let fut = call(Arc::clone(self.service));
        let tx = self.tx.clone();
        let (kind, epoch, generation) = (self.kind, self.epoch, self.generation);
        tokio::spawn(async move {
            let completion = fut.await;
            // The receiver lives as long as the controller; a closed channel
            // only means nobody is left to care.
            let _ = tx.send(Tagged {
                kind,
                epoch,
                generation,
                completion,
            });
        });
        self.issued += 1;
    }
}

// ── Controller ───────────────────────────────────────────────────────

/// Drives one screen against a shared admin service.
///
/// States: `Loading` on mount and on every reload, `Ready` once any read for
/// the current cycle has landed.
///
/// Two counters decide which completions still matter. `epoch` changes on
/// unmount and invalidates everything issued before it. `generation` also
/// changes on reload and invalidates only reads, so the outcome of a write
/// is always applied while the screen stays mounted.
pub struct ViewController<S: Screen, A> {
    service: Arc<A>,
    screen: S,
    state: LoadState,
    epoch: u64,
    generation: u64,
    mounted: bool,
    reads_pending: usize,
    writes_pending: usize,
    tx: mpsc::UnboundedSender<Tagged<S::Completion>>,
    rx: mpsc::UnboundedReceiver<Tagged<S::Completion>>,
}

impl<S, A> ViewController<S, A>
where
    S: Screen,
    A: AdminService + Sync + 'static,
{
    pub fn new(service: Arc<A>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            service,
            screen: S::default(),
            state: LoadState::Loading,
            epoch: 0,
            generation: 0,
            mounted: false,
            reads_pending: 0,
            writes_pending: 0,
            tx,
            rx,
        }
    }

    /// Enter the screen. Issues the initial fetches; a second call while
    /// mounted does nothing.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        debug!(screen = %S::ID, "mount");
        self.enter();
    }

    /// Leave the screen. Its state is dropped and late completions, reads and
    /// writes alike, are ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        debug!(screen = %S::ID, "unmount");
        self.mounted = false;
        self.epoch += 1;
        self.generation += 1;
        self.reads_pending = 0;
        self.writes_pending = 0;
        self.screen = S::default();
        self.state = LoadState::Loading;
    }

    /// Full resynchronization: back to `Loading` and re-issue every initial
    /// fetch. Rows already displayed stay until their replacements arrive.
    /// Writes still in flight keep their claim on the screen.
    pub fn reload(&mut self) {
        if !self.mounted {
            self.mount();
            return;
        }
        info!(screen = %S::ID, "reloading");
        self.state = LoadState::Loading;
        self.generation += 1;
        self.enter();
    }

    /// Issue user-initiated calls (deletes, toggles, ...) for this screen.
    pub fn perform<F>(&mut self, action: F)
    where
        F: FnOnce(&S, &mut Calls<'_, A, S::Completion>),
    {
        let mut calls = Calls {
            service: &self.service,
            tx: &self.tx,
            kind: CallKind::Write,
            epoch: self.epoch,
            generation: self.generation,
            issued: 0,
        };
        action(&self.screen, &mut calls);
        self.writes_pending += calls.issued;
    }

    fn enter(&mut self) {
        let mut calls = Calls {
            service: &self.service,
            tx: &self.tx,
            kind: CallKind::Read,
            epoch: self.epoch,
            generation: self.generation,
            issued: 0,
        };
        self.screen.on_enter(&mut calls);
        self.reads_pending = calls.issued;
    }

    fn is_current(&self, tagged: &Tagged<S::Completion>) -> bool {
        match tagged.kind {
            CallKind::Read => tagged.generation == self.generation,
            CallKind::Write => tagged.epoch == self.epoch,
        }
    }

    /// Wait for the next relevant completion and apply it.
    ///
    /// Returns `None` once nothing is outstanding. A `Reload` in the returned
    /// effects has already been carried out.
    pub async fn step(&mut self) -> Option<Vec<Effect>> {
        while self.pending() > 0 {
            let tagged = self.rx.recv().await?;
            if !self.is_current(&tagged) {
                debug!(screen = %S::ID, kind = ?tagged.kind, "discarding stale completion");
                continue;
            }
            match tagged.kind {
                CallKind::Read => self.reads_pending -= 1,
                CallKind::Write => self.writes_pending -= 1,
            }

            let reaction = self.screen.on_completion(tagged.completion);
            if reaction.loaded {
                self.state = LoadState::Ready;
            }
            if reaction.effects.contains(&Effect::Reload) {
                self.reload();
            }
            return Some(reaction.effects);
        }
        None
    }

    /// Apply completions until nothing is outstanding, collecting effects.
    pub async fn settle(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        while let Some(batch) = self.step().await {
            effects.extend(batch);
        }
        effects
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Reads of the current cycle plus writes of the current mount that have
    /// not completed yet.
    pub fn pending(&self) -> usize {
        self.reads_pending + self.writes_pending
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use squeakdash_api::models::HelloReply;

    use super::fake::FakeAdmin;
    use super::*;

    #[derive(Default)]
    struct Greeter {
        applied: Vec<String>,
    }

    impl Screen for Greeter {
        type Completion = Result<HelloReply, CoreError>;

        const ID: ScreenId = ScreenId::Profiles;

        fn on_enter<A>(&self, calls: &mut Calls<'_, A, Self::Completion>)
        where
            A: AdminService + Sync + 'static,
        {
            calls.issue(|svc| async move { svc.say_hello("greeter").await });
        }

        fn on_completion(&mut self, completion: Self::Completion) -> Reaction {
            match completion {
                Ok(reply) => {
                    self.applied.push(reply.message);
                    Reaction::loaded()
                }
                Err(err) => read_failed(Self::ID, "say_hello", &err),
            }
        }
    }

    fn controller(fake: &Arc<FakeAdmin>) -> ViewController<Greeter, FakeAdmin> {
        ViewController::new(Arc::clone(fake))
    }

    #[tokio::test]
    async fn mount_fetches_once_and_becomes_ready() {
        let fake = Arc::new(FakeAdmin::default());
        let mut ctl = controller(&fake);
        assert_eq!(ctl.state(), LoadState::Loading);

        ctl.mount();
        ctl.mount();
        assert_eq!(ctl.pending(), 1);

        assert!(ctl.settle().await.is_empty());
        assert_eq!(ctl.state(), LoadState::Ready);
        assert_eq!(fake.count("say_hello"), 1);
        assert_eq!(ctl.screen().applied, ["Hello, greeter!"]);
    }

    #[tokio::test]
    async fn superseded_completions_are_discarded() {
        let fake = Arc::new(FakeAdmin::default());
        let mut ctl = controller(&fake);

        ctl.mount();
        ctl.reload();
        ctl.settle().await;

        assert_eq!(fake.count("say_hello"), 2);
        assert_eq!(ctl.screen().applied.len(), 1);
    }

    #[tokio::test]
    async fn unmount_drops_state_and_late_completions() {
        let fake = Arc::new(FakeAdmin::default());
        let mut ctl = controller(&fake);

        ctl.mount();
        ctl.unmount();
        assert_eq!(ctl.pending(), 0);
        assert!(ctl.step().await.is_none());
        assert!(ctl.screen().applied.is_empty());
        assert_eq!(ctl.state(), LoadState::Loading);

        ctl.mount();
        ctl.settle().await;
        assert_eq!(ctl.screen().applied.len(), 1);
    }

    #[tokio::test]
    async fn writes_outlive_reload_but_not_unmount() {
        let fake = Arc::new(FakeAdmin::default());
        let mut ctl = controller(&fake);
        ctl.mount();
        ctl.settle().await;

        ctl.perform(|_, calls| calls.issue(|svc| async move { svc.say_hello("write").await }));
        ctl.reload();
        assert_eq!(ctl.pending(), 2);
        ctl.settle().await;
        assert_eq!(ctl.screen().applied, ["Hello, greeter!", "Hello, write!", "Hello, greeter!"]);

        ctl.perform(|_, calls| calls.issue(|svc| async move { svc.say_hello("write").await }));
        ctl.unmount();
        assert_eq!(ctl.pending(), 0);
        assert!(ctl.step().await.is_none());
        assert!(ctl.screen().applied.is_empty());
    }

    #[tokio::test]
    async fn failed_read_keeps_loading_state() {
        let fake = Arc::new(FakeAdmin::default());
        fake.fail("say_hello", "node offline");
        let mut ctl = controller(&fake);

        ctl.mount();
        assert!(ctl.settle().await.is_empty());
        assert_eq!(ctl.state(), LoadState::Loading);
        assert!(ctl.screen().applied.is_empty());
    }

    #[test]
    fn write_outcome_alerts_with_action_and_message() {
        let err = CoreError::Rejected {
            message: "peer not found".into(),
            code: Some(5),
            status: Some(404),
        };
        let reaction = write_outcome::<()>("deleting peer", Err(err));
        assert_eq!(
            reaction.effects,
            [Effect::Alert("Error deleting peer: peer not found".into())]
        );
        assert!(!reaction.loaded);

        let reaction = write_outcome("deleting peer", Ok(()));
        assert_eq!(reaction.effects, [Effect::Reload]);
    }

    #[test]
    fn screen_ids_render_kebab_case() {
        use strum::IntoEnumIterator;
        let names: Vec<_> = ScreenId::iter().map(|s| s.to_string()).collect();
        assert_eq!(
            names,
            ["profiles", "peers", "lightning-peers", "wallet", "squeaks"]
        );
    }
}
