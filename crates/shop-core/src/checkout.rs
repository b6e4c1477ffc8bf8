//! # Checkout Orchestrator
//!
//! Drives one checkout attempt at a time from "cart finalized" to "visitor
//! sent to the payment provider".
//!
//! ```text
//!            begin()                 session with URL
//!   Idle ───────────────▶ Submitting ───────────────▶ Redirecting (terminal)
//!    ▲                         │
//!    │      notify_failure     │ error / no URL
//!    └──────── Failed ◀────────┘
//! ```
//!
//! [`CheckoutOrchestrator::begin`] is synchronous: it refuses a second attempt
//! while one is in flight, refuses an empty cart, and otherwise snapshots the
//! cart and flips the in-flight flag. The returned [`CheckoutAttempt`] owns the
//! snapshot, so the cart can keep changing while the request is outstanding.
//!
//! A deadline set with [`CheckoutOrchestrator::with_timeout`] (or passed to
//! [`CheckoutAttempt::run_with_timeout`]) fails the attempt with a
//! `NetworkError` and notifies like any other transport failure. Dropping an
//! unfinished attempt only puts the orchestrator back to `Idle`.

use crate::cart::CartStore;
use crate::error::{CheckoutRejected, ShopError};
use crate::gateway::CheckoutGateway;
use crate::error::ShopResult;
use crate::session::{CheckoutRequest, CheckoutSession};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Lifecycle of the checkout flow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutState {
    /// No request in flight
    #[default]
    Idle,
    /// Session request outstanding; submission UI must be disabled
    Submitting,
    /// Navigation to the provider has been initiated
    Redirecting,
    /// Attempt failed; reported, then back to `Idle`
    Failed,
}

impl std::fmt::Display for CheckoutState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CheckoutState::Idle => "idle",
            CheckoutState::Submitting => "submitting",
            CheckoutState::Redirecting => "redirecting",
            CheckoutState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Hands control to the payment provider's hosted page.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync,
{
    fn navigate(&self, url: &str) {
        self(url)
    }
}

/// Surfaces a failed attempt to the visitor.
pub trait Notifier: Send + Sync {
    fn notify_failure(&self, error: &ShopError);
}

impl<F> Notifier for F
where
    F: Fn(&ShopError) + Send + Sync,
{
    fn notify_failure(&self, error: &ShopError) {
        self(error)
    }
}

/// Result of a checkout attempt that was allowed to start
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// Navigation to `session.checkout_url` was initiated
    Redirected(CheckoutSession),
    /// The attempt failed and was reported; the orchestrator is idle again
    Failed(ShopError),
}

impl CheckoutOutcome {
    pub fn checkout_url(&self) -> Option<&str> {
        match self {
            CheckoutOutcome::Redirected(session) => Some(&session.checkout_url),
            CheckoutOutcome::Failed(_) => None,
        }
    }

    pub fn is_redirected(&self) -> bool {
        matches!(self, CheckoutOutcome::Redirected(_))
    }
}

/// Single-flight checkout state machine
pub struct CheckoutOrchestrator<G, N, A> {
    gateway: G,
    navigator: N,
    notifier: A,
    timeout: Option<Duration>,
    state: Mutex<CheckoutState>,
}

impl<G, N, A> CheckoutOrchestrator<G, N, A>
where
    G: CheckoutGateway,
    N: Navigator,
    A: Notifier,
{
    pub fn new(gateway: G, navigator: N, notifier: A) -> Self {
        Self {
            gateway,
            navigator,
            notifier,
            timeout: None,
            state: Mutex::new(CheckoutState::Idle),
        }
    }

    /// Fail attempts whose session request outlives `limit`
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Whether a checkout button for `cart` should be enabled
    pub fn can_checkout(&self, cart: &CartStore) -> bool {
        self.state() == CheckoutState::Idle && !cart.is_empty()
    }

    /// Start an attempt: check preconditions, flip to `Submitting`, snapshot the cart.
    pub fn begin(&self, cart: &CartStore) -> Result<CheckoutAttempt<'_, G, N, A>, CheckoutRejected> {
        let mut state = self.lock_state();
        let current = *state;

        let rejected = match current {
            CheckoutState::Idle if cart.is_empty() => Some(CheckoutRejected::EmptyCart),
            CheckoutState::Idle => None,
            CheckoutState::Submitting | CheckoutState::Failed => Some(CheckoutRejected::InFlight),
            CheckoutState::Redirecting => Some(CheckoutRejected::Redirected),
        };
        if let Some(reason) = rejected {
            warn!(state = %current, %reason, "Checkout rejected");
            return Err(reason);
        }

        *state = CheckoutState::Submitting;
        drop(state);

        let request = cart.snapshot();
        debug!(items = request.len(), total = %cart.total(), "Checkout submitting");

        Ok(CheckoutAttempt {
            orchestrator: self,
            request,
            settled: false,
        })
    }

    /// `begin` followed by `run`.
    ///
    /// The cart stays borrowed for the whole attempt; use [`Self::begin`]
    /// directly to keep mutating it while the request is outstanding.
    pub async fn checkout(&self, cart: &CartStore) -> Result<CheckoutOutcome, CheckoutRejected> {
        let attempt = self.begin(cart)?;
        Ok(attempt.run().await)
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}

impl<G, N, A> CheckoutOrchestrator<G, N, A> {
    pub fn state(&self) -> CheckoutState {
        *self.lock_state()
    }

    /// The submission-in-flight flag
    pub fn is_submitting(&self) -> bool {
        self.state() == CheckoutState::Submitting
    }

    fn set_state(&self, next: CheckoutState) {
        *self.lock_state() = next;
    }

    fn lock_state(&self) -> MutexGuard<'_, CheckoutState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// An accepted checkout attempt holding its cart snapshot
pub struct CheckoutAttempt<'a, G, N, A> {
    orchestrator: &'a CheckoutOrchestrator<G, N, A>,
    request: CheckoutRequest,
    settled: bool,
}

impl<'a, G, N, A> CheckoutAttempt<'a, G, N, A>
where
    G: CheckoutGateway,
    N: Navigator,
    A: Notifier,
{
    /// The snapshot that will be sent
    pub fn request(&self) -> &CheckoutRequest {
        &self.request
    }

    /// Issue the single session request and settle the state machine.
    ///
    /// Uses the orchestrator's timeout when one is configured.
    pub async fn run(self) -> CheckoutOutcome {
        match self.orchestrator.timeout {
            Some(limit) => self.run_with_timeout(limit).await,
            None => {
                let result = self.orchestrator.gateway.create_session(&self.request).await;
                self.settle(result)
            }
        }
    }

    /// Like [`Self::run`], failing with `NetworkError` once `limit` elapses.
    pub async fn run_with_timeout(self, limit: Duration) -> CheckoutOutcome {
        let request = self.orchestrator.gateway.create_session(&self.request);
        let result = match tokio::time::timeout(limit, request).await {
            Ok(result) => result,
            Err(_) => Err(ShopError::NetworkError(format!(
                "checkout timed out after {}ms",
                limit.as_millis()
            ))),
        };
        self.settle(result)
    }

    fn settle(mut self, result: ShopResult<CheckoutSession>) -> CheckoutOutcome {
        let orchestrator = self.orchestrator;
        let gateway = orchestrator.gateway.gateway_name();

        let result = result.and_then(|session| {
            if session.has_checkout_url() {
                Ok(session)
            } else {
                Err(ShopError::MissingCheckoutUrl)
            }
        });

        match result {
            Ok(session) => {
                orchestrator.set_state(CheckoutState::Redirecting);
                self.settled = true;
                info!(gateway, url = %session.checkout_url, "Redirecting to checkout");
                orchestrator.navigator.navigate(&session.checkout_url);
                CheckoutOutcome::Redirected(session)
            }
            Err(error) => {
                orchestrator.set_state(CheckoutState::Failed);
                warn!(gateway, %error, "Checkout failed");
                // A panicking notifier unwinds through Drop, which restores Idle
                orchestrator.notifier.notify_failure(&error);
                orchestrator.set_state(CheckoutState::Idle);
                self.settled = true;
                CheckoutOutcome::Failed(error)
            }
        }
    }
}

impl<G, N, A> Drop for CheckoutAttempt<'_, G, N, A> {
    fn drop(&mut self) {
        if !self.settled {
            debug!("Checkout attempt abandoned");
            self.orchestrator.set_state(CheckoutState::Idle);
        }
    }
}
