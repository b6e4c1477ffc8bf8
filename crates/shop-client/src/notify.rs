//! Failure notification for hosts without a UI toolkit of their own.

use shop_core::{Notifier, ShopError};
use tracing::warn;

/// Default visitor-facing failure message
pub const CHECKOUT_FAILED_MESSAGE: &str = "Failed to redirect to checkout";

/// Reports checkout failures through `tracing`
#[derive(Debug, Clone)]
pub struct LoggingNotifier {
    message: String,
}

impl LoggingNotifier {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Default for LoggingNotifier {
    fn default() -> Self {
        Self::new(CHECKOUT_FAILED_MESSAGE)
    }
}

impl Notifier for LoggingNotifier {
    fn notify_failure(&self, error: &ShopError) {
        warn!(%error, "{}", self.message);
    }
}
