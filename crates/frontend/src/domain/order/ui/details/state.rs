//! Load state for the order detail controller.

use contracts::domain::order::OrderRecord;

/// One tagged state instead of independent loading/error/data flags, so an
/// illegal combination (say, an error next to stale data) cannot be
/// represented.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(OrderRecord),
    Errored(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn order(&self) -> Option<&OrderRecord> {
        match self {
            LoadState::Loaded(order) => Some(order),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Errored(message) => Some(message),
            _ => None,
        }
    }

    /// Terminal state for a completed fetch attempt.
    pub fn settle(result: Result<OrderRecord, String>) -> Self {
        match result {
            Ok(order) => LoadState::Loaded(order),
            Err(message) => LoadState::Errored(message),
        }
    }
}

/// Monotonically increasing fetch generation.
///
/// A completion may only be applied while its token is still current, so a
/// late response from a superseded request can never overwrite newer state.
#[derive(Debug, Default)]
pub struct RequestSequence {
    current: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestSequence {
    pub fn begin(&mut self) -> RequestToken {
        self.current += 1;
        RequestToken(self.current)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current == token.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_maps_results_to_terminal_states() {
        let order = OrderRecord {
            order_id: "ORD-1".into(),
            ..Default::default()
        };
        let loaded = LoadState::settle(Ok(order.clone()));
        assert_eq!(loaded.order(), Some(&order));
        assert_eq!(loaded.error(), None);

        let errored = LoadState::settle(Err("Server error: 500".into()));
        assert_eq!(errored.order(), None);
        assert_eq!(errored.error(), Some("Server error: 500"));
    }

    #[test]
    fn failure_then_success_clears_the_error() {
        // Models the observable sequence: a failed load leaves a message and
        // no order; re-invoking load and succeeding replaces it entirely.
        let mut state = LoadState::settle(Err("network down".into()));
        assert!(state.error().is_some());
        assert!(state.order().is_none());

        state = LoadState::Loading;
        assert!(state.is_loading());

        state = LoadState::settle(Ok(OrderRecord::default()));
        assert!(state.error().is_none());
        assert!(state.order().is_some());
    }

    #[test]
    fn stale_token_is_not_current() {
        let mut seq = RequestSequence::default();
        let first = seq.begin();
        assert!(seq.is_current(first));

        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
