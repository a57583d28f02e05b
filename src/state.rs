use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex, MutexGuard,
};

/// Mutable state shared by every clone of the client.
///
/// One loading flag and one cache cell per constructed client, not per
/// request: concurrent invocations share both fields.
#[derive(Debug, Default)]
pub(crate) struct SharedState {
    is_loading: AtomicBool,
    last_data_pulled: Mutex<Option<serde_json::Value>>,
}

impl SharedState {
    pub(crate) fn set_loading(&self, value: bool) {
        self.is_loading.store(value, Ordering::SeqCst);
    }

    pub(crate) fn loading(&self) -> bool {
        self.is_loading.load(Ordering::SeqCst)
    }

    pub(crate) fn store_payload(&self, data: serde_json::Value) {
        *self.lock_payload() = Some(data);
    }

    pub(crate) fn payload(&self) -> Option<serde_json::Value> {
        self.lock_payload().clone()
    }

    fn lock_payload(&self) -> MutexGuard<'_, Option<serde_json::Value>> {
        self.last_data_pulled
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::SharedState;

    #[test]
    fn loading_flag_round_trip() {
        let state = SharedState::default();
        assert!(!state.loading());
        state.set_loading(true);
        assert!(state.loading());
        state.set_loading(false);
        assert!(!state.loading());
    }

    #[test]
    fn payload_starts_empty_and_keeps_latest_write() {
        let state = SharedState::default();
        assert_eq!(state.payload(), None);
        state.store_payload(json!({"first": 1}));
        state.store_payload(json!({"second": 2}));
        assert_eq!(state.payload(), Some(json!({"second": 2})));
    }
}
