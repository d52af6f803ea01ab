//! Request lifecycle for a view-model slot: an explicit state machine
//! replacing the loading/error/data triple a UI hook would juggle.

/// State of one request slot. `begin` wipes any previous failure, matching
/// the clear-error-on-invoke contract of the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Success(T),
    Failure(String),
}

impl<T> RequestState<T> {
    pub fn begin(&mut self) {
        *self = RequestState::Loading;
    }

    pub fn succeed(&mut self, data: T) {
        *self = RequestState::Success(data);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = RequestState::Failure(message.into());
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failure(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begins_idle() {
        let state: RequestState<u32> = RequestState::default();
        assert_eq!(state, RequestState::Idle);
        assert!(!state.is_loading());
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn begin_clears_a_previous_failure() {
        let mut state: RequestState<u32> = RequestState::default();
        state.fail("boom");
        assert_eq!(state.error(), Some("boom"));

        state.begin();
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn success_exposes_data() {
        let mut state = RequestState::default();
        state.begin();
        state.succeed(vec![1, 2, 3]);
        assert_eq!(state.data(), Some(&vec![1, 2, 3]));
        assert!(!state.is_loading());
    }
}
