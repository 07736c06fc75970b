//! Single-flight discipline for generation streams
//!
//! At most one generation is active per session: starting a new one
//! aborts the stream already in flight, so two streams can never write
//! into the same displayed-result slot. An aborted stream simply ends —
//! cancellation is silent and is never reported as a failure.

use futures::stream::{AbortHandle, Abortable, Stream};

/// Owner of the in-flight generation handle
///
/// The handle is explicit state on this value, not a process-wide global;
/// one session per displayed result slot.
#[derive(Default)]
pub struct GenerationSession {
    current: Option<AbortHandle>,
}

impl GenerationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt a new stream, aborting the one in flight first
    pub fn begin<S: Stream>(&mut self, stream: S) -> Abortable<S> {
        self.cancel();

        let (handle, registration) = AbortHandle::new_pair();
        self.current = Some(handle);
        Abortable::new(stream, registration)
    }

    /// Abort the in-flight stream, if any
    ///
    /// Dropping the aborted stream releases its transport resources; no
    /// further events are delivered from it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            handle.abort();
        }
    }

    /// Whether a stream has been started and not yet cancelled
    pub fn is_active(&self) -> bool {
        self.current
            .as_ref()
            .map(|handle| !handle.is_aborted())
            .unwrap_or(false)
    }
}

impl Drop for GenerationSession {
    fn drop(&mut self) {
        self.cancel();
    }
}
