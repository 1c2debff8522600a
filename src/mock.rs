use std::sync::{Arc, Mutex};

use crate::{MidiError, Transport};

/// A [`Transport`] that doesn't talk to any hardware and instead records every frame it's given.
///
/// Clones share the same recording, so you can hand one clone to a [`crate::Surface`] (or a
/// [`crate::Driver`] on another thread) and inspect the traffic through the other.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    sent: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn frames(&self) -> std::sync::MutexGuard<'_, Vec<Vec<u8>>> {
        // a panic while holding the lock can only come from a panicking test
        match self.sent.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Every frame sent so far, oldest first
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.frames().clone()
    }

    pub fn last(&self) -> Option<Vec<u8>> {
        self.frames().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.frames().len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames().is_empty()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.frames().clear();
    }
}

impl Transport for MockTransport {
    fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError> {
        self.frames().push(bytes.to_vec());
        Ok(())
    }
}
