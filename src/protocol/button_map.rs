use super::{ButtonId, NUM_BUTTONS};

/// Translates the note numbers a device sends into stable [`ButtonId`]s.
///
/// Users can reassign notes to physical buttons on the device itself, so the assignment has to
/// be queried (see [`crate::Surface::request_button_map`]) and is replaced wholesale whenever
/// the device reports it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ButtonMap {
    // indexed by note number
    notes: [Option<ButtonId>; 128],
}

impl ButtonMap {
    /// Build a map from the payload of a button map frame.
    ///
    /// The payload is a sequence of `(note, placeholder)` pairs in ascending button id order.
    /// Only the notes are read; the placeholders are skipped. Notes beyond the 64th are
    /// ignored, and if two buttons report the same note, the later one wins.
    pub fn from_payload(payload: &[u8]) -> Self {
        let notes = payload.iter().step_by(2).copied();
        Self::from_notes(notes)
    }

    /// Build a map from notes listed in ascending button id order
    pub fn from_notes(notes: impl IntoIterator<Item = u8>) -> Self {
        let mut map = Self { notes: [None; 128] };

        for (note, id) in notes.into_iter().zip(ButtonId::all()) {
            let slot = match map.notes.get_mut(note as usize) {
                Some(slot) => slot,
                None => {
                    log::warn!("Button {} reports out of range note {}", id, note);
                    continue;
                }
            };
            if let Some(previous) = slot.replace(id) {
                log::warn!(
                    "Note {} is assigned to both button {} and {}, keeping {}",
                    note,
                    previous,
                    id,
                    id
                );
            }
        }

        map
    }

    /// Returns `None` if the note isn't assigned to any button
    pub fn resolve(&self, note: u8) -> Option<ButtonId> {
        self.notes.get(note as usize).copied().flatten()
    }

    /// Reverse lookup: the note the device currently sends for `id`
    pub fn note_for(&self, id: ButtonId) -> Option<u8> {
        self.notes
            .iter()
            .position(|&entry| entry == Some(id))
            .map(|note| note as u8)
    }

    /// Number of notes that resolve to a button
    pub fn len(&self) -> usize {
        self.notes.iter().filter(|entry| entry.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every button has a note assigned
    pub fn is_complete(&self) -> bool {
        self.len() == NUM_BUTTONS
    }
}
