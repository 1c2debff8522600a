use thiserror::Error;

/// Failures of the underlying MIDI connection.
#[derive(Debug, Error)]
pub enum MidiError {
    #[error("connecting to MIDI input port failed")]
    InputConnectError(#[from] midir::ConnectError<midir::MidiInput>),
    #[error("connecting to MIDI output port failed")]
    OutputConnectError(#[from] midir::ConnectError<midir::MidiOutput>),
    #[error("MIDI context initialization failed")]
    InitError(#[from] midir::InitError),
    #[error("MIDI Port retrieval failed")]
    PortInfoError(#[from] midir::PortInfoError),
    #[error("sending MIDI message failed")]
    SendError(#[from] midir::SendError),
    #[error("couldn't find a port for {keyword:?}")]
    NoPortFound {
        // The keyword that was searched for
        keyword: &'static str,
    },
}

/// Everything that can go wrong when talking to a surface.
///
/// None of these are fatal. Whenever an operation returns one of the validation variants, the
/// surface state is exactly what it was before the call.
#[derive(Debug, Error)]
pub enum Error {
    /// A sysex frame didn't match the device's framing
    #[error("invalid sysex frame: {reason}")]
    InvalidFrame { reason: &'static str },
    #[error("unknown view function {0:?} (expected toggle, trigger or blink)")]
    InvalidViewFunction(String),
    #[error("state array must have exactly 64 entries, got {len}")]
    InvalidStateArray { len: usize },
    #[error("invalid button id {0:?} (expected an integer from 0 to 63)")]
    InvalidButtonId(String),
    /// No button map has been received yet, or the note isn't part of it
    #[error("note {note} doesn't resolve to a button")]
    UnresolvedButton { note: u8 },
    #[error("timer interval must be at least 1 ms, got {0}")]
    InvalidBlinkInterval(u64),
    #[error("invalid command: {0}")]
    InvalidCommand(String),
    #[error(transparent)]
    Midi(#[from] MidiError),
}
