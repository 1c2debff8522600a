use super::{ButtonMap, Operation, DEVICE_ID, HEADER, SYSEX_END, SYSEX_START};
use crate::Error;

/// A validated frame, stripped of start marker, header, device id and end marker.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SysexFrame {
    pub operation: u8,
    pub payload: Vec<u8>,
}

/// What an incoming frame means to the surface
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DecodedMessage {
    /// The device reported its note assignment
    ButtonMap(ButtonMap),
    /// A well-formed frame with an operation the surface doesn't consume
    Unhandled(SysexFrame),
}

impl SysexFrame {
    /// Parse a complete frame, start and end markers included.
    pub fn parse(bytes: &[u8]) -> Result<Self, Error> {
        let invalid = |reason: &'static str| Err(Error::InvalidFrame { reason });

        let (&start, rest) = match bytes.split_first() {
            Some(split) => split,
            None => return invalid("empty frame"),
        };
        if start != SYSEX_START {
            return invalid("missing start marker");
        }
        let (&end, rest) = match rest.split_last() {
            Some(split) => split,
            None => return invalid("missing end marker"),
        };
        if end != SYSEX_END {
            return invalid("missing end marker");
        }

        // header (3), device id (1), operation (1)
        if rest.len() < 5 {
            return invalid("frame too short");
        }
        if rest[..3] != HEADER {
            return invalid("wrong manufacturer header");
        }
        if rest[3] != DEVICE_ID {
            return invalid("wrong device id");
        }

        Ok(Self {
            operation: rest[4],
            payload: rest[5..].to_vec(),
        })
    }

    pub fn interpret(self) -> DecodedMessage {
        match Operation::from_code(self.operation) {
            Some(Operation::ButtonMap) => {
                DecodedMessage::ButtonMap(ButtonMap::from_payload(&self.payload))
            }
            _ => DecodedMessage::Unhandled(self),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
enum State {
    /// Waiting for a start marker
    Idle,
    /// Inside a frame; holds everything since the start marker
    Accumulating(Vec<u8>),
}

/// Assembles sysex frames from single bytes.
///
/// A start marker always begins a new frame, throwing away any unterminated one. An end marker
/// completes the frame, which is then validated. An end marker that arrives while no frame is
/// open is reported as an invalid frame. Other bytes outside of a frame are dropped.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SysexDecoder {
    state: State,
}

impl Default for SysexDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SysexDecoder {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Whether a frame has been started but not yet terminated
    pub fn is_accumulating(&self) -> bool {
        matches!(self.state, State::Accumulating(_))
    }

    /// Feed a single byte. Returns `Some` once a frame is complete.
    pub fn feed(&mut self, code: u8) -> Option<Result<DecodedMessage, Error>> {
        if code == SYSEX_START {
            if let State::Accumulating(discarded) = &self.state {
                log::debug!("Discarding unterminated sysex frame of {} bytes", discarded.len());
            }
            self.state = State::Accumulating(vec![code]);
            return None;
        }

        match &mut self.state {
            State::Idle => {
                if code == SYSEX_END {
                    Some(Err(Error::InvalidFrame {
                        reason: "end marker without start marker",
                    }))
                } else {
                    log::trace!("Ignoring byte {} outside of a sysex frame", code);
                    None
                }
            }
            State::Accumulating(buffer) => {
                buffer.push(code);
                if code != SYSEX_END {
                    return None;
                }

                let buffer = std::mem::take(buffer);
                self.state = State::Idle;
                Some(SysexFrame::parse(&buffer).map(SysexFrame::interpret))
            }
        }
    }

    /// Feed several bytes, returning every completed frame in order
    pub fn feed_all(&mut self, codes: &[u8]) -> Vec<Result<DecodedMessage, Error>> {
        codes.iter().filter_map(|&code| self.feed(code)).collect()
    }
}
