//! The device's sysex dialect: framing constants, frame builders and the types shared by the
//! decoder and the surface.

mod decoder;
pub use decoder::*;

mod button_map;
pub use button_map::*;

pub const SYSEX_START: u8 = 240;
pub const SYSEX_END: u8 = 247;
/// Manufacturer id bytes that follow the start marker in every frame
pub const HEADER: [u8; 3] = [0, 1, 97];
pub const DEVICE_ID: u8 = 2;

/// Number of buttons on the grid
pub const NUM_BUTTONS: usize = 64;

/// The operation byte of a frame.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
#[repr(u8)]
pub enum Operation {
    /// Full LED state, two bytes per output column
    LedMap = 4,
    FactoryReset = 6,
    /// Ask the device to report something. The first payload byte says what.
    Request = 7,
    /// The device's note assignment, one (note, placeholder) pair per button
    ButtonMap = 11,
}

impl Operation {
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            4 => Some(Self::LedMap),
            6 => Some(Self::FactoryReset),
            7 => Some(Self::Request),
            11 => Some(Self::ButtonMap),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Logical identity of a grid button, from 0 to 63.
///
/// Ids are laid out row by row: id 0 is the top left button, id 7 the top right one and id 63
/// the bottom right one. They stay the same no matter which notes the device is configured to
/// send.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ButtonId(u8);

impl ButtonId {
    /// Returns `None` if `id` is out of range
    pub fn new(id: u8) -> Option<Self> {
        if (id as usize) < NUM_BUTTONS {
            Some(Self(id))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterates all 64 ids in ascending order
    pub fn all() -> impl Iterator<Item = ButtonId> {
        (0..NUM_BUTTONS as u8).map(ButtonId)
    }
}

impl std::convert::TryFrom<i64> for ButtonId {
    type Error = crate::Error;

    fn try_from(id: i64) -> Result<Self, Self::Error> {
        if (0..NUM_BUTTONS as i64).contains(&id) {
            Ok(Self(id as u8))
        } else {
            Err(crate::Error::InvalidButtonId(id.to_string()))
        }
    }
}

impl std::str::FromStr for ButtonId {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use std::convert::TryFrom;

        let id: i64 = s
            .parse()
            .map_err(|_| crate::Error::InvalidButtonId(s.to_owned()))?;
        Self::try_from(id)
    }
}

impl std::fmt::Display for ButtonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

fn build_frame(operation: Operation, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(7 + payload.len());
    bytes.push(SYSEX_START);
    bytes.extend(&HEADER);
    bytes.push(DEVICE_ID);
    bytes.push(operation.code());
    bytes.extend(payload);
    bytes.push(SYSEX_END);
    bytes
}

/// `240,0,1,97,2,4, [low,high] per column, 247`
pub fn led_map_frame(columns: &[(u8, u8)]) -> Vec<u8> {
    let payload: Vec<u8> = columns
        .iter()
        .flat_map(|&(low, high)| [low, high])
        .collect();
    build_frame(Operation::LedMap, &payload)
}

/// `240,0,1,97,2,6,247`
pub fn factory_reset_frame() -> Vec<u8> {
    build_frame(Operation::FactoryReset, &[])
}

/// `240,0,1,97,2,7,11,247`
pub fn button_map_request_frame() -> Vec<u8> {
    build_frame(Operation::Request, &[Operation::ButtonMap.code()])
}
