use crate::{ok_or_continue, MidiError};
use midir::{MidiInput, MidiInputConnection, MidiInputPort, MidiOutput, MidiOutputConnection};

fn guess_port<T: midir::MidiIO>(midi_io: &T, keyword: &str) -> Option<T::Port> {
	for port in midi_io.ports() {
		let name = ok_or_continue!(midi_io.port_name(&port));

		if name.contains(keyword) {
			return Some(port);
		}
	}

	None
}

/// Anything that can carry outbound sysex frames to the device. Sending is fire-and-forget:
/// there's no acknowledgement to wait for.
pub trait Transport {
	fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError>;
}

pub trait OutputDevice where Self: Sized {
	const MIDI_CONNECTION_NAME: &'static str;
	const MIDI_DEVICE_KEYWORD: &'static str;

	/// Initiate from an existing midir connection.
	fn from_connection(connection: MidiOutputConnection) -> Result<Self, MidiError>;

	fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError>;

	/// Search the midi devices and choose the first one whose name contains
	/// `MIDI_DEVICE_KEYWORD`.
	fn guess() -> Result<Self, MidiError> {
		let midi_output = MidiOutput::new(crate::APPLICATION_NAME)?;

		let port = guess_port(&midi_output, Self::MIDI_DEVICE_KEYWORD)
				.ok_or(MidiError::NoPortFound { keyword: Self::MIDI_DEVICE_KEYWORD })?;

		let connection = midi_output.connect(&port, Self::MIDI_CONNECTION_NAME)?;

		Self::from_connection(connection)
	}
}

/// The surface's output connection. The connection is closed when this object is dropped.
pub struct Output {
	connection: MidiOutputConnection,
}

impl OutputDevice for Output {
	const MIDI_CONNECTION_NAME: &'static str = "Blinkgrid output";
	const MIDI_DEVICE_KEYWORD: &'static str = "Ohm";

	fn from_connection(connection: MidiOutputConnection) -> Result<Self, MidiError> {
		Ok(Self { connection })
	}

	fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError> {
		log::trace!("-> {:?}", bytes);
		self.connection.send(bytes)?;
		Ok(())
	}
}

impl Transport for Output {
	fn send(&mut self, bytes: &[u8]) -> Result<(), MidiError> {
		OutputDevice::send(self, bytes)
	}
}

/// Keeps the input connection open until dropped.
pub struct InputDeviceHandler {
	#[allow(dead_code)]
	connection: MidiInputConnection<()>
}

pub trait InputDevice {
	const MIDI_CONNECTION_NAME: &'static str;
	const MIDI_DEVICE_KEYWORD: &'static str;
	type Message;

	fn decode_message(timestamp: u64, data: &[u8]) -> Self::Message;

	#[must_use = "If not saved, the connection will be immediately dropped"]
	fn from_port<F>(midi_input: MidiInput, port: &MidiInputPort, mut user_callback: F)
			-> Result<InputDeviceHandler, MidiError>
			where F: FnMut(Self::Message) + Send + 'static, Self: Sized + 'static {

		let midir_callback = move |timestamp: u64, data: &[u8], _: &mut _| {
			let msg = Self::decode_message(timestamp, data);
			(user_callback)(msg);
		};

		let connection = midi_input.connect(port, Self::MIDI_CONNECTION_NAME, midir_callback, ())?;

		Ok(InputDeviceHandler { connection })
	}

	/// Search the midi devices and choose the first one whose name contains
	/// `MIDI_DEVICE_KEYWORD`.
	#[must_use = "If not saved, the connection will be immediately dropped"]
	fn guess<F>(user_callback: F) -> Result<InputDeviceHandler, MidiError>
			where F: FnMut(Self::Message) + Send + 'static, Self: Sized + 'static {

		let midi_input = MidiInput::new(crate::APPLICATION_NAME)?;

		let port = guess_port(&midi_input, Self::MIDI_DEVICE_KEYWORD)
				.ok_or(MidiError::NoPortFound { keyword: Self::MIDI_DEVICE_KEYWORD })?;

		Self::from_port(midi_input, &port, user_callback)
	}
}

/// A message coming from the surface
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum InputMessage {
	/// A button was pressed (`velocity > 0`) or released (`velocity == 0`)
	Press { note: u8, velocity: u8 },
	/// A complete sysex message, start and end markers included
	Sysex(Vec<u8>),
	/// Anything else the device might send
	Other(Vec<u8>),
}

/// The surface's input connection creator.
pub struct Input;

impl InputDevice for Input {
	const MIDI_CONNECTION_NAME: &'static str = "Blinkgrid input";
	const MIDI_DEVICE_KEYWORD: &'static str = "Ohm";
	type Message = InputMessage;

	fn decode_message(_timestamp: u64, data: &[u8]) -> InputMessage {
		match data {
			// Note on, any channel
			&[status, note, velocity] if status & 0xF0 == 0x90 => {
				InputMessage::Press { note, velocity }
			}
			// Note off, any channel
			&[status, note, _] if status & 0xF0 == 0x80 => {
				InputMessage::Press { note, velocity: 0 }
			}
			[crate::protocol::SYSEX_START, ..] => InputMessage::Sysex(data.to_vec()),
			other => InputMessage::Other(other.to_vec()),
		}
	}
}
