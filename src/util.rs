#[macro_export]
macro_rules! ok_or_continue {
	( $e:expr ) => (
		match $e {
			Ok(value) => value,
			Err(_e) => {
				continue;
			},
		}
	)
}

/// Interprets a MIDI data value (velocity, state flag) as on/off.
pub fn is_on(value: u8) -> bool {
	value != 0
}
