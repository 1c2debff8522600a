/*!
A driver for 8x8 illuminated button grids that speak a small sysex dialect: one frame to set all
64 LEDs at once, one to factory reset the device, and a request/response pair to find out which
notes the buttons currently send.

# The Surface

[`Surface`] holds the lit state of all 64 buttons. Each button follows a [`ViewFunction`]:

- [`ViewFunction::Toggle`]: every press flips the light
- [`ViewFunction::Trigger`]: the light is on while the button is held
- [`ViewFunction::Blink`]: a press starts blinking, the next press stops it

The device reports presses by note number, and the user can reassign notes on the device
itself. So before presses can be resolved, the surface has to learn the device's
[`ButtonMap`] with [`Surface::request_button_map`]. Until the response arrives, presses are
rejected with [`Error::UnresolvedButton`].

```
use blinkgrid::{ButtonId, MockTransport, Surface};

let transport = MockTransport::new();
let mut surface = Surface::new(transport.clone());

// light every other button, bypassing the view functions
let states: Vec<bool> = (0..64).map(|i| i % 2 == 0).collect();
surface.set_states(&states)?;
assert!(surface.button_state(ButtonId::new(2).unwrap()));

// ...which sent one LED map frame
assert_eq!(transport.len(), 1);
assert_eq!(transport.last().unwrap()[..6], [240, 0, 1, 97, 2, 4]);
# Ok::<(), blinkgrid::Error>(())
```

# Running it

Blink and continuous render timers need someone to drive them. [`Driver`] is a small event loop
that owns the surface, takes [`Event`]s from a channel and fires timers in between:

```no_run
use blinkgrid::prelude::*;
use blinkgrid::{Command, Driver, Event, Input, Output};

let surface = Surface::new(Output::guess()?);
let (driver, sender) = Driver::new(surface);
let _input = Input::guess(blinkgrid::forward_input(sender.clone()))?;

sender.send(Event::Command(Command::Initialize)).unwrap();
sender.send(Event::Command("viewfunction blink".parse().unwrap())).unwrap();
driver.run();
# Ok::<(), blinkgrid::MidiError>(())
```
*/

pub mod util;

pub mod protocol;
pub use protocol::{ButtonId, ButtonMap, DecodedMessage, SysexDecoder, SysexFrame};

pub mod surface;
pub use surface::{Button, Surface, SurfaceConfig, ViewFunction};

mod command;
pub use command::*;

mod driver;
pub use driver::*;

mod midi_io;
pub use midi_io::*;

mod mock;
pub use mock::*;

mod errors;
pub use errors::*;

pub mod prelude {
    pub use crate::midi_io::{InputDevice, OutputDevice, Transport};
    pub use crate::surface::{Surface, ViewFunction};
    pub use crate::ButtonId;
}

/// Identifier used for e.g. the midi port names etc.
const APPLICATION_NAME: &str = "Blinkgrid";
