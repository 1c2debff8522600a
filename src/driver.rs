use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Instant;

use crate::{Command, Error, InputMessage, Surface, Transport};

/// Something for the [`Driver`] to process
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Event {
    Press { note: u8, velocity: u8 },
    /// One byte of incoming sysex
    SysexByte(u8),
    Command(Command),
    /// Stop the event loop
    Shutdown,
}

impl Event {
    /// Split a message from the device into events. Sysex messages become one event per byte.
    pub fn from_input(msg: InputMessage) -> Vec<Event> {
        match msg {
            InputMessage::Press { note, velocity } => vec![Event::Press { note, velocity }],
            InputMessage::Sysex(bytes) => bytes.into_iter().map(Event::SysexByte).collect(),
            InputMessage::Other(_) => Vec::new(),
        }
    }
}

impl From<Command> for Event {
    fn from(command: Command) -> Self {
        Event::Command(command)
    }
}

/// Returns a callback for [`crate::InputDevice::guess`] that forwards everything the device
/// sends to a driver.
pub fn forward_input(sender: Sender<Event>) -> impl FnMut(InputMessage) + Send + 'static {
    move |msg: InputMessage| {
        for event in Event::from_input(msg) {
            if sender.send(event).is_err() {
                log::debug!("Driver is gone, dropping input");
                return;
            }
        }
    }
}

/// A single-threaded event loop around a [`Surface`].
///
/// Presses, sysex bytes and commands arrive through a channel from any number of threads. The
/// driver handles them one at a time, and fires blink and render timers in between, so the
/// surface is only ever touched from the driver's thread.
///
/// ```no_run
/// use blinkgrid::{Command, Driver, Event, Input, InputDevice as _, Output, OutputDevice as _, Surface};
///
/// let surface = Surface::new(Output::guess()?);
/// let (driver, sender) = Driver::new(surface);
/// let _input = Input::guess(blinkgrid::forward_input(sender.clone()))?;
///
/// sender.send(Event::Command(Command::Initialize)).unwrap();
/// driver.run();
/// # Ok::<(), blinkgrid::MidiError>(())
/// ```
pub struct Driver<T: Transport> {
    surface: Surface<T>,
    receiver: Receiver<Event>,
}

impl<T: Transport> Driver<T> {
    pub fn new(surface: Surface<T>) -> (Self, Sender<Event>) {
        let (sender, receiver) = mpsc::channel();
        (Self { surface, receiver }, sender)
    }

    pub fn surface(&self) -> &Surface<T> {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut Surface<T> {
        &mut self.surface
    }

    /// Process a single event right away
    pub fn handle(&mut self, event: Event) -> Result<(), Error> {
        match event {
            Event::Press { note, velocity } => self.surface.press(note, velocity),
            Event::SysexByte(code) => self.surface.feed_sysex_byte(code),
            Event::Command(command) => command.apply(&mut self.surface),
            Event::Shutdown => Ok(()),
        }
    }

    /// Wait for the next event, but no longer than until the next timer deadline. Returns
    /// `Err(())` once every sender has hung up.
    fn next_event(&self) -> Result<Option<Event>, ()> {
        match self.surface.next_deadline() {
            Some(deadline) => {
                let timeout = deadline.saturating_duration_since(Instant::now());
                match self.receiver.recv_timeout(timeout) {
                    Ok(event) => Ok(Some(event)),
                    Err(RecvTimeoutError::Timeout) => Ok(None),
                    Err(RecvTimeoutError::Disconnected) => Err(()),
                }
            }
            None => self.receiver.recv().map(Some).map_err(|_| ()),
        }
    }

    /// Run until [`Event::Shutdown`] arrives or every sender has been dropped, then hand back
    /// the surface. Errors are logged and don't stop the loop.
    pub fn run(mut self) -> Surface<T> {
        log::debug!("Driver started");

        loop {
            let event = match self.next_event() {
                Ok(event) => event,
                Err(()) => {
                    log::debug!("All event senders hung up");
                    break;
                }
            };

            if let Some(event) = event {
                if event == Event::Shutdown {
                    break;
                }
                if let Err(e) = self.handle(event) {
                    log::warn!("{}", e);
                }
            }

            if let Err(e) = self.surface.run_due_timers(Instant::now()) {
                log::error!("Timer resync failed: {}", e);
            }
        }

        log::debug!("Driver stopped");
        self.surface
    }
}
