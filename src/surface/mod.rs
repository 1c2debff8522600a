//! The surface keeps the state of all 64 buttons and turns it into LED map frames.

mod button;
pub use button::*;

mod config;
pub use config::*;

pub mod checksum;

pub mod timer;
use timer::{Scheduler, TimerHandle, TimerTarget};

use std::time::{Duration, Instant};

use crate::protocol::{self, ButtonId, ButtonMap, DecodedMessage, SysexDecoder, NUM_BUTTONS};
use crate::{Error, Transport};

type Slots = [Option<Button>; NUM_BUTTONS];

/// Returns the button in `id`'s slot, creating it from the current defaults if necessary.
fn slot<'a>(buttons: &'a mut Slots, config: &SurfaceConfig, id: ButtonId) -> &'a mut Button {
    buttons[id.index()]
        .get_or_insert_with(|| Button::new(id, config.view_function, config.blink_interval()))
}

fn validate_interval(ms: u64) -> Result<Duration, Error> {
    if ms == 0 {
        return Err(Error::InvalidBlinkInterval(ms));
    }
    Ok(Duration::from_millis(ms))
}

/// An 8x8 button grid driven over sysex.
///
/// The surface is the single owner of all button state. An operation that rejects its input
/// leaves the state untouched. Operations that change what should be lit send a fresh LED map to
/// the transport afterwards (see [`SurfaceConfig::resync_on_press`]); if that send fails, the
/// change stays in place and the error is returned.
///
/// Blinking and continuous render are driven by timers that the surface doesn't run by itself:
/// call [`Surface::run_due_timers`] whenever [`Surface::next_deadline`] has passed, or let a
/// [`crate::Driver`] do that.
///
/// ```
/// use blinkgrid::{MockTransport, Surface, ViewFunction};
///
/// let transport = MockTransport::new();
/// let mut surface = Surface::new(transport.clone());
///
/// // the device answers a button map request with the notes of all 64 buttons
/// surface.request_button_map()?;
/// let mut response = vec![240, 0, 1, 97, 2, 11];
/// for note in 36..100 {
///     response.extend(&[note, 0]);
/// }
/// response.push(247);
/// for byte in response {
///     surface.feed_sysex_byte(byte)?;
/// }
///
/// surface.set_view_function(ViewFunction::Trigger)?;
/// surface.press(36, 127)?;
/// assert!(surface.button_state(blinkgrid::ButtonId::new(0).unwrap()));
/// assert_eq!(transport.last().unwrap()[6..8], [126, 15]);
/// # Ok::<(), blinkgrid::Error>(())
/// ```
pub struct Surface<T: Transport> {
    transport: T,
    config: SurfaceConfig,
    buttons: Slots,
    button_map: Option<ButtonMap>,
    decoder: SysexDecoder,
    scheduler: Scheduler,
    render_timer: Option<TimerHandle>,
}

impl<T: Transport> Surface<T> {
    /// Create a surface with the default configuration. Nothing is sent yet; see
    /// [`Surface::initialize`].
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            config: SurfaceConfig::default(),
            buttons: std::array::from_fn(|_| None),
            button_map: None,
            decoder: SysexDecoder::new(),
            scheduler: Scheduler::new(),
            render_timer: None,
        }
    }

    pub fn with_config(transport: T, config: SurfaceConfig) -> Result<Self, Error> {
        validate_interval(config.blink_interval_ms)?;
        validate_interval(config.render_interval_ms)?;

        let mut self_ = Self::new(transport);
        self_.config = config;
        Ok(self_)
    }

    /// Start from a blank slate: drop all buttons, ask the device for its button map and
    /// turn every LED off.
    pub fn initialize(&mut self) -> Result<(), Error> {
        self.clear_all_buttons();
        self.request_button_map()?;
        self.sync()
    }

    /// Ask the device for its note assignment. The [`ButtonMap`] is installed later, when the
    /// response arrives through [`Surface::feed_sysex_byte`].
    pub fn request_button_map(&mut self) -> Result<(), Error> {
        log::debug!("Requesting button map");
        self.send(&protocol::button_map_request_frame())
    }

    /// Reset the device to factory settings. Local state is left alone.
    pub fn factory_reset(&mut self) -> Result<(), Error> {
        log::info!("Sending factory reset");
        self.send(&protocol::factory_reset_frame())
    }

    /// Feed one byte received from the device.
    pub fn feed_sysex_byte(&mut self, code: u8) -> Result<(), Error> {
        match self.decoder.feed(code) {
            None => Ok(()),
            Some(Err(e)) => Err(e),
            Some(Ok(DecodedMessage::ButtonMap(map))) => {
                if !map.is_complete() {
                    log::warn!("Button map only covers {} of {} buttons", map.len(), NUM_BUTTONS);
                }
                log::info!("Installed button map with {} notes", map.len());
                self.button_map = Some(map);
                Ok(())
            }
            Some(Ok(DecodedMessage::Unhandled(frame))) => {
                log::debug!("Ignoring sysex operation {}", frame.operation);
                Ok(())
            }
        }
    }

    /// Look up the button a note belongs to, creating it if it's the first reference.
    ///
    /// Returns `None` until a button map has been received, and for notes the map doesn't
    /// contain.
    pub fn button_for_note(&mut self, note: u8) -> Option<&Button> {
        let id = self.button_map.as_ref()?.resolve(note)?;
        Some(slot(&mut self.buttons, &self.config, id))
    }

    /// Handle a press (`value > 0`) or release (`value == 0`) of the button that sends `note`.
    pub fn press(&mut self, note: u8, value: u8) -> Result<(), Error> {
        let id = self
            .button_map
            .as_ref()
            .and_then(|map| map.resolve(note))
            .ok_or(Error::UnresolvedButton { note })?;

        let button = slot(&mut self.buttons, &self.config, id);
        button.press(value, &mut self.scheduler, Instant::now());
        log::trace!("Button {} ({}) state is now {}", id, note, button.state());

        if self.config.resync_on_press && !self.is_rendering() {
            self.sync()?;
        }
        Ok(())
    }

    /// Set the lit state of all 64 buttons at once, in button id order. This bypasses the view
    /// functions.
    pub fn set_states(&mut self, states: &[bool]) -> Result<(), Error> {
        if states.len() != NUM_BUTTONS {
            return Err(Error::InvalidStateArray { len: states.len() });
        }

        for (id, &state) in ButtonId::all().zip(states) {
            slot(&mut self.buttons, &self.config, id).set_state(state);
        }
        self.resync()
    }

    /// Clear one button, or every button if `id` is `None`. Cleared buttons are dropped and
    /// recreated from the current defaults the next time they're pressed, looked up or written.
    pub fn clear(&mut self, id: Option<ButtonId>) -> Result<(), Error> {
        match id {
            Some(id) => {
                if let Some(mut button) = self.buttons[id.index()].take() {
                    button.clear(&mut self.scheduler);
                }
            }
            None => self.clear_all_buttons(),
        }
        self.resync()
    }

    fn clear_all_buttons(&mut self) {
        for entry in self.buttons.iter_mut() {
            if let Some(mut button) = entry.take() {
                button.clear(&mut self.scheduler);
            }
        }
    }

    /// Change the default view function. All buttons are cleared, so no state or blink timer
    /// of the previous view function survives. The switch is committed before the LED map goes
    /// out, so it sticks even if sending fails.
    pub fn set_view_function(&mut self, view_function: ViewFunction) -> Result<(), Error> {
        log::debug!("Switching view function to {}", view_function);
        self.config.view_function = view_function;
        self.clear(None)
    }

    /// [`Surface::set_view_function`] by name (`toggle`, `trigger` or `blink`)
    pub fn set_view_function_by_name(&mut self, name: &str) -> Result<(), Error> {
        self.set_view_function(name.parse()?)
    }

    pub fn view_function(&self) -> ViewFunction {
        self.config.view_function
    }

    /// Set the blink interval of one button, or the default and all existing buttons if `id`
    /// is `None`. Running blink timers keep their phase.
    pub fn set_blink_speed(&mut self, ms: u64, id: Option<ButtonId>) -> Result<(), Error> {
        let interval = validate_interval(ms)?;

        match id {
            Some(id) => {
                slot(&mut self.buttons, &self.config, id)
                    .set_blink_interval(interval, &mut self.scheduler);
            }
            None => {
                self.config.blink_interval_ms = ms;
                for button in self.buttons.iter_mut().flatten() {
                    button.set_blink_interval(interval, &mut self.scheduler);
                }
            }
        }
        Ok(())
    }

    /// Resend the LED map periodically, independent of presses.
    pub fn start_continuous_render(&mut self) -> Result<(), Error> {
        let interval = validate_interval(self.config.render_interval_ms)?;
        if let Some(handle) = self.render_timer.take() {
            self.scheduler.cancel(handle);
        }
        log::info!("Starting continuous render every {:?}", interval);
        self.render_timer = Some(self.scheduler.start(TimerTarget::Render, interval, Instant::now()));
        Ok(())
    }

    pub fn stop_continuous_render(&mut self) {
        if let Some(handle) = self.render_timer.take() {
            log::info!("Stopping continuous render");
            self.scheduler.cancel(handle);
        }
    }

    pub fn is_rendering(&self) -> bool {
        self.render_timer
            .map_or(false, |handle| self.scheduler.is_active(handle))
    }

    /// The earliest moment [`Surface::run_due_timers`] has something to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    /// Apply every timer firing due at `now`. Sends at most one LED map.
    pub fn run_due_timers(&mut self, now: Instant) -> Result<(), Error> {
        let mut needs_sync = false;

        for (handle, target) in self.scheduler.poll(now) {
            match target {
                TimerTarget::Blink(id) => {
                    if let Some(button) = self.buttons[id.index()].as_mut() {
                        needs_sync |= button.blink_tick(handle);
                    }
                }
                TimerTarget::Render => needs_sync |= self.render_timer == Some(handle),
            }
        }

        if needs_sync {
            self.sync()?;
        }
        Ok(())
    }

    /// Send the complete LED state to the device. Buttons that don't exist encode as off and
    /// are not created.
    pub fn sync(&mut self) -> Result<(), Error> {
        let columns = checksum::encode_columns(|id| self.button_state(id));
        self.send(&protocol::led_map_frame(&columns))
    }

    fn resync(&mut self) -> Result<(), Error> {
        if self.config.resync_on_press {
            self.sync()?;
        }
        Ok(())
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.transport.send(bytes)?;
        Ok(())
    }

    /// The button with this id, if it has been pressed, looked up or written since it was last
    /// cleared
    pub fn button(&self, id: ButtonId) -> Option<&Button> {
        self.buttons[id.index()].as_ref()
    }

    /// Whether the button is lit. Buttons that don't exist yet are off.
    pub fn button_state(&self, id: ButtonId) -> bool {
        self.button(id).map_or(false, Button::state)
    }

    pub fn is_blinking(&self, id: ButtonId) -> bool {
        self.button(id).map_or(false, Button::is_blinking)
    }

    /// Lit state of all 64 buttons, in button id order
    pub fn states(&self) -> Vec<bool> {
        ButtonId::all().map(|id| self.button_state(id)).collect()
    }

    pub fn button_map(&self) -> Option<&ButtonMap> {
        self.button_map.as_ref()
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MockTransport;

    const BASE_NOTE: u8 = 36;

    /// A transport whose device has gone away
    struct Unplugged;

    impl Transport for Unplugged {
        fn send(&mut self, _bytes: &[u8]) -> Result<(), crate::MidiError> {
            Err(crate::MidiError::NoPortFound { keyword: "Ohm" })
        }
    }

    fn id(id: u8) -> ButtonId {
        ButtonId::new(id).unwrap()
    }

    fn mapped_surface(view_function: ViewFunction) -> (Surface<MockTransport>, MockTransport) {
        let transport = MockTransport::new();
        let config = SurfaceConfig::default()
            .with_view_function(view_function)
            .with_blink_interval_ms(100);
        let mut surface = Surface::with_config(transport.clone(), config).unwrap();

        let mut frame = vec![240, 0, 1, 97, 2, 11];
        for i in 0..64 {
            frame.extend(&[BASE_NOTE + i, 0]);
        }
        frame.push(247);
        for byte in frame {
            surface.feed_sysex_byte(byte).unwrap();
        }

        transport.clear();
        (surface, transport)
    }

    #[test]
    fn press_before_button_map_is_unresolved() {
        let transport = MockTransport::new();
        let mut surface = Surface::new(transport.clone());

        assert!(surface.button_for_note(BASE_NOTE).is_none());
        assert!(matches!(
            surface.press(BASE_NOTE, 127),
            Err(Error::UnresolvedButton { note: BASE_NOTE })
        ));
        assert!(transport.is_empty());
    }

    #[test]
    fn buttons_are_created_lazily() {
        let (mut surface, _) = mapped_surface(ViewFunction::Toggle);
        assert!(surface.button(id(5)).is_none());

        let button = surface.button_for_note(BASE_NOTE + 5).unwrap();
        assert_eq!(button.id(), id(5));
        assert_eq!(button.view_function(), ViewFunction::Toggle);
        assert!(surface.button(id(5)).is_some());
    }

    #[test]
    fn press_resyncs() {
        let (mut surface, transport) = mapped_surface(ViewFunction::Toggle);
        surface.press(BASE_NOTE, 127).unwrap();

        assert!(surface.button_state(id(0)));
        assert_eq!(transport.len(), 1);
        let frame = transport.last().unwrap();
        assert_eq!(frame.len(), 6 + 12 + 1);
        assert_eq!(frame[..6], [240, 0, 1, 97, 2, 4]);
        assert_eq!(frame[6..8], [126, 15]);
    }

    #[test]
    fn toggle_press_release_press() {
        let (mut surface, _) = mapped_surface(ViewFunction::Toggle);
        surface.press(BASE_NOTE, 127).unwrap();
        surface.press(BASE_NOTE, 0).unwrap();
        assert!(surface.button_state(id(0)));
        surface.press(BASE_NOTE, 127).unwrap();
        assert!(!surface.button_state(id(0)));
    }

    #[test]
    fn set_states_roundtrip() {
        let (mut surface, transport) = mapped_surface(ViewFunction::Blink);
        let states: Vec<bool> = (0..64).map(|i| i % 5 == 0 || i > 60).collect();

        surface.set_states(&states).unwrap();
        assert_eq!(surface.states(), states);
        assert_eq!(transport.len(), 1);
        // raw overwrite, no blinking started
        assert!(!surface.is_blinking(id(0)));
    }

    #[test]
    fn set_states_rejects_wrong_length() {
        let (mut surface, transport) = mapped_surface(ViewFunction::Toggle);
        surface.press(BASE_NOTE + 3, 127).unwrap();
        transport.clear();

        assert!(matches!(
            surface.set_states(&[true; 63]),
            Err(Error::InvalidStateArray { len: 63 })
        ));
        assert!(surface.set_states(&[true; 65]).is_err());
        assert!(surface.button_state(id(3)));
        assert_eq!(surface.states().iter().filter(|&&s| s).count(), 1);
        assert!(transport.is_empty());
    }

    #[test]
    fn flipping_one_button_changes_one_bit() {
        let (mut surface, transport) = mapped_surface(ViewFunction::Toggle);
        surface.set_states(&[false; 64]).unwrap();
        let off = transport.last().unwrap();

        let mut states = [false; 64];
        states[0] = true;
        surface.set_states(&states).unwrap();
        let on = transport.last().unwrap();

        let differing: Vec<usize> = (0..off.len()).filter(|&i| off[i] != on[i]).collect();
        assert_eq!(differing, vec![6]);
        assert_eq!(off[6] ^ on[6], 1);
    }

    #[test]
    fn clear_one_button_recreates_it() {
        let (mut surface, transport) = mapped_surface(ViewFunction::Toggle);
        surface.press(BASE_NOTE + 1, 127).unwrap();
        surface.press(BASE_NOTE + 2, 127).unwrap();
        transport.clear();

        surface.clear(Some(id(1))).unwrap();
        assert!(surface.button(id(1)).is_none());
        assert!(surface.button_state(id(2)));
        assert_eq!(transport.len(), 1);

        surface.clear(None).unwrap();
        assert!(surface.button(id(2)).is_none());
        assert_eq!(transport.len(), 2);

        let button = surface.button_for_note(BASE_NOTE + 1).unwrap();
        assert!(!button.state());
        assert!(!button.is_blinking());
        assert_eq!(button.view_function(), ViewFunction::Toggle);
    }

    #[test]
    fn sync_does_not_create_buttons() {
        let (mut surface, transport) = mapped_surface(ViewFunction::Toggle);
        surface.press(BASE_NOTE + 1, 127).unwrap();
        surface.sync().unwrap();

        assert!(surface.button(id(1)).is_some());
        assert_eq!(
            ButtonId::all().filter(|&i| surface.button(i).is_some()).count(),
            1
        );
        assert_eq!(transport.len(), 2);
    }

    #[test]
    fn view_function_switch_sticks_when_send_fails() {
        let config = SurfaceConfig::default().with_view_function(ViewFunction::Blink);
        let mut surface = Surface::with_config(Unplugged, config).unwrap();
        let mut frame = vec![240, 0, 1, 97, 2, 11, BASE_NOTE, 0, 247];
        for byte in frame.drain(..) {
            surface.feed_sysex_byte(byte).unwrap();
        }
        assert!(matches!(
            surface.press(BASE_NOTE, 127),
            Err(Error::Midi(crate::MidiError::NoPortFound { .. }))
        ));
        assert!(surface.is_blinking(id(0)));

        assert!(matches!(
            surface.set_view_function(ViewFunction::Trigger),
            Err(Error::Midi(_))
        ));
        assert_eq!(surface.view_function(), ViewFunction::Trigger);
        assert!(surface.button(id(0)).is_none());
        assert!(surface.next_deadline().is_none());
    }

    #[test]
    fn view_function_switch_clears_everything() {
        let (mut surface, _) = mapped_surface(ViewFunction::Blink);
        surface.press(BASE_NOTE, 127).unwrap();
        assert!(surface.is_blinking(id(0)));

        surface.set_view_function_by_name("trigger").unwrap();
        assert!(!surface.is_blinking(id(0)));
        assert!(surface.next_deadline().is_none());
        assert_eq!(
            surface.button_for_note(BASE_NOTE).unwrap().view_function(),
            ViewFunction::Trigger
        );
        // the button map survives the switch
        assert!(surface.button_map().is_some());
    }

    #[test]
    fn unknown_view_function_changes_nothing() {
        let (mut surface, transport) = mapped_surface(ViewFunction::Toggle);
        surface.press(BASE_NOTE, 127).unwrap();
        transport.clear();

        assert!(matches!(
            surface.set_view_function_by_name("strobe"),
            Err(Error::InvalidViewFunction(_))
        ));
        assert_eq!(surface.view_function(), ViewFunction::Toggle);
        assert!(surface.button_state(id(0)));
        assert!(transport.is_empty());
    }

    #[test]
    fn blink_timer_flips_and_resyncs() {
        let (mut surface, transport) = mapped_surface(ViewFunction::Blink);
        surface.press(BASE_NOTE, 127).unwrap();
        transport.clear();

        let deadline = surface.next_deadline().unwrap();
        surface.run_due_timers(deadline).unwrap();
        assert!(surface.button_state(id(0)));
        assert_eq!(transport.len(), 1);

        surface.run_due_timers(deadline + Duration::from_millis(100)).unwrap();
        assert!(!surface.button_state(id(0)));
        assert_eq!(transport.len(), 2);
    }

    #[test]
    fn cleared_blink_never_fires_again() {
        let (mut surface, transport) = mapped_surface(ViewFunction::Blink);
        surface.press(BASE_NOTE, 127).unwrap();
        let deadline = surface.next_deadline().unwrap();
        surface.run_due_timers(deadline).unwrap();

        surface.clear(Some(id(0))).unwrap();
        transport.clear();

        for i in 1..10 {
            surface
                .run_due_timers(deadline + Duration::from_millis(100 * i))
                .unwrap();
        }
        assert!(!surface.button_state(id(0)));
        assert!(transport.is_empty());
        assert!(surface.next_deadline().is_none());
    }

    #[test]
    fn second_blink_press_forces_off() {
        let (mut surface, _) = mapped_surface(ViewFunction::Blink);
        surface.press(BASE_NOTE, 127).unwrap();
        let deadline = surface.next_deadline().unwrap();
        surface.run_due_timers(deadline).unwrap();
        assert!(surface.button_state(id(0)));

        surface.press(BASE_NOTE, 0).unwrap();
        assert!(surface.is_blinking(id(0)));

        surface.press(BASE_NOTE, 127).unwrap();
        assert!(!surface.is_blinking(id(0)));
        assert!(!surface.button_state(id(0)));
    }

    #[test]
    fn blink_speed_updates_live_timer() {
        let (mut surface, _) = mapped_surface(ViewFunction::Blink);
        surface.press(BASE_NOTE, 127).unwrap();
        let first = surface.next_deadline().unwrap();

        surface.set_blink_speed(400, Some(id(0))).unwrap();
        assert_eq!(surface.next_deadline(), Some(first));
        surface.run_due_timers(first).unwrap();
        assert_eq!(
            surface.next_deadline(),
            Some(first + Duration::from_millis(400))
        );

        surface.set_blink_speed(30, None).unwrap();
        assert_eq!(surface.config().blink_interval_ms, 30);
        let fresh = surface.button_for_note(BASE_NOTE + 9).unwrap();
        assert_eq!(fresh.blink_interval(), Duration::from_millis(30));
        assert!(matches!(
            surface.set_blink_speed(0, None),
            Err(Error::InvalidBlinkInterval(0))
        ));
    }

    #[test]
    fn continuous_render_suppresses_press_resync() {
        let (mut surface, transport) = mapped_surface(ViewFunction::Toggle);
        surface.start_continuous_render().unwrap();
        surface.press(BASE_NOTE, 127).unwrap();
        assert!(transport.is_empty());

        let deadline = surface.next_deadline().unwrap();
        surface.run_due_timers(deadline).unwrap();
        assert_eq!(transport.len(), 1);
        assert_eq!(transport.last().unwrap()[6..8], [126, 15]);

        surface.stop_continuous_render();
        assert!(surface.next_deadline().is_none());
        surface.press(BASE_NOTE, 127).unwrap();
        assert_eq!(transport.len(), 2);
    }

    #[test]
    fn fixed_frames_leave_state_alone() {
        let (mut surface, transport) = mapped_surface(ViewFunction::Toggle);
        surface.press(BASE_NOTE, 127).unwrap();
        transport.clear();

        surface.factory_reset().unwrap();
        surface.request_button_map().unwrap();
        assert_eq!(
            transport.sent(),
            vec![
                vec![240, 0, 1, 97, 2, 6, 247],
                vec![240, 0, 1, 97, 2, 7, 11, 247],
            ]
        );
        assert!(surface.button_state(id(0)));
    }

    #[test]
    fn new_button_map_replaces_old_one() {
        let (mut surface, _) = mapped_surface(ViewFunction::Toggle);
        for byte in vec![240, 0, 1, 97, 2, 11, 5, 0, 9, 0, 13, 0, 247] {
            surface.feed_sysex_byte(byte).unwrap();
        }

        let map = surface.button_map().unwrap();
        assert_eq!(map.resolve(5), Some(id(0)));
        assert_eq!(map.resolve(13), Some(id(2)));
        assert_eq!(map.resolve(BASE_NOTE + 10), None);
    }

    #[test]
    fn invalid_frame_keeps_button_map() {
        let (mut surface, _) = mapped_surface(ViewFunction::Toggle);
        let results: Vec<_> = vec![240, 0, 2, 97, 2, 11, 5, 0, 247]
            .into_iter()
            .map(|byte| surface.feed_sysex_byte(byte))
            .collect();

        assert!(matches!(results.last(), Some(Err(Error::InvalidFrame { .. }))));
        assert_eq!(surface.button_map().unwrap().resolve(BASE_NOTE), Some(id(0)));
    }

    #[test]
    fn initialize_requests_map_and_syncs() {
        let (mut surface, transport) = mapped_surface(ViewFunction::Toggle);
        surface.press(BASE_NOTE, 127).unwrap();
        transport.clear();

        surface.initialize().unwrap();
        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], vec![240, 0, 1, 97, 2, 7, 11, 247]);
        assert_eq!(sent[1][6..8], [127, 15]);
        assert!(!surface.button_state(id(0)));
    }
}
