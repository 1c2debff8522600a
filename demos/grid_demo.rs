//! Interactive console for a connected grid.
//!
//! Connects to the first MIDI ports whose names match the device, requests the button map and
//! then reads one command per line from stdin (see `blinkgrid::Command` for the syntax).
//! Set `RUST_LOG=debug` to see what's going on.
use std::io::{stdin, BufRead};

use blinkgrid::{
    forward_input, Command, Driver, Event, Input, InputDevice, Output, OutputDevice, Surface,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Show all interface names.
    let midi = midir::MidiOutput::new("blinkgrid")?;
    for port in midi.ports() {
        println!("{}", midi.port_name(&port)?);
    }

    let surface = Surface::new(Output::guess()?);
    let (driver, sender) = Driver::new(surface);
    let _input = Input::guess(forward_input(sender.clone()))?;

    sender.send(Command::Initialize.into())?;

    std::thread::spawn(move || {
        println!("Type commands, e.g. `viewfunction blink` or `clear`. `quit` exits.");
        for line in stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "quit" {
                break;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if sender.send(command.into()).is_err() {
                        break;
                    }
                }
                Err(e) => eprintln!("{}", e),
            }
        }
        let _ = sender.send(Event::Shutdown);
    });

    let mut surface = driver.run();
    surface.clear(None)?;
    Ok(())
}
