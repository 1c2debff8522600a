use crate::{ButtonId, Error, Surface, Transport, ViewFunction};

/// One call of the surface's public operations, as data.
///
/// Commands can be parsed from whitespace separated text, which is handy for consoles and OSC
/// style message routing:
///
/// | Text | Command |
/// |---|---|
/// | `init` | [`Command::Initialize`] |
/// | `requestmap` | [`Command::RequestButtonMap`] |
/// | `press 36 127` | [`Command::Press`] |
/// | `viewfunction blink` | [`Command::SetViewFunction`] |
/// | `blinkspeed 200` / `blinkspeed 200 12` | [`Command::SetBlinkSpeed`] |
/// | `states 0 1 0 ...` (64 values) | [`Command::SetStates`] |
/// | `clear` / `clear 12` | [`Command::Clear`] |
/// | `factoryreset` | [`Command::FactoryReset`] |
/// | `sync` | [`Command::Sync`] |
/// | `render on` / `render off` | [`Command::StartRender`] / [`Command::StopRender`] |
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Command {
    Initialize,
    RequestButtonMap,
    Press { note: u8, value: u8 },
    SetViewFunction(ViewFunction),
    SetBlinkSpeed { ms: u64, button: Option<ButtonId> },
    SetStates(Vec<bool>),
    Clear(Option<ButtonId>),
    FactoryReset,
    Sync,
    StartRender,
    StopRender,
}

impl Command {
    pub fn apply<T: Transport>(self, surface: &mut Surface<T>) -> Result<(), Error> {
        match self {
            Self::Initialize => surface.initialize(),
            Self::RequestButtonMap => surface.request_button_map(),
            Self::Press { note, value } => surface.press(note, value),
            Self::SetViewFunction(view_function) => surface.set_view_function(view_function),
            Self::SetBlinkSpeed { ms, button } => surface.set_blink_speed(ms, button),
            Self::SetStates(states) => surface.set_states(&states),
            Self::Clear(button) => surface.clear(button),
            Self::FactoryReset => surface.factory_reset(),
            Self::Sync => surface.sync(),
            Self::StartRender => surface.start_continuous_render(),
            Self::StopRender => {
                surface.stop_continuous_render();
                Ok(())
            }
        }
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidCommand(message.into())
}

fn parse_number<N: std::str::FromStr>(word: Option<&str>, what: &str) -> Result<N, Error> {
    let word = word.ok_or_else(|| invalid(format!("missing {}", what)))?;
    word.parse()
        .map_err(|_| invalid(format!("{:?} is not a valid {}", word, what)))
}

fn parse_state(word: &str) -> Result<bool, Error> {
    match word.to_ascii_lowercase().as_str() {
        "true" | "on" => Ok(true),
        "false" | "off" => Ok(false),
        other => other
            .parse::<f64>()
            .map(|value| value != 0.0)
            .map_err(|_| invalid(format!("{:?} is not a button state", word))),
    }
}

impl std::str::FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let name = words.next().ok_or_else(|| invalid("empty command"))?;

        let command = match name.to_ascii_lowercase().as_str() {
            "init" | "initialize" => Self::Initialize,
            "requestmap" => Self::RequestButtonMap,
            "press" => Self::Press {
                note: parse_number(words.next(), "note")?,
                value: parse_number(words.next(), "press value")?,
            },
            "viewfunction" => {
                let name = words.next().ok_or_else(|| invalid("missing view function"))?;
                Self::SetViewFunction(name.parse()?)
            }
            "blinkspeed" => Self::SetBlinkSpeed {
                ms: parse_number(words.next(), "blink interval")?,
                button: words.next().map(str::parse::<ButtonId>).transpose()?,
            },
            "states" => Self::SetStates(words.by_ref().map(parse_state).collect::<Result<_, _>>()?),
            "clear" => Self::Clear(words.next().map(str::parse::<ButtonId>).transpose()?),
            "factoryreset" => Self::FactoryReset,
            "sync" | "bang" => Self::Sync,
            "render" => match words.next() {
                Some("on") | Some("start") => Self::StartRender,
                Some("off") | Some("stop") => Self::StopRender,
                _ => return Err(invalid("render expects on or off")),
            },
            _ => return Err(invalid(format!("unknown command {:?}", name))),
        };

        if let Some(extra) = words.next() {
            return Err(invalid(format!("unexpected argument {:?}", extra)));
        }
        Ok(command)
    }
}
