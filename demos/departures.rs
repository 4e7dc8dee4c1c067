//! Departures Demo: a small split-flap board in the terminal.
//!
//! Shows a destination row, a gate number, a platform clock and a weather
//! badge, re-targeting them every few seconds.
//!
//! Press any key to quit. Set `FLAPBOARD_LOG=debug` to write a trace to
//! `flapboard.log`.

use crossterm::event::{self, Event, KeyEventKind};
use flapboard::{
    Buffer, Content, ContentDisplay, ContentEntry, DisplayOptions, FixedDisplay, FixedOptions, PadMode,
    Preset, Rect, Screen, Size, Theme, Ticker, Widget,
};
use std::error::Error;
use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DESTINATIONS: [&str; 5] = ["Amsterdam", "Berlin", "Lyon", "Zurich", "Oslo"];
const WEATHER: [&str; 3] = ["sun", "rain", "snow"];
const ROTATE_EVERY: Duration = Duration::from_secs(4);

fn init_logging() -> Result<(), Box<dyn Error>> {
    let Ok(filter) = std::env::var("FLAPBOARD_LOG") else {
        return Ok(());
    };
    let file = File::create("flapboard.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn weather() -> Vec<ContentEntry> {
    vec![
        ContentEntry::new("sun", Content::new("Sunny").with_icon("☀")),
        ContentEntry::new("rain", Content::new("Rainy").with_icon("☔")),
        ContentEntry::new("snow", Content::new("Snow").with_icon("❄")),
    ]
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    let display = DisplayOptions::default()
        .with_size(Size::Small)
        .with_theme(Theme::Dark)
        .with_timing(Duration::from_millis(45));

    let mut destination = FixedDisplay::new(
        DESTINATIONS[0],
        FixedOptions::new(10)
            .with_symbols(Preset::Alphanum)
            .with_display(display),
    )?;
    let mut gate = FixedDisplay::new(
        "1",
        FixedOptions::new(2)
            .with_pad_char('0')
            .with_pad_mode(PadMode::Start)
            .with_display(display),
    )?;
    let mut clock = FixedDisplay::new("0", FixedOptions::new(4).with_display(display))?;
    let mut forecast = ContentDisplay::new(weather(), WEATHER[0], display)?;

    let mut screen = Screen::stdout()?;
    let (width, height) = Screen::size()?;
    let mut buffer = Buffer::new(width.max(1), height.max(1));

    let mut y = 1;
    let widgets: [&mut dyn Widget; 4] = [&mut destination, &mut gate, &mut clock, &mut forecast];
    for widget in widgets {
        let (w, h) = widget.preferred_size();
        widget.set_bounds(Rect::new(2, y, w, h));
        y += h + 1;
    }

    let ticker = Ticker::spawn(Duration::from_millis(15))?;
    let mut round = 0usize;
    let mut next_rotation = ROTATE_EVERY;

    loop {
        let tick = ticker.receiver().recv()?;

        let mut resized = false;
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    ticker.join();
                    return Ok(());
                }
                Event::Resize(w, h) => {
                    buffer.resize(w.max(1), h.max(1));
                    buffer.clear();
                    screen.invalidate();
                    resized = true;
                }
                _ => {}
            }
        }

        if tick.elapsed >= next_rotation {
            round += 1;
            next_rotation += ROTATE_EVERY;
            destination.set_value(DESTINATIONS[round % DESTINATIONS.len()], tick.at);
            gate.set_value((round * 7 % 40 + 1).to_string(), tick.at);
            forecast.set_display_id(WEATHER[round % WEATHER.len()], tick.at);
        }
        clock.set_value(tick.elapsed.as_secs().to_string(), tick.at);

        destination.poll(tick.at);
        gate.poll(tick.at);
        clock.poll(tick.at);
        forecast.poll(tick.at);

        let widgets: [&mut dyn Widget; 4] = [&mut destination, &mut gate, &mut clock, &mut forecast];
        if resized || widgets.iter().any(|w| w.needs_redraw()) {
            for widget in widgets {
                widget.render(&mut buffer);
                widget.clear_redraw();
            }
            screen.present(&buffer)?;
        }
    }
}
