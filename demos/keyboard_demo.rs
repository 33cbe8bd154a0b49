//! Keyboard demo: Drive a message bar from a terminal.
//!
//! Run with: cargo run --example keyboard_demo
//!
//! Keys:
//!   1 / 2 / 3   add a plain / timed (3s) / error message
//!   Up/Down/Home/End/PageUp/PageDown   recall
//!   Ctrl+Alt+X (+Shift)   delete current (all)
//!   Ctrl+Alt+S (+Shift)   save (to a chosen path)
//!   q           quit
//!
//! Set `MSGBAR_LOG=/tmp/msgbar.log` to capture tracing output.

use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    style::Print,
    terminal::{self, ClearType},
};
use msgbar::{
    logging, BarConfig, BarEvent, Command, KeyAction, KeyCode, KeyPress, Message, MessageBar,
    Ticker,
};
use std::io::{self, Write};
use std::time::Duration;

fn main() -> io::Result<()> {
    logging::init_tracing();

    let mut config = BarConfig::load().unwrap_or_default();
    if config.save_dir.is_none() {
        config.save_dir = Some(std::env::temp_dir());
    }

    let mut bar = MessageBar::new(&config);
    let events = bar.subscribe();
    let ticker = Ticker::spawn(Duration::from_millis(100));

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let mut counter = 0u32;
    let mut last_event = String::new();

    loop {
        if event::poll(Duration::from_millis(10))? {
            if let Event::Key(key_event) = event::read()? {
                if let Some(key) = KeyPress::from_crossterm(&key_event) {
                    if key == KeyPress::plain(KeyCode::Char('q')) {
                        break;
                    }
                    counter += 1;
                    match key.code {
                        KeyCode::Char('1') => {
                            bar.show(format!("plain message {counter}"));
                        }
                        KeyCode::Char('2') => {
                            bar.show(
                                Message::new(format!("timed message {counter}"))
                                    .with_timeout(Duration::from_secs(3)),
                            );
                        }
                        KeyCode::Char('3') => {
                            bar.show_error(format!("error {counter}"));
                        }
                        _ => run_key(&mut bar, key, &mut last_event),
                    }
                }
            }
        }

        for tick in ticker.receiver().try_iter() {
            bar.tick(tick.delta);
        }

        for event in events.try_iter() {
            last_event = match event {
                BarEvent::Expired(id) => format!("expired {id}"),
                BarEvent::WaitQueueEmptied => "wait queue emptied".to_string(),
                BarEvent::Evicted(id) => format!("evicted {id}"),
            };
        }

        draw(&mut stdout, &bar, &last_event)?;
    }

    ticker.join();
    execute!(stdout, cursor::Show, Print("\r\n"))?;
    terminal::disable_raw_mode()
}

fn run_key(bar: &mut MessageBar, key: KeyPress, last_event: &mut String) {
    let result = match bar.key_action(key) {
        Some(KeyAction::Run(command)) => bar.execute(command),
        Some(KeyAction::PromptSavePath) => match bar.suggested_save_path() {
            // A real host would open its file dialog here.
            Some(path) => bar.execute(Command::SaveToChosenPath(path)),
            None => return,
        },
        None => return,
    };
    *last_event = match result {
        Ok(outcome) => format!("{outcome:?}"),
        Err(err) => format!("error: {err}"),
    };
}

fn draw(stdout: &mut io::Stdout, bar: &MessageBar, last_event: &str) -> io::Result<()> {
    let indicator = bar.indicator();
    let text = bar.current_message().map_or("", Message::text);
    let gauge = indicator.countdown.map(|c| c.gauge(10)).unwrap_or_default();

    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(format!(" {text:<40} {indicator} {gauge}  {last_event}")),
    )?;
    stdout.flush()
}
