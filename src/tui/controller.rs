use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if app.amount_entry_active() {
        match code {
            KeyCode::Esc => app.handle_input(InputAction::AmountCancel),
            KeyCode::Enter => app.handle_input(InputAction::AmountSubmit),
            KeyCode::Backspace => app.handle_input(InputAction::AmountBackspace),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                app.handle_input(InputAction::AmountDigit(c as u8 - b'0'));
            }
            _ => {}
        }
        return false;
    }

    match app.scene {
        Scene::Welcome => match code {
            KeyCode::Enter => app.handle_input(InputAction::StartGame),
            KeyCode::Backspace => app.handle_input(InputAction::NameBackspace),
            KeyCode::Tab => app.handle_input(InputAction::DifficultyNext),
            KeyCode::Char('q') if app.name_entry().is_empty() => return true,
            KeyCode::Char(c) if !c.is_control() => app.handle_input(InputAction::NameChar(c)),
            KeyCode::Esc => return true,
            _ => {}
        },
        Scene::Table => match code {
            KeyCode::Char('c') | KeyCode::Char('C') => app.handle_input(InputAction::Check),
            KeyCode::Char('b') | KeyCode::Char('B') => app.handle_input(InputAction::AmountOpen),
            KeyCode::Char('f') | KeyCode::Char('F') => app.handle_input(InputAction::Fold),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
            _ => {}
        },
    }
    false
}
