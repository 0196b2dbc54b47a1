use crate::cards::Card;
use crate::game::{Game, Phase, Player};
use crate::port::SoundCue;
use crate::tui::app::{AppState, Scene};
use ratatui::prelude::*;
use ratatui::widgets::*;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Welcome => draw_welcome(f, app),
        Scene::Table => draw_table(f, app),
    }
}

fn draw_welcome(f: &mut Frame, app: &AppState) {
    let area = f.area();
    let lines = vec![
        Line::from("Texas Hold'em"),
        Line::from(""),
        Line::from(format!("Name: {}_", app.name_entry())),
        Line::from(format!("AI difficulty: {}", app.difficulty())),
        Line::from(""),
        Line::from("Type a name, Tab to cycle difficulty, Enter to deal, q to quit."),
    ];
    let block = Block::default().title("holdem-rs").borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_table(f: &mut Frame, app: &AppState) {
    let Some(session) = app.session() else { return };
    let game = session.game();
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // community cards
            Constraint::Min(7),    // seats
            Constraint::Length(4), // status bar
        ])
        .split(area);

    let header = Paragraph::new(Line::from(format!(
        "Phase: {}   Pot: {}   Blinds: {}/{}   Deck: {}",
        game.phase(),
        game.pot(),
        game.small_blind(),
        game.big_blind(),
        game.cards_remaining(),
    )))
    .block(Block::default().title("holdem-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let board = Paragraph::new(Line::from(cards_text(game.community())))
        .block(Block::default().title("Community").borders(Borders::ALL));
    f.render_widget(board, chunks[1]);

    let rows: Vec<Line> = game
        .players()
        .iter()
        .enumerate()
        .map(|(i, p)| seat_line(game, i, p))
        .collect();
    let seats =
        Paragraph::new(rows).block(Block::default().title("Players").borders(Borders::ALL));
    f.render_widget(seats, chunks[2]);

    f.render_widget(status_widget(app, game), chunks[3]);
}

fn seat_line(game: &Game, seat: usize, p: &Player) -> Line<'static> {
    // AI hole cards stay face-down until showdown.
    let hand = if p.is_ai() && game.phase() != Phase::Showdown {
        "?? ??".to_string()
    } else {
        cards_text(p.hand())
    };
    let mut flags = String::new();
    if seat == game.current_index() && game.phase() != Phase::Showdown {
        flags.push_str(" <- acting");
    }
    if p.is_folded() {
        flags.push_str(" (folded)");
    }
    if game.last_winner() == Some(seat) {
        flags.push_str(" WINNER");
    }
    let text = format!(
        "{:<12} [{hand:<6}]  chips: {:<6} bet: {:<5}{flags}",
        p.name(),
        p.chips(),
        p.current_bet(),
    );
    let style = if p.is_folded() {
        Style::default().add_modifier(Modifier::DIM)
    } else if game.last_winner() == Some(seat) {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(Span::styled(text, style))
}

fn status_widget(app: &AppState, game: &Game) -> Paragraph<'static> {
    let Some(session) = app.session() else { return Paragraph::new("") };
    let mut lines: Vec<Line> = Vec::new();

    if let Some(entry) = app.amount_entry() {
        lines.push(Line::from(format!("Bet amount: {entry}_  (Enter to bet, Esc to cancel)")));
    } else if game.phase() == Phase::Showdown {
        lines.push(Line::from("Showdown — next round deals shortly."));
    } else if session.awaiting_human() {
        lines.push(Line::from("Your turn: [c]heck  [b]et  [f]old"));
    } else {
        lines.push(Line::from(format!("{} is thinking...", game.current_player().name())));
    }

    if let Some(err) = app.action_error() {
        lines.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(cue) = session.port().last_sound() {
        let tag = match cue {
            SoundCue::CardDeal => "cards hit the felt",
            SoundCue::Chips => "chips clatter",
            SoundCue::Win => "a pot slides over",
        };
        lines.push(Line::from(Span::styled(format!("~ {tag}"), Style::default().fg(Color::Cyan))));
    }

    Paragraph::new(lines).block(Block::default().title("Status").borders(Borders::ALL))
}

fn cards_text(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}
