use crate::app::{App, NAV_LINKS};
use crate::card::Card;
use crate::page::Page;
use html2text::from_read;
use std::time::{Duration, Instant};
use tui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Span, Spans, Text},
    widgets::{Paragraph, Wrap},
};

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> std::io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| draw_ui(f, &app))?;

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();
        if crossterm::event::poll(timeout)? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                use crossterm::event::KeyCode::*;
                match key.code {
                    Char('q') | Esc => {
                        return Ok(());
                    }
                    Tab => app.on_next_link(),
                    BackTab => app.on_prev_link(),
                    Enter => app.on_enter(),
                    Left | Backspace => app.on_back(),
                    Right => app.on_forward(),
                    Up => app.on_up(),
                    Down => app.on_down(),
                    PageUp => app.on_page_up(),
                    PageDown => app.on_page_down(),
                    _ => {}
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }
    }
}

pub fn draw_ui<B: Backend>(f: &mut Frame<B>, app: &App) {
    let full_area = f.size();
    let page = app.page.lock();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(full_area);

    let title = Paragraph::new(Span::styled(
        page.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
    .style(Style::default().fg(Color::White));
    f.render_widget(title, chunks[0]);

    f.render_widget(Paragraph::new(nav_spans(app.selected)), chunks[1]);

    let wrap_width = full_area.width.saturating_sub(4) as usize;
    if page.welcome.visible {
        let welcome = Paragraph::new(page.welcome.text.clone())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        f.render_widget(welcome, chunks[2]);
    } else if page.vacancies.visible {
        let list = Paragraph::new(cards_text(&page, wrap_width))
            .style(Style::default().fg(Color::White))
            .scroll((app.scroll, 0))
            .wrap(Wrap { trim: false });
        f.render_widget(list, chunks[2]);
    }
}

fn nav_spans(selected: usize) -> Spans<'static> {
    let mut spans = Vec::with_capacity(NAV_LINKS.len() * 2);
    for (i, link) in NAV_LINKS.iter().enumerate() {
        let style = if i == selected {
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(Color::LightYellow)
        };
        spans.push(Span::styled(format!(" {} ", link.label), style));
        spans.push(Span::raw("  "));
    }
    Spans::from(spans)
}

fn cards_text(page: &Page, wrap_width: usize) -> Text<'static> {
    let mut lines: Vec<Spans> = vec![];
    for card in page.vacancies.cards() {
        lines.extend(card_lines(card, wrap_width));
    }
    Text::from(lines)
}

fn card_lines(card: &Card, wrap_width: usize) -> Vec<Spans<'static>> {
    let mut lines = vec![Spans::from(Span::styled(
        "─".repeat(wrap_width),
        Style::default().fg(Color::LightGreen),
    ))];
    lines.extend(
        from_read(card.markup().as_bytes(), wrap_width.max(1))
            .lines()
            .map(|line| Spans::from(Span::raw(line.to_string()))),
    );
    lines.push(Spans::from(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::vacancy_card;

    #[test]
    fn test_card_lines_show_every_field() {
        let card = vacancy_card("Backend Dev", "Acme", "Remote", "$100k", "Build APIs");

        let text: Vec<String> = card_lines(&card, 60)
            .into_iter()
            .map(|s| s.0.into_iter().map(|span| span.content.into_owned()).collect())
            .collect();
        let joined = text.join("\n");

        let needles = [
            "Backend Dev",
            "Компания",
            "Acme",
            "Город",
            "Remote",
            "Зарплата",
            "$100k",
            "Описание",
            "Build APIs",
        ];
        for needle in needles {
            assert!(joined.contains(needle), "missing {needle} in {joined}");
        }
    }
}
