//! Ratatui-based slider screen.
//!
//! The recipient moves a single trade-off slider and sees the resulting salary
//! and equity, plus where that point sits on the offer's frontier. `a` drafts
//! the acceptance message for the granting party.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span, Text},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph, Wrap},
    Terminal,
};

use crate::codec::DecodedLink;
use crate::domain::{EvaluatedPoint, TradeoffPosition};
use crate::error::AppError;
use crate::model::OfferModel;
use crate::report::{self, MessageDraft};

/// Arrow keys move the slider by this many points.
const STEP: i64 = 5;

/// Start the TUI for `link`, or for the default offer when no link is given.
pub fn run(link: Option<&str>) -> Result<(), AppError> {
    let mut app = match link {
        Some(link) => {
            let opened = crate::app::pipeline::open_link(link, None)?;
            App::new(opened.decoded)
        }
        None => App::new(crate::codec::decode(&crate::codec::LinkParams::new())),
    };

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(4, format!("Failed to initialize terminal: {e}")))?;

    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::new(4, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(4, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    decoded: DecodedLink,
    model: OfferModel,
    position: TradeoffPosition,
    point: EvaluatedPoint,
    draft: Option<MessageDraft>,
    status: String,
}

impl App {
    fn new(decoded: DecodedLink) -> Self {
        let model = OfferModel::from_bounds(decoded.offer.bounds);
        let position = decoded.position;
        let status = if decoded.recipient_mode {
            format!("Offer for {}", decoded.offer.metadata.recipient_name)
        } else {
            "No complete offer in link; showing defaults.".to_string()
        };
        Self {
            point: model.evaluate_at(position),
            decoded,
            model,
            position,
            draft: None,
            status,
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::new(4, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(4, format!("Event poll error: {e}")))? {
                continue;
            }

            match event::read().map_err(|e| AppError::new(4, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Left | KeyCode::Down => self.move_to(self.position.step(-STEP)),
            KeyCode::Right | KeyCode::Up => self.move_to(self.position.step(STEP)),
            KeyCode::Home => self.move_to(TradeoffPosition::MIN),
            KeyCode::End => self.move_to(TradeoffPosition::MAX),
            KeyCode::Char('a') => self.accept(),
            _ => {}
        }
        false
    }

    fn move_to(&mut self, position: TradeoffPosition) {
        self.position = position;
        self.point = self.model.evaluate_at(position);
        // A draft describes one specific point.
        self.draft = None;
        self.status = format!("slider: {position}");
    }

    fn accept(&mut self) {
        if !self.decoded.recipient_mode {
            self.status = "Acceptance needs a complete offer link.".to_string();
            return;
        }
        match report::acceptance_message(&self.decoded.offer, &self.point) {
            Ok(draft) => {
                self.status = format!("Acceptance drafted for {}", draft.to);
                self.draft = Some(draft);
            }
            Err(err) => self.status = err.to_string(),
        }
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_slider(frame, chunks[1]);
        self.draw_values(frame, chunks[2]);
        match &self.draft {
            Some(draft) => draw_draft(frame, chunks[3], draft),
            None => self.draw_frontier(frame, chunks[3]),
        }
        self.draw_footer(frame, chunks[4]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let meta = &self.decoded.offer.metadata;
        let mode = if self.decoded.recipient_mode { "recipient" } else { "preview" };

        let lines = vec![
            Line::from(vec![
                Span::styled("compmax", Style::default().fg(Color::Cyan)),
                Span::raw(format!(" - {} · {}", meta.company, meta.position_title)),
            ]),
            Line::from(Span::styled(
                format!(
                    "offeree: {} | from: {} | date: {} | mode: {mode}",
                    meta.recipient_name, meta.sender_name, meta.date
                ),
                Style::default().fg(Color::Gray),
            )),
        ];

        let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_slider(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let gauge = Gauge::default()
            .block(Block::default().title("Equity ◀ ─ ▶ Salary").borders(Borders::ALL))
            .gauge_style(Style::default().fg(Color::Green).bg(Color::DarkGray))
            .ratio(self.position.fraction())
            .label(format!("{}/100", self.position));
        frame.render_widget(gauge, area);
    }

    fn draw_values(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let bounds = self.model.bounds();
        let label = report::equity_label(bounds.equity());
        let value_style = Style::default().add_modifier(Modifier::BOLD);

        let lines = vec![
            Line::from(vec![
                Span::raw("Salary: "),
                Span::styled(report::format_currency(self.point.salary), value_style),
                Span::styled(
                    format!("  (max {})", report::format_currency(bounds.max_salary())),
                    Style::default().fg(Color::Gray),
                ),
            ]),
            Line::from(vec![
                Span::raw(format!("{label}: ")),
                Span::styled(report::format_equity_value(self.point.equity), value_style),
                Span::styled(
                    format!("  (max {})", report::format_equity_max(bounds.equity())),
                    Style::default().fg(Color::Gray),
                ),
            ]),
        ];

        let p = Paragraph::new(Text::from(lines))
            .block(Block::default().title("Current selection").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_frontier(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let (line, x_max, y_max) = frontier_series(&self.model);
        let marker = [(self.point.salary, self.point.equity_or_shares())];
        let label = report::equity_label(self.model.bounds().equity());

        let datasets = vec![
            Dataset::default()
                .name("frontier")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&line),
            Dataset::default()
                .name("selection")
                .marker(symbols::Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::Yellow))
                .data(&marker),
        ];

        let chart = Chart::new(datasets)
            .block(Block::default().title("Frontier").borders(Borders::ALL))
            .x_axis(
                Axis::default()
                    .title("salary")
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, x_max])
                    .labels(["$0".to_string(), report::format_currency(x_max)]),
            )
            .y_axis(
                Axis::default()
                    .title(label.to_lowercase())
                    .style(Style::default().fg(Color::Gray))
                    .bounds([0.0, y_max])
                    .labels(["0".to_string(), report::format_equity_max(self.model.bounds().equity())]),
            );
        frame.render_widget(chart, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "←/→ ±5  Home/End 0/100  a accept  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

fn draw_draft(frame: &mut ratatui::Frame<'_>, area: Rect, draft: &MessageDraft) {
    let p = Paragraph::new(report::format_draft(draft))
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Acceptance message").borders(Borders::ALL));
    frame.render_widget(p, area);
}

/// Frontier points at every slider position, plus axis maxima (never zero-width).
fn frontier_series(model: &OfferModel) -> (Vec<(f64, f64)>, f64, f64) {
    let line: Vec<(f64, f64)> = (0..=100)
        .filter_map(|p| model.evaluate(p).ok())
        .map(|pt| (pt.salary, pt.equity_or_shares()))
        .collect();

    let x_max = model.bounds().max_salary().max(1.0);
    let y_max = line.first().map(|&(_, y)| y).unwrap_or(0.0).max(1e-9);
    (line, x_max, y_max)
}
