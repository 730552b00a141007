use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution};
use ratatui::widgets::{Block, Clear, Paragraph, Tabs, Wrap};
use std::time::Instant;

use crate::quiz::{Mode, ALTITUDE_TOLERANCE_M, DISTANCE_THRESHOLD_KM};
use crate::session::{Phase, REWARD};
use crate::tui::app::App;
use crate::tui::map;

const SIDEBAR_WIDTH: u16 = 24;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Handle very small terminal sizes gracefully
    if area.height < 16 || area.width < 60 {
        let msg = Paragraph::new("Terminal too small")
            .alignment(Alignment::Center);
        frame.render_widget(msg, area);
        return;
    }

    // Layout: Title(1) + Tabs(1) + Body(fill) + Status(1)
    let chunks = Layout::vertical([
        Constraint::Length(1),  // Title bar
        Constraint::Length(1),  // Mode tabs
        Constraint::Fill(1),    // Quiz + sidebar
        Constraint::Length(1),  // Status bar
    ])
    .split(area);

    render_title(frame, chunks[0], app);
    render_tabs(frame, chunks[1], app);

    let body = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(SIDEBAR_WIDTH),
    ])
    .split(chunks[2]);

    let question_height = question_height(app);
    let main = Layout::vertical([
        Constraint::Length(question_height),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .split(body[0]);

    render_question(frame, main[0], app);
    render_answer(frame, main[1], app);
    render_map(frame, main[2], app);
    render_sidebar(frame, body[1], app);
    render_status_bar(frame, chunks[3], app);

    if app.show_instructions {
        render_instructions_popup(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect, app: &App) {
    let title = "Colombia GeoGame";
    let mut spans = vec![Span::styled(title, Style::default().fg(app.theme.title_color).bold())];

    let right = format!("Difficulty: {}", app.difficulty.label());
    let padding_len = (area.width as usize).saturating_sub(title.len() + right.chars().count());
    spans.push(Span::raw(" ".repeat(padding_len)));
    spans.push(Span::styled(right, Style::default().fg(app.theme.muted)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<&str> = Mode::ALL.iter().map(|m| m.label()).collect();

    let tabs = Tabs::new(titles)
        .select(app.mode.position())
        .style(app.theme.tab_inactive_style)
        .highlight_style(app.theme.tab_active_style)
        .divider(" | ");

    frame.render_widget(tabs, area);
}

/// Prompt lines plus feedback line plus borders.
fn question_height(app: &App) -> u16 {
    let prompt_lines = app.question().prompt.lines().count().max(1) as u16;
    (prompt_lines + 3).min(10)
}

fn render_question(frame: &mut Frame, area: Rect, app: &App) {
    let question = app.question();
    let total = app.session.records().len();
    let block = Block::bordered().title(format!(
        " Question {}/{} ",
        app.session.index() + 1,
        total
    ));

    let mut lines: Vec<Line> = question
        .prompt
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();

    if let Phase::Evaluated { evaluation, advance_at, .. } = app.session.phase() {
        let remaining = advance_at.saturating_duration_since(Instant::now()).as_secs() + 1;
        lines.push(Line::from(vec![
            Span::styled(
                evaluation.feedback.clone(),
                Style::default().fg(app.theme.verdict_color(evaluation.verdict)).bold(),
            ),
            Span::styled(
                format!("  next question in {}s", remaining),
                Style::default().fg(app.theme.muted),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_answer(frame: &mut Frame, area: Rect, app: &App) {
    let (title, line) = match app.mode {
        Mode::Practice => (
            " Study ",
            Line::from(Span::styled(
                "Enter: next record",
                Style::default().fg(app.theme.muted),
            )),
        ),
        Mode::Distance => {
            let selected = app.session.selected_points();
            let last = match app.session.last_point() {
                Some(p) => format!("last ({:.3}, {:.3})", p.lat, p.lon),
                None => "nothing selected".to_string(),
            };
            (
                " Map answer ",
                Line::from(vec![
                    Span::raw(format!("{} point(s), {}", selected.len(), last)),
                    Span::styled(
                        format!(
                            "  cursor ({:.3}, {:.3})",
                            app.map_cursor.lat, app.map_cursor.lon
                        ),
                        Style::default().fg(app.theme.map_cursor),
                    ),
                ]),
            )
        }
        _ => {
            let cursor = if app.accepts_text() { "|" } else { "" };
            (
                " Your answer ",
                Line::from(format!("{}{}", app.answer_input, cursor)),
            )
        }
    };

    frame.render_widget(Paragraph::new(line).block(Block::bordered().title(title)), area);
}

fn render_map(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::bordered().title(" Map ");
    app.map_area = Some(block.inner(area));

    let theme = &app.theme;
    let session = &app.session;
    let markers: Vec<(f64, f64, Color)> = session
        .records()
        .iter()
        .map(|r| {
            let p = r.location();
            let color = if session.is_selected(&p) {
                theme.marker_selected
            } else {
                theme.marker_unselected
            };
            (p.lon, p.lat, color)
        })
        .collect();
    let selected: Vec<(f64, f64)> = session
        .selected_points()
        .iter()
        .map(|p| (p.lon, p.lat))
        .collect();
    let cursor = (app.mode == Mode::Distance).then_some(app.map_cursor);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds(map::LON_BOUNDS)
        .y_bounds(map::LAT_BOUNDS)
        .paint(|ctx| {
            ctx.draw(&Map {
                resolution: MapResolution::High,
                color: theme.map_outline,
            });
            ctx.layer();
            for (lon, lat, color) in &markers {
                ctx.print(*lon, *lat, Span::styled("●", Style::default().fg(*color)));
            }
            for (lon, lat) in &selected {
                ctx.print(*lon, *lat, Span::styled("◉", Style::default().fg(theme.marker_selected)));
            }
            if let Some(p) = cursor {
                ctx.print(p.lon, p.lat, Span::styled("+", Style::default().fg(theme.map_cursor).bold()));
            }
        });

    frame.render_widget(canvas, area);
}

fn render_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title(" Score ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::from(Span::styled("Current score", Style::default().fg(app.theme.muted))),
        Line::from(Span::styled(
            app.session.score().to_string(),
            Style::default().fg(app.theme.score_color).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled("Best scores", Style::default().fg(app.theme.muted))),
    ];
    for (i, score) in app.session.best_scores().iter().enumerate() {
        lines.push(Line::from(format!("{:>2}. {}", i + 1, score)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Difficulty: {}", app.difficulty.label()),
        Style::default().fg(app.theme.muted),
    )));

    if let Some(info) = app.marker_info() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Marker", Style::default().fg(app.theme.muted))));
        lines.push(Line::from(Span::styled(info, Style::default().fg(app.theme.map_cursor))));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let text = if let Some((ref msg, _)) = app.flash_message {
        Line::from(Span::styled(msg.clone(), Style::default().fg(app.theme.title_color)))
    } else {
        let hints: Vec<(&str, &str)> = match app.mode {
            Mode::Practice => vec![
                ("Enter", ":next "),
                ("Tab", ":mode "),
                ("F1", ":help "),
                ("F2", ":difficulty "),
                ("Esc", ":quit"),
            ],
            Mode::Distance => vec![
                ("Arrows", ":cursor "),
                ("[ ]", ":airport "),
                ("Space", ":select "),
                ("Enter", ":submit "),
                ("^N", ":next "),
                ("Tab", ":mode "),
                ("F1", ":help "),
                ("Esc", ":quit"),
            ],
            _ => vec![
                ("Enter", ":submit "),
                ("^N", ":next "),
                ("Tab", ":mode "),
                ("F1", ":help "),
                ("F2", ":difficulty "),
                ("^R", ":reset "),
                ("Esc", ":quit"),
            ],
        };

        let mut spans = Vec::new();
        for (i, (key, label)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            spans.push(Span::styled(*key, Style::default().fg(app.theme.status_key_color)));
            spans.push(Span::raw(*label));
        }
        Line::from(spans)
    };

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(app.theme.status_bar_bg)),
        area
    );
}

/// Create a centered rectangle with fixed width and height
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    // Clamp dimensions to area bounds
    let width = width.min(area.width);
    let height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

fn key_line<'a>(key: &'a str, description: String, app: &App) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<14}", key), Style::default().fg(app.theme.status_key_color).bold()),
        Span::raw(description),
    ])
}

/// Render the instructions overlay
fn render_instructions_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered_rect_fixed(70, 30, frame.area());

    frame.render_widget(Clear, popup_area);

    let block = Block::bordered()
        .title(Span::styled(" How to play ", app.theme.popup_title))
        .border_style(Style::default().fg(app.theme.popup_border))
        .style(Style::default().bg(app.theme.popup_bg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let heading = |text: &'static str| Line::from(Span::styled(text, Style::default().bold()));
    let mut lines = vec![
        heading("Modes"),
        key_line("Departments", "Name the department a city belongs to.".to_string(), app),
        key_line("Capitals", "Name the capital of a department.".to_string(), app),
        key_line("Airports", "Name the city an airport is in.".to_string(), app),
        key_line("IATA Codes", "Give the IATA code of a city's airport.".to_string(), app),
        key_line("Practice", "Browse every record to study.".to_string(), app),
        key_line(
            "Distance",
            format!("Mark the airport on the map (under {} km).", DISTANCE_THRESHOLD_KM),
            app,
        ),
        key_line(
            "Altitude",
            format!("Estimate the airport altitude (within {} m).", ALTITUDE_TOLERANCE_M),
            app,
        ),
        Line::from(""),
        heading("Map markers"),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(app.theme.marker_unselected)),
            Span::raw("Gray: point not selected"),
        ]),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(app.theme.marker_selected)),
            Span::raw("Blue: point selected"),
        ]),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(app.theme.correct)),
            Span::raw("Green: correct answer"),
        ]),
        Line::from(vec![
            Span::styled("● ", Style::default().fg(app.theme.incorrect)),
            Span::raw("Red: incorrect answer"),
        ]),
        Line::from(""),
        heading("Controls"),
    ];
    lines.extend([
        key_line("Enter", "Submit your answer".to_string(), app),
        key_line("Ctrl-N", "Next question without answering".to_string(), app),
        key_line("Tab / S-Tab", "Change mode".to_string(), app),
        key_line("F2", "Change difficulty".to_string(), app),
        key_line("Ctrl-R", "Reset score".to_string(), app),
        key_line(
            "Map",
            "Click, or arrows + Space; [ ] jump between airports".to_string(),
            app,
        ),
        key_line("", "More than one point can be selected; the last one counts".to_string(), app),
        key_line("Esc / Ctrl-C", "Quit".to_string(), app),
        Line::from(""),
        Line::from(Span::styled(
            format!("Each correct answer is worth {} points. F1 or Esc to close.", REWARD),
            Style::default().fg(app.theme.muted),
        )),
    ]);

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
