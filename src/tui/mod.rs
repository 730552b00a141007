pub mod app;
pub mod event;
pub mod map;
pub mod theme;
pub mod ui;

pub use app::App;
pub use theme::{resolve_theme, ThemeColors};

use std::time::Instant;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyCode, KeyEvent, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use event::{Event, EventHandler};
use ratatui::DefaultTerminal;

pub async fn run_tui(mut app: App, tick_rate_ms: u64) -> anyhow::Result<()> {
    // Buffer log output while the TUI is active so it can't corrupt the display
    crate::stderr_buffer::activate();

    // Init terminal (sets up panic hooks automatically)
    let mut terminal = ratatui::init();
    if let Err(e) = crossterm::execute!(std::io::stdout(), EnableMouseCapture) {
        tracing::warn!("mouse capture unavailable: {}", e);
    }

    let mut events = EventHandler::new(tick_rate_ms);
    let result = event_loop(&mut terminal, &mut app, &mut events).await;

    // Restore terminal
    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    // Flush buffered log lines now that the terminal is restored
    for msg in crate::stderr_buffer::drain() {
        eprintln!("{}", msg);
    }

    result
}

async fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    events: &mut EventHandler,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        match events.next().await {
            Event::Key(key) => handle_key_event(app, key),
            Event::Mouse(mouse) => handle_mouse_event(app, mouse),
            Event::Tick => app.on_tick(Instant::now()),
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

fn handle_key_event(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Instructions overlay swallows everything but its own toggles and quit
    if app.show_instructions {
        match key.code {
            KeyCode::F(1) | KeyCode::Esc => app.toggle_instructions(),
            KeyCode::Char('c') if ctrl => app.should_quit = true,
            _ => {}
        }
        return;
    }

    match key.code {
        // Quit
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if ctrl => app.should_quit = true,

        // Session controls
        KeyCode::Char('n') if ctrl => app.next_question(),
        KeyCode::Char('r') if ctrl => app.reset(),
        KeyCode::Enter => app.submit(),

        // Selectors
        KeyCode::Tab => app.next_mode(),
        KeyCode::BackTab => app.previous_mode(),
        KeyCode::F(1) => app.toggle_instructions(),
        KeyCode::F(2) => app.cycle_difficulty(),

        // Map cursor (ignored outside Distance mode)
        KeyCode::Up => app.move_cursor(1, 0),
        KeyCode::Down => app.move_cursor(-1, 0),
        KeyCode::Left => app.move_cursor(0, -1),
        KeyCode::Right => app.move_cursor(0, 1),

        // Answer field, or map shortcuts when there is no field
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c) if !ctrl => {
            if app.accepts_text() {
                app.push_char(c);
            } else {
                match c {
                    ']' => app.jump_marker(true),
                    '[' => app.jump_marker(false),
                    ' ' => app.toggle_cursor_point(),
                    _ => {}
                }
            }
        }

        _ => {}
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if app.show_instructions {
        return;
    }
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.click_map(mouse.column, mouse.row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::question::tests::sample_record;
    use crate::quiz::{Difficulty, Mode};
    use crate::session::{Session, DEFAULT_FEEDBACK_DELAY, REWARD};

    fn app(mode: Mode) -> App {
        let session = Session::new(vec![sample_record(), sample_record()], DEFAULT_FEEDBACK_DELAY);
        App::new(session, mode, Difficulty::Easy, ThemeColors::dark())
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key_event(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_type_and_submit() {
        let mut app = app(Mode::IataCodes);
        for c in "bog".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.score(), REWARD);
    }

    #[test]
    fn test_backspace_edits_answer() {
        let mut app = app(Mode::IataCodes);
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Char('y'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.answer_input, "x");
    }

    #[test]
    fn test_letters_never_quit() {
        let mut app = app(Mode::Capitals);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.answer_input, "q");
    }

    #[test]
    fn test_ctrl_n_skips() {
        let mut app = app(Mode::Capitals);
        ctrl(&mut app, 'n');
        assert_eq!(app.session.index(), 1);
        assert!(app.answer_input.is_empty());
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let mut app1 = app(Mode::Capitals);
        press(&mut app1, KeyCode::Esc);
        assert!(app1.should_quit);

        let mut app2 = app(Mode::Capitals);
        ctrl(&mut app2, 'c');
        assert!(app2.should_quit);
    }

    #[test]
    fn test_instructions_overlay_captures_keys() {
        let mut app = app(Mode::Capitals);
        press(&mut app, KeyCode::F(1));
        assert!(app.show_instructions);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Tab);
        assert!(app.answer_input.is_empty());
        assert_eq!(app.mode, Mode::Capitals);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_instructions);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tab_cycles_modes() {
        let mut app = app(Mode::Altitude);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.mode, Mode::Departments);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.mode, Mode::Altitude);
    }

    #[test]
    fn test_distance_keys_select_marker() {
        let mut app = app(Mode::Distance);
        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.session.selected_points(), &[sample_record().location()]);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.score(), REWARD);
    }

    #[test]
    fn test_mouse_ignored_outside_map() {
        let mut app = app(Mode::Distance);
        app.map_area = Some(ratatui::layout::Rect::new(10, 10, 40, 20));
        handle_mouse_event(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 1,
                row: 1,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert!(app.session.selected_points().is_empty());
    }

    #[test]
    fn test_mouse_click_inside_map_selects_point() {
        let mut app = app(Mode::Distance);
        app.map_area = Some(ratatui::layout::Rect::new(10, 10, 40, 20));
        handle_mouse_event(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: 12,
                row: 12,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert_eq!(app.session.selected_points().len(), 1);
    }
}
