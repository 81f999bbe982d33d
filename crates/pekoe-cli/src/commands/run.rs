use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use pekoe_core::AppConfig;
use pekoe_tui::{
    app::{App, Mode},
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    keymap::Keymap,
    scroll::ScrollConfigExt,
    widgets::{HelpWidget, HoursPanelWidget, MenuOverlayWidget, NavBarWidget, PageViewWidget, StatusBarWidget},
};

pub fn run(config: Arc<AppConfig>, page: Option<PathBuf>) -> Result<()> {
    // Create keymap from config
    let keymap = Keymap::from_config(&config.keymap);

    let page = super::load_page(&config, page)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Pekoe"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(config.clone(), page);

    // Idle tick for input polling, fast tick while animating
    let event_handler = EventHandler::with_animation_tick(
        config.ui.tick_rate_ms,
        config.scroll.animation_tick_duration(),
    );

    // Track if we need high frame rate for smooth scrolling.
    // Checked at the END of each iteration for the NEXT iteration's tick rate.
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Advance the animation and run a reveal pass at the new offset
        app.update_frame(Instant::now());

        // Draw UI
        terminal.draw(|frame| draw(frame, &mut app))?;

        // Handle events (use faster tick rate during animations)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app, &keymap);
                    handle_action(&mut app, action);
                }
                AppEvent::Resize(_, _) => {
                    // Viewport height is recomputed on the next draw
                }
                AppEvent::Tick => {}
            }
        }

        // Update fast update flag for next iteration
        needs_fast_update = app.needs_animation_frame();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    let nav_height = if app.config.ui.show_nav_bar { 1 } else { 0 };
    let status_height = if app.config.ui.show_status_bar { 1 } else { 0 };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(nav_height),
            Constraint::Min(1),
            Constraint::Length(status_height),
        ])
        .split(size);
    let content_area = layout[1];

    // The page grid scrolls against the content area, not the terminal
    app.viewport_height = content_area.height;

    if nav_height > 0 {
        NavBarWidget::render(frame, layout[0], app);
    }
    PageViewWidget::render(frame, content_area, app);
    if status_height > 0 {
        StatusBarWidget::render(frame, layout[2], app);
    }

    if app.hours.as_ref().is_some_and(|h| h.is_expanded()) {
        HoursPanelWidget::render(frame, content_area, app);
    }

    match app.mode {
        Mode::Menu => MenuOverlayWidget::render(frame, app),
        Mode::Help => HelpWidget::render(frame, app),
        Mode::Normal => {}
    }
}

fn handle_action(app: &mut App, action: Action) {
    // Clear pending key on any action except PendingG
    if action != Action::PendingG {
        app.clear_pending_key();
    }

    // The status message is transient: the next meaningful action clears
    // it (navigation re-sets it below)
    if !matches!(action, Action::PendingG | Action::None) {
        app.clear_status();
    }

    // Plain scroll motions are locked out while the menu overlay is open;
    // anchor navigation out of the overlay still works.
    let locked = app.is_scroll_locked();
    let max = app.max_scroll();
    let viewport = app.viewport_height as f64;

    match action {
        Action::Quit => {
            app.should_quit = true;
        }
        Action::ScrollDown if !locked => app.animator.scroll_down(max),
        Action::ScrollUp if !locked => app.animator.scroll_up(max),
        Action::ScrollHalfPageDown if !locked => {
            app.animator.scroll_half_page_down(viewport, max)
        }
        Action::ScrollHalfPageUp if !locked => app.animator.scroll_half_page_up(viewport, max),
        Action::ScrollPageDown if !locked => app.animator.scroll_full_page_down(viewport, max),
        Action::ScrollPageUp if !locked => app.animator.scroll_full_page_up(viewport, max),
        Action::JumpToTop if !locked => {
            app.clear_pending_key();
            app.animator.set_scroll(0.0);
        }
        Action::JumpToBottom if !locked => app.animator.set_scroll(max),
        Action::PendingG => {
            app.pending_key = Some('g');
        }
        Action::GoToSection(index) => app.go_to_section(index),
        Action::NextSection => app.next_section(),
        Action::PrevSection => app.prev_section(),
        Action::ScrollToTop if !locked => app.scroll_to_top(),
        Action::ToggleMenu => app.toggle_menu(),
        Action::ToggleHours => app.toggle_hours(),
        Action::Help => {
            app.mode = Mode::Help;
        }
        Action::ExitMode => {
            if app.mode == Mode::Menu {
                app.toggle_menu();
            } else {
                app.mode = Mode::Normal;
            }
        }
        _ => {}
    }
}
