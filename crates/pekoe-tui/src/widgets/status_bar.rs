use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mode_str = match app.mode {
            Mode::Normal => "NORMAL",
            Mode::Menu => "MENU",
            Mode::Help => "HELP",
        };

        let section_str = app
            .current_section_index()
            .and_then(|i| app.page.sections.get(i))
            .map(|s| s.title.as_str())
            .unwrap_or("-");

        let scroll = app.animator.current_scroll();
        let max = app.max_scroll();
        let percent = if max > 0.0 {
            ((scroll / max) * 100.0).round() as u32
        } else {
            100
        };

        let top_hint = if app.top_button.is_active() {
            " [t]op"
        } else {
            ""
        };

        let status_text = if let Some(msg) = &app.status_message {
            msg.clone()
        } else {
            format!(
                " {} | {} | row {:.0}/{:.0} ({}%){}",
                mode_str, section_str, scroll, app.page.total_height, percent, top_hint
            )
        };

        let help_hint = " q:quit j/k:scroll Tab:section m:menu ?:help ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(theme.grey).bg(theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
