use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Sticky header: the page title on the left and the section links on
/// the right, with the section under the header highlighted. Stays in
/// place while the content underneath scrolls.
pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let current = app.current_section_index();

        let mut spans = vec![
            Span::styled(
                format!(" {} ", app.page.title),
                Style::default()
                    .fg(theme.title)
                    .bg(theme.bg1)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ", Style::default().bg(theme.bg1)),
        ];

        for (i, section) in app.page.sections.iter().enumerate() {
            let style = if current == Some(i) {
                Style::default()
                    .fg(theme.accent)
                    .bg(theme.bg1)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg1).bg(theme.bg1)
            };
            spans.push(Span::styled(format!(" {}:{} ", i + 1, section.title), style));
        }

        if app.page.menu_button {
            spans.push(Span::styled(
                " [m]enu ",
                Style::default().fg(theme.grey).bg(theme.bg1),
            ));
        }

        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let pad = (area.width as usize).saturating_sub(used);
        spans.push(Span::styled(
            " ".repeat(pad),
            Style::default().bg(theme.bg1),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
