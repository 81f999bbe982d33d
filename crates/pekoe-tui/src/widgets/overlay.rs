use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

/// Fullscreen section menu. While it is open the page behind it does
/// not scroll; picking an entry closes the menu and animates there.
pub struct MenuOverlayWidget;

impl MenuOverlayWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();

        let width = 40u16.min(area.width.saturating_sub(4));
        let height = (app.page.sections.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(width, height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Sections ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let current = app.current_section_index();
        let mut lines: Vec<Line> = app
            .page
            .sections
            .iter()
            .enumerate()
            .map(|(i, section)| {
                let style = if current == Some(i) {
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.fg0)
                };
                Line::from(vec![
                    Span::styled(format!("  {}  ", i + 1), Style::default().fg(theme.grey)),
                    Span::styled(section.title.clone(), style),
                ])
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "1-9:go  Esc/m:close",
                Style::default().fg(theme.grey),
            ))
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Help overlay listing the active key bindings
pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();

        let entries: &[(&str, &str)] = &[
            ("j / k", "scroll down / up"),
            ("Ctrl-d / Ctrl-u", "half page down / up"),
            ("Ctrl-f / Ctrl-b", "full page down / up"),
            ("gg / G", "jump to top / bottom"),
            ("Tab / Shift-Tab", "next / previous section"),
            ("1-9", "go to section"),
            ("t", "animate back to top"),
            ("m", "section menu"),
            ("o", "opening hours"),
            ("q", "quit"),
        ];

        let width = 46u16.min(area.width.saturating_sub(4));
        let height = (entries.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(width, height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.title))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let mut lines: Vec<Line> = entries
            .iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<16}", key),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(theme.fg0)),
                ])
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(
            Line::from(Span::styled(
                "press any key to close",
                Style::default().fg(theme.grey),
            ))
            .alignment(Alignment::Center),
        );

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Expanded hours accordion, drawn as a panel anchored above the
/// status bar so the page grid underneath keeps its row positions.
pub struct HoursPanelWidget;

impl HoursPanelWidget {
    pub fn render(frame: &mut Frame, content_area: Rect, app: &App) {
        let Some(panel) = app.page.hours_panel.as_ref() else {
            return;
        };
        let theme = &app.theme;

        let width = 36u16.min(content_area.width.saturating_sub(2));
        let height = (panel.lines.len() as u16 + 2).min(content_area.height);
        let x = content_area.x + content_area.width.saturating_sub(width + 1);
        let y = content_area.y + content_area.height.saturating_sub(height);
        let panel_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, panel_area);

        let block = Block::default()
            .title(" Opening hours ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.warning))
            .style(Style::default().bg(theme.bg1));
        let inner = block.inner(panel_area);
        frame.render_widget(block, panel_area);

        let lines: Vec<Line> = panel
            .lines
            .iter()
            .map(|l| Line::from(Span::styled(l.clone(), Style::default().fg(theme.fg1))))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
