use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use pekoe_core::page::{Block, BlockRole};

use crate::app::App;
use crate::theme::Theme;

/// Scrolling view over the page content. Blocks are laid out on the
/// page's own row grid; this widget draws the slice of that grid that
/// the current scroll offset puts inside the viewport.
pub struct PageViewWidget;

impl PageViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let scroll = app.animator.current_scroll();
        let viewport = area.height as f64;

        frame.render_widget(
            Paragraph::new("").style(Style::default().bg(app.theme.bg0)),
            area,
        );

        for idx in app.page.blocks_in_view(scroll, viewport) {
            let block = &app.page.blocks[idx];
            let style = block_style(block, &app.theme);

            for (line_no, text) in block.lines.iter().enumerate() {
                let page_row = block.top + line_no as f64;
                let screen_row = page_row - scroll;
                if screen_row < 0.0 || screen_row >= viewport {
                    continue;
                }

                let y = area.y + screen_row as u16;
                let indent = block_indent(block, area.width);
                let line_area = Rect::new(area.x, y, area.width, 1);
                let line = Line::from(vec![
                    Span::raw(" ".repeat(indent)),
                    Span::styled(text.clone(), style),
                ]);
                frame.render_widget(Paragraph::new(line), line_area);
            }
        }
    }
}

/// Style for a block, honoring the reveal classes: animatable blocks
/// start hidden and switch to their role style once the watcher adds
/// the reveal class.
fn block_style(block: &Block, theme: &Theme) -> Style {
    if is_hidden(block) {
        return Style::default().fg(theme.hidden);
    }

    match block.role {
        BlockRole::Hero => Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        BlockRole::SectionTitle => Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        BlockRole::TeaCard | BlockRole::MenuCard => Style::default().fg(theme.card),
        BlockRole::AboutText | BlockRole::StoryText => Style::default().fg(theme.fg1),
        BlockRole::StoryImage => Style::default().fg(theme.accent),
        BlockRole::Plain => Style::default().fg(theme.fg0),
    }
}

/// A block under observation stays hidden until a watcher latches it
fn is_hidden(block: &Block) -> bool {
    block.classes.contains("reveal")
        && !block.classes.contains("active")
        && !block.classes.contains("visible")
}

fn block_indent(block: &Block, width: u16) -> usize {
    match block.role {
        // Titles are centered on the longest line
        BlockRole::Hero | BlockRole::SectionTitle => {
            let longest = block
                .lines
                .iter()
                .map(|l| UnicodeWidthStr::width(l.as_str()))
                .max()
                .unwrap_or(0);
            (width as usize).saturating_sub(longest) / 2
        }
        BlockRole::TeaCard | BlockRole::MenuCard => 4,
        _ => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pekoe_core::page::ClassSet;

    fn block_with_classes(classes: &[&str]) -> Block {
        let mut set = ClassSet::new();
        for c in classes {
            set.add(c);
        }
        Block {
            section: 0,
            role: BlockRole::TeaCard,
            lines: vec!["card".into()],
            top: 0.0,
            height: 1.0,
            classes: set,
        }
    }

    #[test]
    fn test_observed_blocks_hide_until_latched() {
        assert!(is_hidden(&block_with_classes(&["reveal"])));
        assert!(!is_hidden(&block_with_classes(&["reveal", "active"])));
        assert!(!is_hidden(&block_with_classes(&["reveal", "visible"])));
        // Blocks outside the watcher tables are always shown
        assert!(!is_hidden(&block_with_classes(&[])));
    }
}
