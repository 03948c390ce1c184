//! Activity log pane rendering

use crate::ui::app::{LogEntry, LogKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the activity log pane
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    entries: &[LogEntry],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Activity Log ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if entries.is_empty() {
        let paragraph = Paragraph::new("(no activity)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));

    // Build all items, colored by severity
    let all_items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let color = match entry.kind {
                LogKind::Info => DEFAULT_THEME.fg,
                LogKind::Success => DEFAULT_THEME.success,
                LogKind::Warning => DEFAULT_THEME.secondary,
                LogKind::Error => DEFAULT_THEME.error,
            };
            ListItem::new(entry.text.as_str()).style(Style::default().fg(color))
        })
        .collect();

    // Calculate visible range for scrolling
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area. Appending
    // sets the offset to usize::MAX, which clamps to the bottom here.
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    // Take only visible items
    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
