//! Operand stack pane rendering
//!
//! Renders the session stack from top to bottom. The top element carries a
//! marker, every slot shows its index, and the pane title tracks depth
//! against capacity.

use crate::stack::BoundedStack;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Scroll state for the stack pane
pub struct StackScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

impl StackScrollState {
    pub fn new() -> Self {
        StackScrollState {
            offset: 0,
            prev_item_count: 0,
        }
    }
}

impl Default for StackScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the operand stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    stack: &BoundedStack,
    is_focused: bool,
    scroll_state: &mut StackScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(
            " Operand Stack ({}/{}) ",
            stack.len(),
            stack.capacity()
        ))
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut all_items = Vec::new();

    if stack.is_empty() {
        all_items.push(ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
    } else {
        let depth = stack.len();
        for (row, value) in stack.iter_top_down().enumerate() {
            // Slot indices count from the bottom, matching push order.
            let slot = depth - 1 - row;
            let marker = if row == 0 {
                Span::styled(
                    "top → ",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("      ")
            };

            let line = Line::from(vec![
                marker,
                Span::styled(
                    format!("[{:>3}] ", slot),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(
                    value.to_string(),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ]);
            all_items.push(ListItem::new(line));
        }
    }

    // Calculate visible range for scrolling
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Smart auto-scroll: new elements appear at the top of the listing, so
    // jump back to the top whenever the stack grows.
    if total_items > scroll_state.prev_item_count {
        scroll_state.offset = 0;
    } else if total_items > visible_height {
        // Content same or shrank, respect the user's scroll position (just clamp)
        let max_scroll = total_items - visible_height;
        scroll_state.offset = scroll_state.offset.min(max_scroll);
    } else {
        scroll_state.offset = 0;
    }

    // Update previous item count for next render
    scroll_state.prev_item_count = total_items;

    // Take only visible items
    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
