//! Status bar rendering with keybindings and state indicators

use crate::ui::app::LogKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    /// Outcome of the most recent operation
    pub message: &'a str,
    /// Severity used to color the message and the depth chip
    pub kind: LogKind,
    /// Session stack depth and capacity
    pub depth: usize,
    pub capacity: usize,
    /// `(label, buffer)` while a prompt is capturing keystrokes
    pub prompt: Option<(&'a str, &'a str)>,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(50),
            ratatui::layout::Constraint::Percentage(50),
        ])
        .split(area);

    let is_error = matches!(data.kind, LogKind::Error);

    // Left side: depth chip plus either the active prompt or the last message
    let chip_bg = if is_error {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.primary
    };

    let mut left_spans = vec![
        Span::styled(
            format!(" Stack {}/{} ", data.depth, data.capacity),
            Style::default()
                .bg(chip_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
    ];

    if let Some((label, buffer)) = data.prompt {
        left_spans.push(Span::styled(
            format!(" {}{}", label, buffer),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.secondary),
        ));
        left_spans.push(Span::styled(
            "▌",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.secondary),
        ));
    } else {
        let message_fg = match data.kind {
            LogKind::Info => DEFAULT_THEME.fg,
            LogKind::Success => DEFAULT_THEME.success,
            LogKind::Warning => DEFAULT_THEME.secondary,
            LogKind::Error => DEFAULT_THEME.error,
        };
        left_spans.push(Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(message_fg),
        ));
    }

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = if data.prompt.is_some() {
        vec![
            Span::styled(" ↵ ", key_style),
            Span::styled(" commit ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" Esc ", key_style),
            Span::styled(" cancel ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(
                " ⌨ INPUT ",
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
        ]
    } else {
        vec![
            Span::styled(" p ", key_style),
            Span::styled(" push ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" o ", key_style),
            Span::styled(" pop ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" t ", key_style),
            Span::styled(" peek ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" e ", key_style),
            Span::styled(" eval ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" c ", key_style),
            Span::styled(" clear ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ⇥ ", key_style),
            Span::styled(" focus ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled("q", key_style),
            Span::styled(" quit ", desc_style),
        ]
    };

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
