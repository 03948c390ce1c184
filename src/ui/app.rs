//! Main TUI application state and logic

use crate::eval::Evaluator;
use crate::stack::BoundedStack;
use crate::ui::panes::{StackScrollState, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Log,
    Stack,
}

impl FocusedPane {
    /// Move focus to the next pane
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Log => FocusedPane::Stack,
            FocusedPane::Stack => FocusedPane::Log,
        }
    }
}

/// Which prompt is capturing keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Idle,
    Push,
    Evaluate,
}

impl InputMode {
    /// Prompt label shown in the status bar while capturing input
    fn label(self) -> &'static str {
        match self {
            InputMode::Idle => "",
            InputMode::Push => "Push value: ",
            InputMode::Evaluate => "Postfix expression: ",
        }
    }
}

/// Severity of an activity log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Info,
    Success,
    Warning,
    Error,
}

/// One line in the activity log
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub kind: LogKind,
    pub text: String,
}

/// The main application state
pub struct App {
    /// The session stack driven by the push/pop/peek keys
    pub stack: BoundedStack,

    /// Evaluator for postfix expressions
    pub evaluator: Evaluator,

    /// Activity log entries, oldest first
    pub log: Vec<LogEntry>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub log_scroll: usize,
    pub stack_scroll: StackScrollState,

    /// Which prompt is capturing keystrokes (Idle = none)
    pub input_mode: InputMode,

    /// Text typed into the active prompt
    pub input_buffer: String,

    /// Status message to display
    pub status_message: String,

    /// Severity of the status message
    pub status_kind: LogKind,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new app with a session stack of the given capacity
    pub fn new(capacity: usize) -> Self {
        App {
            stack: BoundedStack::new(capacity),
            evaluator: Evaluator::with_capacity(capacity),
            log: Vec::new(),
            focused_pane: FocusedPane::Stack,
            log_scroll: 0,
            stack_scroll: StackScrollState::new(),
            input_mode: InputMode::Idle,
            input_buffer: String::new(),
            status_message: String::from("Ready!"),
            status_kind: LogKind::Info,
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Layout: two panes side by side, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        super::panes::render_log_pane(
            frame,
            columns[0],
            &self.log,
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        super::panes::render_stack_pane(
            frame,
            columns[1],
            &self.stack,
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        let prompt = if self.input_mode == InputMode::Idle {
            None
        } else {
            Some((self.input_mode.label(), self.input_buffer.as_str()))
        };

        super::panes::render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                message: &self.status_message,
                kind: self.status_kind,
                depth: self.stack.len(),
                capacity: self.stack.capacity(),
                prompt,
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input_mode != InputMode::Idle {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.input_mode = InputMode::Push;
                self.input_buffer.clear();
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.input_mode = InputMode::Evaluate;
                self.input_buffer.clear();
            }
            KeyCode::Char('o') | KeyCode::Char('O') => {
                self.pop_top();
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.peek_top();
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.clear_stack();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Log => {
                    if self.log_scroll > 0 {
                        self.log_scroll = self.log_scroll.saturating_sub(1);
                    }
                }
                FocusedPane::Stack => {
                    if self.stack_scroll.offset > 0 {
                        self.stack_scroll.offset = self.stack_scroll.offset.saturating_sub(1);
                    }
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Log => {
                    self.log_scroll = self.log_scroll.saturating_add(1);
                }
                FocusedPane::Stack => {
                    self.stack_scroll.offset = self.stack_scroll.offset.saturating_add(1);
                }
            },
            _ => {}
        }
    }

    /// Handle a key press while a prompt is active
    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.submit_prompt();
            }
            KeyCode::Esc => {
                self.input_mode = InputMode::Idle;
                self.input_buffer.clear();
                self.status_message = "Cancelled".to_string();
                self.status_kind = LogKind::Info;
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    /// Commit the active prompt and perform its operation
    fn submit_prompt(&mut self) {
        let mode = self.input_mode;
        self.input_mode = InputMode::Idle;
        let input = std::mem::take(&mut self.input_buffer);

        match mode {
            InputMode::Idle => {}
            InputMode::Push => self.push_value(input.trim()),
            InputMode::Evaluate => self.evaluate_expression(&input),
        }
    }

    /// Parse the prompt input and push it onto the session stack
    fn push_value(&mut self, input: &str) {
        match input.parse::<i64>() {
            Ok(value) => match self.stack.push(value) {
                Ok(()) => {
                    self.push_log(LogKind::Success, format!("Pushed {}", value));
                }
                Err(e) => {
                    self.push_log(LogKind::Error, e.to_string());
                }
            },
            Err(_) => {
                self.push_log(LogKind::Error, format!("Not an integer: '{}'", input));
            }
        }
    }

    /// Evaluate a postfix expression and report the outcome
    fn evaluate_expression(&mut self, expr: &str) {
        match self.evaluator.evaluate(expr) {
            Ok(evaluation) => {
                self.push_log(
                    LogKind::Success,
                    format!("{} = {}", expr.trim(), evaluation.value),
                );
                if evaluation.has_leftover() {
                    let extras: Vec<String> =
                        evaluation.leftover.iter().map(|v| v.to_string()).collect();
                    self.push_log(
                        LogKind::Warning,
                        format!("Ignored extra operands: {}", extras.join(" ")),
                    );
                }
            }
            Err(e) => {
                self.push_log(LogKind::Error, e.to_string());
            }
        }
    }

    /// Pop the top of the session stack
    fn pop_top(&mut self) {
        match self.stack.pop() {
            Ok(value) => {
                self.push_log(LogKind::Success, format!("Popped {}", value));
            }
            Err(e) => {
                self.push_log(LogKind::Error, e.to_string());
            }
        }
    }

    /// Peek at the top of the session stack without removing it
    fn peek_top(&mut self) {
        match self.stack.peek() {
            Ok(value) => {
                self.push_log(LogKind::Info, format!("Top of stack: {}", value));
            }
            Err(e) => {
                self.push_log(LogKind::Error, e.to_string());
            }
        }
    }

    /// Re-initialize the session stack
    fn clear_stack(&mut self) {
        let depth = self.stack.len();
        self.stack.clear();
        self.push_log(LogKind::Info, format!("Cleared {} value(s)", depth));
    }

    /// Append an entry to the activity log and mirror it in the status bar
    fn push_log(&mut self, kind: LogKind, text: String) {
        self.status_message = text.clone();
        self.status_kind = kind;
        self.log.push(LogEntry { kind, text });
        // Keep the log pinned to the newest entry
        self.log_scroll = usize::MAX;
    }
}
