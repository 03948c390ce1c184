// rustpn: Postfix Expression Calculator with Live Stack Visualization

mod eval;
mod stack;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use stack::DEFAULT_CAPACITY;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        let program_name = args.get(0).map(|s| s.as_str()).unwrap_or("rustpn");
        eprintln!("Error: Expected at most one expression argument");
        eprintln!();
        eprintln!("Usage: {} [EXPRESSION]", program_name);
        eprintln!();
        eprintln!("Examples:");
        eprintln!(
            "  {}                  # Open the interactive stack workbench",
            program_name
        );
        eprintln!(
            "  {} '23*54*+9-'      # Evaluate one expression and print the result",
            program_name
        );
        eprintln!();
        eprintln!("Expressions use single-digit operands and the operators + - * /.");
        std::process::exit(1);
    }

    // One-shot mode: evaluate the argument and print the result
    if let Some(expr) = args.get(1) {
        match eval::evaluate(expr) {
            Ok(evaluation) => {
                if evaluation.has_leftover() {
                    let extras: Vec<String> =
                        evaluation.leftover.iter().map(|v| v.to_string()).collect();
                    eprintln!("Warning: ignored extra operands: {}", extras.join(" "));
                }
                println!("= {}", evaluation.value);
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(DEFAULT_CAPACITY);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
