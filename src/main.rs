use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use fourline::input::map_key;
use fourline::tournament::{Flow, Tournament, TournamentConfig};
use fourline::{build_info, ui};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "fourline {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Fourline - Terminal Connect Four Tournament\n");
                println!("Usage: fourline\n");
                println!("Four players face each other in a round-robin; every pairing");
                println!("plays one match and wins are tallied on the final screen.\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'fourline --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Roster is fixed for the tournament's lifetime; the controller only
    // ever borrows it.
    let config = TournamentConfig::default_roster();
    let mut tournament = Tournament::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // One frame per state change; the read blocks until the next key.
    loop {
        terminal.draw(|frame| ui::draw(frame, &tournament))?;

        let Event::Key(key) = event::read()? else {
            // Resize and similar events just trigger a redraw.
            continue;
        };

        if let Flow::Exit = tournament.handle(map_key(key)) {
            break;
        }
    }

    // Cleanup terminal. Quit and normal completion both land here; either
    // way the process exits cleanly.
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    println!("Thanks for playing!");

    Ok(())
}
