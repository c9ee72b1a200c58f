use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dice_calculator::calculator::{process_form_input, CalculatorScreen, FormInput, FormResult};
use dice_calculator::simulator::{simulate, SimOptions, SimReport, SimulationConfig};
use dice_calculator::ui::draw_calculator;
use dice_calculator::utils::build_info;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::thread::JoinHandle;
use std::time::Duration;

/// A simulation running off the UI thread, tagged with the submit it belongs to.
struct PendingRun {
    generation: u64,
    handle: JoinHandle<SimReport>,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Dice Calculator - Monte Carlo dice probabilities\n");
                println!("Usage: dice_calculator [--version | --help]\n");
                println!("Answer the questions, press enter on the last one to roll.");
                println!("Keys: <enter>/<tab>/<down> next, <shift+tab>/<up> previous,");
                println!("      <r> restart, <q> or <ctrl+c> quit");
                println!();
                println!("For scripted runs use the `simulate` binary.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'dice_calculator --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let mut screen = CalculatorScreen::with_saved_config();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut screen);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    screen: &mut CalculatorScreen,
) -> io::Result<()> {
    let mut pending: Option<PendingRun> = None;

    loop {
        if let Some(run) = pending.take() {
            if run.handle.is_finished() {
                match run.handle.join() {
                    Ok(report) => {
                        screen.finish(run.generation, report);
                    }
                    Err(_) => {
                        screen.status =
                            Some("Simulation stopped unexpectedly, press r to restart".to_string());
                    }
                }
            } else {
                pending = Some(run);
            }
        }

        terminal.draw(|frame| draw_calculator(frame, screen))?;

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                match process_form_input(screen, FormInput::from_key_event(key_event)) {
                    FormResult::Submitted(config) => {
                        screen.remember(&config);
                        pending = Some(PendingRun {
                            generation: screen.generation,
                            handle: spawn_simulation(config),
                        });
                    }
                    FormResult::Restarted => {
                        // The thread runs to completion on its own; its result is ignored
                        pending = None;
                    }
                    FormResult::Quit => break,
                    FormResult::Continue => {}
                }
            }
        }
    }

    Ok(())
}

fn spawn_simulation(config: SimulationConfig) -> JoinHandle<SimReport> {
    std::thread::spawn(move || {
        let histogram = simulate(&config, &SimOptions::silent());
        SimReport::from_histogram(&config, &histogram)
    })
}
