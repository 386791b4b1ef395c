mod ui;

use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use flappy::build_info;
use flappy::core::{GameConfig, GameSession};
use flappy::input::{is_interrupt, InputTranslator};
use flappy::logging;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use ui::draw_ui;

/// Options gathered from the command line.
#[derive(Debug, Default, PartialEq, Eq)]
struct CliOptions {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    print_config: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum CliAction {
    Run(CliOptions),
    Help,
    Version,
}

fn print_usage() {
    println!("Flappy - Terminal Flappy Bird\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --config <path>  Load geometry/timing overrides from a JSON file");
    println!("  --seed <n>       Seed obstacle placement for a repeatable run");
    println!("  --print-config   Print the effective configuration and exit");
    println!("  --version        Show version information");
    println!("  --help           Show this help message");
    println!("\nControls: Enter start/restart, Space/Up flap, Esc quit");
}

fn parse_args(args: &[String]) -> Result<CliAction, String> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--help" | "-h" => return Ok(CliAction::Help),
            "--version" | "-v" => return Ok(CliAction::Version),
            "--print-config" => options.print_config = true,
            "--config" => {
                let path = iter.next().ok_or("--config needs a path")?;
                options.config_path = Some(PathBuf::from(path));
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a number")?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(CliAction::Run(options))
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match parse_args(&args) {
        Ok(CliAction::Run(options)) => options,
        Ok(CliAction::Help) => {
            print_usage();
            std::process::exit(0);
        }
        Ok(CliAction::Version) => {
            println!("{}", build_info::version_line());
            std::process::exit(0);
        }
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("Run 'flappy --help' for usage.");
            std::process::exit(1);
        }
    };

    let log_path = logging::init();

    let loaded = match &options.config_path {
        Some(path) => GameConfig::load(path),
        None => GameConfig::load_or_default(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if options.print_config {
        println!("{}", config.to_json());
        std::process::exit(0);
    }

    if let Some(path) = &log_path {
        log::info!("{} logging to {}", build_info::version_line(), path.display());
    }

    let mut session = GameSession::with_seed(config, options.seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let release_events = cfg!(windows) || supports_keyboard_enhancement().unwrap_or(false);
    if release_events && !cfg!(windows) {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    log::info!("Key release events: {}", release_events);

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session, InputTranslator::new(release_events));

    // Restore terminal on every path
    if release_events && !cfg!(windows) {
        let _ = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags);
    }
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show);
    let _ = disable_raw_mode();

    if let Err(e) = &result {
        log::error!("Terminal error: {}", e);
    }
    result
}

/// Main loop: draw, wait for input until the next tick is due, advance.
fn run<R: rand::Rng>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut GameSession<R>,
    mut translator: InputTranslator,
) -> io::Result<()> {
    let clock = Instant::now();
    let mut last_advance = Instant::now();

    loop {
        terminal.draw(|frame| {
            draw_ui(frame, session.mode(), &session.snapshot(), session.config());
        })?;

        let timeout = Duration::from_millis(session.time_until_next_tick_ms());
        if event::poll(timeout)? {
            // Drain everything that is already waiting
            loop {
                if let Event::Key(key) = event::read()? {
                    if is_interrupt(&key) {
                        log::info!("Interrupted");
                        return Ok(());
                    }
                    let now_ms = clock.elapsed().as_millis() as u64;
                    if let Some(input) = translator.translate(key, now_ms) {
                        session.queue_input(input);
                    }
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if let Some(release) = translator.poll_release(clock.elapsed().as_millis() as u64) {
            session.queue_input(release);
        }

        // Carry sub-millisecond remainders into the next frame
        let elapsed_ms = last_advance.elapsed().as_millis() as u64;
        last_advance += Duration::from_millis(elapsed_ms);

        for event in session.advance(elapsed_ms) {
            event.log();
        }

        if session.is_quit_requested() {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_runs_with_defaults() {
        assert_eq!(
            parse_args(&[]),
            Ok(CliAction::Run(CliOptions::default()))
        );
    }

    #[test]
    fn test_config_and_seed() {
        let action = parse_args(&args(&["--config", "my.json", "--seed", "42"])).unwrap();
        assert_eq!(
            action,
            CliAction::Run(CliOptions {
                config_path: Some(PathBuf::from("my.json")),
                seed: Some(42),
                print_config: false,
            })
        );
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse_args(&args(&["-h"])), Ok(CliAction::Help));
        assert_eq!(parse_args(&args(&["--version"])), Ok(CliAction::Version));
    }

    #[test]
    fn test_bad_arguments() {
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["--fly"])).is_err());
    }

    #[test]
    fn test_print_config_flag() {
        let action = parse_args(&args(&["--print-config"])).unwrap();
        assert!(matches!(action, CliAction::Run(CliOptions { print_config: true, .. })));
    }
}
