use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use dino_blast::app::App;
use dino_blast::build_info;
use dino_blast::constants::INPUT_POLL_MS;
use dino_blast::input::map_key;
use dino_blast::runner::{Tuning, Variant};
use dino_blast::ui;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

struct CliArgs {
    variant: Variant,
    tuning: Option<PathBuf>,
    log: Option<PathBuf>,
    print_tuning: bool,
}

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args);

    let tuning_override = match &cli.tuning {
        Some(path) => match Tuning::load(path) {
            Ok(tuning) => Some(tuning),
            Err(e) => {
                eprintln!("Could not load tuning file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => None,
    };

    if cli.print_tuning {
        let tuning = tuning_override.unwrap_or_else(|| cli.variant.tuning());
        println!("{}", tuning.to_json()?);
        return Ok(());
    }

    if let Some(path) = &cli.log {
        init_logging(path)?;
    }
    info!(version = %build_info::version_line(), "starting");

    let mut app = App::new(cli.variant, tuning_override);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal, even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    if app.best_score > 0 {
        println!("Best score: {}", app.best_score);
    }
    info!(best_score = app.best_score, "exiting");
    Ok(())
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut last_frame = Instant::now();

    while app.running {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                app.handle_input(map_key(key, app.screen));
            }
        }

        // Whole milliseconds only; the remainder stays on the clock
        let elapsed_ms = last_frame.elapsed().as_millis() as u64;
        last_frame += Duration::from_millis(elapsed_ms);
        app.update(elapsed_ms, &mut rng);
    }

    Ok(())
}

/// Route tracing output to a file. The terminal belongs to the game, so
/// nothing is logged unless `--log` is given.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn parse_args(args: &[String]) -> CliArgs {
    let mut cli = CliArgs {
        variant: Variant::Classic,
        tuning: None,
        log: None,
        print_tuning: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--variant" => {
                let value = args.get(i + 1).map(String::as_str).unwrap_or("");
                match Variant::parse(value) {
                    Some(variant) => cli.variant = variant,
                    None => {
                        eprintln!("Unknown variant '{}' (expected classic or sky)", value);
                        std::process::exit(1);
                    }
                }
                i += 1;
            }
            "--tuning" => {
                if let Some(path) = args.get(i + 1) {
                    cli.tuning = Some(PathBuf::from(path));
                    i += 1;
                }
            }
            "--log" => {
                if let Some(path) = args.get(i + 1) {
                    cli.log = Some(PathBuf::from(path));
                    i += 1;
                }
            }
            "--print-tuning" => {
                cli.print_tuning = true;
            }
            "--version" | "-V" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'dino_blast --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn print_help() {
    println!("Dino Blast - jump and shoot your way past the obstacles\n");
    println!("Usage: dino_blast [OPTIONS]\n");
    println!("Options:");
    println!("  --variant <classic|sky>  Variant highlighted on the start menu");
    println!("  --tuning <FILE>          Load gameplay tuning from a JSON file");
    println!("  --print-tuning           Print the active tuning as JSON and exit");
    println!("  --log <FILE>             Write logs to FILE (filter with RUST_LOG)");
    println!("  --version                Show version information");
    println!("  --help                   Show this help message");
    println!();
    println!("Controls: [Space] jump  [A] fire  [R] restart  [Esc] menu  [Q] quit");
}
