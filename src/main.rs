mod app;
mod clock;
mod command;
mod config;
mod consts;
mod game;
mod highscores;
mod input;
mod render;
mod speed;
mod util;
mod warning;
use crate::app::App;
use crate::clock::Accumulator;
use crate::config::Config;
use crate::game::Game;
use crate::highscores::{BestScore, ErrorChain};
use crate::input::SwipeTracker;
use crate::warning::Warning;
use anyhow::Context;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use lexopt::{Arg, Parser, ValueExt};
use simplelog::{LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Clone, Debug, Eq, PartialEq)]
enum Cli {
    Run(Arguments),
    Help,
    Version,
}

impl Cli {
    fn from_parser(mut parser: Parser) -> Result<Cli, lexopt::Error> {
        let mut args = Arguments::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    args.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => {
                    args.log_file = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-level") => {
                    args.log_level = parser.value()?.parse()?;
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Cli::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Cli::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Cli::Run(args))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct Arguments {
    /// Configuration file to use instead of the default one
    config: Option<PathBuf>,
    log_file: Option<PathBuf>,
    log_level: LevelFilter,
}

impl Default for Arguments {
    fn default() -> Arguments {
        Arguments {
            config: None,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl Arguments {
    fn run(self) -> anyhow::Result<ExitCode> {
        if let Some(ref path) = self.log_file {
            let file = fs_err::File::create(path).context("failed to open log file")?;
            WriteLogger::init(self.log_level, simplelog::Config::default(), file)
                .context("failed to initialize logging")?;
        }
        log::info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        let config = match self.config {
            Some(ref path) => Config::load(path, false),
            None => Config::default_path().and_then(|p| Config::load(&p, true)),
        }
        .context("failed to load configuration")?;
        log::debug!("Loaded configuration: {config:?}");
        let (best, warning) = match config.load_best_score() {
            Ok(best) => (best, None),
            Err(e) => {
                log::warn!("{}; the best score will not be saved", ErrorChain(&e));
                (BestScore::in_memory(), Some(Warning::storage_unavailable(&e)))
            }
        };
        let game = Game::new(config.game.grid, config.speed, best);
        let app = App::new(
            game,
            Accumulator::new(config.clock.max_catch_up_ticks),
            config.colors.palette,
            SwipeTracker::new(config.input.swipe_threshold),
            warning,
        );
        let terminal = ratatui::init();
        let r = crossterm::execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)
            .and_then(|()| app.run(terminal));
        let _ = crossterm::execute!(io::stdout(), DisableFocusChange, DisableMouseCapture);
        ratatui::restore();
        Ok(io_exit(r))
    }
}

fn main() -> ExitCode {
    let cli = match Cli::from_parser(Parser::from_env()) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}: {e}", env!("CARGO_PKG_NAME"));
            return ExitCode::from(2);
        }
    };
    match cli {
        Cli::Run(args) => match args.run() {
            Ok(code) => code,
            Err(e) => {
                log::error!("{e:#}");
                eprintln!("{}: {e:#}", env!("CARGO_PKG_NAME"));
                ExitCode::from(2)
            }
        },
        Cli::Help => {
            println!("Usage: {} [<options>]", env!("CARGO_PKG_NAME"));
            println!();
            println!("Play snake in your terminal");
            println!();
            println!("Options:");
            println!("  -c, --config <FILE>   Read configuration from <FILE>");
            println!("      --log-file <FILE> Write log messages to <FILE>");
            println!("      --log-level <LEVEL>");
            println!("                        Log messages at <LEVEL> and above [default: info]");
            println!("  -h, --help            Display this help message and exit");
            println!("  -V, --version         Show the program version and exit");
            ExitCode::SUCCESS
        }
        Cli::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(args: &[&str]) -> Result<Cli, lexopt::Error> {
        Cli::from_parser(Parser::from_iter(
            std::iter::once("adaptasnake").chain(args.iter().copied()),
        ))
    }

    #[test]
    fn no_args() {
        assert_eq!(parse(&[]).unwrap(), Cli::Run(Arguments::default()));
    }

    #[test]
    fn all_args() {
        assert_eq!(
            parse(&[
                "-c",
                "snake.toml",
                "--log-file",
                "snake.log",
                "--log-level",
                "debug"
            ])
            .unwrap(),
            Cli::Run(Arguments {
                config: Some(PathBuf::from("snake.toml")),
                log_file: Some(PathBuf::from("snake.log")),
                log_level: LevelFilter::Debug,
            })
        );
    }

    #[test]
    fn long_config() {
        assert_eq!(
            parse(&["--config=other.toml"]).unwrap(),
            Cli::Run(Arguments {
                config: Some(PathBuf::from("other.toml")),
                ..Arguments::default()
            })
        );
    }

    #[rstest]
    #[case(&["-h"], Cli::Help)]
    #[case(&["--help"], Cli::Help)]
    #[case(&["-V"], Cli::Version)]
    #[case(&["--version", "--bogus"], Cli::Version)]
    fn info_flags(#[case] args: &[&str], #[case] cli: Cli) {
        assert_eq!(parse(args).unwrap(), cli);
    }

    #[rstest]
    #[case(&["--bogus"])]
    #[case(&["--log-level", "chatty"])]
    #[case(&["--config"])]
    #[case(&["extra"])]
    fn bad_args(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }
}
