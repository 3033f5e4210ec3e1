// SPDX-License-Identifier: MPL-2.0
//! Headless player: plays a playlist file or directory, driven from stdin.

use reel_player::config;
use reel_player::infrastructure::{self, HeadlessElement};
use reel_player::player::{self, Command, PlaybackSnapshot};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
reel_player - headless playlist player

USAGE:
  reel_player [OPTIONS] PLAYLIST

ARGS:
  PLAYLIST            TOML playlist file or a directory of media

OPTIONS:
  --config FILE       Settings file (default: platform config dir)
  --autoplay          Start playing every item as soon as it is loaded
  -h, --help          Print this help

COMMANDS (stdin):
  play | pause | toggle | stop | next | prev
  seek SECS | select INDEX | volume LEVEL | mute | fullscreen
  status | quit
";

#[derive(Debug)]
struct Args {
    config: Option<PathBuf>,
    autoplay: bool,
    playlist: PathBuf,
}

fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Args>, pico_args::Error> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let parsed = Args {
        config: args.opt_value_from_str("--config")?,
        autoplay: args.contains("--autoplay"),
        playlist: args.free_from_str()?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        warn!(?rest, "ignoring unused arguments");
    }
    Ok(Some(parsed))
}

/// What a line typed on stdin asks for.
#[derive(Debug, Clone, PartialEq)]
enum Input {
    Command(Command),
    Status,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    let mut words = line.split_whitespace();
    let verb = words.next()?.to_lowercase();
    let argument = words.next();

    let command = match verb.as_str() {
        "play" => Command::Play,
        "pause" => Command::Pause,
        "toggle" | "p" => Command::PlayPause,
        "stop" => Command::Stop,
        "next" | "n" => Command::Next,
        "prev" | "previous" => Command::Prev,
        "seek" => Command::Seek(argument?.parse().ok()?),
        "select" => Command::Select(argument?.parse().ok()?),
        "volume" => Command::SetVolume(argument?.parse().ok()?),
        "mute" => Command::ToggleMute,
        "fullscreen" => Command::RequestFullscreen,
        "status" => return Some(Input::Status),
        "quit" | "exit" | "q" => return Some(Input::Quit),
        _ => return None,
    };
    Some(Input::Command(command))
}

fn status_line(snapshot: &PlaybackSnapshot) -> String {
    let index = snapshot
        .current_index
        .map_or_else(|| "-".to_string(), |index| index.to_string());
    format!(
        "[{index}] {:?} {}/{} vol {:.2}{}{}",
        snapshot.transport,
        snapshot.elapsed_text,
        snapshot.duration_text,
        snapshot.volume,
        if snapshot.is_muted { " muted" } else { "" },
        if snapshot.is_transitioning { " ~" } else { "" },
    )
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reel_player=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let args = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    let (config, warning) = match &args.config {
        Some(path) => config::load_or_default(path),
        None => config::load(),
    };
    if let Some(warning) = warning {
        warn!("{warning}");
    }

    let playlist = match infrastructure::open(&args.playlist) {
        Ok(playlist) => playlist,
        Err(err) => {
            error!(%err, "cannot open playlist");
            return ExitCode::FAILURE;
        }
    };
    info!(
        path = %args.playlist.display(),
        items = playlist.len(),
        "playlist opened"
    );

    let mut settings = config.playback_settings();
    if args.autoplay {
        settings.autoplay = true;
    }
    let (handle, task) = player::spawn(playlist, HeadlessElement::new(), settings, config.volume());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                error!(%err, "cannot read stdin");
                break;
            }
        };
        match parse_input(&line) {
            Some(Input::Command(command)) => {
                if let Err(err) = handle.send(command).await {
                    error!(%err, "player stopped");
                    break;
                }
            }
            Some(Input::Status) => println!("{}", status_line(&handle.snapshot())),
            Some(Input::Quit) => break,
            None if line.trim().is_empty() => {}
            None => println!("unknown command: {}", line.trim()),
        }
    }

    if let Err(err) = handle.shutdown().await {
        warn!(%err, "player already stopped");
    }
    if let Err(err) = task.await {
        error!(%err, "player task failed");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn args(list: &[&str]) -> pico_args::Arguments {
        pico_args::Arguments::from_vec(list.iter().map(OsString::from).collect())
    }

    #[test]
    fn parses_options_and_playlist() {
        let parsed = parse_args(args(&["--config", "s.toml", "--autoplay", "list.toml"]))
            .expect("valid arguments")
            .expect("not help");
        assert_eq!(parsed.config, Some(PathBuf::from("s.toml")));
        assert!(parsed.autoplay);
        assert_eq!(parsed.playlist, PathBuf::from("list.toml"));
    }

    #[test]
    fn help_short_circuits() {
        assert!(parse_args(args(&["--help"])).expect("help").is_none());
    }

    #[test]
    fn missing_playlist_is_an_error() {
        assert!(parse_args(args(&["--autoplay"])).is_err());
    }

    #[test]
    fn parses_stdin_commands() {
        assert_eq!(parse_input("next"), Some(Input::Command(Command::Next)));
        assert_eq!(
            parse_input("  SEEK 12.5 "),
            Some(Input::Command(Command::Seek(12.5)))
        );
        assert_eq!(
            parse_input("select 2"),
            Some(Input::Command(Command::Select(2)))
        );
        assert_eq!(parse_input("q"), Some(Input::Quit));
        assert_eq!(parse_input("seek"), None);
        assert_eq!(parse_input("select x"), None);
        assert_eq!(parse_input("dance"), None);
    }

    #[test]
    fn status_line_shows_position() {
        let line = status_line(&PlaybackSnapshot::default());
        assert_eq!(line, "[-] Stopped 0:00/0:00 vol 1.00 muted");
    }
}
