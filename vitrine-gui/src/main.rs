use std::{error::Error, process, str::FromStr};

use iced::{Settings, Size};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

use vitrine_gui::{gui::App, logger, VERSION};
use vitrine_ui::{component::text, font, theme};

#[derive(Debug, PartialEq)]
enum Arg {
    LogLevel(LevelFilter),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: vitrine-gui [OPTIONS]

Options:
    --log-level <LEVEL>    Verbosity of the logs (error, warn, info, debug, trace)
    -v, --version          Display vitrine-gui version
    -h, --help             Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--log-level" {
            if let Some(level) = args.get(i + 1) {
                res.push(Arg::LogLevel(LevelFilter::from_str(level)?));
            } else {
                return Err("missing arg to --log-level".into());
            }
        } else if i > 0 && arg.starts_with("--") {
            return Err(format!("unknown option: {}", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let log_level = match args.as_slice() {
        [] => {
            if let Ok(level) = std::env::var("LOG_LEVEL") {
                LevelFilter::from_str(&level)?
            } else {
                LevelFilter::INFO
            }
        }
        [Arg::LogLevel(level)] => *level,
        _ => {
            return Err("Unknown args combination".into());
        }
    };
    logger::setup_logger(log_level)?;

    let settings = Settings {
        id: Some("Vitrine".to_string()),
        antialiasing: true,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 1200.0,
            height: 800.0,
        },
        min_size: Some(Size {
            width: 800.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .subscription(App::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(App::new)
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["vitrine-gui".into(), "--log-level".into()]).is_err());
        assert!(parse_args(vec![
            "vitrine-gui".into(),
            "--log-level".into(),
            "verbose".into()
        ])
        .is_err());
        assert!(parse_args(vec!["vitrine-gui".into(), "--meth".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::LogLevel(LevelFilter::DEBUG)]),
            parse_args(vec![
                "vitrine-gui".into(),
                "--log-level".into(),
                "debug".into()
            ])
            .ok()
        );
        assert_eq!(Some(vec![]), parse_args(vec!["vitrine-gui".into()]).ok());
    }
}
