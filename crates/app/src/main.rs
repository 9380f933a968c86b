use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use primer_core::model::Course;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCoursePath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCoursePath { raw } => write!(f, "invalid --course value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    course: Arc<Course>,
}

impl UiApp for DesktopApp {
    fn course(&self) -> Arc<Course> {
        Arc::clone(&self.course)
    }
}

struct Args {
    course_path: Option<PathBuf>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--course <course_json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  the built-in calling-conventions course");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PRIMER_COURSE  path to a course JSON file (overridden by --course)");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut course_path = std::env::var("PRIMER_COURSE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--course" => {
                    let value = require_value(args, "--course")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCoursePath { raw: value });
                    }
                    course_path = Some(PathBuf::from(value));
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { course_path })
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Resolve the course before the window exists so a bad course file
    // fails fast on stderr instead of inside the UI.
    let course = match parsed.course_path.as_deref() {
        Some(path) => content::load_course(path)?,
        None => content::embedded_course()?,
    };

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        course: Arc::new(course),
    });
    let context = build_app_context(&app);

    // Dioxus/tao can come up always-on-top on macOS in some dev setups;
    // turn it off so the window stacks like any other.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Calling Conventions Primer")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
