//! `molscope` command-line shell: generates a molecule from a notation
//! string and prints one composed frame (JSON) or an MDL molblock.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use molscope::options::{DisplayMode, Options};
use molscope::structure::{notation, DEFAULT_NOTATION};
use molscope::{MolscopeError, Viewer, ViewerCommand};
use web_time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "molscope",
    version,
    about = "Compose a 3D molecule scene from a line-notation string"
)]
struct Cli {
    /// Line-notation string (defaults to aspirin).
    #[arg(value_name = "NOTATION")]
    notation: Option<String>,

    /// TOML options file.
    #[arg(short, long, value_name = "PATH")]
    options: Option<PathBuf>,

    /// Display mode override.
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Atom index to select.
    #[arg(short, long, value_name = "INDEX")]
    select: Option<usize>,

    /// Discrete zoom steps (negative zooms out).
    #[arg(short, long, value_name = "STEPS", allow_hyphen_values = true, default_value_t = 0)]
    zoom: i32,

    /// Turn the turntable on.
    #[arg(long)]
    auto_rotate: bool,

    /// Elapsed time in seconds at which to compose the frame.
    #[arg(short, long, value_name = "SECS", default_value_t = 0.0)]
    time: f32,

    /// Print the molecule as an MDL molblock instead of a frame.
    #[arg(long)]
    molblock: bool,

    /// Print the options JSON schema and exit.
    #[arg(long)]
    schema: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    BallAndStick,
    SpaceFilling,
    Wireframe,
}

impl From<ModeArg> for DisplayMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::BallAndStick => Self::BallAndStick,
            ModeArg::SpaceFilling => Self::SpaceFilling,
            ModeArg::Wireframe => Self::Wireframe,
        }
    }
}

fn load_options(path: Option<&PathBuf>) -> Options {
    let Some(path) = path else {
        return Options::default();
    };
    match Options::load(path) {
        Ok(options) => options,
        Err(e) => {
            log::warn!(
                "could not read options from {}: {e}; using defaults",
                path.display()
            );
            Options::default()
        }
    }
}

fn to_json<T: serde::Serialize>(
    value: &T,
    pretty: bool,
) -> Result<String, MolscopeError> {
    let result = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    result.map_err(|e| MolscopeError::Serialize(e.to_string()))
}

fn run(cli: &Cli) -> Result<(), MolscopeError> {
    let mut out = std::io::stdout().lock();

    if cli.schema {
        writeln!(out, "{}", to_json(&Options::json_schema(), cli.pretty)?)?;
        return Ok(());
    }

    let notation = cli.notation.as_deref().unwrap_or(DEFAULT_NOTATION);
    if !notation::looks_like_notation(notation) {
        log::warn!("{notation:?} does not look like line notation");
    }

    let mut viewer = Viewer::with_notation(notation, load_options(cli.options.as_ref()));

    if cli.molblock {
        write!(out, "{}", viewer.molblock())?;
        return Ok(());
    }

    if let Some(mode) = cli.mode {
        viewer.execute(ViewerCommand::SetDisplayMode(mode.into()));
    }
    let step = if cli.zoom >= 0 {
        ViewerCommand::ZoomIn
    } else {
        ViewerCommand::ZoomOut
    };
    for _ in 0..cli.zoom.unsigned_abs() {
        viewer.execute(step.clone());
    }
    if cli.auto_rotate && !viewer.camera().auto_rotate() {
        viewer.execute(ViewerCommand::ToggleAutoRotate);
    }
    if let Some(index) = cli.select {
        viewer.execute(ViewerCommand::SelectAtom { index });
    }

    let frame = viewer.frame_at(Duration::from_secs_f32(cli.time.max(0.0)));
    writeln!(out, "{}", to_json(&frame, cli.pretty)?)?;
    Ok(())
}

fn main() -> Result<(), MolscopeError> {
    env_logger::init();
    run(&Cli::parse())
}
