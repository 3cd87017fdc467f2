use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use nuci_primitives::logging::{LoggingConfig, init_logging};
use nuci_primitives::paint::{NAMED_COLOURS, NamedColour, argb, named};
use nuci_primitives::{Colour, Point2D, Rectangle2D};

#[derive(Debug, Parser)]
#[command(name = "nuci")]
#[command(about = "Inspect colours and rectangles", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter in env_logger syntax (overrides NUCI_LOG and RUST_LOG)
    #[arg(long, global = true, value_name = "FILTER")]
    log: Option<String>,

    /// Disable ANSI colours in log output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a colour's hex form, ARGB word, channels and catalogue name
    Show {
        #[arg(value_parser = parse_colour)]
        colour: Colour,
    },

    /// Decode a packed ARGB integer (decimal, or hex with a 0x prefix)
    Argb {
        #[arg(value_parser = parse_argb, allow_negative_numbers = true)]
        value: i32,
    },

    /// List the predefined colours
    Named {
        /// Only names containing this text (ignores case, spaces, `_` and `-`)
        #[arg(long, short = 'f')]
        filter: Option<String>,
    },

    /// Convert a colour to greyscale
    Mono {
        #[arg(value_parser = parse_colour)]
        colour: Colour,

        #[arg(long, short = 'm', value_enum, default_value_t = MonoMode::Average)]
        mode: MonoMode,
    },

    /// Multiply each colour channel by a factor
    Scale {
        #[arg(value_parser = parse_colour)]
        colour: Colour,

        /// Channels are clamped to 0..=255; NaN counts as 0
        factor: f32,
    },

    /// Compare two colours channel by channel, ignoring alpha
    Similar {
        #[arg(value_parser = parse_colour)]
        first: Colour,

        #[arg(value_parser = parse_colour)]
        second: Colour,

        /// Largest accepted per-channel difference
        #[arg(long, short = 't', default_value_t = 0)]
        tolerance: u32,
    },

    /// Print a rectangle's edges and corners
    #[command(allow_negative_numbers = true)]
    Rect {
        x: i32,
        y: i32,
        width: i32,
        height: i32,

        /// Point to test for containment, as X,Y
        #[arg(long, short = 'p', value_parser = parse_point)]
        point: Option<Point2D>,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum MonoMode {
    /// Mean of the three channels
    Average,
    /// Brightest channel
    Light,
    /// Darkest channel
    Dark,
}

/// Accepts a catalogue name or any hexadecimal form.
fn parse_colour(s: &str) -> Result<Colour, String> {
    if let Some(colour) = named::lookup(s) {
        return Ok(colour);
    }
    Colour::from_hex(s).map_err(|e| format!("{e} (and no catalogue colour has that name)"))
}

fn parse_argb(s: &str) -> Result<i32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u32::from_str_radix(digits, 16).map(|v| v as i32),
        None => s.parse::<i32>(),
    };
    parsed.map_err(|e| format!("invalid ARGB integer {s:?}: {e}"))
}

fn parse_point(s: &str) -> Result<Point2D, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<i32>()
            .map_err(|e| format!("invalid coordinate {v:?}: {e}"))
    };
    Ok(Point2D::new(coord(x)?, coord(y)?))
}

fn describe(colour: Colour) -> String {
    let name = colour.name().unwrap_or("-");
    format!(
        "{hex:<10} argb={argb:<12} a={a:<3} r={r:<3} g={g:<3} b={b:<3} name={name}",
        hex = colour.to_hex(),
        argb = colour.to_argb(),
        a = colour.a,
        r = colour.r,
        g = colour.g,
        b = colour.b,
    )
}

/// Catalogue entries whose name contains `filter`, compared the way
/// [`named::lookup`] compares names.
fn catalogue_matching(filter: Option<&str>) -> Vec<&'static NamedColour> {
    let needle = filter.map(named::normalise);
    NAMED_COLOURS
        .iter()
        .filter(|entry| match &needle {
            Some(needle) => named::normalise(entry.name).contains(needle.as_str()),
            None => true,
        })
        .collect()
}

/// Zero width or zero height; negative sizes still span an area.
fn has_no_area(rect: Rectangle2D) -> bool {
    rect.width == 0 || rect.height == 0
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Show { colour } => {
            println!("{}", describe(colour));
        }
        Commands::Argb { value } => {
            println!("{}", describe(argb::from_argb(value)));
        }
        Commands::Named { filter } => {
            let matches = catalogue_matching(filter.as_deref());
            for entry in &matches {
                println!("{:<20} {:<10} {:?}", entry.name, entry.colour.to_hex(), entry.palette);
            }
            log::debug!("listed {} of {} catalogue colours", matches.len(), NAMED_COLOURS.len());
            if matches.is_empty() {
                bail!("no catalogue colour matches the filter");
            }
        }
        Commands::Mono { colour, mode } => {
            let grey = match mode {
                MonoMode::Average => colour.to_monochrome_average(),
                MonoMode::Light => colour.to_monochrome_light(),
                MonoMode::Dark => colour.to_monochrome_dark(),
            };
            println!("{}", describe(grey));
        }
        Commands::Scale { colour, factor } => {
            println!("{}", describe(colour.multiply(factor)));
        }
        Commands::Similar { first, second, tolerance } => {
            let similar = first.is_similar_to(second, tolerance);
            println!("{}", if similar { "similar" } else { "different" });
            if !similar {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Rect { x, y, width, height, point } => {
            let rect = Rectangle2D::new(x, y, width, height);
            println!("left={} top={} right={} bottom={}", rect.left(), rect.top(), rect.right(), rect.bottom());
            let centre = rect.centre();
            println!("centre=({}, {})", centre.x, centre.y);
            for (label, corner) in ["top-left", "top-right", "bottom-right", "bottom-left"]
                .into_iter()
                .zip(rect.corners())
            {
                println!("{label:<13}({}, {})", corner.x, corner.y);
            }
            if has_no_area(rect) {
                log::warn!("rectangle {rect:?} has no area");
            }
            if let Some(p) = point {
                let inside = rect.contains(p);
                println!("({}, {}) {}", p.x, p.y, if inside { "inside" } else { "outside" });
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        write_style: if cli.no_color {
            env_logger::WriteStyle::Never
        } else {
            env_logger::WriteStyle::Auto
        },
    });
    log::debug!("command: {:?}", cli.command);

    run(cli.command).context("nuci command failed")
}
