use std::io::IsTerminal;
use std::path::PathBuf;

use eyre::{Context, Result};
use serde::Serialize;
use slicecube_core::prelude::*;
use slicecube_core::render::{RenderCubie, render_cubies};

use crate::net::Net;
use crate::settings::Settings;

/// Slice rotation cube puzzle
///
/// Settings are read from built-in defaults, then the `--config` file, then
/// `SLICECUBE_*` environment variables, then command-line flags.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,

    /// Settings file (YAML, TOML, or JSON).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// Edge length N of the cube.
    #[arg(short = 'n', long, global = true)]
    pub size: Option<usize>,
    /// Output format.
    #[arg(short, long, global = true, value_enum, default_value_t)]
    pub format: Format,
    /// Log debug messages.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print the solved state.
    Show,
    /// Apply slice rotations to a solved puzzle and print the result.
    Rotate {
        /// Rotations to apply in order, such as `X0+` or `z2-`.
        #[arg(required = true)]
        rotations: Vec<SliceRotation>,
    },
    /// Apply random slice rotations to a solved puzzle and print the result.
    Shuffle {
        /// Number of rotations.
        #[arg(short, long)]
        moves: Option<u32>,
        /// Random seed. The same seed and number of rotations always produce
        /// the same shuffle.
        #[arg(short, long)]
        seed: Option<String>,
    },
}

#[derive(clap::ValueEnum, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Format {
    /// Unfolded view of the six faces.
    #[default]
    Net,
    /// JSON description of every cubie.
    Json,
}

#[derive(Serialize, Debug)]
struct StateOutput<'a> {
    size: GridSize,
    solved: bool,
    rotations: &'a [SliceRotation],
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<&'a str>,
    cubies: Vec<RenderCubie>,
}

pub(crate) fn exec(args: Args) -> Result<()> {
    log::debug!("{}", slicecube_core::ENGINE_VERSION_STRING);

    let mut settings = Settings::load(args.config.as_deref());
    if let Some(size) = args.size {
        settings.size = size;
    }
    let mut puzzle = settings.new_puzzle().context("invalid settings")?;

    let mut seed = None;
    match args.subcommand {
        Subcommand::Show => (),

        Subcommand::Rotate { rotations } => {
            for rotation in rotations {
                puzzle
                    .apply(rotation)
                    .with_context(|| format!("error applying {rotation}"))?;
            }
        }

        Subcommand::Shuffle {
            moves,
            seed: seed_arg,
        } => {
            let ty = match moves {
                Some(n) => ShuffleType::Exact(n),
                None => settings.shuffle_type(),
            };
            let params = match seed_arg {
                Some(s) => ShuffleParams::with_seed(ty, s),
                None => ShuffleParams::new(ty),
            };
            let output = puzzle
                .shuffle_with_params(params)
                .context("error shuffling puzzle")?;
            seed = Some(output.params.seed);
        }
    }

    match args.format {
        Format::Net => {
            let colored = std::io::stdout().is_terminal();
            print!("{}", Net::new(puzzle.grid(), colored));
            if let Some(seed) = &seed {
                println!("seed: {seed}");
            }
            println!("solved: {}", puzzle.is_solved());
            Ok(())
        }
        Format::Json => {
            let policy = MaskInterior {
                color: puzzle.palette().hidden(),
            };
            write_json_output(&StateOutput {
                size: puzzle.grid_size(),
                solved: puzzle.is_solved(),
                rotations: puzzle.history(),
                seed: seed.as_deref(),
                cubies: render_cubies(puzzle.grid(), &policy),
            })
        }
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value).context("error serializing output")?;
    println!("{s}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_rotate() {
        let args = Args::try_parse_from(["slicecube", "rotate", "X0+", "z2-", "-n", "4"]).unwrap();
        assert_eq!(args.size, Some(4));
        assert_eq!(args.format, Format::Net);
        match args.subcommand {
            Subcommand::Rotate { rotations } => assert_eq!(
                rotations,
                [
                    SliceRotation::new(Axis::X, 0, Direction::Positive),
                    SliceRotation::new(Axis::Z, 2, Direction::Negative),
                ],
            ),
            other => panic!("wrong subcommand {other:?}"),
        }
    }

    #[test]
    fn test_parse_errors() {
        Args::try_parse_from(["slicecube", "rotate"]).expect_err("no rotations");
        Args::try_parse_from(["slicecube", "rotate", "Q0+"]).expect_err("bad axis");
        Args::try_parse_from(["slicecube", "show", "--format", "xml"]).expect_err("bad format");
    }

    #[test]
    fn test_parse_shuffle() {
        let args = Args::try_parse_from([
            "slicecube", "--format", "json", "shuffle", "--moves", "5", "--seed", "abc",
        ])
        .unwrap();
        assert_eq!(args.format, Format::Json);
        match args.subcommand {
            Subcommand::Shuffle { moves, seed } => {
                assert_eq!(moves, Some(5));
                assert_eq!(seed.as_deref(), Some("abc"));
            }
            other => panic!("wrong subcommand {other:?}"),
        }
    }

    #[test]
    fn test_json_output_shape() {
        let mut puzzle = Puzzle::initialize(2).unwrap();
        puzzle
            .apply(SliceRotation::new(Axis::Y, 1, Direction::Negative))
            .unwrap();
        let output = StateOutput {
            size: puzzle.grid_size(),
            solved: puzzle.is_solved(),
            rotations: puzzle.history(),
            seed: None,
            cubies: render_cubies(puzzle.grid(), &MaskInterior::default()),
        };
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["size"], 2);
        assert_eq!(value["solved"], false);
        assert_eq!(value["rotations"][0]["axis"], "Y");
        assert_eq!(value["rotations"][0]["direction"], "negative");
        assert_eq!(value["cubies"].as_array().map(Vec::len), Some(8));
        assert_eq!(value["cubies"][0]["coord"]["x"], 0);
        assert!(value.get("seed").is_none());
    }
}
