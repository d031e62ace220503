//! Command-line launch options.

use crate::maze::types::MazeDifficulty;

pub const USAGE: &str = "\
Mazerun - Terminal Maze Runner

Usage: mazerun [options]

Options:
  -d, --difficulty <easy|medium|hard>  Skip the menu and start at this difficulty
  -s, --seed <number>                  Generate the maze from a fixed seed
      --dump                           Print the generated maze as JSON and exit
  -v, --version                        Show version information
  -h, --help                           Show this help message

Keys:
  W / Up      Move up
  A / Left    Move left
  S / Down    Move down
  D / Right   Move right
  Esc         Back to the menu";

/// Options for a play or dump run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    pub difficulty: Option<MazeDifficulty>,
    pub seed: Option<u64>,
    pub dump: bool,
}

impl LaunchOptions {
    /// Difficulty for `--dump`, which has no menu to pick from.
    pub fn difficulty_or_default(&self) -> MazeDifficulty {
        self.difficulty.unwrap_or(MazeDifficulty::Easy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchCommand {
    Run(LaunchOptions),
    Version,
    Help,
}

/// Parse arguments (program name already stripped).
pub fn parse_args<I, S>(args: I) -> Result<LaunchCommand, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = LaunchOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let arg = arg.as_ref();
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag, Some(value.to_string())),
            _ => (arg, None),
        };

        let mut value_for = |name: &str| -> Result<String, String> {
            match inline_value.clone() {
                Some(value) => Ok(value),
                None => args
                    .next()
                    .map(|v| v.as_ref().to_string())
                    .ok_or_else(|| format!("missing value for {}", name)),
            }
        };

        match flag {
            "-h" | "--help" => return Ok(LaunchCommand::Help),
            "-v" | "--version" => return Ok(LaunchCommand::Version),
            "-d" | "--difficulty" => {
                options.difficulty = Some(value_for(flag)?.parse()?);
            }
            "-s" | "--seed" => {
                let raw = value_for(flag)?;
                let seed = raw
                    .parse::<u64>()
                    .map_err(|_| format!("invalid seed '{}'", raw))?;
                options.seed = Some(seed);
            }
            "--dump" => options.dump = true,
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    Ok(LaunchCommand::Run(options))
}
