//! Command-line options.

use std::env;
use std::path::PathBuf;

use crate::error::{GameError, GameResult};

/// Environment variable consulted for the asset root when `--assets` is not given.
pub const ASSETS_ENV_VAR: &str = "ASTRO_ASSETS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory holding the `gfx/`, `sfx/` and `fonts/` folders.
    pub asset_root: PathBuf,
    pub muted: bool,
    /// Fixes the astronaut placements for a reproducible run.
    pub seed: Option<u64>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("."),
            muted: false,
            seed: None,
        }
    }
}

impl Options {
    /// Reads options from the process arguments and environment.
    pub fn from_env() -> GameResult<Self> {
        Self::parse(env::args().skip(1), env::var_os(ASSETS_ENV_VAR).map(PathBuf::from))
    }

    /// Parses `args` (without the program name). `env_assets` is used when no
    /// `--assets` flag is present.
    pub fn parse<I, S>(args: I, env_assets: Option<PathBuf>) -> GameResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Options::default();
        let mut asset_flag = None;
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--assets" | "-a" => {
                    let value = args
                        .next()
                        .ok_or_else(|| GameError::InvalidArgument(format!("{arg} requires a directory")))?;
                    asset_flag = Some(PathBuf::from(value));
                }
                "--mute" | "-m" => options.muted = true,
                "--seed" => {
                    let value = args
                        .next()
                        .ok_or_else(|| GameError::InvalidArgument("--seed requires a number".to_string()))?;
                    let seed = value
                        .parse()
                        .map_err(|_| GameError::InvalidArgument(format!("--seed expects an unsigned integer, got {value:?}")))?;
                    options.seed = Some(seed);
                }
                other => return Err(GameError::InvalidArgument(format!("unknown argument {other:?}"))),
            }
        }

        if let Some(root) = asset_flag.or(env_assets) {
            options.asset_root = root;
        }
        Ok(options)
    }
}
