//! Command-line launch options.

use crate::error::OptionsError;

pub const USAGE: &str = "Usage: jumping-ghost [--seed <u64>] [--paused] [--help]";

/// Options chosen at launch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Seed for the hover speed and sparkle layout; entropy from the OS when absent.
    pub seed: Option<u64>,
    /// Start with the animation paused.
    pub paused: bool,
    /// Print usage and exit.
    pub help: bool,
}

impl LaunchOptions {
    /// Parses options from an argument list that excludes the program name.
    pub fn parse<I, S>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = LaunchOptions::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--seed" | "-s" => {
                    let value = args.next().ok_or(OptionsError::MissingValue("--seed"))?;
                    let value = value.as_ref();
                    options.seed = Some(value.parse().map_err(|_| OptionsError::InvalidValue {
                        flag: "--seed",
                        value: value.to_string(),
                    })?);
                }
                "--paused" | "-p" => options.paused = true,
                "--help" | "-h" => options.help = true,
                other => return Err(OptionsError::UnknownArgument(other.to_string())),
            }
        }

        Ok(options)
    }
}
