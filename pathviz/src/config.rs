//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use pathviz_paths::Algorithm;
use thiserror::Error;

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 100;

/// Search algorithm as spelled on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Astar,
    Dijkstra,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(a: AlgorithmArg) -> Self {
        match a {
            AlgorithmArg::Astar => Algorithm::AStar,
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
        }
    }
}

/// Interactive A* / Dijkstra visualizer.
///
/// Left click paints the start, then the end, then walls. Right click erases.
#[derive(Debug, Clone, Parser)]
#[command(name = "pathviz", version, about)]
pub struct Config {
    /// Grid dimension (the grid is square).
    #[arg(long, default_value_t = 25)]
    pub size: usize,

    /// Algorithm selected at start-up.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Astar)]
    pub algorithm: AlgorithmArg,

    /// Pause after each search step, in milliseconds.
    #[arg(long, default_value_t = 15)]
    pub delay_ms: u64,

    /// Fraction of free cells turned into walls by `w`.
    #[arg(long, default_value_t = 0.25)]
    pub walls: f64,

    /// Scatter random walls when the program starts.
    #[arg(long)]
    pub scatter: bool,

    /// Seed for random walls.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default "info").
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size {0} is outside {MIN_SIZE}..={MAX_SIZE}")]
    Size(usize),
    #[error("wall density {0} is outside 0.0..=1.0")]
    WallDensity(f64),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&self.size) {
            return Err(ConfigError::Size(self.size));
        }
        if !(0.0..=1.0).contains(&self.walls) {
            return Err(ConfigError::WallDensity(self.walls));
        }
        Ok(())
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("pathviz").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let c = parse(&[]);
        assert_eq!(c.size, 25);
        assert_eq!(Algorithm::from(c.algorithm), Algorithm::AStar);
        assert_eq!(c.delay(), Duration::from_millis(15));
        assert!(!c.scatter);
        assert_eq!(c.seed, None);
        assert!(c.log_file.is_none());
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn flags() {
        let c = parse(&[
            "--size",
            "10",
            "--algorithm",
            "dijkstra",
            "--delay-ms",
            "0",
            "--walls",
            "0.4",
            "--scatter",
            "--seed",
            "9",
        ]);
        assert_eq!(c.size, 10);
        assert_eq!(Algorithm::from(c.algorithm), Algorithm::Dijkstra);
        assert_eq!(c.delay(), Duration::ZERO);
        assert!(c.scatter);
        assert_eq!(c.seed, Some(9));
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn validation() {
        assert_eq!(parse(&["--size", "1"]).validate(), Err(ConfigError::Size(1)));
        assert_eq!(
            parse(&["--size", "101"]).validate(),
            Err(ConfigError::Size(101))
        );
        assert_eq!(
            parse(&["--walls", "1.5"]).validate(),
            Err(ConfigError::WallDensity(1.5))
        );
        assert!(Config::try_parse_from(["pathviz", "--algorithm", "bfs"]).is_err());
        assert_eq!(parse(&["--size", "50"]).validate(), Ok(()));
    }
}
