use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Block drawing for the terminal
    Text,
    /// One wall segment per line: orientation, center x, center y, length
    Segments,
}

/// Perfect maze generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Settings {
    /// Maze width in cells
    #[arg(long, default_value_t = 10)]
    pub width: u16,

    /// Maze height in cells
    #[arg(long, default_value_t = 10)]
    pub height: u16,

    /// Random seed. Without one every run draws a new maze
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hallway size, in blocks for text output and in world units for segments
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
    pub hallway_size: u16,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Settings {
    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::try_parse_from(["mazewalls"]).unwrap();
        assert_eq!((settings.width, settings.height), (10, 10));
        assert_eq!(settings.seed, None);
        assert_eq!(settings.hallway_size, 1);
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.log_level(), Level::WARN);
    }

    #[test]
    fn test_parse_all_flags() {
        let settings = Settings::try_parse_from([
            "mazewalls",
            "--width",
            "3",
            "--height",
            "7",
            "--seed",
            "99",
            "--hallway-size",
            "2",
            "--format",
            "segments",
            "--log-file",
            "maze.log",
            "-vv",
        ])
        .unwrap();
        assert_eq!((settings.width, settings.height), (3, 7));
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.hallway_size, 2);
        assert_eq!(settings.format, OutputFormat::Segments);
        assert_eq!(settings.log_file, Some(PathBuf::from("maze.log")));
        assert_eq!(settings.log_level(), Level::DEBUG);
    }

    #[test]
    fn test_zero_hallway_is_rejected() {
        assert!(Settings::try_parse_from(["mazewalls", "--hallway-size", "0"]).is_err());
    }
}
