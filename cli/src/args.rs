use std::path::PathBuf;

use clap::Parser;

/// Command-line surface for the converter.
#[derive(Parser, Debug)]
#[command(
    name = "im2ascii",
    about = "Convert an image into an ASCII art text file",
    version
)]
pub struct Cli {
    /// Path to the input image
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output text file (defaults to `<input stem>.txt`)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Output width in characters
    #[arg(
        short = 'w',
        long = "width",
        value_name = "WIDTH",
        default_value_t = im2ascii::DEFAULT_WIDTH,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub width: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_defaults_to_256() {
        let cli = Cli::try_parse_from(["im2ascii", "photo.png"]).unwrap();
        assert_eq!(cli.width, 256);
        assert_eq!(cli.input, PathBuf::from("photo.png"));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_explicit_output_path() {
        let cli = Cli::try_parse_from(["im2ascii", "photo.png", "art.txt"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("art.txt")));
    }

    #[test]
    fn test_width_flag() {
        let cli = Cli::try_parse_from(["im2ascii", "photo.png", "-w", "80"]).unwrap();
        assert_eq!(cli.width, 80);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        assert!(Cli::try_parse_from(["im2ascii"]).is_err());
    }

    #[test]
    fn test_width_flag_without_value_is_an_error() {
        assert!(Cli::try_parse_from(["im2ascii", "photo.png", "-w"]).is_err());
    }

    #[test]
    fn test_non_numeric_width_is_an_error() {
        assert!(Cli::try_parse_from(["im2ascii", "photo.png", "-w", "wide"]).is_err());
    }

    #[test]
    fn test_zero_width_is_an_error() {
        assert!(Cli::try_parse_from(["im2ascii", "photo.png", "-w", "0"]).is_err());
    }
}
