//! Command-line arguments.

use std::path::PathBuf;

use atelier_core::{Color, FabricType, FurnitureConfig, Size, WoodType};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "atelier", version)]
#[command(about = "Compile one furniture configuration and print its scene", long_about = None)]
#[command(after_help = "Set RUST_LOG=debug to trace rebuilds.")]
pub struct Cli {
    /// Item to build: chair, sofa, table, bookshelf, ottoman (or stool)
    #[arg(required_unless_present = "dump_theme")]
    pub item: Option<String>,

    /// Built-in theme: heritage, classic, atelier
    #[arg(long, default_value = "heritage", conflicts_with = "theme_file")]
    pub theme: String,

    /// Load a JSON theme instead of a built-in one
    #[arg(long)]
    pub theme_file: Option<PathBuf>,

    /// Frame wood: oak, walnut, mahogany, cherry, teak
    #[arg(long)]
    pub wood: Option<WoodType>,

    /// Upholstery: leather, velvet, cotton, linen, silk
    #[arg(long)]
    pub fabric: Option<FabricType>,

    /// Frame color as #RRGGBB
    #[arg(long)]
    pub frame_color: Option<Color>,

    /// Fabric color as #RRGGBB
    #[arg(long)]
    pub fabric_color: Option<Color>,

    /// Size: small, medium, large
    #[arg(long)]
    pub size: Option<Size>,

    /// Print a part and material summary instead of JSON
    #[arg(long, conflicts_with = "dump_theme")]
    pub summary: bool,

    /// Print the selected theme as JSON and exit
    #[arg(long)]
    pub dump_theme: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeSource {
    Builtin(String),
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Output {
    Json,
    Summary,
    Theme,
}

impl Cli {
    /// The configuration snapshot, starting from the defaults.
    pub fn config(&self) -> FurnitureConfig {
        let mut config = FurnitureConfig::default();
        if let Some(wood) = self.wood {
            config.wood_type = wood;
        }
        if let Some(fabric) = self.fabric {
            config.fabric_type = fabric;
        }
        if let Some(color) = self.frame_color {
            config.frame_color = color;
        }
        if let Some(color) = self.fabric_color {
            config.fabric_color = color;
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        config
    }

    pub fn theme_source(&self) -> ThemeSource {
        match &self.theme_file {
            Some(path) => ThemeSource::File(path.clone()),
            None => ThemeSource::Builtin(self.theme.clone()),
        }
    }

    pub fn output(&self) -> Output {
        if self.dump_theme {
            Output::Theme
        } else if self.summary {
            Output::Summary
        } else {
            Output::Json
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("atelier").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["sofa"]).unwrap();
        assert_eq!(cli.item.as_deref(), Some("sofa"));
        assert_eq!(cli.theme_source(), ThemeSource::Builtin("heritage".to_string()));
        assert_eq!(cli.config(), FurnitureConfig::default());
        assert_eq!(cli.output(), Output::Json);
    }

    #[test]
    fn test_full_configuration() {
        let cli = parse(&[
            "table",
            "--wood",
            "teak",
            "--fabric=velvet",
            "--frame-color",
            "#3E2723",
            "--fabric-color=#F5F5DC",
            "--size",
            "large",
            "--theme",
            "classic",
            "--summary",
        ])
        .unwrap();
        let config = cli.config();
        assert_eq!(config.wood_type, WoodType::Teak);
        assert_eq!(config.fabric_type, FabricType::Velvet);
        assert_eq!(config.frame_color, Color::from_rgb8(0x3E, 0x27, 0x23));
        assert_eq!(config.fabric_color.to_hex(), "#F5F5DC");
        assert_eq!(config.size, Size::Large);
        assert_eq!(cli.theme_source(), ThemeSource::Builtin("classic".to_string()));
        assert_eq!(cli.output(), Output::Summary);
    }

    #[test]
    fn test_errors() {
        let kind = |args: &[&str]| parse(args).map(|_| ()).unwrap_err().kind();
        assert_eq!(kind(&[]), ErrorKind::MissingRequiredArgument);
        assert_eq!(kind(&["chair", "--size"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["chair", "--wood", "pine"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["chair", "--frame-color", "brown"]), ErrorKind::ValueValidation);
        assert_eq!(kind(&["chair", "sofa"]), ErrorKind::UnknownArgument);
        assert_eq!(kind(&["chair", "--verbose"]), ErrorKind::UnknownArgument);
        assert_eq!(
            kind(&["chair", "--theme", "classic", "--theme-file", "t.json"]),
            ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn test_help_and_dump() {
        assert_eq!(parse(&["--help"]).map(|_| ()).unwrap_err().kind(), ErrorKind::DisplayHelp);

        let cli = parse(&["--dump-theme", "--theme-file", "custom.json"]).unwrap();
        assert_eq!(cli.item, None);
        assert_eq!(cli.output(), Output::Theme);
        assert_eq!(cli.theme_source(), ThemeSource::File(PathBuf::from("custom.json")));
    }
}
