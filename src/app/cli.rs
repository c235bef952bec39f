use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "List the files under a directory that match name, size and depth filters"
)]
pub struct Cli {
    /// Directory to search
    #[arg(default_value = ".")]
    pub path: String,

    /// Use a predefined set of filters from presets.toml
    #[arg(long)]
    pub preset: Option<String>,

    /// Maximum recursion depth (0 lists only the top directory)
    #[arg(long, short = 'd', allow_negative_numbers = true)]
    pub depth: Option<i64>,

    /// Regular expression a file name must match; repeat for alternatives
    #[arg(long, short = 'n', action = ArgAction::Append)]
    pub name: Option<Vec<String>>,

    /// Regular expression that excludes a file name; may be repeated
    #[arg(long, action = ArgAction::Append)]
    pub not_name: Option<Vec<String>>,

    /// Minimum file size, e.g. "230", "1 K", "2 Gi"
    #[arg(long)]
    pub min_size: Option<String>,

    /// Maximum file size, e.g. "230", "1 K", "2 Gi"
    #[arg(long)]
    pub max_size: Option<String>,

    /// Skip directories whose name starts with a dot
    #[arg(long)]
    pub exclude_hidden: bool,

    /// Skip version-control directories (.git, .hg, CVS, ...)
    #[arg(long)]
    pub exclude_vcs: bool,

    /// Prefix each file with its size in bytes
    #[arg(long, short = 'l')]
    pub long: bool,

    /// Sort results by path
    #[arg(long)]
    pub sort: bool,

    /// Walk even when a filter could not be applied
    #[arg(long)]
    pub lenient: bool,
}
