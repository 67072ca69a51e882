use clap::Parser;

/// Every path carries a default, so the bare `keyatlas` invocation is the
/// documented entry point.
#[derive(Parser)]
#[command(
    name = "keyatlas",
    about = "Build the canonical keycode registry from firmware definition files",
    version
)]
pub struct Cli {
    /// Directory of versioned keycode definition files
    #[arg(long, default_value = "data/keycodes")]
    pub keycodes: String,

    /// Tab-separated description override table
    #[arg(long, default_value = "data/descriptions.tsv")]
    pub overrides: String,

    /// Prior curated registry artifact (a missing file means a bootstrap run)
    #[arg(long, default_value = "dist/keycodes.json")]
    pub registry: String,

    /// Output artifact path
    #[arg(long, default_value = "dist/keycodes.json")]
    pub out: String,

    /// Output the run report as JSON
    #[arg(long)]
    pub json: bool,
}
