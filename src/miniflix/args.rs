use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for dev builds.
/// Format: "0.4.1" for releases, "0.4.1@abc1234 2025-11-02" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "miniflix")]
#[command(version = get_version())]
#[command(about = "Personal movie hub for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Browse the global poster library instead of ./images
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Poster folder to browse (overrides --global and ./images)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Seed the featured/trending sampling for reproducible output
    #[arg(long, global = true, value_name = "N")]
    pub seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the home page: banner plus a featured selection
    #[command(alias = "h")]
    Home,

    /// List every poster in the library
    #[command(alias = "ls")]
    Library,

    /// Show a randomized trending ranking
    #[command(alias = "t")]
    Trending,

    /// Add a poster image to the library
    #[command(alias = "up")]
    Upload {
        /// Path of the image file to upload
        path: PathBuf,
    },

    /// Browse interactively; the watchlist and feedback views live here
    #[command(alias = "b")]
    Browse,
}
