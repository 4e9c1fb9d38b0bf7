use anyhow::Result;
use clap::Parser;
use dirdiff::artifacts::diff::hunk::IntralineOptions;
use dirdiff::artifacts::render::document::{DEFAULT_TABSIZE, RenderOptions};
use dirdiff::artifacts::render::navigation::{
    DEFAULT_HIGHLIGHT, HighlightColor, NavigationOverlay,
};
use dirdiff::commands::compare::{CompareOptions, Comparator};
use is_terminal::IsTerminal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dirdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two folders and render side-by-side diffs",
    long_about = "Compares the top-level files of two folders. Files found on one side only \
    are listed, identical files are reported, and every file whose content differs gets a \
    standalone HTML page with a side-by-side view of its changes.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The first folder")]
    left: PathBuf,
    #[arg(index = 2, help = "The second folder")]
    right: PathBuf,
    #[arg(
        short,
        long,
        default_value = "new_output",
        help = "Folder receiving one page per differing file"
    )]
    output: PathBuf,
    #[arg(short, long, help = "Number of file pairs compared at the same time")]
    jobs: Option<usize>,
    #[arg(
        short = 'c',
        long,
        help = "Only keep this many unchanged lines around each change"
    )]
    context: Option<usize>,
    #[arg(long, default_value_t = DEFAULT_TABSIZE, help = "Tab stop width, 0 keeps tabs")]
    tabsize: usize,
    #[arg(long, help = "Do not add previous/next change buttons")]
    no_navigation: bool,
    #[arg(long, default_value = DEFAULT_HIGHLIGHT, help = "Color of the selected change")]
    highlight: HighlightColor,
    #[arg(long, help = "Do not highlight changed text inside lines")]
    no_intraline: bool,
    #[arg(
        long,
        default_value_t = 1000,
        help = "Longest line, in characters, that gets intraline highlighting"
    )]
    intraline_max: usize,
    #[arg(
        long,
        help = "Highlight changed text even when a change replaces a different number of lines"
    )]
    pair_mismatched: bool,
}

impl Cli {
    fn options(&self) -> CompareOptions {
        let defaults = CompareOptions::default();

        CompareOptions::new(
            self.jobs.unwrap_or(defaults.jobs),
            RenderOptions::new(self.context, self.tabsize),
            IntralineOptions::new(!self.no_intraline, self.intraline_max, self.pair_mismatched),
            (!self.no_navigation).then(|| NavigationOverlay::new(self.highlight.clone())),
        )
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let comparator = Comparator::new(cli.options(), Box::new(std::io::stdout()));
    let result = comparator.compare(&cli.left, &cli.right, &cli.output).await?;

    if result.has_failures() {
        anyhow::bail!("{} file pair(s) could not be compared", result.failed().len());
    }

    Ok(())
}
