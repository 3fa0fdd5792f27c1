//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Download a single file over HTTP(S) with live progress.
///
/// The file is named after the last segment of the URL path. Without a
/// destination directory the current directory is used after a short,
/// cancellable warning.
#[derive(Parser, Debug)]
#[command(name = "grabfile")]
#[command(author, version, about)]
pub struct Args {
    /// Increase diagnostic verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only show error diagnostics
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Source URL, optionally followed by the destination directory
    #[arg(value_name = "ARGS")]
    pub targets: Vec<String>,
}

/// What to download and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// URL to fetch.
    pub source_url: String,
    /// Destination directory; `None` means "current directory, after warning".
    pub destination: Option<PathBuf>,
}

impl Args {
    /// Interprets the positional arguments; `None` for any count but 1 or 2.
    pub fn invocation(&self) -> Option<Invocation> {
        match self.targets.as_slice() {
            [source_url] => Some(Invocation {
                source_url: source_url.clone(),
                destination: None,
            }),
            [source_url, destination] => Some(Invocation {
                source_url: source_url.clone(),
                destination: Some(PathBuf::from(destination)),
            }),
            _ => None,
        }
    }
}

/// The two lines printed when the arguments do not form an invocation.
pub fn usage_lines(program: &str) -> [String; 2] {
    [
        format!("Usage:   {program} <source URL> [destination directory]"),
        format!("Example: {program} https://proof.ovh.net/files/100Mb.dat /tmp/"),
    ]
}
