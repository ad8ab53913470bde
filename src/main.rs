//! Build an AVL tree from the command line and draw it.
//!
//! ```text
//! $ avl 5 3 8 1 4 --remove 3
//!     5
//!    / \
//!   4   8
//!  /
//! 1
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use avl_tree::AvlTree;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "avl")]
#[command(about = "Build a self-balancing AVL tree and draw it", long_about = None)]
struct Cli {
    /// Values to add to the tree, in order.
    ///
    /// Defaults to 0 through 9 when no values are given.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// Values to remove from the tree once all values have been added.
    #[arg(short, long = "remove", value_name = "VALUE", allow_negative_numbers = true)]
    remove: Vec<i64>,

    /// Draw the tree bottom-up, with the root on the last line.
    #[arg(short, long)]
    inverted: bool,

    /// Write the tree as a Graphviz DOT digraph to this file.
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Render the tree to a PNG image with the Graphviz `dot` binary.
    #[arg(long, value_name = "FILE")]
    png: Option<PathBuf>,

    /// Enable verbose logging (repeat for more detail).
    ///
    /// Overridden by the RUST_LOG environment variable.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    debug!(?cli, "starting");

    let values = match cli.values.is_empty() {
        true => (0..10).collect(),
        false => cli.values,
    };

    let mut tree = AvlTree::default();

    // Rejected values are reported and skipped, never aborting the run.
    for v in values {
        if let Err(e) = tree.add(v) {
            eprintln!("{e}");
        }
    }
    for v in cli.remove {
        if let Err(e) = tree.remove(v) {
            eprintln!("{e}");
        }
    }

    info!(rotations = tree.rotations().total(), "tree built");

    tree.print(cli.inverted);

    if let Some(path) = cli.dot {
        std::fs::write(&path, tree.to_dot())
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote dot file");
    }

    if let Some(path) = cli.png {
        tree.graph(&path)
            .with_context(|| format!("failed to render {}", path.display()))?;
        info!(path = %path.display(), "rendered graph");
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
