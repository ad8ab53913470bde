//! Export a binary tree as a [Graphviz] DOT digraph.
//!
//! [Graphviz]: https://graphviz.org/

use std::{
    fmt::Write as _,
    io::Write as _,
    path::Path,
    process::{Command, Stdio},
};

use tracing::debug;

use crate::{error::GraphError, view::NodeView};

/// Render the tree rooted at `root` (if any) as a DOT digraph.
///
/// Every node is declared once, and every parent to child link is emitted as
/// a plain directed edge; left and right children are not distinguished.
pub fn to_dot<N>(root: Option<&N>) -> String
where
    N: NodeView,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    if let Some(root) = root {
        writeln!(buf, "{:?};", root.label()).unwrap();
        recurse(root, &mut buf);
    }
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<N, W>(n: &N, buf: &mut W)
where
    N: NodeView,
    W: std::fmt::Write,
{
    let label = n.label();
    for v in [n.left(), n.right()].into_iter().flatten() {
        let child = v.label();
        writeln!(buf, "{child:?};").unwrap();
        writeln!(buf, "{label:?} -> {child:?};").unwrap();
        recurse(v, buf);
    }
}

/// Render `dot` to a PNG image at `path` by piping it through the Graphviz
/// `dot` binary, which must be available in `PATH`.
pub fn render_png(dot: &str, path: &Path) -> Result<(), GraphError> {
    debug!(path = %path.display(), "rendering graph with graphviz");

    let mut child = Command::new("dot")
        .arg("-Tpng")
        .arg("-o")
        .arg(path)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(GraphError::Spawn)?;

    // Closing stdin (by dropping it) signals the end of the graph.
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(dot.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(GraphError::Render(status));
    }

    Ok(())
}
