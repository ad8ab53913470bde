//! Render a binary tree as ASCII art for display in a terminal.
//!
//! ```text
//!       3
//!    __/ \_
//!   1      5
//!  / \    / \
//! 0   2  4   6
//! ```
//!
//! Each node label is drawn centred above the branches linking it to its
//! children, with each subtree laid out as close to its sibling as the
//! minimum spacing allows.

use crate::view::NodeView;

/// The minimum number of columns separating the left and right subtrees of a
/// node on any line.
const MIN_SPACING: isize = 2;

/// Render the tree rooted at `root` into a single string of `\n` separated
/// lines.
///
/// If `inverted` is true, the tree is drawn bottom-up, with the root on the
/// last line.
pub fn render<N>(root: &N, inverted: bool) -> String
where
    N: NodeView,
{
    let mut lines = render_lines(root, inverted);
    if inverted {
        lines.reverse();
    }
    lines.join("\n")
}

/// Render the subtree rooted at `node` into its text lines, top-down.
///
/// When `inverted` is true the branch characters are drawn for a bottom-up
/// orientation, but the lines are still returned in top-down order; callers
/// reverse the full set of lines once the whole tree has been rendered (as
/// [`render()`] does).
pub fn render_lines<N>(node: &N, inverted: bool) -> Vec<String>
where
    N: NodeView,
{
    let label = node.label();
    let label_width = width(&label);

    let left = node.left().map(|v| render_lines(v, inverted));
    let right = node.right().map(|v| render_lines(v, inverted));
    let left_bar = left.is_some() as isize;
    let right_bar = right.is_some() as isize;

    let left_block = left.unwrap_or_default();
    let right_block = right.unwrap_or_default();

    // Pad both child blocks to the same number of lines.
    let common_lines = left_block.len().min(right_block.len());
    let sub_level_lines = left_block.len().max(right_block.len());
    let left_lines = pad_lines(left_block, sub_level_lines);
    let right_lines = pad_lines(right_block, sub_level_lines);

    let left_widths = left_lines.iter().map(|v| width(v)).collect::<Vec<_>>();
    let right_indents = right_lines.iter().map(|v| indent(v)).collect::<Vec<_>>();

    let first_left_width = left_widths.first().copied().unwrap_or_default();
    let first_right_indent = right_indents.first().copied().unwrap_or_default();

    // Odd width labels are linked from a single centre column, even width
    // labels from the two centre columns.
    let link_spacing = label_width.min(2 - label_width % 2);
    let min_link_width = left_bar + link_spacing + right_bar;
    let value_offset = (label_width - link_spacing) / 2;

    // The column at which the right subtree starts, far enough from the left
    // subtree on every line they share.
    let right_node_position = left_widths
        .iter()
        .zip(&right_indents[..common_lines])
        .fold(first_left_width + min_link_width, |pos, (lw, ri)| {
            pos.max(lw + MIN_SPACING + first_right_indent - ri)
        });

    let link_extra_width = (right_node_position - first_left_width - min_link_width).max(0);
    let right_link_extra = link_extra_width / 2;
    let left_link_extra = link_extra_width - right_link_extra;

    let value_indent = (first_left_width + left_link_extra + left_bar - value_offset).max(0);
    let value_line = format!("{}{}", spaces(value_indent), label);

    let (slash, backslash, underline) = match inverted {
        true => ("\\", "/", "¯"),
        false => ("/", "\\", "_"),
    };

    let mut link_line = String::new();
    if left_bar == 1 {
        link_line.push_str(&spaces(first_left_width));
        link_line.push_str(&underline.repeat(left_link_extra as usize));
        link_line.push_str(slash);
    }
    if right_bar == 1 {
        let right_link_offset = link_spacing + value_offset * (1 - left_bar);
        link_line.push_str(&spaces(right_link_offset));
        link_line.push_str(backslash);
        link_line.push_str(&underline.repeat(right_link_extra as usize));
    }

    // Shift the left subtree right if the right subtree would otherwise start
    // before the column it was allocated.
    let left_indent_width = (first_right_indent - right_node_position).max(0);
    let left_indent = spaces(left_indent_width);

    // Merge each line of the left and right subtrees.
    let merged = left_lines.iter().zip(&right_lines).map(|(l, r)| {
        let mut line = String::new();
        if !l.is_empty() {
            line.push_str(&left_indent);
            line.push_str(l);
        }

        if r.is_empty() {
            return line;
        }

        let gap = left_indent_width + right_node_position - first_right_indent - width(&line);
        line.push_str(&spaces(gap));
        line.extend(r.chars().skip((-gap).max(0) as usize));
        line
    });

    let mut lines = vec![format!("{left_indent}{value_line}")];
    if !link_line.is_empty() {
        lines.push(format!("{left_indent}{link_line}"));
    }
    lines.extend(merged);
    lines
}

fn pad_lines(mut lines: Vec<String>, len: usize) -> Vec<String> {
    lines.resize(len, String::new());
    lines
}

/// The display width of `s`, in characters.
fn width(s: &str) -> isize {
    s.chars().count() as isize
}

/// The number of leading spaces in `s`.
fn indent(s: &str) -> isize {
    s.chars().take_while(|&c| c == ' ').count() as isize
}

fn spaces(n: isize) -> String {
    " ".repeat(n.max(0) as usize)
}
