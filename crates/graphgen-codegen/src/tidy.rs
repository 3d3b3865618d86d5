//! Output normalization applied to every rendered artifact.

/// Normalize rendered source text.
///
/// Trailing whitespace is stripped, runs of blank lines collapse to one,
/// blank lines directly after an opening `{` or before a closing `}` are
/// dropped, and the text ends with exactly one newline.
pub fn tidy(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut pending_blank = false;

    for raw in source.lines() {
        let line = raw.trim_end();
        if line.is_empty() {
            pending_blank = !out.is_empty() && !out.ends_with("{\n");
            continue;
        }
        if pending_blank && !line.trim_start().starts_with('}') {
            out.push('\n');
        }
        pending_blank = false;
        out.push_str(line);
        out.push('\n');
    }

    out
}
