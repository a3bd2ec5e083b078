use crate::constant::{MINIMUM_MIDDLE_WIDTH, NEW_LINE_DOC_INDENT};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub(crate) struct PaddingWidth(usize);

impl PaddingWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // padding must be at least 1
        if width >= 1 {
            Ok(PaddingWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct LeftWidth(usize);

impl LeftWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // left must be at least 1
        if width >= 1 {
            Ok(LeftWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct MiddleWidth(usize);

impl MiddleWidth {
    pub(crate) fn new(width: usize) -> Result<Self, ()> {
        // middle must be at least 2 (so we can hyphenate)
        if width >= 2 {
            Ok(MiddleWidth(width))
        } else {
            Err(())
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct TotalWidth(pub usize);

/// Renders rows of `left` + `documentation`, word-wrapping the documentation into the middle column.
#[derive(Debug)]
pub(crate) struct ColumnRenderer {
    padding: PaddingWidth,
    left: LeftWidth,
    middle: MiddleWidth,
    docs_on_new_line: bool,
}

impl ColumnRenderer {
    /// Produce a renderer whose rows (at `indent`) fit within the total width, when possible.
    /// The middle column never shrinks below [`MINIMUM_MIDDLE_WIDTH`].
    pub(crate) fn guided(
        padding: PaddingWidth,
        left: LeftWidth,
        total_width: TotalWidth,
        indent: usize,
        docs_on_new_line: bool,
    ) -> Self {
        let non_middle = if docs_on_new_line {
            indent + NEW_LINE_DOC_INDENT
        } else {
            indent + left.0 + padding.0
        };

        let middle = if non_middle + MINIMUM_MIDDLE_WIDTH <= total_width.0 {
            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Columns {non_middle} fit within the total {}.  Selecting middle: {}.",
                    total_width.0,
                    total_width.0 - non_middle
                );
            }

            total_width.0 - non_middle
        } else {
            #[cfg(feature = "tracing_debug")]
            {
                debug!(
                    "Columns {non_middle} do not fit within the total {}.  Selecting middle: {MINIMUM_MIDDLE_WIDTH}.",
                    total_width.0
                );
            }

            MINIMUM_MIDDLE_WIDTH
        };

        Self::new(
            padding,
            left,
            MiddleWidth::new(middle).expect("internal error - middle is never below the minimum width"),
            docs_on_new_line,
        )
    }

    pub(crate) fn new(
        padding: PaddingWidth,
        left: LeftWidth,
        middle: MiddleWidth,
        docs_on_new_line: bool,
    ) -> Self {
        Self {
            padding,
            left,
            middle,
            docs_on_new_line,
        }
    }

    pub(crate) fn render(&self, indent: usize, left: &str, middle: Option<&str>) -> Vec<String> {
        let middle_parts = middle
            .map(|paragraph| chunk(paragraph, self.middle.0))
            .unwrap_or_default();
        let mut out = vec![format!("{:indent$}{left}", "")];

        if self.docs_on_new_line {
            let doc_indent = indent + NEW_LINE_DOC_INDENT;
            out.extend(
                middle_parts
                    .into_iter()
                    .map(|part| format!("{:doc_indent$}{part}", "")),
            );
            return out;
        }

        let left_column_width = self.left.0;
        let padding = self.padding.0;

        for (i, part) in middle_parts.into_iter().enumerate() {
            if i == 0 {
                out[0] = format!("{:indent$}{left:left_column_width$}{:padding$}{part}", "", "");
            } else {
                out.push(format!(
                    "{:indent$}{:left_column_width$}{:padding$}{part}",
                    "", "", ""
                ));
            }
        }

        out
    }
}

/// Word-wrap `paragraph` into lines of at most `width` characters, hyphenating words that are too long.
pub(crate) fn chunk(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if current.is_empty() {
            hyphenate(width, &mut lines, &mut current, word);
        } else if current.chars().count() + word.chars().count() < width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            hyphenate(width, &mut lines, &mut current, word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

fn hyphenate(width: usize, lines: &mut Vec<String>, current: &mut String, word: &str) {
    let characters: Vec<char> = word.chars().collect();
    let increment = width - 1;
    let mut left = 0;

    while left + width < characters.len() {
        let piece: String = characters[left..left + increment].iter().collect();
        lines.push(format!("{piece}-"));
        left += increment;
    }

    current.extend(&characters[left..]);
}
