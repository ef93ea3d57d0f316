use std::{borrow::Cow, fmt::Write};

const COLUMN_GAP: usize = 2;
const RULE_CHAR: char = '-';

#[derive(Clone, Copy, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Column-aligned plain-text tables: headers, a dashed rule, then rows.
pub struct TextTableBuilder<'a, Seq> {
    headers: &'a [Cow<'a, str>],
    rows: Vec<Seq>,
    alignments: Cow<'a, [Alignment]>,
}

impl<'a, Seq> TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]>,
{
    pub fn new() -> Self {
        Self {
            headers: &[],
            rows: Vec::new(),
            alignments: Cow::Borrowed(&[]),
        }
    }

    pub fn alignments(mut self, alignments: &'a [Alignment]) -> Self {
        self.alignments = Cow::Borrowed(alignments);
        self
    }

    pub fn headers(mut self, headers: &'a [Cow<'a, str>]) -> Self {
        self.headers = headers;
        if self.alignments.is_empty() {
            self.alignments = Cow::Owned(vec![Alignment::default(); self.headers.len()]);
        }
        self
    }

    pub fn row(mut self, row: Seq) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Seq>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn build(self) -> String {
        let col_count = self.headers.len();
        if col_count == 0 {
            return String::new();
        }

        let mut col_widths: Vec<usize> = self
            .headers
            .iter()
            .map(|header| header.chars().count())
            .collect();
        for row in &self.rows {
            for (idx, cell) in row.as_ref().iter().enumerate() {
                if idx < col_widths.len() {
                    col_widths[idx] = col_widths[idx].max(cell.chars().count());
                }
            }
        }

        let mut out = String::new();
        write_cells(&mut out, self.headers, &col_widths, &self.alignments);

        let rule: Vec<Cow<'_, str>> = col_widths
            .iter()
            .map(|width| Cow::Owned(RULE_CHAR.to_string().repeat(*width)))
            .collect();
        write_cells(&mut out, &rule, &col_widths, &self.alignments);

        for row in &self.rows {
            write_cells(&mut out, row.as_ref(), &col_widths, &self.alignments);
        }
        out
    }
}

impl<'a, Seq> Default for TextTableBuilder<'a, Seq>
where
    Seq: AsRef<[Cow<'a, str>]>,
{
    fn default() -> Self {
        Self::new()
    }
}

fn write_cells(out: &mut String, cells: &[Cow<'_, str>], widths: &[usize], aligns: &[Alignment]) {
    for (idx, width) in widths.iter().enumerate() {
        if idx > 0 {
            out.push_str(&" ".repeat(COLUMN_GAP));
        }
        let cell = cells.get(idx).map(Cow::as_ref).unwrap_or("");
        let align = aligns.get(idx).copied().unwrap_or_default();
        let pad = width.saturating_sub(cell.chars().count());
        match align {
            Alignment::Left => {
                // No trailing spaces on the last column.
                if idx + 1 == widths.len() {
                    let _ = write!(out, "{cell}");
                } else {
                    let _ = write!(out, "{cell}{}", " ".repeat(pad));
                }
            }
            Alignment::Right => {
                let _ = write!(out, "{}{cell}", " ".repeat(pad));
            }
        }
    }
    out.push('\n');
}
