/// Column alignment taken from a table's divider row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Parses one divider cell such as `---`, `:---`, `---:` or `:---:`.
    ///
    /// At least three dashes are required once the colons are removed.
    pub fn parse(cell: &str) -> Option<Self> {
        let left = cell.starts_with(':');
        let right = cell.len() > 1 && cell.ends_with(':');
        let dashes = cell.strip_prefix(':').unwrap_or(cell);
        let dashes = dashes.strip_suffix(':').unwrap_or(dashes);
        if dashes.len() < 3 || !dashes.bytes().all(|b| b == b'-') {
            return None;
        }
        Some(match (left, right) {
            (true, true) => Self::Center,
            (false, true) => Self::Right,
            _ => Self::Left,
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Pipe table: header row, divider row, any number of body rows.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// Validates the table shape and returns the column alignments.
    ///
    /// Every row must be wrapped in pipes and have the header's pipe count,
    /// so every row splits into the same number of cells.
    pub fn alignments(block: &str) -> Option<Vec<Alignment>> {
        let mut rows = block.lines().map(str::trim);
        let header = rows.next()?;
        let pipes = Self::pipe_count(header)?;

        let divider = rows.next()?;
        if Self::pipe_count(divider)? != pipes {
            return None;
        }
        let alignments = Self::cells(divider)
            .map(Alignment::parse)
            .collect::<Option<Vec<_>>>()?;

        for row in rows {
            if Self::pipe_count(row)? != pipes {
                return None;
            }
        }
        Some(alignments)
    }

    /// Pipe count of a row wrapped in pipes, `None` for any other line.
    fn pipe_count(row: &str) -> Option<usize> {
        let wrapped = row.len() >= 2 && row.starts_with(Self::PIPE) && row.ends_with(Self::PIPE);
        wrapped.then(|| row.matches(Self::PIPE).count())
    }

    /// Trimmed cell contents of a row, outer pipes removed.
    pub fn cells(row: &str) -> impl Iterator<Item = &str> {
        let row = row.trim();
        let row = row.strip_prefix(Self::PIPE).unwrap_or(row);
        let row = row.strip_suffix(Self::PIPE).unwrap_or(row);
        row.split(Self::PIPE).map(str::trim)
    }
}
