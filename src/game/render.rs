use std::fmt;

use super::PegBoard;

const PEG_SPACING: &str = "  ";

/// Draw one disk (or an empty slot) centred in a column of `width` characters.
fn disk_cell(size: Option<usize>, width: usize) -> String {
    match size {
        None => " ".repeat(width),
        Some(size) => {
            let body = 2 * size - 1;
            let pad = " ".repeat((width - body) / 2);
            format!("{pad}{}{pad}", "-".repeat(body))
        }
    }
}

/// ASCII picture of the board, highest row first, closed by one base per peg.
impl fmt::Display for PegBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let largest = self
            .pegs()
            .iter()
            .flat_map(|peg| peg.disks())
            .map(|disk| disk.size())
            .max()
            .unwrap_or(0);
        let width = 2 * largest + 1;

        for height in (0..self.disk_count()).rev() {
            let row = self
                .pegs()
                .iter()
                .map(|peg| disk_cell(peg.disk_at(height).map(|d| d.size()), width))
                .collect::<Vec<_>>()
                .join(PEG_SPACING);
            writeln!(f, "{}", row.trim_end())?;
        }

        let base = vec!["=".repeat(width); self.peg_count()].join(PEG_SPACING);
        write!(f, "{base}")
    }
}
