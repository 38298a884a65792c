use crum_dice::probability::ProbabilityTable;
use itertools::Itertools;

const CELL_WIDTH: usize = 15;

/// Fixed-width grid: rows are the user's dice, columns the opponent's
pub fn render_help_table(table: &ProbabilityTable) -> String {
    let dice = table.get_dice();
    let count = dice.len();
    let total_width = CELL_WIDTH * (count + 2) + count;
    let divider = format!("+{}+", "-".repeat(total_width - 2));

    let mut lines = vec!["Probability Table:".to_string()];
    lines.push(format!(
        "|{:<w$}| {} |",
        "User's Dice ↓",
        dice.iter()
            .map(|d| format!("{:<w$}", format!("[{d}]"), w = CELL_WIDTH))
            .join(" | "),
        w = CELL_WIDTH
    ));
    lines.push(divider.clone());

    for (row, d) in dice.iter().enumerate() {
        let cells = (0..count)
            .map(|col| {
                let p = table.get(row, col).unwrap_or_default();
                format!("{p:>w$.4} | ", w = CELL_WIDTH)
            })
            .join("");
        lines.push(format!(
            "{:<w$} | {}",
            format!("|[{d}]"),
            cells,
            w = CELL_WIDTH
        ));
        lines.push(divider.clone());
    }

    lines.join("\n")
}
