//! Plain-text table printer for non-interactive output.

use super::common::TableViewModel;

const COLUMN_GAP: &str = "  ";

/// Renders the view model as aligned text: title, header, separator, rows.
pub fn render_plain(vm: &TableViewModel) -> String {
    let mut out = String::new();
    out.push_str(&vm.title);
    out.push('\n');

    push_line(&mut out, vm.headers.iter().map(String::as_str), &vm.widths);

    let total: usize = vm.widths.iter().map(|&w| w as usize).sum::<usize>()
        + COLUMN_GAP.len() * vm.widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');

    if vm.rows.is_empty() {
        out.push_str("(no rows)\n");
        return out;
    }

    for row in &vm.rows {
        push_line(&mut out, row.cells.iter().map(|c| c.text.as_str()), &vm.widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[u16]) {
    let mut line = String::new();
    for (i, (cell, &width)) in cells.zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        let pad = (width as usize).saturating_sub(cell.chars().count());
        line.extend(std::iter::repeat_n(' ', pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
