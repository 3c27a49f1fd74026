//! Plain-text table rendering for error reports.

use crate::runge::ErrorRow;

/// Render error rows as a fixed-width table, one line per grid point.
///
/// Columns: index, abscissa, numeric value, Runge-rule estimate, absolute
/// deviation from the closed form, closed-form value. Values carry ten
/// fractional digits. The caller decides where the string goes; the library
/// never prints on its own.
pub fn render_table(rows: &[ErrorRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4} {:>17} {:>17} {:>17} {:>17} {:>17}\n",
        "i", "x", "y(x)", "Runge est.", "|y - exact|", "exact"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:>4} {:>17.10} {:>17.10} {:>17.10} {:>17.10} {:>17.10}\n",
            row.index, row.x, row.y, row.runge, row.abs_error, row.exact
        ));
    }
    out
}
