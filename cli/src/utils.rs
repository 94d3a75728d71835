use linepath_core::ComparisonRow;

/// Path length cell shared by the table and the CSV report; `none` when the limit ran out.
pub fn format_path_length(row: &ComparisonRow) -> String {
    if row.path_found {
        row.path_length.to_string()
    } else {
        "none".to_string()
    }
}

/// Formats a count with thousands separators: `1234567` → `"1,234,567"`.
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

/// Renders positions the way the reports print them: `[9.2, 9.45, 9.7]`.
pub fn format_positions(positions: &[f64]) -> String {
    let joined = positions
        .iter()
        .map(|position| position.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}
