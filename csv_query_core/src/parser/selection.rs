/// Splits a comma-separated column list. Order and duplicates are kept;
/// an empty list means "every column".
pub fn split_selection(selected_columns: &str) -> Vec<String> {
    if selected_columns.is_empty() {
        return Vec::new();
    }
    selected_columns.split(',').map(str::to_string).collect()
}
