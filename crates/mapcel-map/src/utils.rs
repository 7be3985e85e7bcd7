/// Normalizes a header for comparison: trimmed and lowercased.
///
/// Only used for matching; callers always get the original header back.
pub fn normalize_header(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_lowercases() {
        assert_eq!(normalize_header("  LaTitude\t"), "latitude");
        assert_eq!(normalize_header("Lon_Deg"), "lon_deg");
    }
}
