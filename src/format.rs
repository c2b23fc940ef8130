/// Human-readable count: as is below 1000, then one decimal with a `K`, `M` or
/// `B` suffix.
pub fn format_count(n: usize) -> String {
    #[allow(clippy::cast_precision_loss)]
    let value = n as f64;
    match n {
        0..1_000 => n.to_string(),
        1_000..1_000_000 => format!("{:.1}K", value / 1e3),
        1_000_000..1_000_000_000 => format!("{:.1}M", value / 1e6),
        _ => format!("{:.1}B", value / 1e9),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_counts_are_plain() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn large_counts_get_a_suffix() {
        assert_eq!(format_count(1_000), "1.0K");
        assert_eq!(format_count(1_234), "1.2K");
        assert_eq!(format_count(3_400_000), "3.4M");
        assert_eq!(format_count(5_600_000_000), "5.6B");
    }
}
