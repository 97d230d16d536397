use bt3zip::cli::size::{format_size, parse_size, read_u64_from_str};

#[test]
fn suffix_variants() {
    for s in ["2M", "2MB", "2Mi", "2MiB"] {
        assert_eq!(parse_size(s), Ok(2 << 20), "{}", s);
    }
}

#[test]
fn overflow_is_not_a_number() {
    assert_eq!(read_u64_from_str("99999999999999999999"), None);
    assert_eq!(read_u64_from_str("18446744073709551615G"), None);
}

#[test]
fn formatting_matches_savings_report_style() {
    assert_eq!(format_size(0), "0B");
    assert_eq!(format_size(1025), "1.00KB");
    assert_eq!(format_size(10 * 1024 * 1024 + 1), "10.00MB");
}
