use rstest::rstest;

use crate::parse::{parse_distance, read_records};

#[rstest]
#[case::plain("a, b ,c", b',', vec![vec!["a", "b", "c"]])]
#[case::quoted("\"San Jose, CR\";12", b';', vec![vec!["San Jose, CR", "12"]])]
#[case::escaped_quote("\"say \"\"hi\"\"\",x", b',', vec![vec!["say \"hi\"", "x"]])]
#[case::trailing_empty("a,b,", b',', vec![vec!["a", "b", ""]])]
#[case::quoted_line_break("\"a\nb\",c\nd,e", b',', vec![vec!["a\nb", "c"], vec!["d", "e"]])]
#[case::ragged_rows("a,b,c\nd", b',', vec![vec!["a", "b", "c"], vec!["d"]])]
#[case::blank_rows_dropped("a\n\n , \nb", b',', vec![vec!["a"], vec!["b"]])]
fn reads_records(#[case] text: &str, #[case] delimiter: u8, #[case] expected: Vec<Vec<&str>>) {
    let records = read_records(text, delimiter).expect("records must parse");
    assert_eq!(records, expected);
}

#[rstest]
#[case("12.5", Some(12.5))]
#[case("7", Some(7.0))]
#[case("", None)]
#[case("n/a", None)]
#[case("0", None)]
#[case("-3", None)]
#[case("inf", None)]
#[case("NaN", None)]
fn parses_only_usable_distances(#[case] cell: &str, #[case] expected: Option<f64>) {
    assert_eq!(parse_distance(cell), expected);
}
