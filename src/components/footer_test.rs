use super::*;

#[test]
fn copyright_line_includes_year() {
    assert_eq!(copyright_line(Some(2026)), "Blog Pessoal | Eduarda Valmor | Copyright: 2026");
}

#[test]
fn copyright_line_without_clock() {
    assert_eq!(copyright_line(None), "Blog Pessoal | Eduarda Valmor");
}
