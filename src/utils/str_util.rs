/// Returns true if all chars of this string are White_Space.
///
/// White_Space is specified in the Unicode Character Database:
/// [White_Space](https://www.unicode.org/Public/UCD/latest/ucd/PropList.txt)
pub fn is_blank(str: &str) -> bool {
    str.chars().all(|item| item.is_whitespace())
}
