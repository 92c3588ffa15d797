//! Extract the `Location` header from captured response header lines.

/// Returns the first `Location` value among the collected header lines, or
/// `None` if the response carried no such header.
pub(crate) fn location(lines: &[String]) -> Option<String> {
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("location") {
                let value = value.trim();
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}
