/// Clean free-text restriction list input before it is stored.
///
/// Line breaks are kept since they delimit list entries. Within each line, HTML
/// tags and the bodies of `<script>`/`<style>` are removed, control characters
/// become spaces, whitespace runs collapse to one space and the ends are
/// trimmed. Blank lines are dropped.
pub fn sanitize_restriction_list(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(sanitize_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn sanitize_line(line: &str) -> String {
    let stripped = strip_tags(line);
    let spaced: String = stripped
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

// An unclosed `<` is kept as text. `<script>` and `<style>` lose their contents too.
fn strip_tags(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let Some(close) = rest[open..].find('>') else {
            out.push_str(&rest[open..]);
            rest = "";
            break;
        };
        let tag = &rest[open + 1..open + close];
        rest = &rest[open + close + 1..];
        if let Some(element) = raw_text_element(tag) {
            rest = skip_past_closing_tag(rest, element);
        }
    }
    out.push_str(rest);
    out
}

fn raw_text_element(tag: &str) -> Option<&'static str> {
    let name = tag
        .split(|c: char| c.is_whitespace() || c == '/')
        .next()
        .unwrap_or_default();
    RAW_TEXT_ELEMENTS
        .into_iter()
        .find(|element| name.eq_ignore_ascii_case(element))
}

// Drops everything up to and including `</element ...>`, or the rest of the line if unclosed.
fn skip_past_closing_tag<'a>(rest: &'a str, element: &str) -> &'a str {
    let lower = rest.to_ascii_lowercase();
    let needle = format!("</{element}");
    let Some(start) = lower.find(&needle) else {
        return "";
    };
    match rest[start..].find('>') {
        Some(end) => &rest[start + end + 1..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_one_entry_per_line() {
        assert_eq!(sanitize_restriction_list("a\n b \n\nc"), "a\nb\nc");
        assert_eq!(sanitize_restriction_list("a\r\nb\rc\r\n"), "a\nb\nc");
    }

    #[test]
    fn strips_tags_and_control_chars() {
        assert_eq!(sanitize_restriction_list("<b>siteurl</b>"), "siteurl");
        assert_eq!(sanitize_restriction_list("a < b"), "a < b");
        assert_eq!(sanitize_restriction_list("blog\tname\u{0}"), "blog name");
    }

    #[test]
    fn drops_script_and_style_contents() {
        assert_eq!(sanitize_restriction_list("<script>x</script>home"), "home");
        assert_eq!(sanitize_restriction_list("<SCRIPT type=\"a\">x()</Script >siteurl"), "siteurl");
        assert_eq!(sanitize_restriction_list("a<style>p{}</style>b"), "ab");
        assert_eq!(sanitize_restriction_list("<script>never closed\nhome"), "home");
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(sanitize_restriction_list(""), "");
        assert_eq!(sanitize_restriction_list("  \n<br>\n\t"), "");
    }
}
