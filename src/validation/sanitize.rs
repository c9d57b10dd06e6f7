use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b[^>]*>.*?</script>").expect("script pattern compiles")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern compiles"));

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("scheme pattern compiles"));

static EVENT_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\w+\s*=").expect("event pattern compiles"));

/// Strips script blocks, tag fragments, `javascript:` scheme prefixes, and
/// inline event-handler attributes from free-text input, then trims.
///
/// The strip passes repeat until the text stops changing: a single pass can
/// splice a new forbidden token together out of the removed pieces (for
/// example `java<b>script:`), and the fixed point is what makes the function
/// idempotent.
pub fn sanitize_input(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = strip_pass(&current);
        if next == current {
            return current.trim().to_string();
        }
        current = next;
    }
}

fn strip_pass(value: &str) -> String {
    let value = SCRIPT_BLOCK_RE.replace_all(value, "");
    let value = TAG_RE.replace_all(&value, "");
    let value = SCHEME_RE.replace_all(&value, "");
    EVENT_ATTR_RE.replace_all(&value, "").into_owned()
}
