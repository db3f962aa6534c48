/// Merges two partial content spans. Incoming text is appended byte-exact to
/// whatever has accumulated so far; whitespace and token boundaries are
/// significant, so nothing is trimmed or normalized.
///
/// An absent or empty incoming span leaves the existing value untouched. An
/// incoming span with no existing value adopts the incoming text as-is.
pub fn append_content(existing: Option<String>, incoming: Option<&str>) -> Option<String> {
    match incoming {
        None | Some("") => existing,
        Some(span) => match existing {
            None => Some(span.to_string()),
            Some(mut accumulated) => {
                accumulated.push_str(span);
                Some(accumulated)
            }
        },
    }
}
