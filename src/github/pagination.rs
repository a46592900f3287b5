/// Relation part a `Link` segment must carry to be followed.
const NEXT_RELATION: &str = r#"rel="next""#;

/// Extracts the `rel="next"` URL from a `Link` header value.
///
/// The header is split on commas into `<url>; rel="relation"` segments, and each
/// segment on semicolons. A segment qualifies when its first part is an
/// angle-bracket-delimited URL and its second part, trimmed, is exactly
/// `rel="next"`. Segments that do not fit this shape are skipped.
///
/// Returns the first qualifying URL with the brackets stripped, or `None` when
/// the header is absent or nothing qualifies.
pub fn next_url(link: Option<&str>) -> Option<String> {
    link?.split(',').find_map(|segment| {
        let mut parts = segment.split(';');
        let target = parts.next()?.trim();
        let relation = parts.next()?.trim();
        if relation != NEXT_RELATION {
            return None;
        }

        let url = target.strip_prefix('<')?.strip_suffix('>')?.trim();
        (!url.is_empty()).then(|| url.to_string())
    })
}
