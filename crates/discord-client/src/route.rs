//! Request path construction from untrusted segments.
//!
//! Every segment is checked for an (optionally percent-encoded) `/` and for
//! `.`/`..` before it is spliced into a template, so a caller-supplied ID can never address
//! a different API route.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::DiscordError;

/// Characters emitted verbatim: the URI-component unreserved set plus `:`, `?` and `@`.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b':')
    .remove(b'?')
    .remove(b'@');

const PLACEHOLDER: &str = "{}";

/// Percent-decode a single URI component.
///
/// Fails with [`DiscordError::InvalidSegment`] if the decoded bytes are not UTF-8.
pub fn decode_segment(segment: &str) -> Result<String, DiscordError> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|s| s.into_owned())
        .map_err(|_| DiscordError::InvalidSegment(segment.to_string()))
}

/// Encode one untrusted segment.
pub fn encode_segment(segment: &str) -> Result<String, DiscordError> {
    let decoded = decode_segment(segment)?;
    // Dot segments are normalized away by URL parsing.
    if decoded.contains('/') || decoded == "." || decoded == ".." {
        return Err(DiscordError::InvalidSegment(segment.to_string()));
    }

    Ok(utf8_percent_encode(segment, SEGMENT).to_string())
}

/// Fill each `{}` in `template` with the matching encoded segment.
///
/// ```
/// let path = discord_client::route::encode_route("/users/{}", &["1234"]).unwrap();
/// assert_eq!(path, "/users/1234");
/// ```
pub fn encode_route(template: &str, segments: &[&str]) -> Result<String, DiscordError> {
    let expected = template.matches(PLACEHOLDER).count();
    if expected != segments.len() {
        return Err(DiscordError::RouteTemplate {
            expected,
            got: segments.len(),
        });
    }

    let mut parts = template.split(PLACEHOLDER);
    let mut out = String::with_capacity(template.len());
    out.push_str(parts.next().unwrap_or_default());

    for (segment, literal) in segments.iter().zip(parts) {
        out.push_str(&encode_segment(segment)?);
        out.push_str(literal);
    }

    Ok(out)
}
