use crate::segment::split_path;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Splits a request path into segments, percent-decoding each one when `decode` is set.
///
/// Decoding happens after the split, so an encoded `%2F` stays inside its segment.
pub(crate) fn request_segments(path: &str, strict_slash: bool, decode: bool) -> Vec<Cow<'_, str>> {
    split_path(path, strict_slash)
        .into_iter()
        .map(|seg| {
            if decode {
                decode_segment(seg)
            } else {
                Cow::Borrowed(seg)
            }
        })
        .collect()
}

/// Percent-decodes one path segment, replacing invalid UTF-8.
pub(crate) fn decode_segment(segment: &str) -> Cow<'_, str> {
    percent_decode_str(segment).decode_utf8_lossy()
}
