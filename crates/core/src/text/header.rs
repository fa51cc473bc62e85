//! HTTP header value scrubbing.

/// Replace every byte below 0x20 with a space, in place.
///
/// Header values are forwarded verbatim otherwise; stripping the
/// control range is enough to stop response splitting through CR/LF.
pub fn sanitize_header(value: &mut [u8]) {
    for byte in value.iter_mut() {
        if *byte < b' ' {
            *byte = b' ';
        }
    }
}
