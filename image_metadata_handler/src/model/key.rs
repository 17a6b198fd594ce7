/// Decodes an object key as it appears in a storage notification.
/// `+` is a space and percent escapes are decoded, so `my+photo.jpg` and `my%20photo.jpg` both
/// become `my photo.jpg`. Escapes that don't form valid UTF-8 are replaced with U+FFFD.
pub fn decode_object_key(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}
