//! helper functions in this crate

/// Renders raw input for logs and error messages. Invalid sequences are
/// shown as `\xNN` escapes instead of being replaced.
pub fn bytes_to_printable_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            match c {
                '\r' => out.push_str("\\r"),
                '\n' => out.push_str("\\n"),
                _ => out.push(c),
            }
        }
        for b in chunk.invalid() {
            out.push_str(&format!("\\x{:02x}", b));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_str() {
        let bytes = "car\r\nt".as_bytes();
        assert_eq!(bytes_to_printable_string(bytes), "car\\r\\nt");
    }

    #[test]
    fn test_invalid_bytes() {
        let bytes = [b'c', 0xc3, b'a', 0xff];
        assert_eq!(bytes_to_printable_string(&bytes), "c\\xc3a\\xff");
    }
}
