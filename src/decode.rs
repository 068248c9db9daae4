use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

/// Picks the encoding from a leading byte order mark and returns it with the BOM length.
/// No BOM means UTF-8.
pub fn sniff_bom(bytes: &[u8]) -> (TextEncoding, usize) {
    match bytes {
        [0xFF, 0xFE, 0x00, 0x00, ..] => (TextEncoding::Utf32Le, 4),
        [0x00, 0x00, 0xFE, 0xFF, ..] => (TextEncoding::Utf32Be, 4),
        [0xEF, 0xBB, 0xBF, ..] => (TextEncoding::Utf8, 3),
        [0xFF, 0xFE, ..] => (TextEncoding::Utf16Le, 2),
        [0xFE, 0xFF, ..] => (TextEncoding::Utf16Be, 2),
        _ => (TextEncoding::Utf8, 0),
    }
}

/// Decodes file content to text. Malformed input is an `InvalidData` error, never replaced.
pub fn decode_text(bytes: &[u8]) -> io::Result<String> {
    let (encoding, bom_len) = sniff_bom(bytes);
    log::debug!("decoding as {:?}", encoding);
    let body = &bytes[bom_len..];
    match encoding {
        TextEncoding::Utf8 => std::str::from_utf8(body)
            .map(str::to_string)
            .map_err(|err| invalid_data(format!("invalid UTF-8: {err}"))),
        TextEncoding::Utf16Le => decode_utf16(body, u16::from_le_bytes),
        TextEncoding::Utf16Be => decode_utf16(body, u16::from_be_bytes),
        TextEncoding::Utf32Le => decode_utf32(body, u32::from_le_bytes),
        TextEncoding::Utf32Be => decode_utf32(body, u32::from_be_bytes),
    }
}

fn decode_utf16(body: &[u8], unit: fn([u8; 2]) -> u16) -> io::Result<String> {
    if body.len() % 2 != 0 {
        return Err(invalid_data("truncated UTF-16 code unit".to_string()));
    }
    let units = body.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|err| invalid_data(format!("invalid UTF-16: {err}")))
}

fn decode_utf32(body: &[u8], unit: fn([u8; 4]) -> u32) -> io::Result<String> {
    if body.len() % 4 != 0 {
        return Err(invalid_data("truncated UTF-32 code unit".to_string()));
    }
    body.chunks_exact(4)
        .map(|quad| {
            let code = unit([quad[0], quad[1], quad[2], quad[3]]);
            char::from_u32(code).ok_or_else(|| invalid_data(format!("invalid UTF-32: {code:#x}")))
        })
        .collect()
}

fn invalid_data(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}

#[cfg(test)]
mod test {
    use super::{decode_text, sniff_bom, TextEncoding};
    use std::io::ErrorKind;

    #[test]
    fn plain_bytes_are_utf8() {
        assert_eq!(sniff_bom(b"abc"), (TextEncoding::Utf8, 0));
        assert_eq!(decode_text("мир".as_bytes()).unwrap(), "мир");
        assert_eq!(decode_text(b"").unwrap(), "");
    }

    #[test]
    fn decode_each_bom() {
        assert_eq!(decode_text(b"\xEF\xBB\xBFabc").unwrap(), "abc");
        assert_eq!(decode_text(b"\xFF\xFEa\x00b\x00").unwrap(), "ab");
        assert_eq!(decode_text(b"\xFE\xFF\x00a\x00b").unwrap(), "ab");
        assert_eq!(decode_text(b"\xFF\xFE\x00\x00a\x00\x00\x00").unwrap(), "a");
        assert_eq!(decode_text(b"\x00\x00\xFE\xFF\x00\x00\x00a").unwrap(), "a");
    }

    #[test]
    fn decode_utf16_surrogate_pair() {
        // U+1F980 as D83E DD80
        assert_eq!(decode_text(b"\xFF\xFE\x3E\xD8\x80\xDD").unwrap(), "🦀");
    }

    #[test]
    fn reject_malformed_text() {
        let cases: [&[u8]; 4] = [
            b"a\xFFb",
            b"\xFF\xFEa",
            b"\xFF\xFE\x00\xDC",
            b"\xFF\xFE\x00\x00\x00\x00\x11\x00",
        ];
        for bytes in cases {
            let err = decode_text(bytes).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{bytes:?}");
        }
    }
}
