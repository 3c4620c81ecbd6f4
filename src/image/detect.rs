//! Image format detection from magic bytes.

/// Detect MIME type from data magic bytes.
pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
    if data.len() < 8 {
        return None;
    }

    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }

    // GIF: GIF87a or GIF89a
    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }

    // BMP: BM
    if data.starts_with(b"BM") {
        return Some("image/bmp");
    }

    // WEBP: RIFF....WEBP
    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    None
}

/// Intrinsic pixel size as `(width, height)`.
///
/// Returns `None` for unknown formats, truncated headers, or a zero extent.
pub fn dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let size = match detect_mime_type(data)? {
        "image/png" => png_dimensions(data),
        "image/gif" => gif_dimensions(data),
        "image/bmp" => bmp_dimensions(data),
        "image/jpeg" => jpeg_dimensions(data),
        "image/webp" => webp_dimensions(data),
        _ => None,
    }?;

    (size.0 > 0 && size.1 > 0).then_some(size)
}

fn be_u16(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at + 2)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]) as u32)
}

fn le_u16(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]) as u32)
}

fn le_u24(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at + 3)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], 0]))
}

fn le_u32(data: &[u8], at: usize) -> Option<u32> {
    let bytes = data.get(at..at + 4)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

fn png_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    // Signature (8), chunk length (4), "IHDR" (4), then width and height.
    if data.get(12..16)? != b"IHDR" {
        return None;
    }
    let width = data.get(16..20)?;
    let height = data.get(20..24)?;
    Some((
        u32::from_be_bytes([width[0], width[1], width[2], width[3]]),
        u32::from_be_bytes([height[0], height[1], height[2], height[3]]),
    ))
}

fn gif_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    Some((le_u16(data, 6)?, le_u16(data, 8)?))
}

fn bmp_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let width = le_u32(data, 18)? as i32;
    // Negative height marks a top-down bitmap.
    let height = le_u32(data, 22)? as i32;
    Some((width.unsigned_abs(), height.unsigned_abs()))
}

fn jpeg_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    let mut i = 2;

    while i + 4 < data.len() {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }

        let marker = data[i + 1];
        // Start of frame, excluding DHT, JPG and DAC
        let is_frame = matches!(marker, 0xC0..=0xC3 | 0xC5..=0xC7 | 0xC9..=0xCB | 0xCD..=0xCF);
        if is_frame && i + 9 < data.len() {
            let height = be_u16(data, i + 5)?;
            let width = be_u16(data, i + 7)?;
            return Some((width, height));
        }

        let length = be_u16(data, i + 2)? as usize;
        i += 2 + length;
    }

    None
}

fn webp_dimensions(data: &[u8]) -> Option<(u32, u32)> {
    match data.get(12..16)? {
        b"VP8X" => Some((le_u24(data, 24)? + 1, le_u24(data, 27)? + 1)),
        b"VP8 " => Some((le_u16(data, 26)? & 0x3FFF, le_u16(data, 28)? & 0x3FFF)),
        b"VP8L" => {
            let bits = le_u32(data, 21)?;
            Some(((bits & 0x3FFF) + 1, ((bits >> 14) & 0x3FFF) + 1))
        }
        _ => None,
    }
}
