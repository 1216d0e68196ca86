use glyph_corpus::image::RgbImageBuf;

/// Generates a white canvas.
pub fn white_canvas(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![255u8; width * height * 3]
}

/// Paints the filled rectangle `[x0, x1) × [y0, y1)` with a dark ink color.
pub fn paint_rect(
    data: &mut [u8],
    width: usize,
    x0: usize,
    x1: usize,
    y0: usize,
    y1: usize,
) {
    for y in y0..y1 {
        for x in x0..x1 {
            let i = (y * width + x) * 3;
            data[i..i + 3].copy_from_slice(&[15, 15, 15]);
        }
    }
}

/// White canvas with a single filled ink rectangle.
pub fn inked_rect_image(
    width: usize,
    height: usize,
    x0: usize,
    x1: usize,
    y0: usize,
    y1: usize,
) -> RgbImageBuf {
    let mut data = white_canvas(width, height);
    paint_rect(&mut data, width, x0, x1, y0, y1);
    RgbImageBuf::new(width, height, data)
}

/// A blocky digit-like glyph: two vertical strokes joined top and bottom,
/// roughly a "0", inside a margin of whitespace.
pub fn glyph_zero(width: usize, height: usize) -> RgbImageBuf {
    let mut data = white_canvas(width, height);
    let (x0, x1) = (width / 4, width - width / 4);
    let (y0, y1) = (height / 4, height - height / 4);
    let stroke = 6.max(width / 10);
    paint_rect(&mut data, width, x0, x1, y0, y0 + stroke); // top bar
    paint_rect(&mut data, width, x0, x1, y1 - stroke, y1); // bottom bar
    paint_rect(&mut data, width, x0, x0 + stroke, y0, y1); // left stroke
    paint_rect(&mut data, width, x1 - stroke, x1, y0, y1); // right stroke
    RgbImageBuf::new(width, height, data)
}
