use glyph_corpus::crop::crop;
use glyph_corpus::grid::block_grid;
use glyph_corpus::image::RgbImageBuf;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    // Demo stub: paints a synthetic glyph on a white canvas, crops it, and
    // prints the resulting block grid
    let w = 64usize;
    let h = 64usize;
    let mut data = vec![255u8; w * h * 3];
    // a thick "L" stroke
    for y in 10..50 {
        for x in 12..20 {
            paint(&mut data, w, x, y);
        }
    }
    for y in 42..50 {
        for x in 20..44 {
            paint(&mut data, w, x, y);
        }
    }

    let buffer = RgbImageBuf::new(w, h, data);
    let view = buffer.as_view();
    let cropped = crop(&view).map_err(|e| e.to_string())?;
    println!("cropped {}x{} -> {}x{}", w, h, cropped.w, cropped.h);

    let grid = block_grid(&cropped, 8).map_err(|e| e.to_string())?;
    print!("{}", grid.render());
    let vector = grid.unravel();
    println!("vector: {} bits", vector.len());
    Ok(())
}

fn paint(data: &mut [u8], width: usize, x: usize, y: usize) {
    let i = (y * width + x) * 3;
    data[i..i + 3].copy_from_slice(&[20, 20, 20]);
}
