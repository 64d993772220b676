use callisto_core::render::VisibleTile;

/// Convert a rendered tile (Array2<f32> in [0.0, 1.0]) to an egui ColorImage.
pub fn tile_to_color_image(tile: &VisibleTile) -> egui::ColorImage {
    let h = tile.dest_height();
    let w = tile.dest_width();
    let mut pixels = Vec::with_capacity(h * w);

    for row in 0..h {
        for col in 0..w {
            let v = (tile.pixels[[row, col]].clamp(0.0, 1.0) * 255.0) as u8;
            pixels.push(egui::Color32::from_gray(v));
        }
    }

    egui::ColorImage {
        size: [w, h],
        pixels,
        source_size: Default::default(),
    }
}
