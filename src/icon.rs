use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, Rgb, RgbImage};

use crate::config::IconSpec;
use crate::error::IconError;

// Render the ring icon: outer disk in ring colour, inner disk painted back to background
pub fn render(spec: &IconSpec) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(spec.size, spec.size, spec.background);
    let c = spec.center();
    fill_disk(&mut canvas, c, c, spec.outer_radius, spec.ring);
    fill_disk(&mut canvas, c, c, spec.inner_radius, spec.background);
    canvas
}

/// Paint every pixel within `radius` of (cx, cy), inclusive, clipped to the canvas.
pub fn fill_disk(canvas: &mut RgbImage, cx: u32, cy: u32, radius: u32, color: Rgb<u8>) {
    let (w, h) = canvas.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let r2 = (radius as i64) * (radius as i64);
    let x0 = cx.saturating_sub(radius);
    let y0 = cy.saturating_sub(radius);
    let x1 = cx.saturating_add(radius).min(w - 1);
    let y1 = cy.saturating_add(radius).min(h - 1);

    for y in y0..=y1 {
        let dy = y as i64 - cy as i64;
        for x in x0..=x1 {
            let dx = x as i64 - cx as i64;
            if dx * dx + dy * dy <= r2 {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Encode the canvas as an 8-bit RGB png. Output depends only on the pixels.
pub fn encode_png(canvas: &RgbImage) -> Result<Vec<u8>, IconError> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ColorType::Rgb8,
    )?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn distance(x: u32, y: u32, c: u32) -> f64 {
        let dx = x as f64 - c as f64;
        let dy = y as f64 - c as f64;
        (dx * dx + dy * dy).sqrt()
    }

    #[test]
    fn scenario_pixels() {
        let img = render(&IconSpec::default());
        assert_eq!(img.dimensions(), (1024, 1024));
        assert_eq!(*img.get_pixel(512, 512), BLACK);
        assert_eq!(*img.get_pixel(512 + 390, 512), WHITE);
        assert_eq!(*img.get_pixel(512, 512 - 390), WHITE);
        assert_eq!(*img.get_pixel(512 + 500, 512), BLACK);
        assert_eq!(*img.get_pixel(0, 0), BLACK);
    }

    #[test]
    fn every_pixel_lands_in_its_region() {
        let spec = IconSpec::default();
        let img = render(&spec);
        let c = spec.center();
        let inner = spec.inner_radius as f64;
        let outer = spec.outer_radius as f64;
        for (x, y, px) in img.enumerate_pixels() {
            let d = distance(x, y, c);
            if (d - inner).abs() <= 1.0 || (d - outer).abs() <= 1.0 {
                continue;
            }
            let expected = if d > inner && d < outer { spec.ring } else { spec.background };
            assert_eq!(*px, expected, "pixel ({x}, {y}) at distance {d:.2}");
        }
    }

    #[test]
    fn only_two_colours_are_used() {
        let img = render(&IconSpec::default());
        assert!(img.pixels().all(|p| *p == BLACK || *p == WHITE));
    }

    #[test]
    fn disk_is_clipped_at_canvas_edge() {
        let mut img = RgbImage::from_pixel(16, 16, BLACK);
        fill_disk(&mut img, 0, 0, 40, WHITE);
        assert!(img.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn zero_radius_paints_single_pixel() {
        let mut img = RgbImage::from_pixel(8, 8, BLACK);
        fill_disk(&mut img, 4, 4, 0, WHITE);
        let painted: Vec<_> = img.enumerate_pixels().filter(|(_, _, p)| **p == WHITE).map(|(x, y, _)| (x, y)).collect();
        assert_eq!(painted, vec![(4, 4)]);
    }

    #[test]
    fn encoding_is_deterministic_rgb() {
        let img = render(&IconSpec::default());
        let a = encode_png(&img).unwrap();
        let b = encode_png(&img).unwrap();
        assert_eq!(a, b);
        assert_eq!(&a[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory_with_format(&a, image::ImageFormat::Png).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgb8);
        assert_eq!(decoded.to_rgb8(), img);
    }
}
