//! Draws a small scene with gouache and writes it to `gouache-demo.png`.
//!
//! Usage: `gouache-demo [font.ttf]`. With a font path, a caption is
//! anchored to the bottom-right corner.

use anyhow::{Context, Result};

use gouache_raster::coords::{Point, Rect};
use gouache_raster::draw::{Draw, TextAnchor};
use gouache_raster::fill::flood_fill;
use gouache_raster::logging::{LoggingConfig, init_logging};
use gouache_raster::paint::Color;
use gouache_raster::pixel::{Ink, Mode, PixelBuffer, PixelSurface};
use gouache_raster::text::FontSystem;
use gouache_raster::text::layout::{AlignX, AlignY};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 240;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut surface = PixelBuffer::filled(Mode::Rgb, WIDTH, HEIGHT, Ink::rgb(24, 26, 32));
    draw_scene(&mut surface)?;

    // Flood-fill the pocket between the shapes.
    flood_fill(&mut surface, (40, 200), Ink::rgb(46, 52, 64), None);

    if let Some(path) = std::env::args().nth(1) {
        caption(&mut surface, &path)?;
    }

    let png = to_image(&surface);
    png.save("gouache-demo.png").context("writing gouache-demo.png")?;
    log::info!("wrote gouache-demo.png ({WIDTH}x{HEIGHT})");
    Ok(())
}

fn draw_scene(surface: &mut PixelBuffer) -> Result<()> {
    let mut ctx = Draw::new(surface);

    ctx.rectangle(
        Rect::new(20.0, 20.0, 300.0, 120.0),
        Some(&Color::name("midnightblue")),
        Some(&Color::name("lightsteelblue")),
    )?;

    ctx.ellipse(
        Rect::new(40.0, 40.0, 140.0, 100.0),
        Some(&Color::name("goldenrod")),
        Some(&Color::name("#fff8dc")),
    )?;

    ctx.pieslice(
        Rect::new(170.0, 30.0, 290.0, 110.0),
        30.0,
        300.0,
        Some(&Color::name("firebrick")),
        Some(&Color::name("mistyrose")),
    )?;

    ctx.polygon(
        &[
            Point::new(60.0, 150.0),
            Point::new(120.0, 220.0),
            Point::new(30.0, 210.0),
        ],
        Some(&Color::name("seagreen")),
        None,
    )?;

    ctx.line(
        &[
            Point::new(150.0, 150.0),
            Point::new(200.0, 200.0),
            Point::new(250.0, 150.0),
            Point::new(300.0, 220.0),
        ],
        Some(&Color::name("skyblue")),
        3,
    )?;

    ctx.arc(
        Rect::new(200.0, 140.0, 310.0, 230.0),
        180.0,
        360.0,
        Some(&Color::name("plum")),
    )?;

    Ok(())
}

fn caption(surface: &mut PixelBuffer, font_path: &str) -> Result<()> {
    let bytes = std::fs::read(font_path).with_context(|| format!("reading {font_path}"))?;
    let mut fonts = FontSystem::new();
    let id = fonts.load_font(&bytes).context("parsing font")?;
    let font = fonts
        .sized(id, 18.0)
        .context("font id vanished from its own system")?;

    let mut ctx = Draw::new(surface);
    ctx.text_anchored(
        "gouache",
        Some(&Color::name("whitesmoke")),
        Some(&font),
        &TextAnchor {
            origin: (-8, -8),
            align_x: AlignX::Right,
            align_y: AlignY::Bottom,
            ..TextAnchor::default()
        },
    )?;
    Ok(())
}

fn to_image(surface: &PixelBuffer) -> image::RgbImage {
    image::RgbImage::from_fn(surface.width(), surface.height(), |x, y| {
        let px = surface
            .get(x as i32, y as i32)
            .unwrap_or(Ink::rgb(0, 0, 0))
            .bytes();
        image::Rgb([px[0], px[1], px[2]])
    })
}
