//! softraster-demo: headless rasterization demo.
//!
//! Renders a fixed scene (pixel, line, two circles, a filled block) for a
//! number of frames and writes each frame as a PNG.
//!
//! Run: `cargo run --features cli --bin softraster-demo -- out/ 4`

#![cfg_attr(test, allow(clippy::unwrap_used))]

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use softraster::canvas::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use softraster::prelude::*;
use std::path::PathBuf;

/// Headless software rasterizer demo
#[derive(Parser, Debug)]
#[command(name = "softraster-demo")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Render the demo scene to numbered PNG frames", long_about = None)]
struct Cli {
    /// Directory to write frames into
    output: PathBuf,

    /// Number of frames to render
    #[arg(default_value = "1")]
    frames: u32,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut canvas = Canvas::builder()
        .dimensions(cli.width, cli.height)
        .line_algorithm(LineAlgorithm::Midpoint)
        .clear_color(Color::BLACK)
        .build()
        .context("failed to create canvas")?;
    let mut presenter = PngPresenter::new(&cli.output)
        .with_context(|| format!("cannot use {}", cli.output.display()))?;

    render_frames(&mut canvas, &mut presenter, cli.frames)?;

    info!(
        "wrote {} frame(s) to {}",
        presenter.frames(),
        cli.output.display()
    );
    Ok(())
}

/// Render and present `frames` frames of the scene.
///
/// Primitives that fall outside the canvas are skipped by the frame driver;
/// only presentation failures end the loop.
fn render_frames<P: Presenter>(
    canvas: &mut Canvas,
    presenter: &mut P,
    frames: u32,
) -> softraster::Result<Vec<FrameReport>> {
    let mut toggle = RedrawToggle::new();
    let mut reports = Vec::with_capacity(frames as usize);

    for _ in 0..frames {
        reports.push(canvas.render_frame(&scene(toggle.next())));
        presenter.present(canvas.buffer())?;
    }

    Ok(reports)
}

/// The demo scene; `marker` alternates between frames.
fn scene(marker: Color) -> Frame {
    let mut frame = Frame::new()
        .clear(Color::BLACK)
        .pixel(-100, 100, Color::WHITE)
        .pixel(-99, 100, marker)
        .line(LineSegment::new(-200, -200, -100, -100), Color::CYAN)
        .circle_with(
            Circle::new(200, 200, 20),
            Color::YELLOW,
            CircleAlgorithm::Midpoint,
        )
        .circle_with(
            Circle::new(0, 0, 100),
            Color::MAGENTA,
            CircleAlgorithm::SecondOrder,
        );

    for row in 150..=180 {
        frame = frame.span(row, -250, -150);
    }
    frame.fill(150, 180, Color::GREEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_survives_small_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let mut presenter = PngPresenter::new(dir.path()).unwrap();
        let mut canvas = Canvas::new(300, 300).unwrap();

        let reports = render_frames(&mut canvas, &mut presenter, 1).unwrap();

        assert_eq!(presenter.frames(), 1);
        assert!(dir.path().join("frame_0000.png").is_file());

        let frame = scene(Color::WHITE);
        let skipped: Vec<&str> = reports[0]
            .skipped
            .iter()
            .map(|s| frame.commands()[s.index].kind())
            .collect();
        assert_eq!(skipped, vec!["line", "midpoint circle", "fill"]);
        assert!(reports[0].skipped.iter().all(|s| s.error.is_out_of_bounds()));

        // The second-order circle fits and is drawn.
        assert_eq!(canvas.get_pixel(0, 100), Some(Color::MAGENTA));
        assert_eq!(canvas.get_pixel(-100, 100), Some(Color::WHITE));
    }

    #[test]
    fn test_scene_complete_on_default_canvas() {
        let dir = tempfile::tempdir().unwrap();
        let mut presenter = PngPresenter::new(dir.path()).unwrap();
        let mut canvas = Canvas::new(DEFAULT_WIDTH, DEFAULT_HEIGHT).unwrap();

        let reports = render_frames(&mut canvas, &mut presenter, 2).unwrap();

        assert!(reports.iter().all(FrameReport::is_complete));
        assert_eq!(presenter.frames(), 2);
        assert_eq!(canvas.get_pixel(200, 220), Some(Color::YELLOW));
        assert_eq!(canvas.get_pixel(-200, 150), Some(Color::GREEN));
        // Marker alternates: white on frame 0, black on frame 1.
        assert_eq!(canvas.get_pixel(-99, 100), Some(Color::BLACK));
    }
}
