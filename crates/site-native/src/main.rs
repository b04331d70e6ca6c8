use clap::Parser;
use site_core::{Scene, Viewport, FOCAL_LENGTH, PARTICLE_COUNT};

/// Headless soak run of the site animation core: steps the scene for a
/// number of frames and checks the per-frame invariants hold.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u32,
    /// Viewport width in CSS pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    /// Viewport height in CSS pixels
    #[arg(long, default_value_t = 800.0)]
    height: f32,
    /// Scene seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut scene = Scene::new(Viewport::new(args.width, args.height, 1.0), args.seed);
    let dt = 1.0 / 60.0;

    for frame in 0..args.frames {
        scene.tick(dt);
        let plan = scene.frame();

        if plan.helix.dots.len() != 2 * PARTICLE_COUNT {
            anyhow::bail!(
                "frame {frame}: dot count {} != {}",
                plan.helix.dots.len(),
                2 * PARTICLE_COUNT
            );
        }
        for particle in scene.particles() {
            if particle.current_radius < 0.0 {
                anyhow::bail!("frame {frame}: negative particle radius");
            }
        }
        for dot in &plan.helix.dots {
            if !dot.alpha.is_finite() || !dot.radius.is_finite() {
                anyhow::bail!("frame {frame}: non-finite dot");
            }
        }

        if frame % 120 == 0 {
            log::info!(
                "frame {frame}: angle={:.3} rungs={} segments={} dots={} ripples={}",
                scene.global_angle(),
                plan.helix.base_pairs.len(),
                plan.helix.strand_segments.len(),
                plan.helix.dots.len(),
                scene.ripple_count()
            );
        }
    }

    println!(
        "ok: {} frames at {}x{} (focal length {})",
        args.frames, args.width, args.height, FOCAL_LENGTH
    );
    Ok(())
}
