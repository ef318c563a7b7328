use glam::{vec3, Vec3};
use vrdraw::render::RecordingRenderer;
use vrdraw::tracking::{HandFrame, ScriptedHand};
use vrdraw::{Color, DrawConfig, StrokeBuilder, TickOutcome};

#[derive(thiserror::Error, Debug)]
#[error("no global tracing subscriber set")]
struct NoTracingSubscriber;

fn configure_tracing() -> anyhow::Result<()> {
	let result: Result<(), _> = Err(NoTracingSubscriber);

	let result = result.or_else(|_| {
		let max_level = if cfg!(debug_assertions) {
			tracing::Level::TRACE
		} else {
			tracing::Level::INFO
		};
		tracing::subscriber::set_global_default(
			tracing_subscriber::FmtSubscriber::builder()
				.with_max_level(max_level)
				.finish(),
		)
	});

	Ok(result?)
}

fn configure_logging() -> anyhow::Result<()> {
	configure_tracing()?;

	// Redirect `log` to `tracing`. With the "log" feature on `tracing`, events fall back to `log`
	// if the subscriber above could not be installed.
	#[cfg(feature = "log")]
	tracing_log::LogTracer::init()?;

	Ok(())
}

/// Two loops of a helix, traced with the hand pinched on the way up and open on the way back.
fn demo_frames() -> impl Iterator<Item = HandFrame> {
	const STEPS: usize = 240;
	let untracked = std::iter::repeat(HandFrame::untracked()).take(10);
	let traced = (0..STEPS).map(|i| {
		let t = i as f32 / STEPS as f32;
		let angle = 2.0 * std::f32::consts::TAU * t;
		let position = vec3(angle.cos(), 1.0 + t, angle.sin()) + Vec3::new(0.0, 0.0, -2.0);
		if (i / 60) % 2 == 0 {
			HandFrame::pinched(position, 0.9)
		} else {
			HandFrame::open(position)
		}
	});
	untracked.chain(traced)
}

type DemoBuilder = StrokeBuilder<ScriptedHand, RecordingRenderer>;

const PALETTE: [&str; 3] = ["deepskyblue", "orange", "#7fff00"];

/// Replays the demo gesture, switching to the next palette color after every stroke.
fn run_demo() -> anyhow::Result<(DemoBuilder, usize)> {
	let config = DrawConfig::builder()
		.min_distance_before_new_point(0.1)
		.line_width(0.02)
		.build();
	let mut builder =
		StrokeBuilder::new(config, ScriptedHand::new(demo_frames()), RecordingRenderer::new())?;
	builder.set_line_color(Color::parse(PALETTE[0])?);

	let mut frames = 0;
	loop {
		if let TickOutcome::Finished = builder.tick() {
			let next = PALETTE[builder.strokes().len() % PALETTE.len()];
			builder.set_line_color(Color::parse(next)?);
		}
		frames += 1;
		if !builder.tracker_mut().advance() {
			break;
		}
	}
	// Release the last stroke.
	let last = builder.last_point();
	builder.tracker_mut().push(HandFrame::open(last));
	builder.tracker_mut().advance();
	builder.tick();
	frames += 1;

	Ok((builder, frames))
}

fn main() -> anyhow::Result<()> {
	if let Err(error) = configure_logging() {
		// We can technically continue without logging.
		tracing::error!(error = error.to_string());
	}

	let (builder, frames) = run_demo()?;
	for stroke in builder.strokes() {
		tracing::info!(
			label = stroke.label(),
			points = stroke.len(),
			length = stroke.length(),
			color = ?stroke.color().to_array(),
			"stroke"
		);
	}
	tracing::info!(
		frames,
		strokes = builder.strokes().len(),
		lines = builder.renderer().lines().len(),
		"done"
	);
	Ok(())
}
