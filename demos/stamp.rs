use pathway::*;
use std::env::args;

use core::f64::consts::PI;

// Lays out ticks along a rounded frame, the way a stamp gets its perforations.
fn main() {
	let divisions = args().nth(1).and_then(|a| a.parse().ok()).unwrap_or(24);

	let (w, h, r) = (200.0, 120.0, 15.0);
	let frame = Path::new(Vector2::new(r, 0.0))
		.line_to(Vector2::new(w - r, 0.0))
		.arc_to(PI / 2.0, Vector2::new(w - r, r))
		.line_to(Vector2::new(w, h - r))
		.arc_to(PI / 2.0, Vector2::new(w - r, h - r))
		.line_to(Vector2::new(r, h))
		.arc_to(PI / 2.0, Vector2::new(r, h - r))
		.line_to(Vector2::new(0.0, r))
		.arc_to(PI / 2.0, Vector2::new(r, r));

	if let Err(e) = frame.validate() {
		eprintln!("invalid frame: {}", e);
		return;
	}

	let bounds = frame.bounds();
	println!("frame: {} segments, length {:.3}", frame.len(), frame.length());
	println!("bounds: {:?} -> {:?}", bounds.min, bounds.max);

	// push every sample outwards by a fixed amount
	let perforations = frame.map(divisions, |point, _, ratio, source| {
		let normal = source.normal(ratio).unwrap();
		point - normal * 4.0
	});

	let vertices = Some(perforations.start())
		.into_iter()
		.chain(perforations.segments().iter().map(|s| s.end()));

	for (i, point) in vertices.enumerate() {
		let kind = frame.segment_at(i as f64 / divisions as f64).unwrap().segment_type();
		println!("{:>3} {:>14} ({:>8.3}, {:>8.3})", i, kind.as_str(), point.x, point.y);
	}
}
