use rhumb::{Angle, Polar, Vector, XY};

fn main() {
    println!("Rhumb Heading Demonstration");
    println!("===========================\n");

    // Angles accumulate without wrapping
    let quarter = Angle::from_degrees(90.0);
    let spun = quarter + Angle::from_degrees(540.0);
    println!("90 deg plus 540 deg: {}", spun);
    println!("Same heading on the compass: {}", spun.wrap());
    println!("Same heading as a signed turn: {}", spun.wrap_navigation());

    // Radians in, degrees out
    let from_radians = Angle::from_radians(1.0);
    println!("\nOne radian: {}", from_radians);
    println!("Back to radians: {:.6}", from_radians.to_radians());

    // A leg described by heading and distance
    let leg = Polar::from_degrees(5.0, 30.0);
    println!("\nLeg of 5 at heading 30 deg: {}", leg);
    println!("  x (rightward): {:.4}", leg.x());
    println!("  y (forward):   {:.4}", leg.y());

    // The same leg in cartesian form
    let cartesian = XY::new(leg.x(), leg.y());
    println!("Cartesian form: {}", cartesian);
    println!("  magnitude: {:.4}", cartesian.magnitude());
    println!("  heading:   {}", cartesian.angle());

    // Representations mix freely in vector math
    let drift = XY::new(1.0, 1.0);
    let track = leg.add(&drift);
    println!("\nLeg plus drift of (1, 1): {}", track);
    println!("Dot product of leg and drift: {:.4}", leg.dot(&drift));

    // Canonicalizing a polar reading
    let reversed = Polar::from_degrees(-3.0, 180.0);
    println!("\nReversed reading: {}", reversed);
    println!("Canonical form:   {}", reversed.wrap());

    // Wrapping into a caller-chosen window
    let long_way = Angle::from_degrees(900.0);
    match long_way.wrap_range(Angle::from_degrees(-180.0), Angle::from_degrees(540.0)) {
        Ok(wrapped) => println!("\n900 deg folded into [-180, 540): {}", wrapped),
        Err(e) => println!("\nWrap failed: {}", e),
    }

    // Windows narrower than a full turn are rejected
    match Angle::from_degrees(45.0).wrap_range(Angle::ZERO, Angle::from_degrees(90.0)) {
        Ok(wrapped) => println!("Unexpected wrap: {}", wrapped),
        Err(e) => println!("Rejected window: {}", e),
    }
}
