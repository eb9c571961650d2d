///
/// Ship-local coordinate of the located object.
///
/// - `x` - transverse, port is negative, starboard is positive,
/// - `y` - longitudinal, stern is negative, bow is positive,
/// - `z` - vertical, negative is below the main deck reference.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
//
//
impl Point {
    ///
    /// Creates a new instance.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}
//
//
impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}
