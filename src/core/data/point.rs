/// Integer pixel position: `x` is the column, `y` the row counted from the top.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
