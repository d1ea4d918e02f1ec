#[derive(Debug, PartialEq)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Copy for Vec2<T> where T: Copy {}

impl<T> Clone for Vec2<T>
where
    T: Copy,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Vec2<f32> {
    /// Cell coordinates of a continuous point, truncating toward zero.
    pub fn truncate(self) -> Vec2<i64> {
        Vec2::new(self.x as i64, self.y as i64)
    }
}

impl Vec2<i32> {
    /// Maps a pixel position to the cell that contains it.
    pub fn to_cell(self, cell_size: f32) -> Vec2<i32> {
        Vec2::new(
            (self.x as f32 / cell_size).floor() as i32,
            (self.y as f32 / cell_size).floor() as i32,
        )
    }
}

impl<T> From<[T; 2]> for Vec2<T>
where
    T: Copy,
{
    fn from(array: [T; 2]) -> Self {
        Self {
            x: array[0],
            y: array[1],
        }
    }
}

impl<T> From<Vec2<T>> for [T; 2]
where
    T: Copy,
{
    fn from(v: Vec2<T>) -> Self {
        [v.x, v.y]
    }
}
