/// Integer extent in pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Component-wise integer division. `None` if either divisor component is zero.
    #[inline]
    pub fn checked_div(self, rhs: Size) -> Option<Size> {
        Some(Size::new(
            self.width.checked_div(rhs.width)?,
            self.height.checked_div(rhs.height)?,
        ))
    }
}
