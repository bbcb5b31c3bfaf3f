use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Iteration over the variants of a fieldless enum, in declaration order
pub(crate) trait EnumExt: Enum {
    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a `Rect` of the given size centered within `area`, shrunk to fit
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [rect] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(rect);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
    enum Abc {
        A,
        B,
        C,
    }

    #[test]
    fn enum_iter() {
        assert_eq!(Abc::iter().collect::<Vec<_>>(), [Abc::A, Abc::B, Abc::C]);
    }

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(20, 10), Rect::new(30, 7, 20, 10))]
    #[case(Rect::new(0, 0, 100, 30), Size::new(80, 24), Rect::new(10, 3, 80, 24))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }
}
