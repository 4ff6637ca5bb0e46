use ratatui::layout::{Rect, Size};

/// Return a rectangle of the given size centered in `area`, shrunk to fit if
/// `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(10, 4), Rect::new(35, 10, 10, 4))]
    #[case(Rect::new(5, 7, 20, 10), Size::new(10, 4), Rect::new(10, 10, 10, 4))]
    #[case(Rect::new(5, 7, 20, 10), Size::new(11, 5), Rect::new(9, 9, 11, 5))]
    #[case(Rect::new(5, 7, 20, 10), Size::new(30, 4), Rect::new(5, 10, 20, 4))]
    #[case(Rect::new(5, 7, 20, 10), Size::new(20, 10), Rect::new(5, 7, 20, 10))]
    #[case(Rect::ZERO, Size::new(3, 3), Rect::ZERO)]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] r: Rect) {
        assert_eq!(center_rect(area, size), r);
    }
}
