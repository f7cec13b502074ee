use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Rectangle of `percent_x` by `percent_y` of `area`, centered in it
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Fixed-size rectangle centered in `area`, shrunk to fit
pub fn center_fixed(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Header / content / footer split used by every screen
pub fn create_standard_layout(area: Rect, header_height: u16, footer_height: u16) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Length(header_height),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(area)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_popup() {
        let popup = center_popup(Rect::new(0, 0, 100, 50), 60, 50);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 25);
        assert_eq!(popup.x, 20);
    }

    #[test]
    fn test_center_fixed_shrinks() {
        let rect = center_fixed(Rect::new(0, 0, 20, 10), 30, 4);
        assert_eq!(rect, Rect::new(0, 3, 20, 4));
    }

    #[test]
    fn test_standard_layout() {
        let [header, content, footer] = create_standard_layout(Rect::new(0, 0, 80, 24), 3, 1);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 1);
        assert_eq!(content.height, 20);
    }
}
