use ratatui::layout::Rect;

/// Splits the screen into top bar, center and hint line.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let top_height = area.height.min(3);
    let hint_height = 1.min(area.height.saturating_sub(top_height));
    let top = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: top_height,
    };
    let hint = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(hint_height),
        width: area.width,
        height: hint_height,
    };
    let center = Rect {
        x: area.x,
        y: area.y + top_height,
        width: area.width,
        height: area.height.saturating_sub(top_height + hint_height),
    };
    (top, center, hint)
}

/// A `width` x `height` rect centered in `area`, clipped to it.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
