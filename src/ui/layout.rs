use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Regions of the quiz screen, top to bottom.
pub struct QuizLayout {
    pub header: Rect,
    pub card: Rect,
    pub progress: Rect,
    pub footer: Rect,
}

impl QuizLayout {
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        // Keep the card readable on wide terminals.
        let card_width = vertical[1].width.min(90);
        let card = Rect::new(
            vertical[1].x + (vertical[1].width - card_width) / 2,
            vertical[1].y,
            card_width,
            vertical[1].height,
        );

        Self {
            header: vertical[0],
            card,
            progress: vertical[2],
            footer: vertical[3],
        }
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 48;
    const MIN_POPUP_HEIGHT: u16 = 14;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_respects_minimum() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(10, 10, area);
        assert_eq!(rect.width, 48);
        assert_eq!(rect.height, 14);
        assert_eq!(rect.x, 16);
        assert_eq!(rect.y, 5);
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(50, 50, area);
        assert_eq!(rect, area);
    }

    #[test]
    fn test_quiz_layout_caps_card_width() {
        let layout = QuizLayout::new(Rect::new(0, 0, 200, 40));
        assert_eq!(layout.card.width, 90);
        assert_eq!(layout.card.x, 55);
        assert_eq!(layout.header.height, 1);
        assert_eq!(layout.progress.height, 3);
        assert_eq!(layout.footer.y, 39);
    }
}
