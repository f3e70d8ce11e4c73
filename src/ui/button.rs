use macroquad::prelude::*;

/// Panel button with hover highlight
#[derive(Clone)]
pub struct Button {
    rect: Rect,
    label: String,
}

const IDLE_COLOR: Color = Color::new(0.27, 0.51, 0.71, 1.0);
const HOVER_COLOR: Color = Color::new(0.39, 0.58, 0.93, 1.0);
const FONT_SIZE: u16 = 20;

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, label: impl Into<String>) -> Self {
        Self {
            rect: Rect::new(x, y, width, height),
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Edges count as inside
    pub fn is_hovered(&self, (x, y): (f32, f32)) -> bool {
        x >= self.rect.x
            && x <= self.rect.right()
            && y >= self.rect.y
            && y <= self.rect.bottom()
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = if self.is_hovered(mouse_pos) { HOVER_COLOR } else { IDLE_COLOR };
        let Rect { x, y, w, h } = self.rect;

        draw_rectangle(x, y, w, h, color);
        draw_rectangle_lines(x, y, w, h, 2.0, WHITE);

        let text = measure_text(&self.label, None, FONT_SIZE, 1.0);
        draw_text(
            &self.label,
            x + (w - text.width) / 2.0,
            y + (h + text.height) / 2.0,
            FONT_SIZE as f32,
            WHITE,
        );
    }

    /// Check if button was clicked this frame
    pub fn is_clicked(&self, mouse_pos: (f32, f32)) -> bool {
        self.is_hovered(mouse_pos) && is_mouse_button_pressed(MouseButton::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_includes_edges() {
        let button = Button::new(10.0, 20.0, 100.0, 40.0, "Clear");
        assert!(button.is_hovered((10.0, 20.0)));
        assert!(button.is_hovered((110.0, 60.0)));
        assert!(button.is_hovered((50.0, 30.0)));
        assert!(!button.is_hovered((9.9, 30.0)));
        assert!(!button.is_hovered((50.0, 60.1)));
        assert_eq!(button.label(), "Clear");
    }
}
