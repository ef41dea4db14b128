/// Document-absolute pointer position, i.e. `pageX`/`pageY`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl CursorPosition {
    #[inline]
    pub fn from_page(page_x: f64, page_y: f64) -> Self {
        Self {
            x: page_x,
            y: page_y,
        }
    }

    /// Inline style placing the follower under the pointer.
    pub fn style(&self) -> String {
        format!("top: {}px; left: {}px;", self.y, self.x)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter,
    Leave,
}

impl HoverEvent {
    #[inline]
    pub fn from_event_type(kind: &str) -> Option<HoverEvent> {
        match kind {
            "mouseover" => Some(HoverEvent::Enter),
            "mouseout" => Some(HoverEvent::Leave),
            _ => None,
        }
    }

    /// Whether the follower carries the hover mark after this event.
    #[inline]
    pub fn is_hovering(self) -> bool {
        matches!(self, HoverEvent::Enter)
    }
}
