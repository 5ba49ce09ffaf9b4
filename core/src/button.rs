use crate::config::WINDOW_HEIGHT;

// Screen-space rectangle, edges inclusive
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ButtonRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        self.x <= px && px <= self.x + self.width && self.y <= py && py <= self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerMode {
    /// Fire every frame while hovered.
    Level,
    /// Fire once when the cursor enters the button.
    #[default]
    Edge,
}

/// Tracks last frame's hover state so a button can fire on transitions.
#[derive(Debug, Clone, Default)]
pub struct ButtonLatch {
    mode: TriggerMode,
    was_hovered: bool,
}

impl ButtonLatch {
    pub fn new(mode: TriggerMode) -> Self {
        Self {
            mode,
            was_hovered: false,
        }
    }

    pub fn update(&mut self, hovered: bool) -> bool {
        let fire = match self.mode {
            TriggerMode::Level => hovered,
            TriggerMode::Edge => hovered && !self.was_hovered,
        };
        self.was_hovered = hovered;
        fire
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    RandomizeSpeed,
    RandomizeEarthquakeProbability,
    PrintStats,
}

impl ButtonAction {
    pub const ALL: [ButtonAction; 3] = [
        ButtonAction::RandomizeSpeed,
        ButtonAction::RandomizeEarthquakeProbability,
        ButtonAction::PrintStats,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ButtonAction::RandomizeSpeed => "Adjust Speed",
            ButtonAction::RandomizeEarthquakeProbability => "Adjust Quake Prob.",
            ButtonAction::PrintStats => "Show Stats",
        }
    }

    // Bottom row, 200x50 each, 10 px apart
    pub fn rect(self) -> ButtonRect {
        let x = match self {
            ButtonAction::RandomizeSpeed => 10.0,
            ButtonAction::RandomizeEarthquakeProbability => 220.0,
            ButtonAction::PrintStats => 440.0,
        };
        ButtonRect::new(x, WINDOW_HEIGHT as f32 - 60.0, 200.0, 50.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_test() {
        let rect = ButtonRect::new(10.0, 10.0, 200.0, 50.0);
        assert!(rect.contains(15.0, 15.0));
        assert!(!rect.contains(300.0, 300.0));
        // edges count
        assert!(rect.contains(10.0, 60.0));
        assert!(rect.contains(210.0, 10.0));
        assert!(!rect.contains(210.5, 30.0));
    }

    #[test]
    fn level_fires_while_hovered() {
        let mut latch = ButtonLatch::new(TriggerMode::Level);
        let fired: Vec<bool> = [false, true, true, false, true]
            .into_iter()
            .map(|h| latch.update(h))
            .collect();
        assert_eq!(fired, [false, true, true, false, true]);
    }

    #[test]
    fn edge_fires_on_entry_only() {
        let mut latch = ButtonLatch::default();
        let fired: Vec<bool> = [false, true, true, false, true, true]
            .into_iter()
            .map(|h| latch.update(h))
            .collect();
        assert_eq!(fired, [false, true, false, false, true, false]);
    }

    #[test]
    fn buttons_do_not_overlap() {
        let rects: Vec<ButtonRect> = ButtonAction::ALL.iter().map(|a| a.rect()).collect();
        for (i, a) in rects.iter().enumerate() {
            for b in &rects[i + 1..] {
                assert!(a.x + a.width < b.x || b.x + b.width < a.x);
            }
            assert!(a.y + a.height <= WINDOW_HEIGHT as f32);
        }
    }
}
