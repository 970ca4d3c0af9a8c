//! Entrance and hover timing. Keyframes live in the Tailwind config in `index.html`.

/// Fades an element up from below. Starts hidden until its delay elapses.
pub const FADE_IN_UP: &str = "animate-fade-in-up";
/// Drops the navigation bar in from above.
pub const SLIDE_IN_TOP: &str = "animate-slide-in-top";
pub const GLOW: &str = "animate-glow";

pub const HOVER_LIFT: &str = "transition-all duration-300 hover:scale-105 hover:-translate-y-2";
pub const HOVER_LIFT_SOFT: &str = "transition-all duration-300 hover:scale-[1.02] hover:-translate-y-1";
pub const HOVER_SPIN: &str = "transition-transform duration-500 group-hover:rotate-[360deg] group-hover:scale-110";
pub const HOVER_WIGGLE: &str = "transition-transform duration-500 group-hover:-rotate-6 group-hover:scale-110";

/// Per-item delays for a list that animates in one element after another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stagger {
    pub delay_ms: u32,
    pub step_ms: u32,
}

impl Stagger {
    pub const fn new(delay_ms: u32, step_ms: u32) -> Self {
        Self { delay_ms, step_ms }
    }

    pub fn delay_for(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay_ms.saturating_add(self.step_ms.saturating_mul(index))
    }

    pub fn style(&self, index: usize) -> String {
        format!("animation-delay: {}ms", self.delay_for(index))
    }
}

pub const HERO: Stagger = Stagger::new(300, 200);
pub const CARDS: Stagger = Stagger::new(0, 100);
pub const FEATURES: Stagger = Stagger::new(0, 150);
pub const CTA_CARDS: Stagger = Stagger::new(0, 200);

/// Delay for a single element, without a list.
pub fn delay(ms: u32) -> String {
    Stagger::new(ms, 0).style(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_grow_by_step() {
        assert_eq!(HERO.delay_for(0), 300);
        assert_eq!(HERO.delay_for(3), 900);
        assert_eq!(CARDS.style(2), "animation-delay: 200ms");
        assert_eq!(delay(400), "animation-delay: 400ms");
    }

    #[test]
    fn entrance_keyframes_release_transform_for_hover() {
        let page = include_str!("../index.html");
        assert!(page.contains(r#""fade-in-up": "fadeInUp 0.6s ease-out backwards""#));
        assert!(!page.contains("ease-out both"), "a held final keyframe would override hover transforms");
    }

    #[test]
    fn huge_index_saturates() {
        assert_eq!(Stagger::new(10, u32::MAX).delay_for(5), u32::MAX);
    }
}
