mod about;
mod call_to_action;
mod date_time;
mod features;
mod game;
mod hero;
mod quick_info;

pub use about::AboutSection;
pub use call_to_action::CallToActionSection;
pub use date_time::DateTimeSection;
pub use features::FeaturesSection;
pub use game::GameSection;
pub use hero::HeroSection;
pub use quick_info::QuickInfoSection;

use crate::{icons::Icon, styles::Tone};

/// A card in one of the informational grids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfoCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub tone: Tone,
}
