pub const SECTION: &str = "py-20 px-4 relative overflow-hidden";
pub const PAGE_SECTION: &str = "pt-32 pb-20 px-4 min-h-screen";
pub const CONTAINER: &str = "relative z-10 max-w-7xl mx-auto";
pub const CONTAINER_SM: &str = "max-w-4xl mx-auto";

pub const CARD: &str = "bg-gray-900/50 backdrop-blur-sm border border-gray-800 rounded-2xl p-8";
pub const CARD_HOVER: &str = "group bg-gray-900/50 backdrop-blur-sm border border-gray-800 rounded-2xl p-8 transition-all duration-300";
pub const PANEL_GRADIENT: &str = "bg-gradient-to-r from-primary/10 via-accent/10 to-secondary/10 backdrop-blur-sm border border-gray-800 rounded-2xl p-8";

pub const INPUT_BASE: &str = "w-full px-4 py-3 bg-gray-800/50 border rounded-lg text-white placeholder-gray-400 transition-colors focus:outline-none focus:ring-2";
pub const INPUT_GROUP: &str = "flex flex-col";

pub const BUTTON_BASE: &str = "font-bold text-white transition-all duration-300 hover:shadow-lg hover:scale-105 active:scale-95";
pub const BUTTON_PILL: &str = "px-8 py-4 rounded-full text-lg";
pub const BUTTON_OUTLINE: &str = "px-8 py-4 border-2 border-white/30 text-white font-semibold rounded-full text-lg transition-all duration-300 hover:border-primary hover:text-primary hover:scale-105 backdrop-blur-sm";
pub const BUTTON_DISABLED: &str = "bg-gray-800 text-gray-500 cursor-not-allowed";

pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-300 mb-2";
pub const TEXT_ERROR: &str = "text-red-400 text-sm mt-1 flex items-center space-x-1";
pub const TEXT_MUTED: &str = "text-gray-400";
pub const HEADING_PAGE: &str = "text-5xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent";
pub const HEADING_SECTION: &str = "text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent";
pub const HEADING_MD: &str = "text-3xl font-bold text-center mb-12 text-white";
pub const HEADING_SM: &str = "text-2xl md:text-3xl font-bold text-white mb-4";
pub const LEAD: &str = "text-xl text-gray-300 max-w-3xl mx-auto";

pub const GRID_2: &str = "grid grid-cols-1 md:grid-cols-2 gap-8";
pub const GRID_3: &str = "grid grid-cols-1 md:grid-cols-3 gap-8";
pub const GRID_4: &str = "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8";
pub const BULLET: &str = "w-2 h-2 rounded-full flex-shrink-0";

/// Colour tag attached to display records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Accent,
    Secondary,
    Success,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneClasses {
    pub text: &'static str,
    pub bg: &'static str,
    pub solid: &'static str,
    pub border: &'static str,
    pub glow: &'static str,
    pub focus: &'static str,
}

impl Tone {
    pub const fn classes(self) -> ToneClasses {
        match self {
            Tone::Primary => ToneClasses {
                text: "text-primary",
                bg: "bg-primary/10",
                solid: "bg-primary hover:bg-primary-dark",
                border: "border-primary/30",
                glow: "hover:shadow-primary/25",
                focus: "focus:ring-primary/50 focus:border-primary",
            },
            Tone::Accent => ToneClasses {
                text: "text-accent",
                bg: "bg-accent/10",
                solid: "bg-accent hover:bg-blue-600",
                border: "border-accent/30",
                glow: "hover:shadow-accent/25",
                focus: "focus:ring-accent/50 focus:border-accent",
            },
            Tone::Secondary => ToneClasses {
                text: "text-secondary",
                bg: "bg-secondary/10",
                solid: "bg-secondary hover:bg-orange-600",
                border: "border-secondary/30",
                glow: "hover:shadow-secondary/25",
                focus: "focus:ring-secondary/50 focus:border-secondary",
            },
            Tone::Success => ToneClasses {
                text: "text-green-400",
                bg: "bg-green-400/10",
                solid: "bg-green-500 hover:bg-green-600",
                border: "border-green-400/30",
                glow: "hover:shadow-green-400/25",
                focus: "focus:ring-green-400/50 focus:border-green-400",
            },
            Tone::Danger => ToneClasses {
                text: "text-red-400",
                bg: "bg-red-400/10",
                solid: "bg-red-500 hover:bg-red-600",
                border: "border-red-400/30",
                glow: "hover:shadow-red-400/25",
                focus: "focus:ring-red-400/50 focus:border-red-400",
            },
        }
    }

    /// Text, background and border together, for badges and icon tiles.
    pub fn badge(self) -> String {
        let c = self.classes();
        format!("{} {} {}", c.text, c.bg, c.border)
    }
}

pub fn combine_classes(base: &str, additional: &str) -> String {
    format!("{} {}", base, additional)
}

pub fn button_gradient(from: Tone, to: Tone) -> String {
    let from = match from {
        Tone::Primary => "from-primary",
        Tone::Accent => "from-accent",
        Tone::Secondary => "from-secondary",
        Tone::Success => "from-green-400",
        Tone::Danger => "from-red-400",
    };
    let to = match to {
        Tone::Primary => "to-primary",
        Tone::Accent => "to-accent",
        Tone::Secondary => "to-secondary",
        Tone::Success => "to-green-400",
        Tone::Danger => "to-red-400",
    };
    format!("{} bg-gradient-to-r {} {}", BUTTON_BASE, from, to)
}

pub fn input_class(has_error: bool, tone: Tone) -> String {
    let border = if has_error {
        "border-red-500".to_string()
    } else {
        format!("border-gray-600 {}", tone.classes().focus)
    };
    combine_classes(INPUT_BASE, &border)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_map_to_their_colour() {
        assert_eq!(Tone::Primary.classes().text, "text-primary");
        assert_eq!(Tone::Accent.classes().border, "border-accent/30");
        assert_eq!(Tone::Danger.badge(), "text-red-400 bg-red-400/10 border-red-400/30");
    }

    #[test]
    fn error_state_overrides_focus_colour() {
        let class = input_class(true, Tone::Accent);
        assert!(class.contains("border-red-500"));
        assert!(!class.contains("focus:border-accent"));
        assert!(input_class(false, Tone::Accent).contains("focus:border-accent"));
    }
}
