use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    AlertCircle,
    ArrowRight,
    Brain,
    Calendar,
    CheckCircle,
    Clock,
    Code,
    Cpu,
    DollarSign,
    Globe,
    Heart,
    Layers,
    Lightbulb,
    MapPin,
    Menu,
    Target,
    Timer,
    Trophy,
    User,
    Users,
    Wrench,
    X,
    Zap,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::AlertCircle => "\u{26A0}",
            Icon::ArrowRight => "\u{2192}",
            Icon::Brain => "\u{1F9E0}",
            Icon::Calendar => "\u{1F4C5}",
            Icon::CheckCircle => "\u{2714}",
            Icon::Clock => "\u{23F0}",
            Icon::Code => "\u{2328}",
            Icon::Cpu => "\u{1F4BB}",
            Icon::DollarSign => "$",
            Icon::Globe => "\u{1F310}",
            Icon::Heart => "\u{2665}",
            Icon::Layers => "\u{1F4DA}",
            Icon::Lightbulb => "\u{1F4A1}",
            Icon::MapPin => "\u{1F4CD}",
            Icon::Menu => "\u{2630}",
            Icon::Target => "\u{1F3AF}",
            Icon::Timer => "\u{23F1}",
            Icon::Trophy => "\u{1F3C6}",
            Icon::User => "\u{1F464}",
            Icon::Users => "\u{1F465}",
            Icon::Wrench => "\u{1F527}",
            Icon::X => "\u{2715}",
            Icon::Zap => "\u{26A1}",
        }
    }

    pub fn render(self, class: &str) -> Html {
        html! {
            <span class={classes!("inline-flex", "items-center", "justify-center", "leading-none", class.to_string())}
                aria-hidden="true">
                {self.glyph()}
            </span>
        }
    }
}
