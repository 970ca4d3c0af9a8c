use yew::prelude::*;
use crate::{animation::{self, CARDS}, icons::Icon, styles::*};
use super::InfoCard;

const GAME_FEATURES: [InfoCard; 4] = [
    InfoCard {
        icon: Icon::Target,
        title: "Multi-Objective Scoring",
        description: "Robots must complete diverse tasks including autonomous navigation, object manipulation, and strategic positioning.",
        tone: Tone::Primary,
    },
    InfoCard {
        icon: Icon::Cpu,
        title: "AI Integration",
        description: "Advanced autonomous period requiring machine learning algorithms for optimal performance.",
        tone: Tone::Accent,
    },
    InfoCard {
        icon: Icon::Globe,
        title: "Environmental Challenges",
        description: "Dynamic field conditions that change throughout matches, testing adaptability.",
        tone: Tone::Secondary,
    },
    InfoCard {
        icon: Icon::Users,
        title: "Alliance Strategy",
        description: "Team up with other robots in strategic alliances to maximize scoring potential.",
        tone: Tone::Primary,
    },
];

const FIELD_ELEMENTS: [(Icon, &str, &str); 4] = [
    (Icon::Zap, "Energy Collection Zone", "Starting area where robots collect energy orbs"),
    (Icon::Cpu, "Power Core Station", "Central hub for activating power cores"),
    (Icon::Layers, "Charging Platforms", "Elevated platforms for end-game positioning"),
    (Icon::Users, "Alliance Bridge", "Cooperative element requiring team coordination"),
];

struct RuleGroup {
    category: &'static str,
    rules: [&'static str; 3],
}

const RULES: [RuleGroup; 3] = [
    RuleGroup {
        category: "Match Structure",
        rules: [
            "3-minute matches with 30-second autonomous period",
            "2v2 alliance format with strategic partnerships",
            "Best of 3 series in elimination rounds",
        ],
    },
    RuleGroup {
        category: "Scoring System",
        rules: [
            "Energy Orbs: 5 points each in storage zones",
            "Power Cores: 15 points when properly activated",
            "Alliance bonus: 25 points for successful cooperation",
        ],
    },
    RuleGroup {
        category: "Robot Specifications",
        rules: [
            "Maximum dimensions: 28\" x 38\" x 60\" (L x W x H)",
            "Weight limit: 125 lbs including battery",
            "Voltage limit: 12V DC with approved components",
        ],
    },
];

const AUTONOMOUS_TIPS: [&str; 3] = [
    "Prioritize energy orb collection in first 15 seconds",
    "Implement vision tracking for power core activation",
    "Plan fallback routines for field variations",
];

const ALLIANCE_TIPS: [&str; 3] = [
    "Establish clear communication protocols",
    "Practice coordinated bridge maneuvers",
    "Develop complementary robot designs",
];

fn render_tips(title: &str, tone: Tone, tips: &[&'static str]) -> Html {
    html! {
        <div>
            <h4 class={classes!("text-lg", "font-semibold", "mb-4", tone.classes().text)}>{title.to_string()}</h4>
            <ul class="space-y-2 text-gray-400">
                {for tips.iter().map(|tip| html! { <li>{format!("\u{2022} {}", tip)}</li> })}
            </ul>
        </div>
    }
}

#[function_component]
pub fn GameSection() -> Html {
    html! {
        <section class={PAGE_SECTION}>
            <div class="max-w-7xl mx-auto">
                <div class={combine_classes(animation::FADE_IN_UP, "text-center mb-16")}>
                    <h1 class={HEADING_PAGE}>{"Quantum Nexus"}</h1>
                    <p class={combine_classes(LEAD, "mb-8")}>
                        {"Our custom-designed robotics game challenges teams to master energy manipulation, autonomous navigation, \
                          and strategic alliance building in a dynamic competition environment."}
                    </p>
                    <div class={combine_classes(animation::FADE_IN_UP, "inline-flex items-center space-x-4 bg-gradient-to-r from-primary/10 to-accent/10 backdrop-blur-sm border border-gray-800 rounded-full px-6 py-3")}
                        style={animation::delay(200)}>
                        {Icon::Trophy.render("text-xl text-primary")}
                        <span class="text-white font-medium">{"Official Game Reveal: February 1st, 2024"}</span>
                    </div>
                </div>

                <div class="mb-20">
                    <h2 class={combine_classes(animation::FADE_IN_UP, HEADING_MD)}>{"Game Features"}</h2>
                    <div class={GRID_2}>
                        {for GAME_FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <div class={classes!(animation::FADE_IN_UP, animation::HOVER_LIFT_SOFT, CARD_HOVER, "hover:border-primary/30")}
                                style={CARDS.style(index)}>
                                <div class={classes!("inline-flex", "items-center", "justify-center", "w-14", "h-14", "rounded-xl", "mb-6", "border", feature.tone.badge())}>
                                    {feature.icon.render(&format!("text-2xl {}", animation::HOVER_SPIN))}
                                </div>
                                <h3 class="text-2xl font-bold text-white mb-4 group-hover:text-primary transition-colors">{feature.title}</h3>
                                <p class="text-gray-400 group-hover:text-gray-300 transition-colors leading-relaxed">{feature.description}</p>
                            </div>
                        })}
                    </div>
                </div>

                <div class="mb-20">
                    <h2 class={combine_classes(animation::FADE_IN_UP, HEADING_MD)}>{"Field Elements"}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                        {for FIELD_ELEMENTS.iter().enumerate().map(|(index, (icon, name, description))| html! {
                            <div class={classes!(animation::FADE_IN_UP, "group", "bg-gray-900/40", "backdrop-blur-sm", "border", "border-gray-800",
                                    "rounded-2xl", "p-6", "text-center", "hover:border-accent/30", "hover:scale-105", "transition-all", "duration-300")}
                                style={CARDS.style(index)}>
                                <div class="inline-flex items-center justify-center w-12 h-12 bg-accent/10 rounded-full mb-4 transition-transform group-hover:-translate-y-1">
                                    {icon.render("text-xl text-accent")}
                                </div>
                                <h3 class="text-lg font-semibold text-white mb-3">{*name}</h3>
                                <p class="text-gray-400 text-sm">{*description}</p>
                            </div>
                        })}
                    </div>
                </div>

                <div class="mb-20">
                    <h2 class={combine_classes(animation::FADE_IN_UP, HEADING_MD)}>{"Game Rules & Specifications"}</h2>
                    <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                        {for RULES.iter().enumerate().map(|(index, group)| html! {
                            <div class={classes!(animation::FADE_IN_UP, CARD)} style={CARDS.style(index)}>
                                <h3 class="text-xl font-bold text-primary mb-6">{group.category}</h3>
                                <ul class="space-y-4">
                                    {for group.rules.iter().map(|rule| html! {
                                        <li class="flex items-start space-x-3">
                                            <div class={classes!(BULLET, "bg-primary", "mt-2")} />
                                            <span class="text-gray-300 text-sm">{*rule}</span>
                                        </li>
                                    })}
                                </ul>
                            </div>
                        })}
                    </div>
                </div>

                <div class={classes!(animation::FADE_IN_UP, PANEL_GRADIENT)}>
                    <div class="text-center max-w-4xl mx-auto">
                        <div class="inline-flex items-center justify-center w-16 h-16 bg-secondary/10 rounded-full mb-6 transition-transform hover:scale-110 hover:rotate-6">
                            {Icon::Timer.render("text-3xl text-secondary")}
                        </div>
                        <h3 class={HEADING_SM}>{"Strategy Considerations"}</h3>
                        <p class="text-gray-300 mb-8">
                            {"Success in Quantum Nexus requires balancing autonomous efficiency with strategic alliance play. \
                              Teams must optimize for both individual scoring and cooperative bonuses."}
                        </p>
                        <div class={combine_classes(GRID_2, "text-left")}>
                            {render_tips("Autonomous Strategy", Tone::Primary, &AUTONOMOUS_TIPS)}
                            {render_tips("Alliance Coordination", Tone::Accent, &ALLIANCE_TIPS)}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
