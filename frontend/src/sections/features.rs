use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, animation::{self, FEATURES}, config::CONFIG, icons::Icon, styles::*};
use super::InfoCard;

const FEATURE_CARDS: [InfoCard; 6] = [
    InfoCard {
        icon: Icon::Cpu,
        title: "Advanced Robotics",
        description: "Design and build sophisticated autonomous robots using cutting-edge technology and programming languages.",
        tone: Tone::Primary,
    },
    InfoCard {
        icon: Icon::Target,
        title: "Custom Game Design",
        description: "Experience our unique game challenges specifically crafted to test innovation and engineering skills.",
        tone: Tone::Accent,
    },
    InfoCard {
        icon: Icon::Brain,
        title: "AI Integration",
        description: "Incorporate artificial intelligence and machine learning algorithms into your robot designs.",
        tone: Tone::Secondary,
    },
    InfoCard {
        icon: Icon::Users,
        title: "Team Collaboration",
        description: "Work with diverse teams from around the world, fostering global connections and knowledge sharing.",
        tone: Tone::Primary,
    },
    InfoCard {
        icon: Icon::Wrench,
        title: "Engineering Excellence",
        description: "Apply real-world engineering principles and methodologies in a competitive environment.",
        tone: Tone::Accent,
    },
    InfoCard {
        icon: Icon::Zap,
        title: "Innovation Focus",
        description: "Push the boundaries of what's possible with creative solutions and breakthrough technologies.",
        tone: Tone::Secondary,
    },
];

#[function_component]
pub fn FeaturesSection() -> Html {
    html! {
        <section class={SECTION}>
            <div class="absolute inset-0 bg-gradient-to-br from-black via-gray-900 to-black" />
            <div class="absolute inset-0 opacity-10 bg-[linear-gradient(45deg,transparent_0%,rgba(0,255,136,0.1)_50%,transparent_100%)] bg-[length:100px_100px]" />

            <div class={CONTAINER}>
                <div class={combine_classes(animation::FADE_IN_UP, "text-center mb-16")}>
                    <h2 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary via-accent to-secondary bg-clip-text text-transparent">
                        {format!("Why Choose {}?", CONFIG.site_name)}
                    </h2>
                    <p class={LEAD}>
                        {"Experience the perfect blend of competition, learning, and innovation in our cutting-edge robotics platform."}
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {for FEATURE_CARDS.iter().enumerate().map(|(index, feature)| {
                        let tone = feature.tone.classes();
                        html! {
                            <div class={classes!(animation::FADE_IN_UP, animation::HOVER_LIFT_SOFT,
                                    "group", "bg-gray-900/30", "backdrop-blur-sm", "border", "rounded-2xl", "p-8",
                                    "hover:bg-gray-900/50", "hover:shadow-2xl", tone.border, tone.glow)}
                                style={FEATURES.style(index)}>
                                <div class={classes!("inline-flex", "items-center", "justify-center", "w-14", "h-14", "rounded-xl", "mb-6", "group-hover:shadow-lg", tone.bg)}>
                                    {feature.icon.render(&format!("text-2xl {} {}", tone.text, animation::HOVER_WIGGLE))}
                                </div>
                                <h3 class="text-xl font-bold text-white mb-4 group-hover:text-white/90 transition-colors">{feature.title}</h3>
                                <p class="text-gray-400 leading-relaxed group-hover:text-gray-300 transition-colors">{feature.description}</p>
                                <div class={classes!("h-0.5", "mt-6", "rounded-full", "w-0", "group-hover:w-full", "transition-all", "duration-300", tone.bg)} />
                            </div>
                        }
                    })}
                </div>

                <div class={combine_classes(animation::FADE_IN_UP, "text-center mt-16")} style={animation::delay(500)}>
                    <div class={combine_classes(PANEL_GRADIENT, "max-w-4xl mx-auto")}>
                        <h3 class={HEADING_SM}>{"Ready to Build the Future?"}</h3>
                        <p class="text-gray-300 mb-6 max-w-2xl mx-auto">
                            {"Join hundreds of innovators, engineers, and creators in the ultimate robotics competition experience."}
                        </p>
                        <Link<Route> to={Route::Game}
                            classes={classes!(button_gradient(Tone::Primary, Tone::Accent), BUTTON_PILL, "inline-block", Tone::Primary.classes().glow)}>
                            {"Explore Custom Game"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </section>
    }
}
