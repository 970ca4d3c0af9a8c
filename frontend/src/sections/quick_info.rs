use yew::prelude::*;
use crate::{animation::{self, CARDS}, config::CONFIG, icons::Icon, styles::*};

struct QuickFact {
    icon: Icon,
    title: &'static str,
    value: &'static str,
    description: &'static str,
    tone: Tone,
}

const FACTS: [QuickFact; 4] = [
    QuickFact {
        icon: Icon::Clock,
        title: "Duration",
        value: "6 Weeks",
        description: "Flexible timeline for design & build",
        tone: Tone::Primary,
    },
    QuickFact {
        icon: Icon::MapPin,
        title: "Location",
        value: "Hybrid",
        description: "Virtual meetings, local competitions",
        tone: Tone::Accent,
    },
    QuickFact {
        icon: Icon::Trophy,
        title: "Categories",
        value: "4 Divisions",
        description: "Multiple skill levels welcome",
        tone: Tone::Secondary,
    },
    QuickFact {
        icon: Icon::DollarSign,
        title: "Entry Fee",
        value: "Free",
        description: "No cost to participate",
        tone: Tone::Success,
    },
];

const STATS: [(&str, &str, Tone); 3] = [
    ("100+", "Expected Teams", Tone::Primary),
    ("$5K+", "Total Prizes", Tone::Accent),
    ("24/7", "Mentor Support", Tone::Secondary),
];

#[function_component]
pub fn QuickInfoSection() -> Html {
    html! {
        <section class={SECTION}>
            <div class="absolute inset-0 bg-gradient-to-b from-black via-gray-900/50 to-black" />

            <div class={CONTAINER}>
                <div class={combine_classes(animation::FADE_IN_UP, "text-center mb-16")}>
                    <h2 class={HEADING_SECTION}>{"Competition Overview"}</h2>
                    <p class={LEAD}>
                        {format!("Get all the essential details about {}'s off-season robotics competition at a glance.", CONFIG.site_name)}
                    </p>
                </div>

                <div class={GRID_4}>
                    {for FACTS.iter().enumerate().map(|(index, fact)| {
                        let tone = fact.tone.classes();
                        html! {
                            <div class={classes!(animation::FADE_IN_UP, animation::HOVER_LIFT,
                                    "group", "bg-gray-900/50", "backdrop-blur-sm", "border", "border-gray-800",
                                    "rounded-2xl", "p-6", "text-center", "hover:border-primary/30")}
                                style={CARDS.style(index)}>
                                <div class={classes!("inline-flex", "items-center", "justify-center", "w-16", "h-16", "rounded-full", "mb-4", "group-hover:shadow-lg", tone.bg)}>
                                    {fact.icon.render(&format!("text-3xl {}", animation::HOVER_SPIN))}
                                </div>
                                <h3 class="text-gray-400 text-sm font-medium uppercase tracking-wide mb-2">{fact.title}</h3>
                                <div class={classes!("text-3xl", "font-bold", "mb-2", tone.text)}>{fact.value}</div>
                                <p class="text-gray-300 text-sm">{fact.description}</p>
                            </div>
                        }
                    })}
                </div>

                <div class={classes!(animation::FADE_IN_UP, PANEL_GRADIENT, "mt-16")} style={animation::delay(400)}>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 text-center">
                        {for STATS.iter().enumerate().map(|(index, (value, label, tone))| html! {
                            <div>
                                <div class={classes!(animation::FADE_IN_UP, "text-4xl", "font-bold", "mb-2", tone.classes().text)}
                                    style={animation::delay(600 + 100 * index as u32)}>
                                    {*value}
                                </div>
                                <p class="text-gray-300">{*label}</p>
                            </div>
                        })}
                    </div>
                </div>
            </div>
        </section>
    }
}
