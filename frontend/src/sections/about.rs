use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, animation::{self, CARDS}, config::CONFIG, icons::Icon, styles::*};
use super::InfoCard;

const VALUES: [InfoCard; 4] = [
    InfoCard {
        icon: Icon::Lightbulb,
        title: "Innovation",
        description: "Pushing the boundaries of robotics technology and creative problem-solving.",
        tone: Tone::Primary,
    },
    InfoCard {
        icon: Icon::Users,
        title: "Community",
        description: "Building a global network of passionate robotics enthusiasts and engineers.",
        tone: Tone::Accent,
    },
    InfoCard {
        icon: Icon::Trophy,
        title: "Excellence",
        description: "Maintaining the highest standards in competition design and execution.",
        tone: Tone::Secondary,
    },
    InfoCard {
        icon: Icon::Heart,
        title: "Passion",
        description: "Fostering genuine love for robotics, engineering, and technological advancement.",
        tone: Tone::Primary,
    },
];

const MILESTONES: [(&str, &str, &str); 5] = [
    ("2020", "SamosaTech Founded", "Started as a small community project to bridge the off-season gap"),
    ("2021", "First Competition", "50 teams participated in our inaugural virtual event"),
    ("2022", "Global Expansion", "Expanded to include international teams from 15 countries"),
    ("2023", "Hybrid Format", "Introduced innovative hybrid virtual-physical competition model"),
    ("2024", "Next Evolution", "Launching advanced AI integration and custom hardware platforms"),
];

struct Member {
    name: &'static str,
    role: &'static str,
    background: &'static str,
    icon: Icon,
}

const TEAM: [Member; 4] = [
    Member {
        name: "Dr. Sarah Chen",
        role: "Competition Director",
        background: "Former NASA engineer with 15+ years in robotics",
        icon: Icon::Zap,
    },
    Member {
        name: "Marcus Rodriguez",
        role: "Technical Lead",
        background: "Software architect specializing in autonomous systems",
        icon: Icon::Code,
    },
    Member {
        name: "Emily Johnson",
        role: "Community Manager",
        background: "Education specialist with robotics outreach experience",
        icon: Icon::Users,
    },
    Member {
        name: "Alex Kim",
        role: "Game Designer",
        background: "Former FRC mentor and competition game designer",
        icon: Icon::Target,
    },
];

/// Timeline entries alternate sides, starting on the left.
fn milestone_on_left(index: usize) -> bool {
    index % 2 == 0
}

fn render_milestone(index: usize, (year, title, description): (&str, &str, &str)) -> Html {
    let left = milestone_on_left(index);
    html! {
        <div class={classes!(animation::FADE_IN_UP, "flex", "items-center", if left { "flex-row" } else { "flex-row-reverse" })}
            style={CARDS.style(index)}>
            <div class={classes!("w-1/2", if left { "pr-8 text-right" } else { "pl-8" })}>
                <div class={classes!(animation::HOVER_LIFT_SOFT, "bg-gray-900/50", "backdrop-blur-sm", "border", "border-gray-800", "rounded-2xl", "p-6", "hover:border-primary/30")}>
                    <div class="text-2xl font-bold text-primary mb-2">{year.to_string()}</div>
                    <h3 class="text-lg font-semibold text-white mb-3">{title.to_string()}</h3>
                    <p class={TEXT_MUTED}>{description.to_string()}</p>
                </div>
            </div>
            <div class="relative z-10 flex items-center justify-center w-12 h-12 bg-gradient-to-r from-primary to-accent rounded-full border-4 border-black">
                <div class="w-4 h-4 bg-white rounded-full" />
            </div>
            <div class="w-1/2" />
        </div>
    }
}

#[function_component]
pub fn AboutSection() -> Html {
    html! {
        <section class={PAGE_SECTION}>
            <div class="max-w-7xl mx-auto">
                <div class={combine_classes(animation::FADE_IN_UP, "text-center mb-16")}>
                    <h1 class={HEADING_PAGE}>{format!("About {}", CONFIG.site_name)}</h1>
                    <p class={LEAD}>
                        {"Revolutionizing off-season robotics competitions through innovation, community, and cutting-edge technology."}
                    </p>
                </div>

                <div class={combine_classes(animation::FADE_IN_UP, "mb-20")} style={animation::delay(200)}>
                    <div class="bg-gradient-to-r from-primary/10 via-accent/10 to-secondary/10 backdrop-blur-sm border border-gray-800 rounded-2xl p-12 text-center">
                        <div class="inline-flex items-center justify-center w-20 h-20 bg-primary/10 rounded-full mb-8 transition-transform hover:scale-110 hover:rotate-6">
                            {Icon::Globe.render("text-4xl text-primary")}
                        </div>
                        <h2 class="text-3xl md:text-4xl font-bold text-white mb-6">{"Our Mission"}</h2>
                        <p class="text-lg text-gray-300 max-w-4xl mx-auto leading-relaxed">
                            {format!("{} exists to bridge the gap in off-season robotics competitions by providing innovative, \
                              accessible, and technically challenging events that foster learning, collaboration, and technological advancement. \
                              We believe that robotics education shouldn't pause during the off-season, and that every team deserves \
                              opportunities to grow, compete, and innovate year-round.", CONFIG.site_name)}
                        </p>
                    </div>
                </div>

                <div class="mb-20">
                    <h2 class={combine_classes(animation::FADE_IN_UP, HEADING_MD)}>{"Our Values"}</h2>
                    <div class={GRID_4}>
                        {for VALUES.iter().enumerate().map(|(index, value)| html! {
                            <div class={classes!(animation::FADE_IN_UP, animation::HOVER_LIFT, CARD_HOVER, "text-center", "hover:border-primary/30")}
                                style={CARDS.style(index)}>
                                <div class={classes!("inline-flex", "items-center", "justify-center", "w-16", "h-16", "rounded-full", "mb-6", "border", value.tone.badge())}>
                                    {value.icon.render(&format!("text-3xl {}", animation::HOVER_SPIN))}
                                </div>
                                <h3 class="text-xl font-bold text-white mb-4 group-hover:text-primary transition-colors">{value.title}</h3>
                                <p class="text-gray-400 group-hover:text-gray-300 transition-colors">{value.description}</p>
                            </div>
                        })}
                    </div>
                </div>

                <div class="mb-20">
                    <h2 class={combine_classes(animation::FADE_IN_UP, HEADING_MD)}>{"Our Journey"}</h2>
                    <div class="relative">
                        <div class="absolute left-1/2 transform -translate-x-1/2 w-1 h-full bg-gradient-to-b from-primary via-accent to-secondary rounded-full" />
                        <div class="space-y-12">
                            {for MILESTONES.iter().enumerate().map(|(index, milestone)| render_milestone(index, *milestone))}
                        </div>
                    </div>
                </div>

                <div class="mb-20">
                    <h2 class={combine_classes(animation::FADE_IN_UP, HEADING_MD)}>{"Meet Our Team"}</h2>
                    <div class={GRID_4}>
                        {for TEAM.iter().enumerate().map(|(index, member)| html! {
                            <div class={classes!(animation::FADE_IN_UP, animation::HOVER_LIFT, CARD_HOVER, "text-center", "hover:border-accent/30")}
                                style={CARDS.style(index)}>
                                <div class="inline-flex items-center justify-center w-16 h-16 bg-accent/10 rounded-full mb-6">
                                    {member.icon.render(&format!("text-3xl text-accent {}", animation::HOVER_SPIN))}
                                </div>
                                <h3 class="text-xl font-bold text-white mb-2 group-hover:text-accent transition-colors">{member.name}</h3>
                                <div class="text-accent font-medium mb-4 text-sm uppercase tracking-wide">{member.role}</div>
                                <p class="text-gray-400 text-sm group-hover:text-gray-300 transition-colors">{member.background}</p>
                            </div>
                        })}
                    </div>
                </div>

                <div class={classes!(animation::FADE_IN_UP, "bg-gradient-to-r", "from-primary/10", "via-accent/10", "to-secondary/10",
                        "backdrop-blur-sm", "border", "border-gray-800", "rounded-2xl", "p-12", "text-center")}>
                    <h3 class="text-2xl md:text-3xl font-bold text-white mb-6">{"Join Our Community"}</h3>
                    <p class="text-gray-300 mb-8 max-w-2xl mx-auto">
                        {format!("Whether you're a competitor, mentor, volunteer, or robotics enthusiast, \
                          there's a place for you in the {} community.", CONFIG.site_name)}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Link<Route> to={Route::Register}
                            classes={classes!(button_gradient(Tone::Primary, Tone::Accent), "px-8", "py-4", "rounded-full", "hover:shadow-primary/25")}>
                            {"Register for Competition"}
                        </Link<Route>>
                        <button type="button"
                            class="px-8 py-4 border-2 border-accent text-accent font-semibold rounded-full hover:bg-accent hover:text-black hover:scale-105 active:scale-95 transition-all duration-300">
                            {"Volunteer with Us"}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeline_alternates_sides() {
        let sides: Vec<bool> = (0..MILESTONES.len()).map(milestone_on_left).collect();
        assert_eq!(sides, [true, false, true, false, true]);
        assert_eq!(MILESTONES.first().map(|m| m.0), Some("2020"));
        assert_eq!(MILESTONES.last().map(|m| m.0), Some("2024"));
    }
}
