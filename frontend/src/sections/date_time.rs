use yew::prelude::*;
use crate::{animation::{self, CARDS}, config::CONFIG, icons::Icon, styles::*};

struct Phase {
    name: &'static str,
    dates: &'static str,
    time: &'static str,
    description: &'static str,
    icon: Icon,
    activities: [&'static str; 3],
}

const PHASES: [Phase; 4] = [
    Phase {
        name: "Registration",
        dates: "January 15 - February 15, 2024",
        time: "Open 24/7",
        description: "Team registration and initial submissions",
        icon: Icon::Users,
        activities: ["Team formation", "Initial documentation", "Resource allocation"],
    },
    Phase {
        name: "Design Phase",
        dates: "February 16 - March 15, 2024",
        time: "4 weeks duration",
        description: "Robot design and planning period",
        icon: Icon::Zap,
        activities: ["CAD modeling", "Strategy development", "Parts ordering"],
    },
    Phase {
        name: "Build Phase",
        dates: "March 16 - April 30, 2024",
        time: "6 weeks duration",
        description: "Construction and programming period",
        icon: Icon::Trophy,
        activities: ["Robot assembly", "Programming", "Testing & iteration"],
    },
    Phase {
        name: "Competition",
        dates: "May 1 - May 15, 2024",
        time: "Various time slots",
        description: "Final competition and awards",
        icon: Icon::Trophy,
        activities: ["Qualification matches", "Elimination rounds", "Awards ceremony"],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateKind {
    Registration,
    Announcement,
    Deadline,
    Event,
    Competition,
}

impl DateKind {
    fn tone(self) -> Tone {
        match self {
            DateKind::Registration => Tone::Primary,
            DateKind::Announcement => Tone::Accent,
            DateKind::Deadline => Tone::Danger,
            DateKind::Event => Tone::Secondary,
            DateKind::Competition => Tone::Success,
        }
    }
}

struct KeyDate {
    date: &'static str,
    event: &'static str,
    time: &'static str,
    kind: DateKind,
}

const KEY_DATES: [KeyDate; 6] = [
    KeyDate { date: "Jan 15", event: "Registration Opens", time: "12:00 AM EST", kind: DateKind::Registration },
    KeyDate { date: "Feb 1", event: "Game Reveal", time: "6:00 PM EST", kind: DateKind::Announcement },
    KeyDate { date: "Feb 15", event: "Registration Closes", time: "11:59 PM EST", kind: DateKind::Deadline },
    KeyDate { date: "Mar 1", event: "Kickoff Event", time: "2:00 PM EST", kind: DateKind::Event },
    KeyDate { date: "Apr 15", event: "Submission Deadline", time: "11:59 PM EST", kind: DateKind::Deadline },
    KeyDate { date: "May 1", event: "Competition Begins", time: "9:00 AM EST", kind: DateKind::Competition },
];

fn render_phase(index: usize, phase: &Phase) -> Html {
    html! {
        <div class={classes!(animation::FADE_IN_UP, animation::HOVER_LIFT_SOFT, CARD_HOVER, "hover:border-primary/30")}
            style={CARDS.style(index)}>
            <div class="flex items-start space-x-4">
                <div class="flex-shrink-0 w-14 h-14 bg-primary/10 rounded-xl flex items-center justify-center group-hover:bg-primary/20 transition-colors">
                    {phase.icon.render(&format!("text-2xl text-primary {}", animation::HOVER_SPIN))}
                </div>
                <div class="flex-1">
                    <h3 class="text-2xl font-bold text-white mb-2 group-hover:text-primary transition-colors">{phase.name}</h3>
                    <div class="flex flex-col sm:flex-row sm:items-center sm:space-x-6 mb-4">
                        <div class="flex items-center space-x-2 text-gray-300 mb-2 sm:mb-0">
                            {Icon::Calendar.render("text-sm")}
                            <span>{phase.dates}</span>
                        </div>
                        <div class="flex items-center space-x-2 text-gray-300">
                            {Icon::Clock.render("text-sm")}
                            <span>{phase.time}</span>
                        </div>
                    </div>
                    <p class="text-gray-400 mb-4 group-hover:text-gray-300 transition-colors">{phase.description}</p>
                    <div class="space-y-2">
                        <h4 class="text-sm font-semibold text-primary uppercase tracking-wide">{"Key Activities:"}</h4>
                        <ul class="space-y-1">
                            {for phase.activities.iter().map(|activity| html! {
                                <li class="text-sm text-gray-400 flex items-center space-x-2">
                                    <div class="w-1.5 h-1.5 bg-primary rounded-full flex-shrink-0" />
                                    <span>{*activity}</span>
                                </li>
                            })}
                        </ul>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component]
pub fn DateTimeSection() -> Html {
    html! {
        <section class={PAGE_SECTION}>
            <div class="max-w-7xl mx-auto">
                <div class={combine_classes(animation::FADE_IN_UP, "text-center mb-16")}>
                    <h1 class={HEADING_PAGE}>{"Competition Schedule"}</h1>
                    <p class={LEAD}>
                        {format!("Stay on track with all important dates, deadlines, and events for {} {}.", CONFIG.site_name, CONFIG.event_year)}
                    </p>
                </div>

                <div class="mb-20">
                    <h2 class={combine_classes(animation::FADE_IN_UP, HEADING_MD)}>{"Competition Phases"}</h2>
                    <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                        {for PHASES.iter().enumerate().map(|(index, phase)| render_phase(index, phase))}
                    </div>
                </div>

                <div class="mb-20">
                    <h2 class={combine_classes(animation::FADE_IN_UP, HEADING_MD)}>{"Important Dates"}</h2>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {for KEY_DATES.iter().enumerate().map(|(index, item)| html! {
                            <div class={classes!(animation::FADE_IN_UP, animation::HOVER_LIFT,
                                    "p-6", "rounded-2xl", "border", "backdrop-blur-sm", "hover:shadow-lg", item.kind.tone().badge())}
                                style={CARDS.style(index)}>
                                <div class="text-center">
                                    <div class="text-3xl font-bold mb-2">{item.date}</div>
                                    <h3 class="text-lg font-semibold text-white mb-2">{item.event}</h3>
                                    <div class="flex items-center justify-center space-x-2 text-sm text-gray-300">
                                        {Icon::Clock.render("")}
                                        <span>{item.time}</span>
                                    </div>
                                </div>
                            </div>
                        })}
                    </div>
                </div>

                <div class={classes!(animation::FADE_IN_UP, PANEL_GRADIENT)} style={animation::delay(300)}>
                    <div class="text-center max-w-4xl mx-auto">
                        <h3 class={HEADING_SM}>{"Weekly Check-ins & Support"}</h3>
                        <p class="text-gray-300 mb-6">
                            {"Join our weekly virtual meetings for updates, Q&A sessions, and technical support throughout the competition."}
                        </p>
                        <div class={GRID_2}>
                            <div class="text-center">
                                <div class="inline-flex items-center space-x-2 bg-gray-800/50 rounded-full px-4 py-2 mb-4">
                                    {Icon::MapPin.render("text-primary")}
                                    <span class="text-white font-medium">{"Virtual Meetings"}</span>
                                </div>
                                <p class={TEXT_MUTED}>{"Every Saturday at 2:00 PM EST via Zoom"}</p>
                            </div>
                            <div class="text-center">
                                <div class="inline-flex items-center space-x-2 bg-gray-800/50 rounded-full px-4 py-2 mb-4">
                                    {Icon::Users.render("text-accent")}
                                    <span class="text-white font-medium">{"Mentor Support"}</span>
                                </div>
                                <p class={TEXT_MUTED}>{"24/7 Discord support & office hours"}</p>
                            </div>
                        </div>
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
    fn deadlines_render_red() {
        assert_eq!(DateKind::Deadline.tone(), Tone::Danger);
        assert_eq!(DateKind::Competition.tone(), Tone::Success);
        let deadlines = KEY_DATES.iter().filter(|d| d.kind == DateKind::Deadline).count();
        assert_eq!(deadlines, 2);
    }
}
