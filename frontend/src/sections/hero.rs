use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, animation::{self, HERO}, config::CONFIG, icons::Icon, styles::*};
use super::InfoCard;

const HIGHLIGHTS: [InfoCard; 3] = [
    InfoCard {
        icon: Icon::Calendar,
        title: "Flexible Schedule",
        description: "Compete at your own pace with our flexible timeline",
        tone: Tone::Primary,
    },
    InfoCard {
        icon: Icon::Trophy,
        title: "Custom Challenges",
        description: "Unique game designed specifically for innovation",
        tone: Tone::Secondary,
    },
    InfoCard {
        icon: Icon::Users,
        title: "Community Focus",
        description: "Connect with robotics enthusiasts worldwide",
        tone: Tone::Accent,
    },
];

#[function_component]
pub fn HeroSection() -> Html {
    html! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden pt-28">
            <div class="absolute inset-0 bg-gradient-to-br from-black via-gray-900 to-black" />
            <div class="absolute inset-0 opacity-20">
                <div class="absolute inset-0 bg-[linear-gradient(rgba(0,255,136,0.1)_1px,transparent_1px),linear-gradient(90deg,rgba(0,255,136,0.1)_1px,transparent_1px)] bg-[size:50px_50px]" />
            </div>

            <div class="relative z-10 text-center px-4 max-w-6xl mx-auto pb-8">
                <div class={combine_classes(animation::FADE_IN_UP, "mb-6")} style={HERO.style(0)}>
                    <span class="inline-block px-4 py-2 bg-primary/10 border border-primary/30 rounded-full text-primary font-medium text-sm tracking-wide uppercase">
                        {"Off-Season Competition"}
                    </span>
                </div>

                <h1 class={combine_classes(animation::FADE_IN_UP, "text-5xl md:text-7xl lg:text-8xl font-bold mb-6 leading-tight")}
                    style={HERO.style(1)}>
                    <span class="bg-gradient-to-r from-white via-primary to-accent bg-clip-text text-transparent">
                        {CONFIG.site_name}
                    </span>
                    <br />
                    <span class="text-white">{"Robotics"}</span>
                </h1>

                <p class={combine_classes(animation::FADE_IN_UP, "text-xl md:text-2xl text-gray-300 mb-8 max-w-3xl mx-auto leading-relaxed")}
                    style={HERO.style(2)}>
                    {"Join the ultimate off-season robotics competition where innovation meets engineering excellence. \
                      Design, build, and compete with cutting-edge robotics technology."}
                </p>

                <div class={combine_classes(animation::FADE_IN_UP, "flex flex-col sm:flex-row gap-4 justify-center items-center")}
                    style={HERO.style(3)}>
                    <Link<Route> to={Route::Register}
                        classes={classes!(BUTTON_BASE, BUTTON_PILL, "bg-gradient-to-r", "from-primary", "to-primary-dark", animation::GLOW)}>
                        {"Register Now"}
                    </Link<Route>>
                    <Link<Route> to={Route::About} classes={BUTTON_OUTLINE}>
                        {"Learn More"}
                    </Link<Route>>
                </div>

                <div class={combine_classes(animation::FADE_IN_UP, "mt-12 grid grid-cols-1 md:grid-cols-3 gap-8 max-w-4xl mx-auto")}
                    style={HERO.style(4)}>
                    {for HIGHLIGHTS.iter().map(|item| {
                        let tone = item.tone.classes();
                        html! {
                            <div class="text-center">
                                <div class={classes!("inline-block", "p-4", "rounded-full", "mb-4", "transition-transform", "hover:scale-110", tone.bg)}>
                                    {item.icon.render(&combine_classes("text-3xl", tone.text))}
                                </div>
                                <h3 class="text-xl font-semibold mb-2">{item.title}</h3>
                                <p class={TEXT_MUTED}>{item.description}</p>
                            </div>
                        }
                    })}
                </div>
            </div>
        </section>
    }
}
