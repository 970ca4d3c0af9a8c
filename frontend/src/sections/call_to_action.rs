use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, animation::{self, CTA_CARDS}, config::CONFIG, icons::Icon, styles::*};

struct RouteCard {
    icon: Icon,
    title: &'static str,
    description: &'static str,
    route: Route,
    button_text: &'static str,
    tone: Tone,
}

const ROUTE_CARDS: [RouteCard; 3] = [
    RouteCard {
        icon: Icon::Calendar,
        title: "Check Schedule",
        description: "View important dates and competition timeline",
        route: Route::DateTime,
        button_text: "View Dates",
        tone: Tone::Primary,
    },
    RouteCard {
        icon: Icon::Users,
        title: "Learn About Us",
        description: "Discover the story behind SamosaTech",
        route: Route::About,
        button_text: "About Us",
        tone: Tone::Accent,
    },
    RouteCard {
        icon: Icon::Trophy,
        title: "Register Now",
        description: "Secure your spot in the competition",
        route: Route::Register,
        button_text: "Register",
        tone: Tone::Secondary,
    },
];

#[function_component]
pub fn CallToActionSection() -> Html {
    html! {
        <section class={SECTION}>
            <div class="absolute inset-0 bg-gradient-to-t from-black via-gray-900 to-black" />
            <div class="absolute inset-0 bg-[radial-gradient(circle_at_center,rgba(0,255,136,0.1)_0%,transparent_70%)]" />

            <div class={CONTAINER}>
                <div class="text-center mb-16">
                    <h2 class={combine_classes(animation::FADE_IN_UP, "text-4xl md:text-6xl font-bold mb-6 bg-gradient-to-r from-primary via-accent to-secondary bg-clip-text text-transparent")}
                        style={animation::delay(100)}>
                        {"Join the Revolution"}
                    </h2>
                    <p class={combine_classes(animation::FADE_IN_UP, "text-xl md:text-2xl text-gray-300 max-w-3xl mx-auto mb-8")}
                        style={animation::delay(200)}>
                        {"Don't miss your chance to be part of the future of robotics. \
                          Register today and transform your ideas into reality."}
                    </p>
                    <div class={animation::FADE_IN_UP} style={animation::delay(300)}>
                        <Link<Route> to={Route::Register}
                            classes={classes!(BUTTON_BASE, "group", "px-12", "py-6", "rounded-full", "text-xl",
                                "bg-gradient-to-r", "from-primary", "to-primary-dark", "hover:shadow-2xl",
                                "inline-flex", "items-center", "space-x-3", animation::GLOW)}>
                            <span>{"Register for Competition"}</span>
                            {Icon::ArrowRight.render("text-2xl transition-transform duration-200 group-hover:translate-x-1")}
                        </Link<Route>>
                    </div>
                </div>

                <div class={combine_classes(GRID_3, "mb-16")}>
                    {for ROUTE_CARDS.iter().enumerate().map(|(index, card)| {
                        let tone = card.tone.classes();
                        html! {
                            <div class={classes!(animation::FADE_IN_UP, animation::HOVER_LIFT_SOFT,
                                    "group", "bg-gray-900/40", "backdrop-blur-sm", "border", "rounded-2xl", "p-8",
                                    "text-center", "hover:bg-gray-900/60", "hover:shadow-xl", tone.border)}
                                style={CTA_CARDS.style(index)}>
                                <div class="inline-flex items-center justify-center w-16 h-16 bg-gray-800/50 rounded-full mb-6 group-hover:bg-gray-800/70 transition-all duration-300">
                                    {card.icon.render(&format!("text-3xl {} {}", tone.text, animation::HOVER_WIGGLE))}
                                </div>
                                <h3 class="text-2xl font-bold text-white mb-4 group-hover:text-white/90 transition-colors">{card.title}</h3>
                                <p class="text-gray-400 mb-6 group-hover:text-gray-300 transition-colors">{card.description}</p>
                                <Link<Route> to={card.route.clone()}
                                    classes={classes!("block", "w-full", "px-6", "py-3", "text-white", "font-semibold", "rounded-full",
                                        "transition-all", "duration-300", "hover:shadow-lg", "hover:scale-105", tone.solid, tone.glow)}>
                                    {card.button_text}
                                </Link<Route>>
                            </div>
                        }
                    })}
                </div>

                <div class={classes!(animation::FADE_IN_UP, "bg-gradient-to-r", "from-gray-900/50", "to-gray-800/50",
                        "backdrop-blur-sm", "border", "border-gray-700", "rounded-2xl", "p-8", "text-center")}
                    style={animation::delay(400)}>
                    <h3 class={HEADING_SM}>{"Stay Updated"}</h3>
                    <p class="text-gray-300 mb-6 max-w-2xl mx-auto">
                        {format!("Get the latest news, updates, and announcements about {} competitions and events.", CONFIG.site_name)}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 max-w-md mx-auto">
                        <input type="email" placeholder="Enter your email"
                            class="flex-1 px-4 py-3 bg-gray-800/50 border border-gray-600 rounded-full text-white placeholder-gray-400 focus:outline-none focus:border-primary transition-colors" />
                        <button type="button"
                            class={classes!(button_gradient(Tone::Primary, Tone::Accent), "px-8", "py-3", "rounded-full", "border-2", "border-white/20")}>
                            {"Subscribe"}
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}
