use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, animation, config::CONFIG, icons::Icon, styles::*};

const NEXT_STEPS: [(&str, &str); 3] = [
    ("bg-primary", "Check your email for welcome packet and team resources"),
    ("bg-accent", "Join our Discord community for team coordination"),
    ("bg-secondary", "Mark your calendar for the kickoff event on March 1st"),
];

#[derive(Properties, PartialEq)]
pub struct RegistrationSuccessProps {
    pub team_name: String,
    pub email: String,
}

#[function_component(RegistrationSuccess)]
pub fn registration_success(props: &RegistrationSuccessProps) -> Html {
    html! {
        <section class="pt-32 pb-20 px-4 min-h-screen flex items-center justify-center">
            <div class={combine_classes(animation::FADE_IN_UP, "text-center max-w-2xl mx-auto")}>
                <div class={combine_classes(animation::FADE_IN_UP, "inline-flex items-center justify-center w-24 h-24 bg-primary/10 rounded-full mb-8")}
                    style={animation::delay(200)}>
                    {Icon::CheckCircle.render("text-5xl text-primary")}
                </div>

                <h1 class="text-4xl md:text-5xl font-bold mb-6 bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                    {"Registration Successful!"}
                </h1>

                <p class="text-xl text-gray-300 mb-8">
                    {"Thank you for registering team "}
                    <span class="text-primary font-semibold">{props.team_name.clone()}</span>
                    {format!(" for {} {}! We've sent a confirmation email to {} with next steps and important information.",
                        CONFIG.site_name, CONFIG.event_year, props.email)}
                </p>

                <div class={combine_classes(PANEL_GRADIENT, "mb-8")}>
                    <h3 class="text-xl font-semibold text-white mb-4">{"What's Next?"}</h3>
                    <ul class="text-left space-y-2 text-gray-300">
                        {for NEXT_STEPS.iter().map(|(dot, text)| html! {
                            <li class="flex items-center space-x-2">
                                <div class={classes!(BULLET, *dot)} />
                                <span>{*text}</span>
                            </li>
                        })}
                    </ul>
                </div>

                <Link<Route> to={Route::Home}
                    classes={classes!(button_gradient(Tone::Primary, Tone::Accent), "inline-block", "px-8", "py-4", "rounded-full", "hover:shadow-primary/25")}>
                    {"Return to Home"}
                </Link<Route>>
            </div>
        </section>
    }
}
