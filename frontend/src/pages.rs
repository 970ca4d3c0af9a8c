use yew::prelude::*;
use yew_router::prelude::*;
use crate::{
    Route, animation, icons::Icon, navigation::Navigation, registration::Registration, scroll::scroll_to_top,
    sections::*, styles::*,
};

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    #[prop_or_default]
    pub children: Children,
}

/// Navigation bar over the page's sections. Starts each page at the top.
#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    use_effect_with_deps(|_| {
        scroll_to_top();
        || ()
    }, ());

    html! {
        <main class="min-h-screen">
            <Navigation />
            {for props.children.iter()}
        </main>
    }
}

#[function_component]
pub fn HomePage() -> Html {
    html! {
        <PageShell>
            <HeroSection />
            <QuickInfoSection />
            <FeaturesSection />
            <CallToActionSection />
        </PageShell>
    }
}

#[function_component]
pub fn AboutPage() -> Html {
    html! { <PageShell><AboutSection /></PageShell> }
}

#[function_component]
pub fn DateTimePage() -> Html {
    html! { <PageShell><DateTimeSection /></PageShell> }
}

#[function_component]
pub fn GamePage() -> Html {
    html! { <PageShell><GameSection /></PageShell> }
}

#[function_component]
pub fn RegisterPage() -> Html {
    html! { <PageShell><Registration /></PageShell> }
}

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <PageShell>
            <section class="pt-32 pb-20 px-4 min-h-screen flex items-center justify-center">
                <div class={combine_classes(animation::FADE_IN_UP, "text-center max-w-xl mx-auto")}>
                    <div class="inline-flex items-center justify-center w-24 h-24 bg-secondary/10 rounded-full mb-8">
                        {Icon::AlertCircle.render("text-5xl text-secondary")}
                    </div>
                    <h1 class={HEADING_PAGE}>{"404"}</h1>
                    <p class="text-xl text-gray-300 mb-8">{"This page drove off the field. Let's get you back on track."}</p>
                    <Link<Route> to={Route::Home}
                        classes={classes!(button_gradient(Tone::Primary, Tone::Accent), "inline-block", "px-8", "py-4", "rounded-full")}>
                        {"Back to Home"}
                    </Link<Route>>
                </div>
            </section>
        </PageShell>
    }
}
