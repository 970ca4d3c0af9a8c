use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::{Route, animation, config::CONFIG, icons::Icon, scroll::ScrollSubscription};

pub const NAV_LINKS: [(Route, &str); 5] = [
    (Route::Home, "Home"),
    (Route::DateTime, "Schedule"),
    (Route::Game, "Game"),
    (Route::About, "About"),
    (Route::Register, "Register"),
];

/// Centring uses `transform`, so entrance animations go on the bar inside, never here.
const NAV_POSITION: &str = "fixed top-4 left-1/2 -translate-x-1/2 z-50 w-[92%] max-w-5xl";
const BAR_BASE: &str = "px-6 py-3 rounded-full backdrop-blur-md border transition-all duration-300";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

impl NavState {
    pub fn next(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled(offset) => Self { scrolled: offset > CONFIG.scroll_threshold, ..self },
            NavAction::ToggleMenu => Self { menu_open: !self.menu_open, ..self },
            NavAction::CloseMenu => Self { menu_open: false, ..self },
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).next(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let state = use_reducer(NavState::default);
    let current_route = use_route::<Route>();

    {
        let state = state.clone();
        use_effect_with_deps(move |_| {
            let dispatcher = state.dispatcher();
            let subscription = ScrollSubscription::new(move |offset| {
                dispatcher.dispatch(NavAction::Scrolled(offset));
            });
            if let Some(subscription) = &subscription {
                state.dispatch(NavAction::Scrolled(subscription.offset()));
            }
            move || drop(subscription)
        }, ());
    }

    let toggle_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::ToggleMenu))
    };
    let close_menu = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(NavAction::CloseMenu))
    };

    let bar_class = if state.scrolled {
        "bg-black/80 border-primary/30 shadow-lg shadow-primary/20"
    } else {
        "bg-black/60 border-white/20"
    };

    html! {
        <>
            <nav class={NAV_POSITION}>
                <div class={classes!(BAR_BASE, animation::SLIDE_IN_TOP, bar_class)}>
                    <div class="flex items-center justify-between w-full">
                        <Link<Route> to={Route::Home} classes="group flex items-center space-x-2 flex-shrink-0">
                            {Icon::Zap.render("text-primary text-2xl transition-transform duration-300 group-hover:rotate-180 group-hover:scale-110")}
                            <span class="text-xl font-bold bg-gradient-to-r from-primary to-accent bg-clip-text text-transparent">
                                {CONFIG.site_name}
                            </span>
                        </Link<Route>>

                        <div class="hidden md:flex items-center space-x-8 flex-1 justify-center">
                            {for NAV_LINKS.iter().map(|(route, label)| {
                                let active = current_route.as_ref() == Some(route);
                                html! {
                                    <Link<Route> to={route.clone()} classes={classes!(
                                        "font-medium", "transition-all", "duration-200", "hover:text-primary", "hover:scale-105",
                                        if active { "text-primary" } else { "text-white/80" }
                                    )}>
                                        {*label}
                                    </Link<Route>>
                                }
                            })}
                        </div>

                        <button type="button" onclick={toggle_menu}
                            class="md:hidden text-white text-2xl w-8 h-8 flex items-center justify-center"
                            aria-label="Toggle menu" aria-expanded={state.menu_open.to_string()}>
                            {if state.menu_open { Icon::X.render("") } else { Icon::Menu.render("") }}
                        </button>
                        <div class="hidden md:block flex-shrink-0 w-20"></div>
                    </div>
                </div>
            </nav>

            if state.menu_open {
                <div class="fixed inset-0 z-40 md:hidden animate-fade-in-up">
                    <div class="absolute inset-0 bg-black/90 backdrop-blur-md" />
                    <div class="relative flex flex-col items-center justify-center h-full space-y-8">
                        {for NAV_LINKS.iter().enumerate().map(|(index, (route, label))| html! {
                            <div class={animation::FADE_IN_UP} style={animation::CARDS.style(index)} onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()}
                                    classes="text-2xl font-medium text-white hover:text-primary transition-colors duration-200">
                                    {*label}
                                </Link<Route>>
                            </div>
                        })}
                    </div>
                </div>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold_toggles_style() {
        let state = NavState::default();
        assert!(!state.next(NavAction::Scrolled(0.0)).scrolled);
        assert!(!state.next(NavAction::Scrolled(50.0)).scrolled);

        let scrolled = state.next(NavAction::Scrolled(51.0));
        assert!(scrolled.scrolled);
        assert!(!scrolled.next(NavAction::Scrolled(20.0)).scrolled);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let open = NavState::default().next(NavAction::ToggleMenu);
        assert!(open.menu_open);
        assert!(!open.next(NavAction::ToggleMenu).menu_open);
        assert!(!open.next(NavAction::CloseMenu).menu_open);
        assert!(!NavState::default().next(NavAction::CloseMenu).menu_open);
    }

    #[test]
    fn scrolling_keeps_menu_state() {
        let state = NavState::default()
            .next(NavAction::ToggleMenu)
            .next(NavAction::Scrolled(120.0));
        assert_eq!(state, NavState { scrolled: true, menu_open: true });
    }

    #[test]
    fn slide_in_stays_off_the_centred_wrapper() {
        assert!(NAV_POSITION.contains("-translate-x-1/2"));
        assert!(!NAV_POSITION.contains("animate-"));
        assert!(!BAR_BASE.contains("translate"));
    }

    #[test]
    fn links_cover_every_page() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|(_, label)| *label).collect();
        assert_eq!(labels, ["Home", "Schedule", "Game", "About", "Register"]);
    }
}
