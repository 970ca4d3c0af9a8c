use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use shared::{Division, DraftEdit, Effect, Field, Step, Wizard, WizardEvent};
use crate::{
    animation, config::CONFIG, icons::Icon, registration_success::RegistrationSuccess, styles::*,
    submit::{SimulatedSubmitter, Submitter},
};

pub struct Registration {
    wizard: Wizard,
    submitter: Rc<dyn Submitter>,
}

pub enum Msg {
    Edit(DraftEdit),
    Next,
    Previous,
    /// Form submit (button or Enter key). Advances on early steps, submits on the last.
    FormSubmit,
    Submitted(shared::Result<()>),
}

/// How a field is edited on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    Input(&'static str),
    TextArea(u32),
    Choice,
    Checkbox,
}

fn control(field: Field) -> Control {
    match field {
        Field::Email => Control::Input("email"),
        Field::Phone => Control::Input("tel"),
        Field::TeamName | Field::TeamLeader | Field::Organization | Field::Location => Control::Input("text"),
        Field::Experience | Field::Expectations => Control::TextArea(4),
        Field::Members => Control::TextArea(6),
        Field::Division => Control::Choice,
        Field::AgreeTerms | Field::Newsletter => Control::Checkbox,
    }
}

fn placeholder(field: Field) -> &'static str {
    match field {
        Field::TeamName => "Enter your team name",
        Field::TeamLeader => "Team leader's full name",
        Field::Email => "team@example.com",
        Field::Phone => "(555) 123-4567",
        Field::Organization => "School or organization name",
        Field::Location => "City, State/Province, Country",
        Field::Experience => "Describe your team's robotics experience, previous competitions, and any relevant achievements...",
        Field::Members => "List team members and their roles (e.g., John Doe - Lead Programmer, Jane Smith - Mechanical Design, etc.)",
        Field::Expectations => "What do you hope to achieve in this competition? Any specific goals or learning objectives?",
        Field::Division | Field::AgreeTerms | Field::Newsletter => "",
    }
}

fn step_tone(step: Step) -> Tone {
    match step {
        Step::BasicInfo => Tone::Primary,
        Step::TeamDetails => Tone::Accent,
        Step::FinalSteps => Tone::Secondary,
    }
}

fn step_icon(step: Step) -> Icon {
    match step {
        Step::BasicInfo => Icon::User,
        Step::TeamDetails => Icon::Users,
        Step::FinalSteps => Icon::Trophy,
    }
}

/// Enter in any field submits the form; only the last step turns that into a submission.
fn form_submit_event(step: Option<Step>) -> WizardEvent {
    match step {
        Some(step) if step.is_last() => WizardEvent::Submit,
        _ => WizardEvent::Next,
    }
}

fn required_label(field: Field) -> String {
    if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    }
}

impl Component for Registration {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            wizard: Wizard::new(),
            submitter: Rc::new(SimulatedSubmitter::default()),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let event = match msg {
            Msg::Edit(edit) => WizardEvent::Edit(edit),
            Msg::Next => WizardEvent::Next,
            Msg::Previous => WizardEvent::Previous,
            Msg::FormSubmit => form_submit_event(self.wizard.current_step()),
            Msg::Submitted(Ok(())) => WizardEvent::SubmitSucceeded,
            Msg::Submitted(Err(error)) => {
                web_sys::console::warn_1(&format!("Registration failed: {}", error).into());
                WizardEvent::SubmitFailed(error.message)
            }
        };

        let before = self.wizard.state();
        let effect = self.wizard.apply(event);
        if self.wizard.state() != before {
            web_sys::console::log_1(&format!("Registration: {:?} -> {:?}", before, self.wizard.state()).into());
        }

        if let Effect::Submit(draft) = effect {
            let submission = self.submitter.submit(draft);
            ctx.link().send_future(async move { Msg::Submitted(submission.await) });
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.wizard.is_submitted() {
            let draft = self.wizard.draft();
            return html! {
                <RegistrationSuccess team_name={draft.team_name.clone()} email={draft.email.clone()} />
            };
        }

        let step = self.wizard.current_step().unwrap_or(Step::FinalSteps);
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::FormSubmit
        });

        html! {
            <section class={PAGE_SECTION}>
                <div class={CONTAINER_SM}>
                    <div class={combine_classes(animation::FADE_IN_UP, "text-center mb-16")}>
                        <h1 class={HEADING_PAGE}>{format!("Join {} {}", CONFIG.site_name, CONFIG.event_year)}</h1>
                        <p class="text-xl text-gray-300 max-w-2xl mx-auto">
                            {"Register your team for the ultimate off-season robotics competition experience."}
                        </p>
                    </div>

                    {render_progress(step)}

                    <form {onsubmit} novalidate={true} class={classes!(animation::FADE_IN_UP, CARD)}>
                        {self.render_submit_error()}
                        {self.render_step(ctx, step)}
                        {self.render_controls(ctx, step)}
                    </form>
                </div>
            </section>
        }
    }
}

fn render_progress(current: Step) -> Html {
    html! {
        <div class={combine_classes(animation::FADE_IN_UP, "mb-12")} style={animation::delay(100)}>
            <div class="flex items-center justify-between mb-4">
                {for Step::ALL.iter().map(|&step| html! {
                    <div class="flex items-center">
                        <div class={classes!(
                            "w-10", "h-10", "rounded-full", "flex", "items-center", "justify-center", "font-bold", "text-sm",
                            "transition-transform", "hover:scale-110",
                            if current >= step { "bg-primary text-black" } else { "bg-gray-800 text-gray-400 border border-gray-700" }
                        )}>
                            {step.number()}
                        </div>
                        if !step.is_last() {
                            <div class={classes!("w-24", "h-1", "mx-4", "rounded-full",
                                if current > step { "bg-primary" } else { "bg-gray-800" })} />
                        }
                    </div>
                })}
            </div>
            <div class="flex justify-between text-sm text-gray-400">
                {for Step::ALL.iter().map(|step| html! { <span>{step.label()}</span> })}
            </div>
        </div>
    }
}

fn render_error(message: Option<String>) -> Html {
    match message {
        Some(message) => html! {
            <p class={TEXT_ERROR}>
                {Icon::AlertCircle.render("text-sm")}
                <span>{message}</span>
            </p>
        },
        None => html! {},
    }
}

impl Registration {
    fn render_submit_error(&self) -> Html {
        match self.wizard.submit_error() {
            Some(message) => html! {
                <div class="mb-6 p-4 rounded-lg border border-red-500/50 bg-red-500/10 text-red-400 flex items-center space-x-2" role="alert">
                    {Icon::AlertCircle.render("")}
                    <span>{format!("Registration could not be completed: {}. Please try again.", message)}</span>
                </div>
            },
            None => html! {},
        }
    }

    fn render_step(&self, ctx: &Context<Self>, step: Step) -> Html {
        let tone = step_tone(step);
        let heading = html! {
            <h2 class="text-2xl font-bold text-white mb-6 flex items-center space-x-2">
                {step_icon(step).render(&combine_classes("text-xl", tone.classes().text))}
                <span>{step.title()}</span>
            </h2>
        };

        let body = match step {
            Step::BasicInfo => html! {
                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {for step.fields().iter().map(|&field| self.render_field(ctx, field, tone))}
                </div>
            },
            Step::TeamDetails => html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        {self.render_field(ctx, Field::Organization, tone)}
                        {self.render_field(ctx, Field::Location, tone)}
                    </div>
                    {self.render_field(ctx, Field::Division, tone)}
                    {self.render_field(ctx, Field::Experience, tone)}
                </>
            },
            Step::FinalSteps => html! {
                <>
                    {self.render_field(ctx, Field::Members, tone)}
                    {self.render_field(ctx, Field::Expectations, tone)}
                    <div class="space-y-4">
                        {self.render_field(ctx, Field::AgreeTerms, tone)}
                        {self.render_field(ctx, Field::Newsletter, tone)}
                    </div>
                </>
            },
        };

        html! {
            <div key={step.number().to_string()} class={combine_classes(animation::FADE_IN_UP, "space-y-6")}>
                {heading}
                {body}
            </div>
        }
    }

    fn render_field(&self, ctx: &Context<Self>, field: Field, tone: Tone) -> Html {
        let draft = self.wizard.draft();
        let error = self.wizard.errors().message(field);
        let has_error = error.is_some();
        let disabled = self.wizard.is_submitting();

        match control(field) {
            Control::Input(kind) => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Edit(DraftEdit::Text(field, input.value()))
                });
                html! {
                    <div class={INPUT_GROUP}>
                        <label class={TEXT_LABEL} for={field.key()}>{required_label(field)}</label>
                        <input id={field.key()} type={kind} class={input_class(has_error, tone)}
                            value={draft.text(field).unwrap_or_default().to_string()}
                            placeholder={placeholder(field)} {disabled} {oninput} />
                        {render_error(error)}
                    </div>
                }
            }
            Control::TextArea(rows) => {
                let oninput = ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::Edit(DraftEdit::Text(field, input.value()))
                });
                html! {
                    <div class={INPUT_GROUP}>
                        <label class={TEXT_LABEL} for={field.key()}>{required_label(field)}</label>
                        <textarea id={field.key()} rows={rows.to_string()}
                            class={combine_classes(&input_class(has_error, tone), "resize-none")}
                            value={draft.text(field).unwrap_or_default().to_string()}
                            placeholder={placeholder(field)} {disabled} {oninput} />
                        {render_error(error)}
                    </div>
                }
            }
            Control::Choice => html! {
                <div>
                    <label class="block text-sm font-medium text-gray-300 mb-4">{required_label(field)}</label>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        {for Division::ALL.iter().map(|&division| self.render_division(ctx, division))}
                    </div>
                    {render_error(error)}
                </div>
            },
            Control::Checkbox => {
                let onchange = ctx.link().callback(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::Edit(DraftEdit::Flag(field, input.checked()))
                });
                let text = match field {
                    Field::AgreeTerms => html! {
                        <span class="text-white">
                            {"I agree to the "}
                            <a href="#" class="text-primary hover:underline">{"Terms and Conditions"}</a>
                            {" and "}
                            <a href="#" class="text-primary hover:underline">{"Competition Rules"}</a>
                            {" *"}
                        </span>
                    },
                    _ => html! {
                        <span class="text-white">{"Subscribe to our newsletter for competition updates and robotics news"}</span>
                    },
                };
                html! {
                    <label class="flex items-start space-x-3 cursor-pointer">
                        <input type="checkbox" checked={draft.flag(field).unwrap_or_default()} {disabled} {onchange}
                            class="mt-1 w-5 h-5 text-primary bg-gray-800 border-gray-600 rounded focus:ring-primary focus:ring-2" />
                        <div>
                            {text}
                            {render_error(error)}
                        </div>
                    </label>
                }
            }
        }
    }

    fn render_division(&self, ctx: &Context<Self>, division: Division) -> Html {
        let selected = self.wizard.draft().division == Some(division);
        let onchange = ctx.link().callback(move |_: Event| Msg::Edit(DraftEdit::Division(division)));
        html! {
            <label class={classes!(
                "block", "p-4", "rounded-lg", "border", "cursor-pointer", "transition-all", "duration-200", "hover:scale-[1.02]",
                if selected { "border-accent bg-accent/10" } else { "border-gray-600 bg-gray-800/30 hover:border-accent/50" }
            )}>
                <input type="radio" name="division" value={division.value()} checked={selected}
                    disabled={self.wizard.is_submitting()} {onchange} class="sr-only" />
                <div class="text-white font-medium mb-1">{division.label()}</div>
                <div class="text-gray-400 text-sm">{division.description()}</div>
            </label>
        }
    }

    fn render_controls(&self, ctx: &Context<Self>, step: Step) -> Html {
        let submitting = self.wizard.is_submitting();
        let at_start = step.previous().is_none() || submitting;
        let onprevious = ctx.link().callback(|_: MouseEvent| Msg::Previous);
        let onnext = ctx.link().callback(|_: MouseEvent| Msg::Next);

        html! {
            <div class="flex justify-between items-center mt-12 pt-8 border-t border-gray-800">
                <button type="button" onclick={onprevious} disabled={at_start}
                    class={classes!("px-6", "py-3", "rounded-lg", "font-medium", "transition-all", "duration-300",
                        if at_start { BUTTON_DISABLED } else { "bg-gray-700 text-white hover:bg-gray-600 hover:scale-105 active:scale-95" })}>
                    {"Previous"}
                </button>

                if step.is_last() {
                    <button type="submit" disabled={submitting}
                        class={if submitting {
                            classes!("px-8", "py-3", "rounded-lg", "font-bold", BUTTON_DISABLED)
                        } else {
                            classes!(button_gradient(Tone::Secondary, Tone::Primary), "px-8", "py-3", "rounded-lg", "hover:shadow-secondary/25")
                        }}>
                        {if submitting { "Submitting..." } else { "Complete Registration" }}
                    </button>
                } else {
                    <button type="button" onclick={onnext}
                        class={classes!(button_gradient(Tone::Primary, Tone::Accent), "px-8", "py-3", "rounded-lg", "hover:shadow-primary/25")}>
                        {"Next Step"}
                    </button>
                }
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_advances_until_the_last_step() {
        assert_eq!(form_submit_event(Some(Step::BasicInfo)), WizardEvent::Next);
        assert_eq!(form_submit_event(Some(Step::TeamDetails)), WizardEvent::Next);
        assert_eq!(form_submit_event(Some(Step::FinalSteps)), WizardEvent::Submit);
        assert_eq!(form_submit_event(None), WizardEvent::Next);
    }

    #[test]
    fn every_field_has_a_control() {
        for field in Step::ALL.iter().flat_map(|step| step.fields()) {
            let control = control(*field);
            if matches!(control, Control::Input(_) | Control::TextArea(_)) {
                assert!(!placeholder(*field).is_empty(), "{:?} has no placeholder", field);
            }
        }
        assert_eq!(control(Field::Email), Control::Input("email"));
        assert_eq!(control(Field::Members), Control::TextArea(6));
    }

    #[test]
    fn required_fields_are_starred() {
        assert_eq!(required_label(Field::TeamName), "Team Name *");
        assert_eq!(required_label(Field::Expectations), "Expectations & Goals");
    }

    #[test]
    fn steps_use_distinct_tones() {
        assert_eq!(step_tone(Step::BasicInfo), Tone::Primary);
        assert_eq!(step_tone(Step::TeamDetails), Tone::Accent);
        assert_eq!(step_tone(Step::FinalSteps), Tone::Secondary);
    }
}
