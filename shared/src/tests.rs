#[cfg(test)]
mod tests {
    use crate::error::{Error, ErrorCode};
    use crate::models::{Division, DraftEdit, Field, RegistrationDraft, Step};
    use crate::validation::{is_valid_email, validate_step, ValidationError};
    use crate::wizard::{Effect, Wizard, WizardEvent, WizardState};

    fn text(field: Field, value: &str) -> WizardEvent {
        WizardEvent::Edit(DraftEdit::Text(field, value.to_string()))
    }

    fn edit_all(wizard: &mut Wizard, events: Vec<WizardEvent>) {
        events.into_iter().for_each(|e| assert_eq!(wizard.apply(e), Effect::None));
    }

    fn fill_basic_info(wizard: &mut Wizard) {
        edit_all(wizard, vec![
            text(Field::TeamName, "Ion Storm"),
            text(Field::TeamLeader, "A. Lee"),
            text(Field::Email, "a@b.com"),
            text(Field::Phone, "555-0100"),
        ]);
    }

    fn fill_team_details(wizard: &mut Wizard) {
        edit_all(wizard, vec![
            text(Field::Organization, "Lincoln HS"),
            text(Field::Location, "Springfield"),
            WizardEvent::Edit(DraftEdit::Division(Division::Rookie)),
            text(Field::Experience, "2 years"),
        ]);
    }

    fn fill_final_steps(wizard: &mut Wizard) {
        edit_all(wizard, vec![
            text(Field::Members, "A. Lee - Lead"),
            WizardEvent::Edit(DraftEdit::Flag(Field::AgreeTerms, true)),
        ]);
    }

    fn wizard_on_final_step() -> Wizard {
        let mut w = Wizard::new();
        fill_basic_info(&mut w);
        w.apply(WizardEvent::Next);
        fill_team_details(&mut w);
        w.apply(WizardEvent::Next);
        fill_final_steps(&mut w);
        assert_eq!(w.state(), WizardState::Editing(Step::FinalSteps));
        w
    }

    fn error_fields(w: &Wizard) -> Vec<Field> {
        w.errors().fields().collect()
    }

    #[test]
    fn test_email_pattern() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("team@example.com"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a @b.c"));
    }

    #[test]
    fn test_empty_steps_report_only_their_fields() {
        let draft = RegistrationDraft::default();

        let step1 = validate_step(&draft, Step::BasicInfo);
        assert_eq!(step1.fields().collect::<Vec<_>>(),
            vec![Field::TeamName, Field::TeamLeader, Field::Email, Field::Phone]);
        assert_eq!(step1.get(Field::Email), Some(&ValidationError::Required(Field::Email)));

        let step2 = validate_step(&draft, Step::TeamDetails);
        assert_eq!(step2.fields().collect::<Vec<_>>(),
            vec![Field::Organization, Field::Location, Field::Division, Field::Experience]);

        let step3 = validate_step(&draft, Step::FinalSteps);
        assert_eq!(step3.fields().collect::<Vec<_>>(), vec![Field::Members, Field::AgreeTerms]);
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut w = Wizard::new();
        fill_basic_info(&mut w);
        w.apply(text(Field::TeamLeader, "   "));
        w.apply(WizardEvent::Next);
        assert_eq!(w.state(), WizardState::Editing(Step::BasicInfo));
        assert_eq!(error_fields(&w), vec![Field::TeamLeader]);
        assert_eq!(w.errors().message(Field::TeamLeader).as_deref(), Some("Team leader name is required"));
    }

    #[test]
    fn test_invalid_email_blocks_step_one() {
        let mut w = Wizard::new();
        fill_basic_info(&mut w);
        w.apply(text(Field::Email, "a@b"));
        w.apply(WizardEvent::Next);
        assert_eq!(w.state(), WizardState::Editing(Step::BasicInfo));
        assert_eq!(w.errors().get(Field::Email), Some(&ValidationError::InvalidEmail));
        assert_eq!(w.errors().message(Field::Email).as_deref(), Some("Please enter a valid email"));
    }

    #[test]
    fn test_each_step_blocks_on_missing_field() {
        let mut w = Wizard::new();
        w.apply(WizardEvent::Next);
        assert_eq!(w.state(), WizardState::Editing(Step::BasicInfo));
        assert_eq!(w.errors().len(), 4);

        fill_basic_info(&mut w);
        w.apply(WizardEvent::Next);
        assert_eq!(w.state(), WizardState::Editing(Step::TeamDetails));
        assert!(w.errors().is_empty());

        w.apply(text(Field::Organization, "Lincoln HS"));
        w.apply(WizardEvent::Next);
        assert_eq!(w.state(), WizardState::Editing(Step::TeamDetails));
        assert_eq!(error_fields(&w), vec![Field::Location, Field::Division, Field::Experience]);
        assert_eq!(w.errors().message(Field::Division).as_deref(), Some("Please select a division"));
    }

    #[test]
    fn test_validation_replaces_whole_error_map() {
        let mut w = Wizard::new();
        fill_basic_info(&mut w);
        w.apply(WizardEvent::Next);
        w.apply(WizardEvent::Next);
        assert_eq!(w.errors().len(), 4);

        w.apply(WizardEvent::Previous);
        w.apply(WizardEvent::Next);
        assert!(w.errors().is_empty(), "step one pass must drop step two errors");
    }

    #[test]
    fn test_editing_clears_only_that_field() {
        let mut w = Wizard::new();
        w.apply(WizardEvent::Next);
        w.apply(text(Field::TeamName, "I"));
        assert!(!w.errors().contains(Field::TeamName));
        assert!(w.errors().contains(Field::TeamLeader));
        assert!(w.errors().contains(Field::Email));
        assert!(w.errors().contains(Field::Phone));
    }

    #[test]
    fn test_division_is_single_select() {
        let mut w = Wizard::new();
        w.apply(WizardEvent::Edit(DraftEdit::Division(Division::Rookie)));
        w.apply(WizardEvent::Edit(DraftEdit::Division(Division::Veteran)));
        assert_eq!(w.draft().division, Some(Division::Veteran));
        assert_eq!("veteran".parse::<Division>().unwrap(), Division::Veteran);
        assert!("pro".parse::<Division>().is_err());
    }

    #[test]
    fn test_previous_keeps_values_and_skips_validation() {
        let mut w = Wizard::new();
        fill_basic_info(&mut w);
        w.apply(WizardEvent::Next);
        w.apply(text(Field::Organization, "Lincoln HS"));

        w.apply(WizardEvent::Previous);
        assert_eq!(w.state(), WizardState::Editing(Step::BasicInfo));
        assert!(w.errors().is_empty());
        assert_eq!(w.draft().team_name, "Ion Storm");
        assert_eq!(w.draft().organization, "Lincoln HS");

        w.apply(WizardEvent::Previous);
        assert_eq!(w.state(), WizardState::Editing(Step::BasicInfo));
    }

    #[test]
    fn test_terms_must_be_accepted() {
        let mut w = wizard_on_final_step();
        w.apply(WizardEvent::Edit(DraftEdit::Flag(Field::AgreeTerms, false)));
        assert_eq!(w.apply(WizardEvent::Submit), Effect::None);
        assert_eq!(w.state(), WizardState::Editing(Step::FinalSteps));
        assert_eq!(error_fields(&w), vec![Field::AgreeTerms]);
    }

    #[test]
    fn test_submit_only_from_final_step() {
        let mut w = Wizard::new();
        fill_basic_info(&mut w);
        assert_eq!(w.apply(WizardEvent::Submit), Effect::None);
        assert_eq!(w.state(), WizardState::Editing(Step::BasicInfo));
    }

    #[test]
    fn test_end_to_end_registration() {
        let mut w = wizard_on_final_step();
        let draft = match w.apply(WizardEvent::Submit) {
            Effect::Submit(draft) => draft,
            Effect::None => panic!("expected a submit effect"),
        };
        assert!(w.is_submitting());
        assert_eq!(draft.team_name, "Ion Storm");
        assert!(draft.newsletter, "newsletter defaults to opted in");

        w.apply(WizardEvent::SubmitSucceeded);
        assert!(w.is_submitted());
        assert_eq!(w.current_step(), None);
        assert_eq!(w.draft().team_name, "Ion Storm");
        assert_eq!(w.draft().email, "a@b.com");
    }

    #[test]
    fn test_no_double_submit() {
        let mut w = wizard_on_final_step();
        assert!(matches!(w.apply(WizardEvent::Submit), Effect::Submit(_)));
        assert_eq!(w.apply(WizardEvent::Submit), Effect::None);
        assert_eq!(w.apply(text(Field::TeamName, "Other")), Effect::None);
        assert_eq!(w.draft().team_name, "Ion Storm");

        w.apply(WizardEvent::SubmitSucceeded);
        assert_eq!(w.apply(WizardEvent::Submit), Effect::None);
        assert!(w.is_submitted());
    }

    #[test]
    fn test_failed_submission_allows_retry() {
        let mut w = wizard_on_final_step();
        w.apply(WizardEvent::Submit);
        w.apply(WizardEvent::SubmitFailed("Service unavailable".into()));
        assert_eq!(w.state(), WizardState::Editing(Step::FinalSteps));
        assert_eq!(w.submit_error(), Some("Service unavailable"));
        assert_eq!(w.draft().members, "A. Lee - Lead");

        assert!(matches!(w.apply(WizardEvent::Submit), Effect::Submit(_)));
        assert_eq!(w.submit_error(), None);
    }

    #[test]
    fn test_mismatched_edits_are_ignored() {
        let mut draft = RegistrationDraft::default();
        assert!(!draft.apply(DraftEdit::Text(Field::AgreeTerms, "yes".into())));
        assert!(!draft.apply(DraftEdit::Flag(Field::Email, true)));
        assert_eq!(draft, RegistrationDraft::default());
    }

    #[test]
    fn test_error_codes_in_use() {
        let unknown = "pro".parse::<Division>().unwrap_err();
        assert_eq!(unknown.code, ErrorCode::InvalidInput);
        assert_eq!(unknown.details.as_deref(), Some("pro"));
        assert_eq!(unknown.to_string(), "Invalid input provided: Unknown division (pro)");

        let failed = Error::submission("Service unavailable");
        assert_eq!(failed.code, ErrorCode::SubmissionFailed);
        assert_eq!(failed.to_string(), "Registration could not be submitted: Service unavailable");
    }

    #[test]
    fn test_draft_payload_uses_camel_case() {
        let mut draft = RegistrationDraft::default();
        draft.apply(DraftEdit::Division(Division::Open));
        let json = serde_json::to_value(&draft).unwrap();
        for field in Step::ALL.iter().flat_map(|s| s.fields()) {
            assert!(json.get(field.key()).is_some(), "missing key {}", field.key());
        }
        assert_eq!(json["division"], "open");
        assert_eq!(json["agreeTerms"], false);
    }
}
