use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use crate::error::{Error, ErrorCode};

/// Competition skill tier a team registers under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Division {
    Rookie,
    Experienced,
    Veteran,
    Open,
}

impl Division {
    pub const ALL: [Division; 4] = [
        Division::Rookie,
        Division::Experienced,
        Division::Veteran,
        Division::Open,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Division::Rookie => "rookie",
            Division::Experienced => "experienced",
            Division::Veteran => "veteran",
            Division::Open => "open",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Division::Rookie => "Rookie Division",
            Division::Experienced => "Experienced Division",
            Division::Veteran => "Veteran Division",
            Division::Open => "Open Division",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Division::Rookie => "First-year teams or new to competitive robotics",
            Division::Experienced => "2-4 years of robotics competition experience",
            Division::Veteran => "5+ years of competitive robotics experience",
            Division::Open => "Any experience level, advanced challenges",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Division {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Division::ALL
            .into_iter()
            .find(|division| division.value() == s)
            .ok_or_else(|| Error::with_details(ErrorCode::InvalidInput, "Unknown division", s))
    }
}

/// One of the three ordered field groups of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    BasicInfo,
    TeamDetails,
    FinalSteps,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::BasicInfo, Step::TeamDetails, Step::FinalSteps];

    pub fn number(&self) -> u8 {
        match self {
            Step::BasicInfo => 1,
            Step::TeamDetails => 2,
            Step::FinalSteps => 3,
        }
    }

    /// Short label shown under the progress marker.
    pub fn label(&self) -> &'static str {
        match self {
            Step::BasicInfo => "Basic Info",
            Step::TeamDetails => "Team Details",
            Step::FinalSteps => "Final Steps",
        }
    }

    /// Heading shown above the step's fields.
    pub fn title(&self) -> &'static str {
        match self {
            Step::BasicInfo => "Basic Information",
            Step::TeamDetails => "Team Details",
            Step::FinalSteps => "Final Steps",
        }
    }

    pub fn next(&self) -> Option<Step> {
        match self {
            Step::BasicInfo => Some(Step::TeamDetails),
            Step::TeamDetails => Some(Step::FinalSteps),
            Step::FinalSteps => None,
        }
    }

    pub fn previous(&self) -> Option<Step> {
        match self {
            Step::BasicInfo => None,
            Step::TeamDetails => Some(Step::BasicInfo),
            Step::FinalSteps => Some(Step::TeamDetails),
        }
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }

    /// Fields rendered on this step, in display order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Step::BasicInfo => &[Field::TeamName, Field::TeamLeader, Field::Email, Field::Phone],
            Step::TeamDetails => &[Field::Organization, Field::Location, Field::Division, Field::Experience],
            Step::FinalSteps => &[Field::Members, Field::Expectations, Field::AgreeTerms, Field::Newsletter],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    TeamName,
    TeamLeader,
    Email,
    Phone,
    Organization,
    Location,
    Division,
    Experience,
    Members,
    Expectations,
    AgreeTerms,
    Newsletter,
}

impl Field {
    /// Payload key, matching the serialized draft.
    pub fn key(&self) -> &'static str {
        match self {
            Field::TeamName => "teamName",
            Field::TeamLeader => "teamLeader",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Organization => "organization",
            Field::Location => "location",
            Field::Division => "division",
            Field::Experience => "experience",
            Field::Members => "members",
            Field::Expectations => "expectations",
            Field::AgreeTerms => "agreeTerms",
            Field::Newsletter => "newsletter",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::TeamName => "Team Name",
            Field::TeamLeader => "Team Leader",
            Field::Email => "Email Address",
            Field::Phone => "Phone Number",
            Field::Organization => "Organization/School",
            Field::Location => "Location",
            Field::Division => "Competition Division",
            Field::Experience => "Team Experience",
            Field::Members => "Team Members & Roles",
            Field::Expectations => "Expectations & Goals",
            Field::AgreeTerms => "Terms and Conditions",
            Field::Newsletter => "Newsletter",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Field::Expectations | Field::Newsletter)
    }
}

/// A single user edit to the draft.
#[derive(Debug, Clone, PartialEq)]
pub enum DraftEdit {
    Text(Field, String),
    Flag(Field, bool),
    Division(Division),
}

impl DraftEdit {
    pub fn field(&self) -> Field {
        match self {
            DraftEdit::Text(field, _) | DraftEdit::Flag(field, _) => *field,
            DraftEdit::Division(_) => Field::Division,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    pub team_name: String,
    pub team_leader: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub location: String,
    pub division: Option<Division>,
    pub experience: String,
    pub members: String,
    pub expectations: String,
    pub agree_terms: bool,
    pub newsletter: bool,
}

impl Default for RegistrationDraft {
    fn default() -> Self {
        Self {
            team_name: String::new(),
            team_leader: String::new(),
            email: String::new(),
            phone: String::new(),
            organization: String::new(),
            location: String::new(),
            division: None,
            experience: String::new(),
            members: String::new(),
            expectations: String::new(),
            agree_terms: false,
            newsletter: true,
        }
    }
}

impl RegistrationDraft {
    pub fn text(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::TeamName => &self.team_name,
            Field::TeamLeader => &self.team_leader,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Organization => &self.organization,
            Field::Location => &self.location,
            Field::Experience => &self.experience,
            Field::Members => &self.members,
            Field::Expectations => &self.expectations,
            Field::Division | Field::AgreeTerms | Field::Newsletter => return None,
        };
        Some(value.as_str())
    }

    pub fn flag(&self, field: Field) -> Option<bool> {
        match field {
            Field::AgreeTerms => Some(self.agree_terms),
            Field::Newsletter => Some(self.newsletter),
            _ => None,
        }
    }

    /// Applies an edit. Returns false when the edit does not fit the field's kind.
    pub fn apply(&mut self, edit: DraftEdit) -> bool {
        match edit {
            DraftEdit::Text(field, value) => {
                let slot = match field {
                    Field::TeamName => &mut self.team_name,
                    Field::TeamLeader => &mut self.team_leader,
                    Field::Email => &mut self.email,
                    Field::Phone => &mut self.phone,
                    Field::Organization => &mut self.organization,
                    Field::Location => &mut self.location,
                    Field::Experience => &mut self.experience,
                    Field::Members => &mut self.members,
                    Field::Expectations => &mut self.expectations,
                    Field::Division | Field::AgreeTerms | Field::Newsletter => return false,
                };
                *slot = value;
                true
            }
            DraftEdit::Flag(Field::AgreeTerms, value) => {
                self.agree_terms = value;
                true
            }
            DraftEdit::Flag(Field::Newsletter, value) => {
                self.newsletter = value;
                true
            }
            DraftEdit::Flag(..) => false,
            DraftEdit::Division(division) => {
                self.division = Some(division);
                true
            }
        }
    }
}
