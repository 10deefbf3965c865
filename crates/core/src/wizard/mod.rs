//! Registration wizard state machine.
//!
//! The wizard walks a merchant through five steps: find their business,
//! verify the match, create an account, accept the terms, and land on the
//! success screen with an upsell offer. Registering a new business jumps from
//! the first step straight to account creation.
//!
//! Transitions are pure: [`transition`] takes the current [`WizardState`] and
//! a [`WizardEvent`] and returns the next state, or a [`WizardError`] that
//! leaves the caller's state untouched. [`Wizard`] is a thin owner around a
//! state for callers that prefer to mutate in place.

pub mod form;
pub mod progress;
pub mod upsell;

use std::fmt;

use crate::error::CoreError;
use crate::lookup::{BusinessLookup, BusinessMatch};
use crate::registration::BusinessRegistration;

pub use form::{AccountField, AccountForm, FieldErrors};
pub use progress::Progress;
pub use upsell::UpsellChoice;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The five wizard steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Hero,
    Verify,
    CreateAccount,
    Terms,
    Success,
}

impl Step {
    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Hero => 1,
            Self::Verify => 2,
            Self::CreateAccount => 3,
            Self::Terms => 4,
            Self::Success => 5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Find Business",
            Self::Verify => "Verify",
            Self::CreateAccount => "Create Account",
            Self::Terms => "Terms",
            Self::Success => "Success",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.to_number(), self.label())
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Account fields captured by a successful account creation submit.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountDetails {
    pub full_name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
    pub website: Option<String>,
}

impl fmt::Debug for AccountDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountDetails")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("mobile", &self.mobile)
            .field("password", &"<redacted>")
            .field("website", &self.website)
            .finish()
    }
}

impl AccountDetails {
    fn from_form(form: &AccountForm) -> Self {
        Self {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            mobile: form.mobile.clone(),
            password: form.password.clone(),
            website: Some(form.website.clone()).filter(|w| !w.is_empty()),
        }
    }
}

/// Data gathered while claiming a business found by search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistingBusinessData {
    pub business: BusinessMatch,
    pub account: Option<AccountDetails>,
}

/// Data gathered while registering a business that search did not find.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBusinessData {
    /// Built from the account form; `None` until it is submitted.
    pub business: Option<BusinessMatch>,
    pub account: Option<AccountDetails>,
}

/// Everything the wizard has accumulated so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Payload {
    #[default]
    Empty,
    Existing(ExistingBusinessData),
    New(NewBusinessData),
}

// ---------------------------------------------------------------------------
// Events and errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// A search found a business to verify.
    SearchMatched(BusinessMatch),
    /// The user chose to register a business that is not listed.
    RegisterNew,
    /// "Yes, this is me" on the verification step.
    ConfirmMatch,
    /// "No, try again" on the verification step.
    RejectMatch,
    SubmitAccount(AccountForm),
    AcceptTerms { agreed: bool },
    Back,
    Reset,
}

impl WizardEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::SearchMatched(_) => "accept a search match",
            Self::RegisterNew => "register a new business",
            Self::ConfirmMatch => "confirm the match",
            Self::RejectMatch => "reject the match",
            Self::SubmitAccount(_) => "submit the account form",
            Self::AcceptTerms { .. } => "accept the terms",
            Self::Back => "go back",
            Self::Reset => "reset",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Cannot {event} at step {step}")]
    InvalidTransition { step: Step, event: &'static str },

    #[error("Please enter a business name or phone number.")]
    EmptyQuery,

    #[error("We couldn't find a business with that name.")]
    NoMatch,

    #[error("{0}")]
    InvalidAccount(FieldErrors),

    #[error("You must agree to the Merchant Agreement and Privacy Policy to continue.")]
    TermsNotAccepted,

    #[error("Business lookup failed: {0}")]
    Lookup(#[from] CoreError),
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Current step plus accumulated payload.
///
/// Only [`transition`] builds non-initial states, so the step always agrees
/// with the payload: `Verify` always carries an existing-business match, and
/// the new-business flag survives until a full reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    step: Step,
    payload: Payload,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            step: Step::Hero,
            payload: Payload::Empty,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Whether the user is registering a business search did not find.
    pub fn is_new_business_flow(&self) -> bool {
        matches!(self.payload, Payload::New(_))
    }

    /// The business being claimed or registered, if known yet.
    pub fn business(&self) -> Option<&BusinessMatch> {
        match &self.payload {
            Payload::Empty => None,
            Payload::Existing(data) => Some(&data.business),
            Payload::New(data) => data.business.as_ref(),
        }
    }

    pub fn account(&self) -> Option<&AccountDetails> {
        match &self.payload {
            Payload::Empty => None,
            Payload::Existing(data) => data.account.as_ref(),
            Payload::New(data) => data.account.as_ref(),
        }
    }

    pub fn progress(&self) -> Progress {
        Progress::for_state(self)
    }

    /// Headline shown on the success screen.
    pub fn success_summary(&self) -> Option<String> {
        if self.step != Step::Success {
            return None;
        }
        let business = self.business()?;
        let account = self.account()?;
        Some(format!(
            "Congratulations, {}! {} is now part of our rewards network.",
            account.full_name, business.name
        ))
    }

    /// Body for `POST /api/register`, available once the account is created.
    pub fn registration_request(&self) -> Option<BusinessRegistration> {
        let business = self.business()?;
        let account = self.account()?;
        Some(BusinessRegistration {
            business_name: Some(business.name.clone()),
            business_address: business.address.clone(),
            full_name: Some(account.full_name.clone()),
            email: Some(account.email.clone()),
            mobile: Some(account.mobile.clone()),
            password: Some(account.password.clone()),
            website: account.website.clone(),
        })
    }

    /// Resolve an upsell choice on the success screen.
    ///
    /// The returned message is final; the caller discards the wizard.
    pub fn finish(&self, choice: UpsellChoice) -> Result<&'static str, WizardError> {
        if self.step != Step::Success {
            return Err(WizardError::InvalidTransition {
                step: self.step,
                event: "answer the upsell offer",
            });
        }
        Ok(choice.message())
    }

    fn at(&self, step: Step) -> Self {
        Self {
            step,
            payload: self.payload.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// Apply `event` to `state`.
pub fn transition(state: &WizardState, event: WizardEvent) -> Result<WizardState, WizardError> {
    match (state.step, event) {
        (Step::Hero, WizardEvent::SearchMatched(business)) => Ok(WizardState {
            step: Step::Verify,
            payload: Payload::Existing(ExistingBusinessData {
                business,
                account: None,
            }),
        }),
        (Step::Hero, WizardEvent::RegisterNew) => Ok(WizardState {
            step: Step::CreateAccount,
            payload: Payload::New(NewBusinessData::default()),
        }),
        (Step::Verify, WizardEvent::ConfirmMatch) => Ok(state.at(Step::CreateAccount)),
        (Step::Verify, WizardEvent::RejectMatch) => Ok(WizardState::new()),
        (Step::CreateAccount, WizardEvent::SubmitAccount(form)) => submit_account(state, &form),
        (Step::Terms, WizardEvent::AcceptTerms { agreed }) => {
            if agreed {
                Ok(state.at(Step::Success))
            } else {
                Err(WizardError::TermsNotAccepted)
            }
        }
        (_, WizardEvent::Back) => back(state),
        (Step::Verify | Step::CreateAccount | Step::Terms, WizardEvent::Reset) => {
            Ok(WizardState::new())
        }
        (step, event) => Err(WizardError::InvalidTransition {
            step,
            event: event.name(),
        }),
    }
}

/// Look up `query` and, on a match, move from Hero to Verify.
pub async fn search<L>(
    state: &WizardState,
    lookup: &L,
    query: &str,
) -> Result<WizardState, WizardError>
where
    L: BusinessLookup + ?Sized,
{
    if state.step != Step::Hero {
        return Err(WizardError::InvalidTransition {
            step: state.step,
            event: "search",
        });
    }
    let query = query.trim();
    if query.is_empty() {
        return Err(WizardError::EmptyQuery);
    }

    match lookup.find_match(query).await? {
        Some(business) => transition(state, WizardEvent::SearchMatched(business)),
        None => Err(WizardError::NoMatch),
    }
}

fn submit_account(state: &WizardState, form: &AccountForm) -> Result<WizardState, WizardError> {
    let errors = form.validate(state.is_new_business_flow());
    if !errors.is_empty() {
        return Err(WizardError::InvalidAccount(errors));
    }

    let account = AccountDetails::from_form(form);
    let payload = match &state.payload {
        Payload::New(_) => Payload::New(NewBusinessData {
            business: Some(BusinessMatch::with_placeholder_image(
                form.business_name.clone(),
                Some(form.business_address.clone()),
                Some(form.mobile.clone()),
            )),
            account: Some(account),
        }),
        Payload::Existing(data) => Payload::Existing(ExistingBusinessData {
            business: data.business.clone(),
            account: Some(account),
        }),
        Payload::Empty => {
            return Err(WizardError::InvalidTransition {
                step: state.step,
                event: "submit the account form",
            })
        }
    };

    Ok(WizardState {
        step: Step::Terms,
        payload,
    })
}

/// Back navigation depends on the flow: leaving account creation in the
/// new-business flow abandons it entirely instead of landing on Verify.
fn back(state: &WizardState) -> Result<WizardState, WizardError> {
    match state.step {
        Step::Verify => Ok(WizardState::new()),
        Step::CreateAccount if state.is_new_business_flow() => Ok(WizardState::new()),
        Step::CreateAccount => Ok(state.at(Step::Verify)),
        Step::Terms => Ok(state.at(Step::CreateAccount)),
        Step::Hero | Step::Success => Err(WizardError::InvalidTransition {
            step: state.step,
            event: WizardEvent::Back.name(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Owned driver
// ---------------------------------------------------------------------------

/// Owns a [`WizardState`] and replaces it on every accepted event.
#[derive(Debug, Clone, Default)]
pub struct Wizard {
    state: WizardState,
}

impl Wizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    /// Apply `event`. On error the current state is kept.
    pub fn apply(&mut self, event: WizardEvent) -> Result<(), WizardError> {
        self.state = transition(&self.state, event)?;
        Ok(())
    }

    pub async fn search<L>(&mut self, lookup: &L, query: &str) -> Result<(), WizardError>
    where
        L: BusinessLookup + ?Sized,
    {
        self.state = search(&self.state, lookup, query).await?;
        Ok(())
    }

    /// Answer the upsell offer and discard the wizard.
    pub fn finish(self, choice: UpsellChoice) -> Result<&'static str, WizardError> {
        self.state.finish(choice)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
