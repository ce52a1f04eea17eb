//! View/session state machine for the auth client.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages render from a [`SessionState`] held in a `RwSignal` and emit
//! [`Intent`]s. The machine never performs I/O: transitions return an
//! [`Effect`] that the controller carries out, and the outcome comes back
//! through [`SessionState::resolve`].
//!
//! DESIGN
//! ======
//! Every view change bumps an epoch. Requests are tagged with the epoch they
//! were issued under ([`Ticket`]) and results from an older epoch are
//! dropped, so a fetch that lands after logout cannot repopulate the list and
//! a sign-in that lands after navigating away cannot resurrect a session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{LoginRequest, SignupRequest, UserRecord};

/// The three mutually exclusive screens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    Signup,
    #[default]
    Login,
    Users,
}

/// Input fields shared by the signup and login forms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Password,
}

impl FormField {
    /// HTML `name` attribute for the input bound to this field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

/// Current values of the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.password.is_empty()
    }

    fn signup_request(&self) -> SignupRequest {
        SignupRequest { name: self.name.clone(), email: self.email.clone(), password: self.password.clone() }
    }

    fn login_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.clone(), password: self.password.clone() }
    }
}

/// User actions forwarded by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    EditField(FormField, String),
    SubmitSignup,
    SubmitLogin,
    Navigate(ViewMode),
    Logout,
}

/// Epoch a request was issued under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Signup { ticket: Ticket, request: SignupRequest },
    Login { ticket: Ticket, request: LoginRequest },
    FetchUsers { ticket: Ticket },
    ClearCredential,
}

/// Outcome of an [`Effect`], fed back into the machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Signup or login succeeded and the credential has been stored.
    SignedIn,
    /// Signup or login failed with a user-facing message.
    Rejected(String),
    UsersLoaded(Vec<UserRecord>),
    UsersFailed(String),
}

/// Everything the presentation layer renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    view: ViewMode,
    form: FormState,
    error: Option<String>,
    users: Vec<UserRecord>,
    pending: bool,
    epoch: u64,
}

impl SessionState {
    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    /// True while a request issued in the current view is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.epoch
    }

    /// Entry logic at startup: a persisted credential goes straight to the
    /// user list.
    pub fn boot(&mut self, has_credential: bool) -> Option<Effect> {
        if has_credential && self.view != ViewMode::Users {
            return self.enter(ViewMode::Users);
        }
        None
    }

    /// Apply a user intent and return the effect it requires, if any.
    pub fn apply(&mut self, intent: Intent) -> Option<Effect> {
        match intent {
            Intent::EditField(field, value) => {
                self.form.set(field, value);
                None
            }
            Intent::SubmitSignup => self.submit(ViewMode::Signup),
            Intent::SubmitLogin => self.submit(ViewMode::Login),
            Intent::Navigate(target) => self.navigate(target),
            Intent::Logout => {
                if self.view == ViewMode::Users {
                    log::info!("session: logout");
                    self.enter(ViewMode::Login);
                }
                Some(Effect::ClearCredential)
            }
        }
    }

    /// Apply the outcome of an effect. Results from an older epoch are
    /// ignored.
    pub fn resolve(&mut self, ticket: Ticket, resolution: Resolution) -> Option<Effect> {
        if !self.is_current(ticket) {
            log::debug!("session: dropping stale result from epoch {} (now {})", ticket.0, self.epoch);
            return None;
        }
        self.pending = false;
        match resolution {
            Resolution::SignedIn => self.enter(ViewMode::Users),
            Resolution::Rejected(message) | Resolution::UsersFailed(message) => {
                self.users.clear();
                self.error = Some(message);
                None
            }
            Resolution::UsersLoaded(users) => {
                self.users = users;
                self.error = None;
                None
            }
        }
    }

    fn submit(&mut self, origin: ViewMode) -> Option<Effect> {
        if self.view != origin || self.pending {
            log::debug!("session: ignoring {origin:?} submit (view {:?}, pending {})", self.view, self.pending);
            return None;
        }
        let ticket = self.ticket();
        let effect = match origin {
            ViewMode::Signup => Effect::Signup { ticket, request: self.form.signup_request() },
            ViewMode::Login => Effect::Login { ticket, request: self.form.login_request() },
            ViewMode::Users => {
                log::debug!("session: users view has no form to submit");
                return None;
            }
        };
        self.error = None;
        self.pending = true;
        Some(effect)
    }

    fn navigate(&mut self, target: ViewMode) -> Option<Effect> {
        match (self.view, target) {
            (ViewMode::Signup, ViewMode::Login) | (ViewMode::Login, ViewMode::Signup) => self.enter(target),
            (from, to) => {
                log::debug!("session: ignoring navigation {from:?} -> {to:?}");
                None
            }
        }
    }

    /// Switch views: reset form, error, list and pending state, then run the
    /// new view's entry logic.
    fn enter(&mut self, view: ViewMode) -> Option<Effect> {
        self.view = view;
        self.form = FormState::default();
        self.error = None;
        self.users.clear();
        self.pending = false;
        self.epoch += 1;
        if view == ViewMode::Users {
            self.pending = true;
            return Some(Effect::FetchUsers { ticket: self.ticket() });
        }
        None
    }

    fn ticket(&self) -> Ticket {
        Ticket(self.epoch)
    }
}
