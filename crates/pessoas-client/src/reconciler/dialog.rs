use crate::{ClientError, ClientResult, DialogMode, PersonForm, SaveAction};

use pessoas_core::UnifiedPerson;

use std::mem;

use log::debug;

/// Create/edit dialog lifecycle.
///
/// `Closed -> Open -> Saving -> Closed`. A validation failure keeps the dialog
/// `Open`; once `Saving`, it returns to `Closed` whatever the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open {
        mode: DialogMode,
        form: PersonForm,
    },
    Saving {
        mode: DialogMode,
    },
}

/// A validated save, ready to be executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveRequest {
    pub action: SaveAction,
    pub form: PersonForm,
}

#[derive(Debug, Default)]
pub struct PersonDialog {
    state: DialogState,
}

impl PersonDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.state, DialogState::Closed)
    }

    pub fn is_saving(&self) -> bool {
        matches!(self.state, DialogState::Saving { .. })
    }

    pub fn open_create(&mut self) -> ClientResult<&mut PersonForm> {
        self.open(DialogMode::Create, PersonForm::blank())
    }

    pub fn open_edit(&mut self, person: &UnifiedPerson) -> ClientResult<&mut PersonForm> {
        let mode = DialogMode::Edit {
            id: person.id,
            version: person.version,
        };
        self.open(mode, PersonForm::from_person(person))
    }

    #[track_caller]
    fn open(&mut self, mode: DialogMode, form: PersonForm) -> ClientResult<&mut PersonForm> {
        if !self.is_closed() {
            return Err(ClientError::invalid_state("The person dialog is already open"));
        }

        debug!("Opening person dialog: {mode:?}");
        self.state = DialogState::Open { mode, form };
        match &mut self.state {
            DialogState::Open { form, .. } => Ok(form),
            _ => Err(ClientError::invalid_state("The person dialog failed to open")),
        }
    }

    pub fn form(&self) -> Option<&PersonForm> {
        match &self.state {
            DialogState::Open { form, .. } => Some(form),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut PersonForm> {
        match &mut self.state {
            DialogState::Open { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Close an open dialog. A save in flight is not cancelled.
    pub fn cancel(&mut self) {
        if matches!(self.state, DialogState::Open { .. }) {
            self.state = DialogState::Closed;
        }
    }

    /// Validate the form and enter `Saving`.
    ///
    /// Fails without a state change when the dialog is not open, and keeps it
    /// open when validation fails. A second save while one is in flight is
    /// rejected.
    pub fn begin_save(&mut self) -> ClientResult<SaveRequest> {
        let (mode, form) = match mem::take(&mut self.state) {
            DialogState::Open { mode, form } => (mode, form),
            other => {
                let message = if matches!(other, DialogState::Saving { .. }) {
                    "A save is already in progress"
                } else {
                    "The person dialog is not open"
                };
                self.state = other;
                return Err(ClientError::invalid_state(message));
            }
        };

        if let Err(errors) = form.validate() {
            self.state = DialogState::Open { mode, form };
            return Err(ClientError::validation(errors));
        }

        let action = SaveAction::decide(mode, form.include_address);
        debug!("Saving person dialog: {action}");
        self.state = DialogState::Saving { mode };
        Ok(SaveRequest { action, form })
    }

    /// Leave `Saving`, success or not.
    pub fn finish(&mut self) {
        if self.is_saving() {
            self.state = DialogState::Closed;
        }
    }
}
