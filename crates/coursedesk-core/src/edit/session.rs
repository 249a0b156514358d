// ── Generic edit session ──
//
// Tracks one entity's VIEW/EDIT mode and its edit buffer. Sessions never
// touch the network: inputs return an `Intent` for the caller to act on,
// and request outcomes are fed back through `on_outcome`.

use super::{ConfirmRequest, Disposition, Editable, Intent, Mode, Operation};

/// Edit state for an existing entity, or for a create slot (no entity yet).
#[derive(Debug, Clone)]
pub struct EditSession<E: Editable> {
    parent: E::Parent,
    committed: Option<E>,
    mode: Mode,
    buffer: E::Buffer,
    in_flight: usize,
}

impl<E: Editable> EditSession<E> {
    /// Session for an entity the server already knows. Starts in `View`.
    pub fn existing(parent: E::Parent, entity: E) -> Self {
        let buffer = entity.seed();
        Self {
            parent,
            committed: Some(entity),
            mode: Mode::View,
            buffer,
            in_flight: 0,
        }
    }

    /// Session for a not-yet-created entity. Always in `Edit`.
    pub fn create(parent: E::Parent) -> Self {
        Self {
            parent,
            committed: None,
            mode: Mode::Edit,
            buffer: E::Buffer::default(),
            in_flight: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == Mode::Edit
    }

    pub fn committed(&self) -> Option<&E> {
        self.committed.as_ref()
    }

    pub fn buffer(&self) -> &E::Buffer {
        &self.buffer
    }

    /// Mutable buffer access, only while editing.
    pub fn buffer_mut(&mut self) -> Option<&mut E::Buffer> {
        match self.mode {
            Mode::Edit => Some(&mut self.buffer),
            Mode::View => None,
        }
    }

    /// `true` while at least one dispatched request has no outcome yet.
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    // ── Inputs ───────────────────────────────────────────────────────

    /// The primary control: edit, save, or submit a create.
    pub fn primary(&mut self) -> Intent {
        let Some(entity) = &self.committed else {
            return self.submit_create();
        };

        match self.mode {
            Mode::View => {
                self.buffer = entity.seed();
                self.mode = Mode::Edit;
                Intent::None
            }
            Mode::Edit => {
                let command = entity.update_command(&self.buffer);
                if E::POLICY.confirm_save {
                    Intent::Confirm {
                        op: Operation::Update,
                        request: ConfirmRequest::new(entity.save_prompt(&self.buffer), command),
                    }
                } else {
                    Intent::Submit {
                        op: Operation::Update,
                        command,
                    }
                }
            }
        }
    }

    fn submit_create(&self) -> Intent {
        if let Err(message) = E::validate(&self.buffer) {
            return Intent::Invalid(message);
        }

        let command = E::create_command(&self.parent, &self.buffer);
        if E::POLICY.confirm_create {
            Intent::Confirm {
                op: Operation::Create,
                request: ConfirmRequest::new(E::create_prompt(&self.buffer), command),
            }
        } else {
            Intent::Submit {
                op: Operation::Create,
                command,
            }
        }
    }

    /// The cancel control.
    ///
    /// Existing entities drop the buffer, re-derive it from the committed
    /// entity and return to `View`. A create slot asks to be closed.
    pub fn cancel(&mut self) -> Disposition {
        match &self.committed {
            Some(entity) => {
                self.buffer = entity.seed();
                self.mode = Mode::View;
                Disposition::Keep
            }
            None => {
                self.buffer = E::Buffer::default();
                Disposition::Close
            }
        }
    }

    /// The destructive control. Available in both modes.
    pub fn delete(&self) -> Intent {
        let Some(entity) = &self.committed else {
            return Intent::None;
        };

        let command = entity.delete_command();
        if E::POLICY.confirm_delete {
            Intent::Confirm {
                op: Operation::Delete,
                request: ConfirmRequest::new(entity.delete_prompt(), command),
            }
        } else {
            Intent::Submit {
                op: Operation::Delete,
                command,
            }
        }
    }

    // ── Request lifecycle ────────────────────────────────────────────

    /// Record that a request for this session was sent.
    pub fn dispatched(&mut self) {
        self.in_flight += 1;
    }

    /// Apply the outcome of a previously dispatched request.
    ///
    /// Failures never change mode or buffer, so the user can retry.
    pub fn on_outcome(&mut self, op: Operation, ok: bool) -> Disposition {
        self.in_flight = self.in_flight.saturating_sub(1);
        if !ok {
            return Disposition::Keep;
        }

        match op {
            Operation::Update => {
                self.mode = Mode::View;
                Disposition::Keep
            }
            Operation::Create => {
                if E::POLICY.reset_after_create {
                    self.buffer = E::Buffer::default();
                }
                if E::POLICY.close_after_create {
                    Disposition::Close
                } else {
                    Disposition::Keep
                }
            }
            Operation::Delete => Disposition::Close,
        }
    }

    /// Adopt fresh committed values from a refresh.
    ///
    /// In `View` the buffer follows the new values; an open edit keeps
    /// whatever the user has typed.
    pub fn sync(&mut self, entity: E) {
        if self.mode == Mode::View {
            self.buffer = entity.seed();
        }
        self.committed = Some(entity);
    }
}
