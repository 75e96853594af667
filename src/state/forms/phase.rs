//! Lifecycle of the form across edit/validate/submit cycles

/// Where the form is in its edit/validate/submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Pristine,
    Editing,
    Validating,
    Invalid,
    Submittable,
    Submitted,
}

/// Things that move the form between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// A field value changed
    Changed,
    /// A blur or submit attempt started validation
    ValidationStarted,
    ValidationPassed,
    ValidationFailed,
    /// The submit handler ran
    Submitted,
}

impl FormPhase {
    /// Next phase after `event`. Events that do not apply leave the phase unchanged.
    pub fn transition(self, event: FormEvent) -> FormPhase {
        use self::FormEvent as E;
        use self::FormPhase as P;

        let next = match (self, event) {
            (_, E::Changed) => P::Editing,
            (_, E::ValidationStarted) => P::Validating,
            (P::Validating, E::ValidationPassed) => P::Submittable,
            (P::Validating, E::ValidationFailed) => P::Invalid,
            (P::Submittable, E::Submitted) => P::Submitted,
            (phase, _) => phase,
        };

        if next == self && event != E::Changed {
            tracing::trace!("Ignoring {:?} in phase {:?}", event, self);
        } else if next != self {
            tracing::debug!("Form phase {:?} -> {:?} on {:?}", self, next, event);
        }
        next
    }
}
