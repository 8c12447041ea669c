//! Access gate
//!
//! A shared passphrase keeps casual visitors out. It is compared in plain
//! text and is not a security boundary.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

impl GateState {
    pub fn is_unlocked(&self) -> bool {
        matches!(self, GateState::Unlocked)
    }
}

#[derive(Clone)]
pub struct AccessGate {
    passphrase: String,
}

impl AccessGate {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }

    pub fn check(&self, input: &str) -> GateState {
        if input == self.passphrase {
            GateState::Unlocked
        } else {
            GateState::Locked
        }
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check() {
        let gate = AccessGate::new("0525");
        assert_eq!(gate.check("0525"), GateState::Unlocked);
        assert_eq!(gate.check(""), GateState::Locked);
        assert_eq!(gate.check("0525 "), GateState::Locked);
        assert_eq!(gate.check("525"), GateState::Locked);
    }

    #[test]
    fn test_debug_hides_passphrase() {
        let gate = AccessGate::new("secret-word");
        assert!(!format!("{gate:?}").contains("secret-word"));
    }
}
