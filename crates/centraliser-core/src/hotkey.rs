use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;

/// Identifier of the centering hotkey registration.
pub const CENTRE_HOTKEY_ID: i32 = 1;

/// A global key combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkey {
    /// Key name (e.g. "C", "F9", "Space").
    pub key: String,
    /// Modifier keys (e.g. ["win"]).
    pub modifiers: Vec<Modifier>,
}

/// Keyboard modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Alt,
    Ctrl,
    Shift,
    Win,
}

impl Modifier {
    fn label(self) -> &'static str {
        match self {
            Self::Alt => "Alt",
            Self::Ctrl => "Ctrl",
            Self::Shift => "Shift",
            Self::Win => "Win",
        }
    }
}

impl Default for Hotkey {
    fn default() -> Self {
        Self {
            key: "C".into(),
            modifiers: vec![Modifier::Win],
        }
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.modifiers {
            write!(f, "{}+", m.label())?;
        }
        f.write_str(&self.key)
    }
}

/// Registers and releases global hotkeys with the host platform.
pub trait HotkeyRegistrar {
    /// Registers `hotkey` under `id`. Activations are later reported
    /// tagged with the same `id`.
    fn register(&mut self, id: i32, hotkey: &Hotkey) -> Result<()>;

    /// Releases the registration made under `id`.
    fn unregister(&mut self, id: i32);
}

/// A live hotkey registration. Dropping it releases the hotkey.
pub struct Registration<'a, R: HotkeyRegistrar> {
    registrar: &'a mut R,
    id: i32,
}

impl<'a, R: HotkeyRegistrar> Registration<'a, R> {
    /// Registers `hotkey` under `id` for the lifetime of the returned guard.
    pub fn acquire(registrar: &'a mut R, id: i32, hotkey: &Hotkey) -> Result<Self> {
        registrar.register(id, hotkey)?;
        crate::log_info!("registered hotkey {hotkey} (id {id})");
        Ok(Self { registrar, id })
    }

    pub fn id(&self) -> i32 {
        self.id
    }
}

impl<R: HotkeyRegistrar> Drop for Registration<'_, R> {
    fn drop(&mut self) {
        self.registrar.unregister(self.id);
        crate::log_info!("released hotkey id {}", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Default)]
    struct RecordingRegistrar {
        active: Vec<i32>,
        released: Vec<i32>,
        reject: bool,
    }

    impl HotkeyRegistrar for RecordingRegistrar {
        fn register(&mut self, id: i32, hotkey: &Hotkey) -> Result<()> {
            if self.reject {
                return Err(Error::RegistrationFailed {
                    hotkey: hotkey.to_string(),
                    reason: "already bound".into(),
                });
            }
            self.active.push(id);
            Ok(())
        }

        fn unregister(&mut self, id: i32) {
            self.active.retain(|&a| a != id);
            self.released.push(id);
        }
    }

    #[test]
    fn default_hotkey_is_win_c() {
        assert_eq!(Hotkey::default().to_string(), "Win+C");
    }

    #[test]
    fn display_lists_modifiers_in_order() {
        // Arrange
        let hotkey = Hotkey {
            key: "F9".into(),
            modifiers: vec![Modifier::Ctrl, Modifier::Alt],
        };

        // Assert
        assert_eq!(hotkey.to_string(), "Ctrl+Alt+F9");
    }

    #[test]
    fn registration_releases_on_drop() {
        // Arrange
        let mut registrar = RecordingRegistrar::default();

        // Act
        {
            let guard = Registration::acquire(&mut registrar, 7, &Hotkey::default()).unwrap();
            assert_eq!(guard.id(), 7);
        }

        // Assert
        assert!(registrar.active.is_empty());
        assert_eq!(registrar.released, vec![7]);
    }

    #[test]
    fn failed_registration_releases_nothing() {
        // Arrange
        let mut registrar = RecordingRegistrar {
            reject: true,
            ..Default::default()
        };

        // Act
        let rejected = matches!(
            Registration::acquire(&mut registrar, 1, &Hotkey::default()),
            Err(Error::RegistrationFailed { .. })
        );

        // Assert
        assert!(rejected);
        assert!(registrar.released.is_empty());
    }
}
