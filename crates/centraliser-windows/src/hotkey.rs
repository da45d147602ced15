use centraliser_core::{Error, Hotkey, HotkeyRegistrar, Modifier, Result};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    HOT_KEY_MODIFIERS, MOD_ALT, MOD_CONTROL, MOD_NOREPEAT, MOD_SHIFT, MOD_WIN, RegisterHotKey,
    UnregisterHotKey,
};

use crate::keys;

/// Registers global hotkeys on the calling thread's message queue.
///
/// No window is involved: `WM_HOTKEY` is posted to the thread that
/// registered the hotkey, so registration, the message pump and
/// unregistration must all happen on that same thread.
#[derive(Debug, Default)]
pub struct Win32Hotkeys;

impl HotkeyRegistrar for Win32Hotkeys {
    fn register(&mut self, id: i32, hotkey: &Hotkey) -> Result<()> {
        let vk = keys::vk_from_name(&hotkey.key)
            .ok_or_else(|| Error::UnknownKey(hotkey.key.clone()))?;

        // Holding the key down must not re-centre in a loop.
        let modifiers = hotkey
            .modifiers
            .iter()
            .fold(MOD_NOREPEAT, |flags, m| flags | modifier_to_flag(*m));

        // SAFETY: registers a system-wide hotkey for this thread. Fails if
        // another process already owns the combination.
        unsafe { RegisterHotKey(None, id, modifiers, vk) }.map_err(|e| {
            Error::RegistrationFailed {
                hotkey: hotkey.to_string(),
                reason: e.to_string(),
            }
        })
    }

    fn unregister(&mut self, id: i32) {
        // SAFETY: releases a registration made on this thread.
        unsafe {
            let _ = UnregisterHotKey(None, id);
        }
    }
}

fn modifier_to_flag(modifier: Modifier) -> HOT_KEY_MODIFIERS {
    match modifier {
        Modifier::Alt => MOD_ALT,
        Modifier::Ctrl => MOD_CONTROL,
        Modifier::Shift => MOD_SHIFT,
        Modifier::Win => MOD_WIN,
    }
}
