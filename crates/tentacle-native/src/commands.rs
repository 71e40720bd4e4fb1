use tentacle_core::{Command, RefreshProfile};
use winit::keyboard::KeyCode;

/// Refresh profile bound to a function key (F1 = 30 FPS .. F6 = 240 FPS).
#[inline]
pub fn profile_for_key(key: KeyCode) -> Option<RefreshProfile> {
    match key {
        KeyCode::F1 => Some(RefreshProfile::Fps30),
        KeyCode::F2 => Some(RefreshProfile::Fps60),
        KeyCode::F3 => Some(RefreshProfile::Fps120),
        KeyCode::F4 => Some(RefreshProfile::Fps144),
        KeyCode::F5 => Some(RefreshProfile::Fps165),
        KeyCode::F6 => Some(RefreshProfile::Fps240),
        _ => None,
    }
}

pub fn command_for_key(key: KeyCode) -> Option<Command> {
    if let Some(profile) = profile_for_key(key) {
        return Some(Command::SetProfile(profile));
    }
    match key {
        KeyCode::Escape => Some(Command::Exit),
        KeyCode::KeyW => Some(Command::CycleWobble),
        KeyCode::KeyG => Some(Command::CycleGravity),
        KeyCode::KeyS => Some(Command::CycleStyle),
        KeyCode::KeyI => Some(Command::ToggleIdleWobble),
        KeyCode::KeyR => Some(Command::Scatter),
        _ => None,
    }
}
