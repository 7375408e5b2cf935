pub const KEY_CODE_Z: u32 = 90;

/// The parts of a key-down event that decide whether it is an undo.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyChord {
    pub key: String,
    pub key_code: u32,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyChord {
    pub fn new(key: impl Into<String>, key_code: u32, ctrl: bool, meta: bool) -> KeyChord {
        KeyChord { key: key.into(), key_code, ctrl, meta }
    }

    /// Ctrl+Z or Cmd+Z. `key_code` covers layouts where `key` is not "z".
    pub fn is_undo(&self) -> bool {
        (self.ctrl || self.meta)
            && (self.key.eq_ignore_ascii_case("z") || self.key_code == KEY_CODE_Z)
    }
}
