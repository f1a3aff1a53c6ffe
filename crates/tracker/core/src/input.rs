//! Keyboard state machine for keypad chords and hint text entry.
//!
//! ```text
//! Idle ──keypad──▶ AwaitingZoneDigit ──digit──▶ AwaitingItemDigit ──digit──▶ Idle + Chord
//!  │                      │ other                     │ other
//!  │                      ▼                           ▼
//!  │                     Idle                        Idle
//!  ├──woth/barren/note──▶ Text ──submit──▶ Idle + Hint
//!  └──always──▶ AwaitingHintSlot ──digit 1-7──▶ Text
//! ```
//!
//! The machine only interprets keystrokes; the tracker resolves the commands
//! it emits against the catalog and the hint ledger.
use crate::config::KeyBindings;
use crate::hints::{AlwaysHint, HintTarget};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum InputState {
    #[default]
    Idle,
    AwaitingZoneDigit,
    AwaitingItemDigit {
        zone: u8,
    },
    AwaitingHintSlot,
    Text {
        target: HintTarget,
        buffer: String,
    },
}

/// Fully decoded input, ready to be applied by the tracker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputCommand {
    /// Upgrade the item under keypad `(zone, item)`.
    ///
    /// Digits are not range-checked here; `0` reaches the zone-item map and
    /// fails there as out of range.
    Chord { zone: u8, item: u8 },
    /// File `text` under `target` in the hint ledger.
    Hint { target: HintTarget, text: String },
}

#[derive(Clone, Debug, Default)]
pub struct KeypadInput {
    state: InputState,
    bindings: KeyBindings,
}

impl KeypadInput {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            state: InputState::Idle,
            bindings,
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// True whenever the machine owns keyboard input, i.e. in any non-idle
    /// state. Callers use this to route keys as text instead of hotkeys.
    pub fn eats_input(&self) -> bool {
        self.state != InputState::Idle
    }

    /// True while a keypad chord is being entered.
    pub fn is_chord_pending(&self) -> bool {
        matches!(
            self.state,
            InputState::AwaitingZoneDigit | InputState::AwaitingItemDigit { .. }
        )
    }

    /// Zone digit of the chord in progress, used for the highlight overlay.
    pub fn active_zone(&self) -> Option<u8> {
        match self.state {
            InputState::AwaitingItemDigit { zone } => Some(zone),
            _ => None,
        }
    }

    /// Feeds one character. Returns a command when it completes a chord.
    pub fn feed(&mut self, ch: char) -> Option<InputCommand> {
        let state = std::mem::take(&mut self.state);
        let (next, command) = match state {
            InputState::Idle => (self.start(ch), None),
            InputState::AwaitingZoneDigit => match digit(ch) {
                Some(zone) => (InputState::AwaitingItemDigit { zone }, None),
                None => (InputState::Idle, None),
            },
            InputState::AwaitingItemDigit { zone } => match digit(ch) {
                Some(item) => (InputState::Idle, Some(InputCommand::Chord { zone, item })),
                None => (InputState::Idle, None),
            },
            InputState::AwaitingHintSlot => match digit(ch).and_then(AlwaysHint::from_digit) {
                Some(slot) => (text(HintTarget::Always(slot)), None),
                None => (InputState::Idle, None),
            },
            InputState::Text { target, mut buffer } => {
                if !ch.is_control() {
                    buffer.push(ch);
                }
                (InputState::Text { target, buffer }, None)
            }
        };

        self.state = next;
        command
    }

    fn start(&self, ch: char) -> InputState {
        let bindings = &self.bindings;
        if ch == bindings.keypad {
            InputState::AwaitingZoneDigit
        } else if ch == bindings.woth {
            text(HintTarget::Woth)
        } else if ch == bindings.barren {
            text(HintTarget::Barren)
        } else if ch == bindings.note {
            text(HintTarget::Note)
        } else if ch == bindings.always {
            InputState::AwaitingHintSlot
        } else {
            InputState::Idle
        }
    }

    /// Removes the last entered character of the active buffer, if any.
    pub fn backspace(&mut self) {
        match &mut self.state {
            InputState::Text { buffer, .. } => {
                buffer.pop();
            }
            InputState::AwaitingItemDigit { .. } => {
                self.state = InputState::AwaitingZoneDigit;
            }
            InputState::Idle | InputState::AwaitingZoneDigit | InputState::AwaitingHintSlot => {}
        }
    }

    /// Finalizes text entry and returns to idle.
    pub fn submit(&mut self) -> Option<InputCommand> {
        match std::mem::take(&mut self.state) {
            InputState::Text { target, buffer } => Some(InputCommand::Hint {
                target,
                text: buffer,
            }),
            _ => None,
        }
    }

    /// Drops any pending input.
    pub fn cancel(&mut self) {
        self.state = InputState::Idle;
    }
}

fn digit(ch: char) -> Option<u8> {
    ch.to_digit(10).map(|d| d as u8)
}

fn text(target: HintTarget) -> InputState {
    InputState::Text {
        target,
        buffer: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_str(input: &mut KeypadInput, keys: &str) -> Vec<InputCommand> {
        keys.chars().filter_map(|ch| input.feed(ch)).collect()
    }

    #[test]
    fn chord_emits_zone_and_item() {
        let mut input = KeypadInput::default();
        assert!(!input.eats_input());

        assert_eq!(input.feed('/'), None);
        assert!(input.eats_input());
        assert_eq!(input.feed('3'), None);
        assert_eq!(input.active_zone(), Some(3));

        assert_eq!(
            input.feed('7'),
            Some(InputCommand::Chord { zone: 3, item: 7 })
        );
        assert!(!input.eats_input());
        assert_eq!(input.active_zone(), None);
    }

    #[test]
    fn non_digit_cancels_chord() {
        let mut input = KeypadInput::default();
        assert!(feed_str(&mut input, "/x").is_empty());
        assert_eq!(input.state(), &InputState::Idle);

        assert!(feed_str(&mut input, "/4q").is_empty());
        assert_eq!(input.state(), &InputState::Idle);
    }

    #[test]
    fn idle_ignores_unbound_characters() {
        let mut input = KeypadInput::default();
        assert!(feed_str(&mut input, "xyz123").is_empty());
        assert!(!input.eats_input());
    }

    #[test]
    fn backspace_walks_back_through_buffers() {
        let mut input = KeypadInput::default();
        input.backspace();
        assert_eq!(input.state(), &InputState::Idle);

        feed_str(&mut input, "/5");
        input.backspace();
        assert_eq!(input.state(), &InputState::AwaitingZoneDigit);
        input.backspace();
        assert_eq!(input.state(), &InputState::AwaitingZoneDigit);

        assert_eq!(
            feed_str(&mut input, "21"),
            [InputCommand::Chord { zone: 2, item: 1 }]
        );
    }

    #[test]
    fn text_entry_collects_until_submit() {
        let mut input = KeypadInput::default();
        feed_str(&mut input, "wlost woodz");
        input.backspace();
        input.feed('s');

        assert_eq!(
            input.submit(),
            Some(InputCommand::Hint {
                target: HintTarget::Woth,
                text: "lost woods".into(),
            })
        );
        assert!(!input.eats_input());
        assert_eq!(input.submit(), None);
    }

    #[test]
    fn bound_keys_are_plain_text_while_typing() {
        let mut input = KeypadInput::default();
        feed_str(&mut input, "n/wb");
        assert_eq!(
            input.state(),
            &InputState::Text {
                target: HintTarget::Note,
                buffer: "/wb".into(),
            }
        );
    }

    #[test]
    fn always_slot_requires_valid_digit() {
        let mut input = KeypadInput::default();
        feed_str(&mut input, "a7");
        assert_eq!(
            input.state(),
            &InputState::Text {
                target: HintTarget::Always(AlwaysHint::Frogs2),
                buffer: String::new(),
            }
        );

        input.cancel();
        feed_str(&mut input, "a9");
        assert_eq!(input.state(), &InputState::Idle);
    }

    #[test]
    fn custom_bindings_change_triggers() {
        let bindings = KeyBindings {
            keypad: '.',
            ..KeyBindings::default()
        };
        let mut input = KeypadInput::new(bindings);
        assert!(feed_str(&mut input, "/12").is_empty());
        assert_eq!(
            feed_str(&mut input, ".12"),
            [InputCommand::Chord { zone: 1, item: 2 }]
        );
    }

    #[test]
    fn cancel_clears_text() {
        let mut input = KeypadInput::default();
        feed_str(&mut input, "bkak");
        input.cancel();
        assert!(!input.eats_input());
        assert_eq!(input.submit(), None);
    }
}
