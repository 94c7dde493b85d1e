use core::fmt;

/// Raw state codes shared by every transition table.
///
/// States above `ITS_ME` are intermediate, table-specific positions inside a
/// multi-byte character.
pub mod code {
    pub const START: u8 = 0;
    pub const ERROR: u8 = 1;
    pub const ITS_ME: u8 = 2;
}

/// The classification returned after each byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineState {
    /// A character boundary was just completed.
    Start,
    /// The byte sequence is impossible in the modelled encoding.
    Error,
    /// The byte sequence is exclusive to the modelled encoding.
    ItsMe,
    /// Mid-character; more bytes are required.
    Pending(u8),
}

impl MachineState {
    #[inline(always)]
    fn from_code(raw: u8) -> Self {
        match raw {
            code::START => MachineState::Start,
            code::ERROR => MachineState::Error,
            code::ITS_ME => MachineState::ItsMe,
            other => MachineState::Pending(other),
        }
    }
}

/// An immutable, per-encoding transition table.
///
/// ## Layout
/// - `class_table`: byte -> byte class. Typed as 256 entries, so every byte
///   value has a class.
/// - `state_table`: row-major `(state, class) -> next state`, `class_factor`
///   columns per row.
/// - `char_len_table`: expected character length keyed by the class of a
///   character's first byte. Advisory only: it backs
///   [`CodingStateMachine::expected_charlen`], while completed characters are
///   measured by counting bytes, so multi-form leads (GB18030, EUC-TW SS2)
///   need no extra states.
#[derive(Debug)]
pub struct StateMachineModel {
    pub name: &'static str,
    pub class_table: &'static [u8; 256],
    pub class_factor: usize,
    pub state_table: &'static [u8],
    pub char_len_table: &'static [u8],
}

/// A malformed transition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    ZeroClassFactor { model: &'static str },
    StateTableShape { model: &'static str, len: usize, class_factor: usize },
    MissingReservedStates { model: &'static str, states: usize },
    CharLenTableSize { model: &'static str, len: usize, class_factor: usize },
    ClassOutOfRange { model: &'static str, byte: u8, class: u8 },
    NextStateOutOfRange { model: &'static str, index: usize, next: u8 },
    TerminalRowNotAbsorbing { model: &'static str, state: u8 },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::ZeroClassFactor { model } => write!(f, "{model}: class factor is zero"),
            ModelError::StateTableShape { model, len, class_factor } => write!(
                f,
                "{model}: state table length {len} is not a multiple of class factor {class_factor}"
            ),
            ModelError::MissingReservedStates { model, states } => write!(
                f,
                "{model}: {states} states declared, START/ERROR/ITS_ME need at least 3"
            ),
            ModelError::CharLenTableSize { model, len, class_factor } => write!(
                f,
                "{model}: char length table has {len} entries for {class_factor} classes"
            ),
            ModelError::ClassOutOfRange { model, byte, class } => {
                write!(f, "{model}: byte {byte:#04x} maps to class {class} beyond the class factor")
            }
            ModelError::NextStateOutOfRange { model, index, next } => {
                write!(f, "{model}: transition {index} targets undefined state {next}")
            }
            ModelError::TerminalRowNotAbsorbing { model, state } => {
                write!(f, "{model}: terminal state {state} has an outgoing transition")
            }
        }
    }
}

impl StateMachineModel {
    /// Number of states described by the table.
    pub fn state_count(&self) -> usize {
        if self.class_factor == 0 {
            0
        } else {
            self.state_table.len() / self.class_factor
        }
    }

    /// Checks the table geometry and that ERROR and ITS_ME are absorbing.
    pub fn validate(&self) -> Result<(), ModelError> {
        let model = self.name;
        let class_factor = self.class_factor;
        if class_factor == 0 {
            return Err(ModelError::ZeroClassFactor { model });
        }
        if self.state_table.len() % class_factor != 0 {
            return Err(ModelError::StateTableShape {
                model,
                len: self.state_table.len(),
                class_factor,
            });
        }
        let states = self.state_count();
        if states <= code::ITS_ME as usize {
            return Err(ModelError::MissingReservedStates { model, states });
        }
        if self.char_len_table.len() != class_factor {
            return Err(ModelError::CharLenTableSize {
                model,
                len: self.char_len_table.len(),
                class_factor,
            });
        }
        for (byte, &class) in self.class_table.iter().enumerate() {
            if class as usize >= class_factor {
                return Err(ModelError::ClassOutOfRange { model, byte: byte as u8, class });
            }
        }
        for (index, &next) in self.state_table.iter().enumerate() {
            if next as usize >= states {
                return Err(ModelError::NextStateOutOfRange { model, index, next });
            }
        }
        for terminal in [code::ERROR, code::ITS_ME] {
            let row = &self.state_table[terminal as usize * class_factor..][..class_factor];
            if row.iter().any(|&next| next != terminal) {
                return Err(ModelError::TerminalRowNotAbsorbing { model, state: terminal });
            }
        }
        Ok(())
    }
}

/// A byte-at-a-time validator driven by a [`StateMachineModel`].
///
/// Exactly one transition happens per byte. The model is borrowed for the
/// program lifetime and never copied.
#[derive(Debug, Clone)]
pub struct CodingStateMachine {
    model: &'static StateMachineModel,
    curr_state: u8,
    curr_byte_pos: usize,
    curr_char_len: usize,
}

impl CodingStateMachine {
    /// Creates a machine for `model`.
    ///
    /// # Panics
    /// Panics if the model fails [`StateMachineModel::validate`]; a malformed
    /// table is a build defect, not an input condition.
    pub fn new(model: &'static StateMachineModel) -> Self {
        match Self::try_new(model) {
            Ok(machine) => machine,
            Err(e) => panic!("CodingStateMachine: {e}"),
        }
    }

    pub fn try_new(model: &'static StateMachineModel) -> Result<Self, ModelError> {
        model.validate()?;
        Ok(Self {
            model,
            curr_state: code::START,
            curr_byte_pos: 0,
            curr_char_len: 0,
        })
    }

    pub fn reset(&mut self) {
        self.curr_state = code::START;
        self.curr_byte_pos = 0;
        self.curr_char_len = 0;
    }

    /// Consumes one byte and returns the resulting classification.
    #[inline(always)]
    pub fn next_state(&mut self, byte: u8) -> MachineState {
        let class = self.model.class_table[byte as usize] as usize;
        if self.curr_state == code::START {
            self.curr_byte_pos = 0;
            self.curr_char_len = self.model.char_len_table[class] as usize;
        }
        let idx = self.curr_state as usize * self.model.class_factor + class;
        self.curr_state = self.model.state_table[idx];
        self.curr_byte_pos += 1;
        MachineState::from_code(self.curr_state)
    }

    /// Bytes consumed by the current character; after a `Start` this is the
    /// length of the character just completed.
    #[inline(always)]
    pub fn get_current_charlen(&self) -> usize {
        self.curr_byte_pos
    }

    /// Length the model announces for the character in progress, taken from
    /// the class of its first byte.
    pub fn expected_charlen(&self) -> usize {
        self.curr_char_len
    }

    pub fn state(&self) -> MachineState {
        MachineState::from_code(self.curr_state)
    }

    pub fn model(&self) -> &'static StateMachineModel {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::code::{ERROR as E, ITS_ME as M, START as S};

    // Two-byte machine: class 0 ASCII, class 1 lead, class 2 forbidden,
    // class 3 exclusive marker.
    static CLASSES: [u8; 256] = {
        let mut t = [0u8; 256];
        let mut i = 0x80;
        while i < 0x100 {
            t[i] = 1;
            i += 1;
        }
        t[0xFF] = 2;
        t[0x1B] = 3;
        t
    };
    static STATES: [u8; 16] = [
        S, 3, E, M, //
        E, E, E, E, //
        M, M, M, M, //
        E, S, E, E, //
    ];
    static LENS: [u8; 4] = [1, 2, 0, 0];
    static TOY: StateMachineModel = StateMachineModel {
        name: "toy",
        class_table: &CLASSES,
        class_factor: 4,
        state_table: &STATES,
        char_len_table: &LENS,
    };

    #[test]
    fn tracks_character_length() {
        let mut sm = CodingStateMachine::new(&TOY);
        assert_eq!(sm.next_state(b'a'), MachineState::Start);
        assert_eq!(sm.get_current_charlen(), 1);
        assert_eq!(sm.next_state(0x90), MachineState::Pending(3));
        assert_eq!(sm.expected_charlen(), 2);
        assert_eq!(sm.next_state(0x91), MachineState::Start);
        assert_eq!(sm.get_current_charlen(), 2);
    }

    #[test]
    fn terminal_states_absorb() {
        let mut sm = CodingStateMachine::new(&TOY);
        assert_eq!(sm.next_state(0x1B), MachineState::ItsMe);
        assert_eq!(sm.next_state(0xFF), MachineState::ItsMe);
        sm.reset();
        assert_eq!(sm.next_state(0xFF), MachineState::Error);
        assert_eq!(sm.next_state(b'a'), MachineState::Error);
    }

    #[test]
    fn rejects_leaky_error_row() {
        static LEAKY: [u8; 16] = [
            S, 3, E, M, //
            S, E, E, E, //
            M, M, M, M, //
            E, S, E, E, //
        ];
        static BAD: StateMachineModel = StateMachineModel {
            name: "leaky",
            class_table: &CLASSES,
            class_factor: 4,
            state_table: &LEAKY,
            char_len_table: &LENS,
        };
        assert_eq!(
            CodingStateMachine::try_new(&BAD).err(),
            Some(ModelError::TerminalRowNotAbsorbing { model: "leaky", state: E })
        );
    }
}
