#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyboardType {
    Default,
    NumberPad,
    DecimalPad,
    PhonePad,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Autocapitalization {
    None,
    Words,
    Sentences,
    AllCharacters,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Autocorrection {
    Default,
    No,
    Yes,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpellChecking {
    Default,
    No,
    Yes,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyboardAppearance {
    Default,
    Dark,
    Light,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReturnKey {
    Default,
    Go,
    Next,
    Done,
}

/// Declarative keyboard metadata handed to the host's keyboard presenter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextInputTraits {
    pub keyboard: KeyboardType,
    pub autocapitalization: Autocapitalization,
    pub autocorrection: Autocorrection,
    pub spell_checking: SpellChecking,
    pub keyboard_appearance: KeyboardAppearance,
    pub return_key: ReturnKey,
    pub enables_return_key_automatically: bool,
}

impl TextInputTraits {
    pub const NUMERIC_CODE: Self = Self {
        keyboard: KeyboardType::NumberPad,
        autocapitalization: Autocapitalization::None,
        autocorrection: Autocorrection::No,
        spell_checking: SpellChecking::No,
        keyboard_appearance: KeyboardAppearance::Default,
        return_key: ReturnKey::Done,
        enables_return_key_automatically: true,
    };
}

impl Default for TextInputTraits {
    fn default() -> Self {
        Self::NUMERIC_CODE
    }
}
