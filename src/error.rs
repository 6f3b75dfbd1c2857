use thiserror::Error;

/// Errors raised while building a pin code control.
///
/// Rejected keystrokes are not errors: the input bridge declines them and
/// reports `false` instead.
#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum PinCodeError {
    #[error("digit count must be at least 1, got {digit_count}")]
    InvalidDigitCount { digit_count: usize },
}

pub type PinCodeResult<T> = Result<T, PinCodeError>;
