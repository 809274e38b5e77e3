// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Finite-state validation of course names.
//!
//! A course name is one to four letters, exactly three digits and an
//! optional one-letter suffix: `E115`, `CSC216`, `MA141H`. The validator
//! consumes one character at a time and rejects the name at the first
//! transition the grammar does not allow.

/// A character the current state has no transition for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct InvalidTransition {
    message: &'static str,
}

impl InvalidTransition {
    #[inline]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }

    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

const MAX_PREFIX_LETTERS: usize = 4;
const COURSE_NUMBER_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Initial,
    Letter,
    Number,
    Suffix,
}

/// Character classes the state machine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Letter,
    Digit,
    Other,
}

impl Input {
    #[inline]
    fn classify(c: char) -> Self {
        if c.is_alphabetic() {
            Input::Letter
        } else if c.is_ascii_digit() {
            Input::Digit
        } else {
            Input::Other
        }
    }
}

/// Course name state machine.
#[derive(Debug, Clone, Default)]
pub struct CourseNameValidator {
    state: State,
    letters: usize,
    digits: usize,
    accepting: bool,
}

impl CourseNameValidator {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the machine over `name`.
    ///
    /// Returns `Ok(false)` if the input ended before an accepting state was
    /// reached (too few digits, no letters at all) and an
    /// [`InvalidTransition`] for the first offending character otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use registrar_model::validator::CourseNameValidator;
    /// let mut validator = CourseNameValidator::new();
    /// assert_eq!(validator.is_valid("CSC216"), Ok(true));
    /// assert_eq!(validator.is_valid("CSC21"), Ok(false));
    /// assert!(validator.is_valid("CSC2160").is_err());
    /// ```
    pub fn is_valid(&mut self, name: &str) -> Result<bool, InvalidTransition> {
        *self = Self::default();
        for c in name.chars() {
            self.step(Input::classify(c))?;
        }
        Ok(self.accepting)
    }

    fn step(&mut self, input: Input) -> Result<(), InvalidTransition> {
        if input == Input::Other {
            return Err(InvalidTransition::new(
                "course name can only contain letters and digits",
            ));
        }

        match (self.state, input) {
            (State::Initial, Input::Letter) => {
                self.letters += 1;
                self.state = State::Letter;
            }
            (State::Initial, _) => {
                return Err(InvalidTransition::new("course name must start with a letter"));
            }
            (State::Letter, Input::Letter) => {
                self.letters += 1;
                if self.letters > MAX_PREFIX_LETTERS {
                    return Err(InvalidTransition::new(
                        "course name cannot start with more than 4 letters",
                    ));
                }
            }
            (State::Letter, _) => {
                self.digits += 1;
                self.state = State::Number;
            }
            (State::Number, Input::Letter) => {
                if self.digits != COURSE_NUMBER_LENGTH {
                    return Err(InvalidTransition::new("course name must have 3 digits"));
                }
                self.accepting = true;
                self.state = State::Suffix;
            }
            (State::Number, _) => {
                self.digits += 1;
                if self.digits > COURSE_NUMBER_LENGTH {
                    return Err(InvalidTransition::new("course name can only have 3 digits"));
                }
                self.accepting = self.digits == COURSE_NUMBER_LENGTH;
            }
            (State::Suffix, Input::Letter) => {
                return Err(InvalidTransition::new(
                    "course name can only have a 1 letter suffix",
                ));
            }
            (State::Suffix, _) => {
                return Err(InvalidTransition::new(
                    "course name cannot contain digits after the suffix",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str) -> Result<bool, InvalidTransition> {
        CourseNameValidator::new().is_valid(name)
    }

    #[test]
    fn test_accepts_valid_names() {
        for name in ["E115", "CSC216", "MA141H", "ABCD123", "ABCD123X"] {
            assert_eq!(check(name), Ok(true), "{}", name);
        }
    }

    #[test]
    fn test_incomplete_names_are_not_accepted() {
        assert_eq!(check(""), Ok(false));
        assert_eq!(check("CSC"), Ok(false));
        assert_eq!(check("CSC21"), Ok(false));
    }

    #[test]
    fn test_transition_messages() {
        let cases = [
            ("CSC-216", "course name can only contain letters and digits"),
            ("1CSC", "course name must start with a letter"),
            ("ABCDE123", "course name cannot start with more than 4 letters"),
            ("CSC21A", "course name must have 3 digits"),
            ("CSC2167", "course name can only have 3 digits"),
            ("CSC216AB", "course name can only have a 1 letter suffix"),
            ("CSC216A1", "course name cannot contain digits after the suffix"),
        ];
        for (name, message) in cases {
            assert_eq!(check(name).unwrap_err().message(), message, "{}", name);
        }
    }

    #[test]
    fn test_validator_is_reusable() {
        let mut validator = CourseNameValidator::new();
        assert!(validator.is_valid("CSC2160").is_err());
        assert_eq!(validator.is_valid("CSC216"), Ok(true));
    }
}
