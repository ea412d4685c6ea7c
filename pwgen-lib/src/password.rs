use zeroize::Zeroize;

use crate::error::GeneratorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordLength(usize);

impl PasswordLength {
    pub const DEFAULT: PasswordLength = PasswordLength(10);

    pub fn new(length: usize) -> Self {
        Self(length)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for PasswordLength {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<i64> for PasswordLength {
    type Error = GeneratorError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match usize::try_from(value) {
            Ok(length) => Ok(Self(length)),
            Err(_) => Err(GeneratorError::InvalidArgument(format!(
                "password length must not be negative, got {}",
                value
            ))),
        }
    }
}

impl std::fmt::Display for PasswordLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(std::format_args!("{}", self.0))
    }
}

// Upper bound on the up-front reservation, longer passwords grow as they are drawn
static MAX_RESERVED: usize = 4096;

/// A generated password. The buffer is wiped on drop and never shown by `Debug`.
#[derive(PartialEq, Eq)]
pub struct Password {
    data: String,
}

impl Password {
    pub(crate) fn with_capacity(length: PasswordLength) -> Self {
        Self {
            data: String::with_capacity(length.get().min(MAX_RESERVED)),
        }
    }

    pub(crate) fn push(&mut self, c: char) {
        self.data.push(c);
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn chars(&self) -> std::str::Chars<'_> {
        self.data.chars()
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("len", &self.data.len())
            .finish_non_exhaustive()
    }
}

impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.data.zeroize();
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[cfg(test)]
mod test {
    use super::{Password, PasswordLength};

    #[test]
    fn length_from_signed() {
        assert_eq!(PasswordLength::try_from(0).unwrap().get(), 0);
        assert_eq!(PasswordLength::try_from(10).unwrap(), PasswordLength::DEFAULT);

        let error = PasswordLength::try_from(-1).unwrap_err();
        assert!(error.is_invalid_argument());
        assert!(error.to_string().contains("-1"));
    }

    #[test]
    fn length_default() {
        assert_eq!(PasswordLength::default().get(), 10);
    }

    #[test]
    fn password_accessors() {
        let mut password = Password::with_capacity(PasswordLength::new(3));
        assert!(password.is_empty());
        password.push('a');
        password.push('b');
        password.push('c');
        assert_eq!(password.len(), 3);
        assert_eq!(password.as_str(), "abc");
        assert_eq!(password.to_string(), "abc");
    }

    #[test]
    fn password_debug_redacted() {
        let mut password = Password::with_capacity(PasswordLength::new(4));
        for c in "qxzw".chars() {
            password.push(c);
        }
        let debug = format!("{:?}", password);
        assert!(!debug.contains("qxzw"), "{}", debug);
        assert_eq!(debug, "Password { len: 4, .. }");
    }

    #[test]
    fn huge_length_reserves_bounded() {
        let password = Password::with_capacity(PasswordLength::new(usize::MAX));
        assert!(password.data.capacity() <= super::MAX_RESERVED * 2);
        assert!(password.is_empty());
    }
}
