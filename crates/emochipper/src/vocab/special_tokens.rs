//! # Special Tokens

use crate::{
    errors::{EmoError, EmoResult},
    types::TokenType,
    vocab::StrTokenMap,
};

/// The sequence-begin token.
pub const BEGIN_TOKEN: &str = "<s>";

/// The sequence-end token.
pub const END_TOKEN: &str = "</s>";

/// The padding token.
pub const PAD_TOKEN: &str = "<pad>";

/// The unknown-content token.
pub const UNKNOWN_TOKEN: &str = "<unk>";

/// Prefix marking a subword which was preceded by a space.
pub const BOUNDARY_MARKER: char = 'Ġ';

/// The ids of the four reserved tokens used in sequence assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpecialTokens<T: TokenType> {
    /// Id of [`BEGIN_TOKEN`].
    pub begin: T,

    /// Id of [`END_TOKEN`].
    pub end: T,

    /// Id of [`PAD_TOKEN`].
    pub pad: T,

    /// Id of [`UNKNOWN_TOKEN`].
    pub unknown: T,
}

impl<T: TokenType> SpecialTokens<T> {
    /// Resolve the special tokens from a `{ String -> T }` map.
    ///
    /// ## Returns
    /// [`EmoError::MissingSpecialToken`] naming the first absent token.
    pub fn from_str_map(str_map: &StrTokenMap<T>) -> EmoResult<Self> {
        let lookup = |token: &str| {
            str_map
                .get(token)
                .copied()
                .ok_or_else(|| EmoError::MissingSpecialToken {
                    token: token.to_string(),
                })
        };

        Ok(Self {
            begin: lookup(BEGIN_TOKEN)?,
            end: lookup(END_TOKEN)?,
            pad: lookup(PAD_TOKEN)?,
            unknown: lookup(UNKNOWN_TOKEN)?,
        })
    }

    /// Is `token` one of begin, end, or pad?
    ///
    /// These are the tokens dropped when decoding.
    pub fn is_framing(
        &self,
        token: T,
    ) -> bool {
        token == self.begin || token == self.end || token == self.pad
    }
}
