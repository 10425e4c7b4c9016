use alloy_primitives::U256;

/// Width of one ABI word.
const WORD: usize = 32;

/// Decode the `primary-list` metadata value into a list token id.
///
/// The value is an ABI word holding the token id. Empty values mean no primary
/// list is set, as does a zero word. Values longer than one word are read from
/// their first word.
pub fn decode_primary_list(value: &[u8]) -> Option<U256> {
    if value.is_empty() {
        return None;
    }
    let word = &value[..value.len().min(WORD)];
    let token_id = U256::from_be_slice(word);
    (!token_id.is_zero()).then_some(token_id)
}

/// Encode a token id the way `primary-list` stores it.
pub fn encode_primary_list(token_id: U256) -> [u8; WORD] {
    token_id.to_be_bytes::<WORD>()
}
