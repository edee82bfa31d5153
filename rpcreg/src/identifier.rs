use crate::method_count::MethodCount;

const ALPHABET_LEN: usize = 26;

/// Returns the placeholder identifier used for the macro parameter at
/// `index`.
///
/// The first 26 parameters are named `a` to `z`. Past that, the letter
/// cycles again and the round number is appended (`a1`, `b1`, ..., `z1`,
/// `a2`, ...), so every index maps to a distinct C identifier. None of the
/// generated names can be `classname`.
///
/// # Example
/// ```
/// use rpcreg::identifier::param_name;
///
/// assert_eq!(param_name(0), "a");
/// assert_eq!(param_name(25), "z");
/// assert_eq!(param_name(26), "a1");
/// assert_eq!(param_name(53), "b2");
/// ```
#[must_use]
pub fn param_name(index: usize) -> String {
    let letter = char::from(b'a' + (index % ALPHABET_LEN) as u8);
    let round = index / ALPHABET_LEN;

    if round == 0 {
        letter.to_string()
    } else {
        format!("{}{}", letter, round)
    }
}

/// Returns the placeholder identifiers for a macro taking `count` methods.
#[must_use]
pub fn param_names(count: MethodCount) -> Vec<String> {
    (0..count.get()).map(param_name).collect()
}
