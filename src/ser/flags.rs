//! Flag bit overlaid on the high bit of the last byte of a compressed
//! coordinate encoding.

use crate::config::FLAG_MASK;

/// Returns whether the flag bit of `bytes` is set.
pub fn flag_bit(bytes: &[u8]) -> bool {
    bytes.last().is_some_and(|last| last & FLAG_MASK != 0)
}

/// Extracts the flag bit and clears it so the remaining bits can be read as
/// an integer.
pub fn take_flag(bytes: &mut [u8]) -> bool {
    match bytes.last_mut() {
        Some(last) => {
            let flag = *last & FLAG_MASK != 0;
            *last &= !FLAG_MASK;
            flag
        }
        None => false,
    }
}

/// ORs the flag into the high bit of the last byte.
pub fn overlay_flag(bytes: &mut [u8], flag: bool) {
    if let (true, Some(last)) = (flag, bytes.last_mut()) {
        *last |= FLAG_MASK;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_clears_only_the_high_bit() {
        let mut bytes = [0x12, 0xff];
        assert!(take_flag(&mut bytes));
        assert_eq!(bytes, [0x12, 0x7f]);
        assert!(!take_flag(&mut bytes));
        assert_eq!(bytes, [0x12, 0x7f]);
    }

    #[test]
    fn overlay_is_inverse_of_take() {
        let mut bytes = [0x01, 0x02, 0x03];
        overlay_flag(&mut bytes, true);
        assert!(flag_bit(&bytes));
        assert_eq!(bytes, [0x01, 0x02, 0x83]);
        assert!(take_flag(&mut bytes));
        assert_eq!(bytes, [0x01, 0x02, 0x03]);

        overlay_flag(&mut bytes, false);
        assert_eq!(bytes, [0x01, 0x02, 0x03]);
        assert!(!flag_bit(&[]));
    }
}
