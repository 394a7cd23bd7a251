//! Constant-time comparison for signature checks.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Byte comparison whose timing reveals neither content nor length.
///
/// Both inputs are hashed to fixed-length SHA-256 digests and the digests are
/// compared with `subtle::ConstantTimeEq`. Equal inputs, and only equal
/// inputs, compare equal.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let ha = Sha256::digest(a);
    let hb = Sha256::digest(b);
    ha.ct_eq(&hb).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_signatures_match() {
        assert!(constant_time_eq(
            b"coqCmt/IZ4E3CzPvMY8zTjQVL5hYJUiBRg8UU+iCWo0=",
            b"coqCmt/IZ4E3CzPvMY8zTjQVL5hYJUiBRg8UU+iCWo0="
        ));
    }

    #[test]
    fn case_differences_do_not_match() {
        assert!(!constant_time_eq(b"abcd", b"ABCD"));
    }

    #[test]
    fn different_length_inputs_do_not_match() {
        assert!(!constant_time_eq(b"short", b"much longer string"));
    }

    #[test]
    fn empty_vs_nonempty_do_not_match() {
        assert!(!constant_time_eq(b"", b"notempty"));
    }
}
