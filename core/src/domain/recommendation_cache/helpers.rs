use sha2::{Digest, Sha256};

/// Content hash of the source image, hex encoded.
pub fn compute_menu_hash(image_bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(image_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        let bytes = b"menu photo bytes";
        assert_eq!(compute_menu_hash(bytes), compute_menu_hash(bytes));
        assert_eq!(compute_menu_hash(bytes).len(), 64);
    }

    #[test]
    fn test_different_bytes_different_hash() {
        assert_ne!(compute_menu_hash(b"menu a"), compute_menu_hash(b"menu b"));
    }

    #[test]
    fn test_known_digest() {
        assert_eq!(
            compute_menu_hash(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
