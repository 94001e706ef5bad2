use rand::{thread_rng, Rng};

/// 16 random bytes rendered as 32 lowercase hex characters.
pub fn generate_hex_token() -> String {
    let bytes: [u8; 16] = thread_rng().gen();
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}

#[cfg(test)]
mod tests {
    use super::generate_hex_token;

    #[test]
    fn token_is_32_hex_characters() {
        let token = generate_hex_token();
        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn tokens_differ() {
        assert_ne!(generate_hex_token(), generate_hex_token());
    }
}
