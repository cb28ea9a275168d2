use rand::{distributions::Alphanumeric, Rng};

/// Prefix for every generated API key, makes leaked keys easy to grep for
const API_KEY_PREFIX: &str = "aa_";

pub fn create_random_secret(secret_len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(secret_len)
        .map(char::from)
        .collect()
}

pub fn create_api_key(secret_len: usize) -> String {
    format!("{}{}", API_KEY_PREFIX, create_random_secret(secret_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_creates_random_secret() {
        let sec1 = create_random_secret(30);
        let sec2 = create_random_secret(30);
        assert_eq!(sec1.len(), 30);
        assert_eq!(sec2.len(), 30);
        assert_ne!(sec2, sec1);
        assert!(sec1.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn it_creates_prefixed_api_keys() {
        let key = create_api_key(16);
        assert!(key.starts_with(API_KEY_PREFIX));
        assert_eq!(key.len(), API_KEY_PREFIX.len() + 16);
    }
}
