use manybaht::config::EncodingConfig;
use manybaht::services::encode;

fn default_config() -> EncodingConfig {
    EncodingConfig::new("159020092212146830289645291", "65537").unwrap()
}

#[test]
fn test_encode_is_deterministic() {
    let config = default_config();
    let inputs: &[&[u8]] = &[
        b"dQw4w9WgXcQ",
        b"4uLU6hMCjMI75M1A2tKUQC",
        b"",
        b"\x00\x00\x00",
        b"a",
    ];

    for input in inputs {
        assert_eq!(encode(input, &config), encode(input, &config));
    }
}

#[test]
fn test_encode_output_is_url_safe() {
    let config = default_config();
    let valid: std::collections::HashSet<char> =
        "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_"
            .chars()
            .collect();

    // 覆盖所有单字节值，确保替换后的字母表无遗漏
    let all_bytes: Vec<u8> = (0u8..=255).collect();
    let token = encode(&all_bytes, &config);
    for ch in token.chars() {
        assert!(valid.contains(&ch), "invalid character: {}", ch);
    }
}

#[test]
fn test_encode_output_length_follows_chunking() {
    let config = default_config();
    let chunk = config.chunk_size();
    assert_eq!(chunk, 11);

    for len in [1, 5, 10, 11, 12, 22, 23, 100] {
        let input = vec![0x5Au8; len];
        let token = encode(&input, &config);
        let padded_len = len.div_ceil(chunk) * chunk;
        // 去掉 '=' 后的 base64 长度
        let expected = (padded_len * 8).div_ceil(6);
        assert_eq!(token.len(), expected, "wrong token length for input {}", len);
    }
}

#[test]
fn test_encode_differs_between_inputs() {
    let config = default_config();
    assert_ne!(encode(b"abc123", &config), encode(b"abc124", &config));
}

#[test]
fn test_encode_with_exponent_one_still_padded() {
    // exponent 1 keeps chunks numerically identical, output is still
    // fixed-width and URL-safe
    let config = EncodingConfig::new("159020092212146830289645291", "1").unwrap();
    let token = encode(b"id", &config);
    assert_eq!(token.len(), 15);
    assert!(!token.contains('='));
}
