use clap::Parser;
use manybaht::cli::{self, Cli, Command};
use manybaht::config::EncodingConfig;
use manybaht::services::{ConversionResult, LinkConverter, encode};

fn setup() -> (LinkConverter, EncodingConfig) {
    let encoding = EncodingConfig::new("159020092212146830289645291", "65537").unwrap();
    (LinkConverter::new(encoding.clone()), encoding)
}

#[test]
fn test_convert_command_text_report() {
    let (converter, encoding) = setup();
    let command = Command::Convert {
        urls: vec![
            "https://open.spotify.com/track/ID1".to_string(),
            "oops".to_string(),
        ],
        json: false,
    };

    let output = cli::run(&command, &converter, &encoding).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("✅ spotify → "));
    assert_eq!(lines[1], "❌ Invalid URL: oops");
}

#[test]
fn test_convert_command_json_output() {
    let (converter, encoding) = setup();
    let command = Command::Convert {
        urls: vec!["https://open.spotify.com/track/ID1".to_string()],
        json: true,
    };

    let output = cli::run(&command, &converter, &encoding).unwrap();
    let results: Vec<ConversionResult> = serde_json::from_str(&output).unwrap();
    assert_eq!(results.len(), 1);
    assert!(results[0].success);
    assert!(results[0].error.is_none());
}

#[test]
fn test_bare_urls_default_to_batch_report() {
    let cli = Cli::try_parse_from([
        "manybaht",
        "https://open.spotify.com/track/ID1",
        "not a url",
    ])
    .unwrap();
    assert!(cli.command.is_none());

    let command = cli.into_command();
    match &command {
        Command::Convert { urls, json } => {
            assert_eq!(urls.len(), 2);
            assert!(!json);
        }
        other => panic!("expected convert command, got {:?}", other),
    }

    let (converter, encoding) = setup();
    let output = cli::run(&command, &converter, &encoding).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with("✅ spotify → https://sp.laibaht.ovh/track/"));
    assert_eq!(lines[1], "❌ Invalid URL: not a url");
}

#[test]
fn test_explicit_subcommand_still_parses() {
    let cli = Cli::try_parse_from(["manybaht", "detect", "https://youtu.be/x"]).unwrap();
    assert!(matches!(cli.into_command(), Command::Detect { .. }));

    let cli = Cli::try_parse_from(["manybaht", "-c", "custom.toml", "https://youtu.be/x"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    assert!(cli.command.is_none());
    assert_eq!(cli.urls.len(), 1);
}

#[test]
fn test_detect_command() {
    let (converter, encoding) = setup();
    let command = Command::Detect {
        input: "https://music.apple.com/us/song/x/1".to_string(),
    };
    let output = cli::run(&command, &converter, &encoding).unwrap();
    assert_eq!(output, "apple_music");
}

#[test]
fn test_encode_command_matches_library() {
    let (converter, encoding) = setup();
    let command = Command::Encode {
        plaintext: "dQw4w9WgXcQ".to_string(),
    };
    let output = cli::run(&command, &converter, &encoding).unwrap();
    assert_eq!(output, encode(b"dQw4w9WgXcQ", &encoding));
}
