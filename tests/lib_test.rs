//! Library integration tests.

use envlint::EnvLintError;

#[test]
fn error_types_are_public() {
    let err = EnvLintError::InvalidPattern {
        name: "custom".into(),
        message: "no capture group".into(),
    };
    assert!(err.to_string().contains("custom"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> envlint::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use envlint::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["envlint", "scan", "--show-usages"]);

    if let Some(Commands::Scan(args)) = cli.command {
        assert!(args.show_usages);
    } else {
        panic!("Expected Scan command");
    }
}
