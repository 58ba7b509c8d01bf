use std::process::Command;

fn cli_path() -> &'static str {
    env!("CARGO_BIN_EXE_backporter")
}

mod backport {
    use super::*;

    #[test]
    fn invalid_url_returns_error() {
        let cli = cli_path();

        let output = Command::new(cli)
            .args(["backport", "not-a-url", "7.x"])
            .output()
            .expect("Failed to execute CLI");

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("not-a-url"),
            "expected the offending URL in the message: {stderr}"
        );
    }

    #[test]
    fn missing_pull_suffix_returns_error() {
        let cli = cli_path();

        let output = Command::new(cli)
            .args(["backport", "https://github.com/acme/widget", "7.x"])
            .output()
            .expect("Failed to execute CLI");

        assert!(!output.status.success());
    }

    #[test]
    fn invalid_branch_returns_error() {
        let cli = cli_path();

        // URL parsing succeeds, branch validation fails before any I/O.
        let output = Command::new(cli)
            .args(["backport", "https://github.com/acme/widget/pull/42", "main"])
            .output()
            .expect("Failed to execute CLI");

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("main"),
            "expected the offending branch in the message: {stderr}"
        );
    }

    #[test]
    fn missing_arguments_return_error() {
        let cli = cli_path();

        let output = Command::new(cli)
            .args(["backport"])
            .output()
            .expect("Failed to execute CLI");

        assert!(!output.status.success());
    }

    #[test]
    fn valid_arguments_do_not_panic() {
        let cli = cli_path();

        let output = Command::new(cli)
            .args(["backport", "https://github.com/acme/widget/pull/42", "7.x"])
            .output()
            .expect("Failed to execute CLI");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("panicked"), "CLI panicked: {stderr}");
    }
}

mod auth {
    use super::*;

    #[test]
    fn auth_check_does_not_panic() {
        let cli = cli_path();

        let output = Command::new(cli)
            .args(["auth"])
            .output()
            .expect("Failed to execute CLI");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("panicked"), "CLI panicked: {stderr}");
    }
}
