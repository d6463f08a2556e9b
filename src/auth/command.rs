use std::io::Write;
use std::process::{Command, Stdio};

use zeroize::Zeroizing;

use super::Authenticator;

/// Delegates verification to a privileged helper.
///
/// The helper gets the password followed by a newline on stdin and grants
/// access by exiting with status 0. The default `sudo -S -k true` checks
/// the invoking user, so the user name is not passed along.
pub struct CommandAuthenticator {
    argv: Vec<String>,
}

impl CommandAuthenticator {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }

    fn run(&self, secret: &str) -> std::io::Result<bool> {
        let Some((program, args)) = self.argv.split_first() else {
            return Ok(false);
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        let mut input = Zeroizing::new(Vec::with_capacity(secret.len() + 1));
        input.extend_from_slice(secret.as_bytes());
        input.push(b'\n');

        if let Some(mut stdin) = child.stdin.take() {
            // A helper that exits before reading closes the pipe; its exit
            // status still decides.
            let _ = stdin.write_all(&input);
        }

        Ok(child.wait()?.success())
    }
}

impl Authenticator for CommandAuthenticator {
    fn name(&self) -> &'static str {
        "command"
    }

    fn authenticate(&self, _user: &str, secret: &str) -> bool {
        match self.run(secret) {
            Ok(granted) => granted,
            Err(err) => {
                tracing::warn!(command = ?self.argv.first(), "Auth helper failed: {}", err);
                false
            }
        }
    }
}
