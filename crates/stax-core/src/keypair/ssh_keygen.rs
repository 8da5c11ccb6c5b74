//! Local key pair provider backed by `ssh-keygen`
//!
//! Key pairs are generated into a scratch directory that is removed before
//! `create` returns. Only the public key is kept, as `<dir>/<name>.pub`, so the
//! private half exists solely in the returned `CreatedKeyPair`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use super::error::{KeyPairError, KeyPairResult};
use super::traits::{CreatedKeyPair, KeyMaterial, KeyPairInfo, KeyPairProvider};

const PROGRAM: &str = "ssh-keygen";

/// Key pair provider that shells out to `ssh-keygen`
#[derive(Debug, Clone)]
pub struct SshKeygenProvider {
    dir: PathBuf,
    key_type: String,
    program: PathBuf,
}

impl SshKeygenProvider {
    /// Keep public keys under `dir`, generating ed25519 keys
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            key_type: "ed25519".to_string(),
            program: PathBuf::from(PROGRAM),
        }
    }

    /// Default location: `<data dir>/stax/key_pairs`
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".local/share"))
            .join("stax")
            .join("key_pairs")
    }

    /// Set the `-t` argument passed to ssh-keygen
    pub fn with_key_type(mut self, key_type: impl Into<String>) -> Self {
        self.key_type = key_type.into();
        self
    }

    /// Use a specific ssh-keygen binary
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    fn public_key_path(&self, name: &str) -> KeyPairResult<PathBuf> {
        validate_name(name)?;
        Ok(self.dir.join(format!("{}.pub", name)))
    }

    fn command(&self) -> Command {
        Command::new(&self.program)
    }

    fn run(&self, command: &mut Command) -> KeyPairResult<String> {
        let output = command.output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(KeyPairError::command(
                self.program.display().to_string(),
                stderr.trim().to_string(),
            ));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn fingerprint(&self, public_key_path: &Path) -> KeyPairResult<String> {
        let stdout = self.run(
            self.command()
                .args(["-l", "-E", "sha256", "-f"])
                .arg(public_key_path),
        )?;
        parse_fingerprint(&stdout).ok_or_else(|| {
            KeyPairError::command(PROGRAM, format!("unexpected fingerprint output: {}", stdout.trim()))
        })
    }

    fn describe(&self, name: &str, public_key_path: &Path, extended: bool) -> KeyPairResult<KeyPairInfo> {
        let info = KeyPairInfo::new(name, self.fingerprint(public_key_path)?);
        if !extended {
            return Ok(info);
        }
        let public_key = fs::read_to_string(public_key_path)?;
        let public_key = public_key.trim();
        let info = match public_key.split_whitespace().next() {
            Some(key_type) => info.with_key_type(key_type),
            None => info,
        };
        Ok(info.with_public_key(public_key))
    }
}

impl KeyPairProvider for SshKeygenProvider {
    fn name(&self) -> &str {
        "ssh-keygen"
    }

    fn list(&self, name: &str, extended: bool) -> KeyPairResult<KeyPairInfo> {
        let path = self.public_key_path(name)?;
        if !path.is_file() {
            return Err(KeyPairError::NotFound(name.to_string()));
        }
        self.describe(name, &path, extended)
    }

    fn create(&self, name: &str) -> KeyPairResult<CreatedKeyPair> {
        let path = self.public_key_path(name)?;
        if path.exists() {
            return Err(KeyPairError::Duplicate(name.to_string()));
        }
        fs::create_dir_all(&self.dir)?;

        // removed on drop, taking the private key file with it
        let scratch = tempfile::Builder::new().prefix("stax-keygen-").tempdir()?;
        let key_path = scratch.path().join("id");
        self.run(
            self.command()
                .args(["-q", "-t", self.key_type.as_str(), "-N", "", "-C", name, "-f"])
                .arg(&key_path),
        )?;

        let material = KeyMaterial::new(fs::read_to_string(&key_path)?);
        fs::copy(key_path.with_extension("pub"), &path)?;
        let info = match self.describe(name, &path, true) {
            Ok(info) => info,
            Err(e) => {
                // a stray .pub would make every later create a Duplicate
                let _ = fs::remove_file(&path);
                return Err(e);
            }
        };

        Ok(CreatedKeyPair { info, material })
    }

    fn delete(&self, name: &str) -> KeyPairResult<()> {
        let path = self.public_key_path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(KeyPairError::NotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Key pair names become file names and ssh-keygen arguments
fn validate_name(name: &str) -> KeyPairResult<()> {
    if name.is_empty() {
        return Err(KeyPairError::invalid_name(name, "name is empty"));
    }
    if name.starts_with('-') || name.starts_with('.') {
        return Err(KeyPairError::invalid_name(name, "name must not start with '-' or '.'"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return Err(KeyPairError::invalid_name(
            name,
            "only ASCII letters, digits, '-', '_' and '.' are allowed",
        ));
    }
    Ok(())
}

/// `256 SHA256:abc... comment (ED25519)` -> `SHA256:abc...`
fn parse_fingerprint(output: &str) -> Option<String> {
    output.split_whitespace().nth(1).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("payments").is_ok());
        assert!(validate_name("payments-bastion_1.prod").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("-oProxyCommand").is_err());
        assert!(validate_name("../etc").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a b").is_err());
    }

    #[test]
    fn test_parse_fingerprint() {
        assert_eq!(
            parse_fingerprint("256 SHA256:Dg8ffh2R8Yv/abc payments (ED25519)\n").as_deref(),
            Some("SHA256:Dg8ffh2R8Yv/abc")
        );
        assert_eq!(parse_fingerprint("garbage"), None);
    }

    #[test]
    fn test_missing_key_pair() {
        let dir = tempdir().unwrap();
        let provider = SshKeygenProvider::new(dir.path());
        assert!(matches!(provider.list("payments", true), Err(KeyPairError::NotFound(_))));
        assert!(matches!(provider.delete("payments"), Err(KeyPairError::NotFound(_))));
    }

    #[test]
    fn test_existing_public_key_is_duplicate() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("payments.pub"), "ssh-ed25519 AAAA payments\n").unwrap();
        let provider = SshKeygenProvider::new(dir.path()).with_program("/nonexistent/ssh-keygen");
        assert!(matches!(provider.create("payments"), Err(KeyPairError::Duplicate(_))));
    }

    #[test]
    fn test_invalid_name_is_rejected_before_running() {
        let dir = tempdir().unwrap();
        let provider = SshKeygenProvider::new(dir.path()).with_program("/nonexistent/ssh-keygen");
        assert!(matches!(provider.create("../x"), Err(KeyPairError::InvalidName { .. })));
    }

    /// ssh-keygen stand-in that generates keys but cannot fingerprint them
    #[cfg(unix)]
    fn keygen_without_fingerprints(dir: &Path) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = dir.join("ssh-keygen");
        fs::write(
            &script,
            "#!/bin/sh\n\
             for last; do :; done\n\
             if [ \"$1\" = \"-l\" ]; then echo 'cannot fingerprint' >&2; exit 1; fi\n\
             echo PRIVATE > \"$last\"\n\
             echo 'ssh-ed25519 AAAA payments' > \"$last.pub\"\n",
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        script
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_create_leaves_no_public_key() {
        let bin = tempdir().unwrap();
        let dir = tempdir().unwrap();
        let provider =
            SshKeygenProvider::new(dir.path()).with_program(keygen_without_fingerprints(bin.path()));

        let err = provider.create("payments").unwrap_err();
        assert!(matches!(err, KeyPairError::Command { .. }), "{err}");
        assert!(!dir.path().join("payments.pub").exists());
        assert!(matches!(provider.list("payments", true), Err(KeyPairError::NotFound(_))));
    }

    #[test]
    #[ignore] // Requires ssh-keygen on PATH
    fn test_create_with_ssh_keygen() {
        let dir = tempdir().unwrap();
        let provider = SshKeygenProvider::new(dir.path());

        let created = provider.create("payments").unwrap();
        assert!(created.material.expose_secret().contains("PRIVATE KEY"));
        assert!(created.info.fingerprint.starts_with("SHA256:"));
        assert_eq!(created.info.key_type.as_deref(), Some("ssh-ed25519"));

        // only the public half is kept
        let kept: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(kept.len(), 1);

        let listed = provider.list("payments", false).unwrap();
        assert_eq!(listed.fingerprint, created.info.fingerprint);
        assert!(matches!(provider.create("payments"), Err(KeyPairError::Duplicate(_))));

        provider.delete("payments").unwrap();
        assert!(matches!(provider.list("payments", true), Err(KeyPairError::NotFound(_))));
    }
}
