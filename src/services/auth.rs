use anyhow::Result;
use std::io::{stdout, Write};

/// Source of PINs that were not typed along with a command
pub trait CredentialsProvider {
    fn read_pin(&self, username: &str) -> Result<String>;
}

pub struct StdinCredentialsProvider;
impl CredentialsProvider for StdinCredentialsProvider {
    #[cfg(not(tarpaulin_include))]
    fn read_pin(&self, username: &str) -> Result<String> {
        print!("Enter the pin of {} (hidden): ", username);
        let _ = stdout().flush();
        let pin = rpassword::read_password()?;
        Ok(pin.trim().to_string())
    }
}

/// Use the PIN given on the command line, or ask the provider for it.
pub fn resolve_pin(
    provider: &dyn CredentialsProvider,
    username: &str,
    typed: Option<&str>,
) -> Result<String> {
    match typed {
        Some(pin) => Ok(pin.to_owned()),
        None => provider.read_pin(username),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);
    impl CredentialsProvider for Fixed {
        fn read_pin(&self, _username: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_resolve_pin() {
        assert_eq!(resolve_pin(&Fixed("2222"), "jd", Some("1111")).unwrap(), "1111");
        assert_eq!(resolve_pin(&Fixed("2222"), "jd", None).unwrap(), "2222");
    }
}
