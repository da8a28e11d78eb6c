pub mod auth;
pub mod shell;

pub use auth::{resolve_pin, CredentialsProvider, StdinCredentialsProvider};
pub use shell::{Flow, Shell, ShellCommand};
