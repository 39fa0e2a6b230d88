//! Server configuration, read from the environment (optionally via a
//! `.env` file).

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::RngCore;

pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Path of the SQLite database file.
    pub db_path: String,
    /// Secret used to sign access tokens.
    pub secret_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let listen_addr = std::env::var("BALANCO_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let db_path =
            std::env::var("BALANCO_DB_PATH").unwrap_or_else(|_| "balanco.db".to_string());
        let secret_key = std::env::var("BALANCO_SECRET_KEY").unwrap_or_else(|_| {
            // Tokens signed with an ephemeral key do not survive a restart.
            tracing::warn!(
                "BALANCO_SECRET_KEY is not set; using an ephemeral signing key for this process"
            );
            let mut bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut bytes);
            BASE64.encode(bytes)
        });

        Config {
            listen_addr,
            db_path,
            secret_key,
        }
    }
}
