//! CLI configuration read from the environment.
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Directory holding `config.toml`, `items.ron` and friends.
    /// The content embedded in the binary is used when unset.
    pub data_dir: Option<PathBuf>,
    pub player_name: Option<String>,
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `USABLE_DATA_DIR` - Content directory (default: embedded content)
    /// - `USABLE_PLAYER_NAME` - Player name (default: from the player template)
    /// - `USABLE_SESSION_ID` - Log session directory name (default: timestamp)
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env::<PathBuf>("USABLE_DATA_DIR"),
            player_name: read_env::<String>("USABLE_PLAYER_NAME").filter(|name| !name.is_empty()),
            session_id: read_env::<String>("USABLE_SESSION_ID").filter(|id| !id.is_empty()),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
