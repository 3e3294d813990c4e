use clap::Parser;

// Server configuration
pub const HOST: &str = "0.0.0.0";
pub const PORT: u16 = 3001;

pub const DEFAULT_DATABASE_URL: &str = "mongodb://127.0.0.1:27017/vidurl";
pub const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,http://127.0.0.1:5173,https://eastculture.vercel.app";

const EXAMPLE_ENV: &str = "\
AWS_REGION=ap-southeast-2
S3_BUCKET_NAME=my-video-bucket
AWS_ACCESS_KEY_ID=xxx
AWS_SECRET_ACCESS_KEY=xxx";

/// vidurl: issues short-lived signed download URLs for videos in an S3 bucket
#[derive(Parser, Debug, Clone)]
#[command(name = "vidurl")]
#[command(about = "Issue time-limited signed URLs for video objects stored in S3", long_about = None)]
pub struct Config {
    /// AWS region of the video bucket
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Bucket holding the video objects
    #[arg(long = "bucket", env = "S3_BUCKET_NAME")]
    pub bucket_name: Option<String>,

    /// AWS Access Key ID used to sign URLs
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key_id: Option<String>,

    /// AWS Secret Access Key used to sign URLs
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,

    /// Custom endpoint for S3-compatible stores
    #[arg(long, env = "S3_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Use path-style bucket addressing
    #[arg(long, env = "S3_FORCE_PATH_STYLE", default_value_t = false)]
    pub force_path_style: bool,

    /// Document database connection string (optional, unused by routes)
    #[arg(long, env = "MONGODB_URI", default_value = DEFAULT_DATABASE_URL, hide_env_values = true)]
    pub database_url: String,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = PORT)]
    pub port: u16,

    /// Frontend origins allowed to call the API
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_ALLOWED_ORIGINS
    )]
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    /// Same values as an empty environment and no flags
    fn default() -> Self {
        Self {
            region: None,
            bucket_name: None,
            access_key_id: None,
            secret_access_key: None,
            endpoint: None,
            force_path_style: false,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            host: HOST.to_string(),
            port: PORT,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .split(',')
                .map(str::to_string)
                .collect(),
        }
    }
}

impl Config {
    /// Names of required settings that are absent or empty
    pub fn missing_settings(&self) -> Vec<&'static str> {
        [
            ("AWS_REGION", &self.region),
            ("S3_BUCKET_NAME", &self.bucket_name),
            ("AWS_ACCESS_KEY_ID", &self.access_key_id),
            ("AWS_SECRET_ACCESS_KEY", &self.secret_access_key),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(name, _)| name)
        .collect()
    }

    /// Logs which required settings are missing. Startup continues either way;
    /// signing requests fail individually until the settings are provided.
    ///
    /// Returns true when the configuration is complete.
    pub fn warn_if_incomplete(&self) -> bool {
        let missing = self.missing_settings();
        if missing.is_empty() {
            return true;
        }

        tracing::warn!("✗ Missing required settings: {}", missing.join(", "));
        tracing::warn!("Add them to the environment or a .env file, for example:\n\n{EXAMPLE_ENV}\n");
        false
    }
}
