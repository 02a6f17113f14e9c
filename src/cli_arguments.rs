use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_ENDPOINT: &str = "https://amozesh.pishnahadebehtar.workers.dev/";
pub const DEFAULT_PROMPT: &str = "a beautiful women with red hair";
pub const DEFAULT_OUTPUT: &str = "output.jpg";

/// Sends a prompt to an image generation endpoint and saves the returned image.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArguments {
    #[arg(short, long, env = "IMAGE_GENERATOR_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(short = 'k', long, env = "IMAGE_GENERATOR_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(short, long, env = "IMAGE_FETCH_PROMPT", default_value = DEFAULT_PROMPT)]
    pub prompt: String,

    #[arg(short, long, env = "IMAGE_FETCH_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
}
