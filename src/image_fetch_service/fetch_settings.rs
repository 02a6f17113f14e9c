use std::path::PathBuf;

use crate::cli_arguments::CliArguments;

#[derive(Debug, Clone, PartialEq)]
pub struct FetchSettings {
    pub endpoint: String,
    pub api_key: String,
    pub prompt: String,
    pub output: PathBuf,
}

impl From<CliArguments> for FetchSettings {
    fn from(args: CliArguments) -> Self {
        Self {
            endpoint: args.endpoint,
            api_key: args.api_key,
            prompt: args.prompt,
            output: args.output,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use crate::{cli_arguments::CliArguments, image_fetch_service::fetch_settings::FetchSettings};

    #[test]
    fn carries_every_argument_into_the_settings() {
        let args = CliArguments::parse_from([
            "image-fetch",
            "-e",
            "http://localhost:8787/",
            "-k",
            "secret",
            "-p",
            "a cat",
            "-o",
            "cat.jpg",
        ]);

        let settings = FetchSettings::from(args);

        assert_eq!(
            settings,
            FetchSettings {
                endpoint: "http://localhost:8787/".to_string(),
                api_key: "secret".to_string(),
                prompt: "a cat".to_string(),
                output: PathBuf::from("cat.jpg"),
            }
        );
    }
}
