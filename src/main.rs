use std::{process::ExitCode, sync::Arc};

use clap::Parser;
use image_fetch::{
    cli_arguments::CliArguments,
    image_client::reqwest_image_client::ReqwestImageClient,
    image_fetch_service::image_fetch_service::ImageFetchService,
};
use tracing::{Instrument, error, info_span};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use uuid::Uuid;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: CliArguments = CliArguments::parse();

    let span = info_span!(
        "image_fetch",
        fetch_id = %Uuid::new_v4(),
        endpoint = %args.endpoint,
    );

    let service = ImageFetchService::new(Arc::new(ReqwestImageClient::default()), args.into());

    match service.fetch().instrument(span).await {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Image fetch failed: {err}");
            ExitCode::FAILURE
        }
    }
}
