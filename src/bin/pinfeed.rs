#[path = "pinfeed/app.rs"]
mod app;
#[path = "pinfeed/args.rs"]
mod args;
#[path = "pinfeed/logging.rs"]
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
