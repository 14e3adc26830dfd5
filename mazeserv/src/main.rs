use clap::Parser;
mod args;
mod connection;
mod registry;
mod server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = args::Args::parse();
    let server = server::Server::new(&args);
    server.run().await
}
