#[tokio::main]
async fn main() -> anyhow::Result<()> {
    infocheck_app::init_tracing();
    infocheck_app::run(std::env::args().skip(1).collect()).await
}
