#[tokio::main]
async fn main() -> anyhow::Result<()> {
    emma_tutor_backend::run().await
}
