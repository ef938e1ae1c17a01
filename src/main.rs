#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    hr_ops_server::run().await
}
