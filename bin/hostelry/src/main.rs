use eyre::Report;

#[tokio::main]
async fn main() -> Result<(), Report> {
    hostelry::run().await
}
